mod app;
mod color;
mod data;
mod export;
mod pipeline;
mod session;
mod state;
mod ui;

use app::XvgCompareApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "XVG Compare – WT vs Mutants",
        options,
        Box::new(|cc| {
            // Image loaders for the saved-image thumbnails (file:// URIs).
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(XvgCompareApp::default()))
        }),
    )
}
