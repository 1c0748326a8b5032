//! Writes a synthetic set of GROMACS-style XVG files (one WT and two mutants
//! per property) for trying out the viewer.
//!
//! Usage: `generate_sample [OUTPUT_DIR]` (default `sample_xvg`).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Shape of one synthetic property trace, in GROMACS units.
struct Property {
    key: &'static str,
    legend: &'static str,
    per_residue: bool,
    base: f64,
    drift: f64,
    noise: f64,
}

const PROPERTIES: [Property; 7] = [
    Property { key: "rmsd", legend: "RMSD (nm)", per_residue: false, base: 0.05, drift: 0.20, noise: 0.01 },
    Property { key: "rmsf", legend: "RMSF (nm)", per_residue: true, base: 0.08, drift: 0.0, noise: 0.04 },
    Property { key: "gyrate", legend: "Rg (nm)", per_residue: false, base: 1.45, drift: -0.03, noise: 0.008 },
    Property { key: "area", legend: "Area (nm\\S2\\N)", per_residue: false, base: 92.0, drift: 4.0, noise: 1.2 },
    Property { key: "hydrogen-bonds", legend: "Number", per_residue: false, base: 110.0, drift: -6.0, noise: 4.0 },
    Property { key: "pressure", legend: "(bar)", per_residue: false, base: 1.0, drift: 0.0, noise: 140.0 },
    Property { key: "temperature", legend: "(K)", per_residue: false, base: 300.0, drift: 0.0, noise: 1.5 },
];

const MUTANTS: [(&str, f64); 2] = [("L99A", 1.15), ("G45S", 0.9)];

/// 100 ns at 10 ps per frame
const FRAMES: usize = 10_001;
const FRAME_PS: f64 = 10.0;
const RESIDUES: usize = 164;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn render_xvg(prop: &Property, factor: f64, rng: &mut SimpleRng) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Synthetic data written by generate_sample");
    let _ = writeln!(out, "@    title \"{}\"", prop.key);
    let x_label = if prop.per_residue { "Residue" } else { "Time (ps)" };
    let _ = writeln!(out, "@    xaxis  label \"{x_label}\"");
    let _ = writeln!(out, "@    yaxis  label \"{}\"", prop.legend);
    let _ = writeln!(out, "@TYPE xy");

    let n = if prop.per_residue { RESIDUES } else { FRAMES };
    for i in 0..n {
        let (x, t) = if prop.per_residue {
            ((i + 1) as f64, 0.0)
        } else {
            (i as f64 * FRAME_PS, i as f64 / (n - 1) as f64)
        };
        // Saturating drift, like an equilibrating trajectory.
        let trend = prop.drift * factor * (1.0 - (-5.0 * t).exp());
        let mut y = prop.base + trend + rng.gauss(0.0, prop.noise * factor);
        if prop.per_residue {
            y = y.abs();
        }
        let _ = writeln!(out, "{x:>12.3} {y:>12.5}");
    }
    out
}

fn write_file(dir: &Path, name: &str, body: &str) -> Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_xvg"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let mut written = 0;

    for prop in &PROPERTIES {
        write_file(&out_dir, &format!("{}.xvg", prop.key), &render_xvg(prop, 1.0, &mut rng))?;
        written += 1;
        for (label, factor) in MUTANTS {
            let name = format!("{}_{label}.xvg", prop.key);
            write_file(&out_dir, &name, &render_xvg(prop, factor, &mut rng))?;
            written += 1;
        }
    }

    println!("Wrote {written} XVG files to {}", out_dir.display());
    Ok(())
}
