/// Data layer: parsing, classification, unit conversion, grouping and axis
/// ranges.
///
/// Architecture:
/// ```text
///   rmsd.xvg  rmsd_L99A.xvg  area_wt.xvg ...
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  file name → PropertyKind + Role (WT / mutant label)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Series
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  ps → ns, nm → Å, nm² → Å²
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  group    │  one Group per property: WT + mutants
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  range    │  padded y limits for the overlay
///   └──────────┘
/// ```

pub mod classify;
pub mod group;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod range;
