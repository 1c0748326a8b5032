use std::collections::BTreeSet;
use std::path::Path;

use super::model::{PropertyKind, Role};

// ---------------------------------------------------------------------------
// File-name conventions
// ---------------------------------------------------------------------------

/// Separates the property part of a file stem from the mutant label.
pub const VARIANT_SEPARATOR: char = '_';

/// Variant label that marks the wild-type file explicitly (`rmsd_wt.xvg`).
const BASELINE_LABEL: &str = "wt";

/// Detect the property of a file from its name.
///
/// Searches the lower-cased file name for each vocabulary key in
/// [`PropertyKind::ALL`] order; the first hit wins.
pub fn classify(path: &Path) -> Option<PropertyKind> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();
    PropertyKind::ALL
        .into_iter()
        .find(|kind| name.contains(kind.key()))
}

/// Derive the role of a file from its stem.
///
/// * `rmsd.xvg`      → baseline
/// * `rmsd_wt.xvg`   → baseline
/// * `rmsd_mut1.xvg` → variant `mut1`
/// * `rmsd_.xvg`     → variant with an empty label
pub fn role(path: &Path) -> Role {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    match stem.rsplit_once(VARIANT_SEPARATOR) {
        Some((_, label)) if !label.eq_ignore_ascii_case(BASELINE_LABEL) => {
            Role::Variant(label.to_string())
        }
        _ => Role::Baseline,
    }
}

/// Sorted, de-duplicated variant labels found in a file selection.
pub fn variant_labels<'a, I>(paths: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Path>,
{
    paths
        .into_iter()
        .filter_map(|p| match role(p) {
            Role::Variant(label) => Some(label),
            Role::Baseline => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn p(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    #[test]
    fn baseline_and_variant_names() {
        assert_eq!(classify(&p("rmsd_wt.xvg")), Some(PropertyKind::Rmsd));
        assert_eq!(role(&p("rmsd_wt.xvg")), Role::Baseline);

        assert_eq!(classify(&p("rmsd_mut1.xvg")), Some(PropertyKind::Rmsd));
        assert_eq!(role(&p("rmsd_mut1.xvg")), Role::Variant("mut1".into()));

        assert_eq!(role(&p("/runs/x/gyrate.xvg")), Role::Baseline);
        assert_eq!(role(&p("rmsd_WT.xvg")), Role::Baseline);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify(&p("Protein_RMSF_A12V.xvg")), Some(PropertyKind::Rmsf));
        assert_eq!(
            classify(&p("HYDROGEN-BONDS_g45s.XVG")),
            Some(PropertyKind::HydrogenBonds)
        );
    }

    #[test]
    fn first_vocabulary_match_wins() {
        // Both "area" and "rmsd" occur; "area" is declared first.
        assert_eq!(classify(&p("rmsd_area_mut.xvg")), Some(PropertyKind::Area));
        assert_eq!(classify(&p("temperature_pressure.xvg")), Some(PropertyKind::Pressure));
    }

    #[test]
    fn directory_names_are_ignored() {
        assert_eq!(classify(&p("/data/rmsd/energy.xvg")), None);
        assert_eq!(classify(&p("notes.txt")), None);
    }

    #[test]
    fn classification_is_repeatable_and_order_independent() {
        let names = ["area_m1.xvg", "rmsf.xvg", "pressure_m2.xvg", "bogus.xvg"];
        let forward: Vec<_> = names.iter().map(|n| classify(&p(n))).collect();
        let backward: Vec<_> = names.iter().rev().map(|n| classify(&p(n))).collect();
        let again: Vec<_> = names.iter().map(|n| classify(&p(n))).collect();
        assert_eq!(forward, again);
        assert_eq!(forward, backward.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn label_comes_from_last_separator_and_last_extension() {
        assert_eq!(role(&p("rmsd_run2_L99A.xvg")), Role::Variant("L99A".into()));
        assert_eq!(role(&p("rmsd.run2_b.xvg")), Role::Variant("b".into()));
        assert_eq!(role(&p("rmsd_.xvg")), Role::Variant(String::new()));
    }

    #[test]
    fn variant_labels_sorted_and_unique() {
        let files = [
            p("rmsd_m2.xvg"),
            p("rmsf_m1.xvg"),
            p("rmsd_m1.xvg"),
            p("rmsd.xvg"),
            p("area_wt.xvg"),
        ];
        let labels = variant_labels(files.iter().map(PathBuf::as_path));
        assert_eq!(labels.into_iter().collect::<Vec<_>>(), vec!["m1", "m2"]);
    }
}
