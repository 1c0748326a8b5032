use std::fmt;

// ---------------------------------------------------------------------------
// PropertyKind – the physical quantity a file holds
// ---------------------------------------------------------------------------

/// The fixed set of MD properties recognised from file names.
///
/// Declaration order matters: [`PropertyKind::ALL`] is the classification
/// vocabulary and the first matching key wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyKind {
    Area,
    Gyrate,
    HydrogenBonds,
    Pressure,
    Rmsd,
    Rmsf,
    Temperature,
}

impl PropertyKind {
    /// Classification vocabulary, in match priority order.
    pub const ALL: [PropertyKind; 7] = [
        PropertyKind::Area,
        PropertyKind::Gyrate,
        PropertyKind::HydrogenBonds,
        PropertyKind::Pressure,
        PropertyKind::Rmsd,
        PropertyKind::Rmsf,
        PropertyKind::Temperature,
    ];

    /// Lower-case substring searched for in file names; also the stem of the
    /// exported image name.
    pub fn key(self) -> &'static str {
        match self {
            PropertyKind::Area => "area",
            PropertyKind::Gyrate => "gyrate",
            PropertyKind::HydrogenBonds => "hydrogen-bonds",
            PropertyKind::Pressure => "pressure",
            PropertyKind::Rmsd => "rmsd",
            PropertyKind::Rmsf => "rmsf",
            PropertyKind::Temperature => "temperature",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyKind::Area => "SASA (Area)",
            PropertyKind::Gyrate => "Radius of Gyration",
            PropertyKind::HydrogenBonds => "Hydrogen Bonds",
            PropertyKind::Pressure => "Pressure",
            PropertyKind::Rmsd => "RMSD",
            PropertyKind::Rmsf => "RMSF",
            PropertyKind::Temperature => "Temperature",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            PropertyKind::Area => "Å²",
            PropertyKind::Gyrate | PropertyKind::Rmsd | PropertyKind::Rmsf => "Å",
            PropertyKind::HydrogenBonds => "count",
            PropertyKind::Pressure => "bar",
            PropertyKind::Temperature => "K",
        }
    }

    /// X axis is a residue index rather than simulation time.
    pub fn is_per_residue(self) -> bool {
        matches!(self, PropertyKind::Rmsf)
    }

    /// Y values are areas in nm² that get scaled to Å².
    pub fn is_area_scaled(self) -> bool {
        matches!(self, PropertyKind::Area)
    }

    pub fn x_axis_label(self) -> &'static str {
        if self.is_per_residue() {
            "Residue Index"
        } else {
            "Time (ns)"
        }
    }

    pub fn y_axis_label(self) -> String {
        format!("{} ({})", self.label(), self.unit())
    }

    /// File name of the standalone comparison image.
    pub fn image_file_name(self) -> String {
        format!("{}_comparison.png", self.key())
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Series – one two-column file
// ---------------------------------------------------------------------------

/// Ordered (x, y) samples read from one XVG file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    /// Time or residue axis.
    pub x: Vec<f64>,
    /// Property value – same length as `x`.
    pub y: Vec<f64>,
}

impl Series {
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Copy without the samples whose x or y is NaN or infinite.
    pub fn finite(&self) -> Series {
        self.points()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect()
    }
}

impl FromIterator<(f64, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut series = Series::default();
        for (x, y) in iter {
            series.push(x, y);
        }
        series
    }
}

// ---------------------------------------------------------------------------
// Role / Group
// ---------------------------------------------------------------------------

/// Whether a file is the wild-type reference or a named mutant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Baseline,
    Variant(String),
}

/// A named mutant series within a [`Group`].
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSeries {
    pub label: String,
    pub series: Series,
}

/// All series of one property: at most one baseline plus any number of variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub kind: PropertyKind,
    pub baseline: Option<Series>,
    /// Variants in input order; labels may repeat.
    pub variants: Vec<VariantSeries>,
}

/// Why a group cannot be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unplottable {
    MissingBaseline,
    MissingVariants,
    EmptyBaseline,
}

impl Group {
    pub fn new(kind: PropertyKind) -> Self {
        Group {
            kind,
            baseline: None,
            variants: Vec::new(),
        }
    }

    /// Check the group invariants, returning the baseline when drawable.
    pub fn plottable_baseline(&self) -> Result<&Series, Unplottable> {
        let baseline = self.baseline.as_ref().ok_or(Unplottable::MissingBaseline)?;
        if self.variants.is_empty() {
            return Err(Unplottable::MissingVariants);
        }
        if baseline.is_empty() {
            return Err(Unplottable::EmptyBaseline);
        }
        Ok(baseline)
    }
}

impl Unplottable {
    /// Placeholder text shown in place of the chart.
    pub fn notice(self, kind: PropertyKind) -> String {
        match self {
            Unplottable::MissingBaseline => format!("No WT for {kind}"),
            Unplottable::MissingVariants => format!("No mutants for {kind}"),
            Unplottable::EmptyBaseline => format!("Empty data: {kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_order_is_declared_order() {
        let keys: Vec<&str> = PropertyKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(
            keys,
            ["area", "gyrate", "hydrogen-bonds", "pressure", "rmsd", "rmsf", "temperature"]
        );
    }

    #[test]
    fn axis_labels_follow_kind() {
        assert_eq!(PropertyKind::Rmsf.x_axis_label(), "Residue Index");
        assert_eq!(PropertyKind::Rmsd.x_axis_label(), "Time (ns)");
        assert_eq!(PropertyKind::Area.y_axis_label(), "SASA (Area) (Å²)");
        assert_eq!(
            PropertyKind::HydrogenBonds.image_file_name(),
            "hydrogen-bonds_comparison.png"
        );
    }

    #[test]
    fn plottable_checks_in_order() {
        let mut g = Group::new(PropertyKind::Rmsd);
        assert_eq!(g.plottable_baseline(), Err(Unplottable::MissingBaseline));

        g.baseline = Some(Series::default());
        assert_eq!(g.plottable_baseline(), Err(Unplottable::MissingVariants));

        g.variants.push(VariantSeries {
            label: "mut1".into(),
            series: [(0.0, 1.0)].into_iter().collect(),
        });
        assert_eq!(g.plottable_baseline(), Err(Unplottable::EmptyBaseline));

        g.baseline = Some([(0.0, 2.0)].into_iter().collect());
        assert!(g.plottable_baseline().is_ok());
    }

    #[test]
    fn finite_drops_nan_and_infinite_samples() {
        let s: Series = [(0.0, 1.0), (1.0, f64::INFINITY), (f64::NAN, 2.0), (3.0, 4.0)]
            .into_iter()
            .collect();
        let f = s.finite();
        assert_eq!(f.x, vec![0.0, 3.0]);
        assert_eq!(f.y, vec![1.0, 4.0]);
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn points_iterator_is_cloneable() {
        let s: Series = [(0.0, 1.0), (2.0, 3.0)].into_iter().collect();
        let it = s.points();
        assert_eq!(it.clone().count(), 2);
        assert_eq!(it.last(), Some((2.0, 3.0)));
    }

    #[test]
    fn notices_name_the_kind() {
        assert_eq!(
            Unplottable::MissingVariants.notice(PropertyKind::HydrogenBonds),
            "No mutants for hydrogen-bonds"
        );
    }
}
