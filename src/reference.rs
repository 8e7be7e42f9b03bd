use crate::{metric::Metric, ColorVector, ProfileError, Result};
use std::collections::HashSet;

/// The label the grayscale band is attached to when building a palette from plain colors.
pub const GRAY_LABEL: &str = "gray";

const DEFAULT_COLORS: [(&str, (u8, u8, u8)); 12] = [
    ("red", (237, 28, 36)),
    ("orange", (255, 127, 39)),
    ("yellow", (255, 242, 0)),
    ("green", (34, 177, 76)),
    ("turquoise", (0, 162, 232)),
    ("blue", (63, 72, 204)),
    ("purple", (163, 73, 164)),
    ("pink", (255, 174, 201)),
    ("white", (255, 255, 255)),
    (GRAY_LABEL, (127, 127, 127)),
    ("black", (0, 0, 0)),
    ("brown", (185, 122, 87)),
];

/// A named reference color, along with how sampled colors are measured against it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteEntry {
    label: String,
    color: ColorVector,
    #[cfg_attr(feature = "serde", serde(default))]
    metric: Metric,
}

impl PaletteEntry {
    pub fn new(label: impl Into<String>, (red, green, blue): (u8, u8, u8), metric: Metric) -> Self {
        Self {
            label: label.into(),
            color: ColorVector::new(red, green, blue),
            metric,
        }
    }

    pub fn euclidean(label: impl Into<String>, rgb: (u8, u8, u8)) -> Self {
        Self::new(label, rgb, Metric::Euclidean)
    }

    pub fn grayscale_band(label: impl Into<String>, rgb: (u8, u8, u8)) -> Self {
        Self::new(label, rgb, Metric::GrayscaleBand)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> ColorVector {
        self.color
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.color.red, self.color.green, self.color.blue)
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn distance(&self, sample: ColorVector) -> f64 {
        self.metric.distance(sample, self.color)
    }
}

/// An ordered table of uniquely labelled reference colors. Never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<PaletteEntry>", into = "Vec<PaletteEntry>"))]
pub struct ReferencePalette {
    entries: Vec<PaletteEntry>,
}

impl ReferencePalette {
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ProfileError::invalid_configuration("palette", "must have at least one entry"));
        }

        if let Some(duplicate) = first_duplicate(&entries) {
            return Err(ProfileError::invalid_configuration(
                "palette",
                format!("has a duplicate label '{duplicate}'"),
            ));
        }

        Ok(Self { entries })
    }

    /// Build a palette from plain colors. The entry labelled `gray` uses the grayscale band, every other entry is
    /// measured by Euclidean distance.
    pub fn from_colors<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, (u8, u8, u8))>,
        S: Into<String>,
    {
        let entries = colors
            .into_iter()
            .map(|(label, rgb)| plain_entry(label.into(), rgb))
            .collect();

        Self::new(entries)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.label() == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(PaletteEntry::label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReferencePalette {
    fn default() -> Self {
        let entries = DEFAULT_COLORS
            .iter()
            .map(|&(label, rgb)| plain_entry(label.to_string(), rgb))
            .collect();

        Self { entries }
    }
}

fn first_duplicate(entries: &[PaletteEntry]) -> Option<String> {
    let mut labels = HashSet::with_capacity(entries.len());

    entries
        .iter()
        .map(PaletteEntry::label)
        .find(|label| !labels.insert(*label))
        .map(str::to_string)
}

fn plain_entry(label: String, rgb: (u8, u8, u8)) -> PaletteEntry {
    if label == GRAY_LABEL {
        PaletteEntry::grayscale_band(label, rgb)
    } else {
        PaletteEntry::euclidean(label, rgb)
    }
}

impl TryFrom<Vec<PaletteEntry>> for ReferencePalette {
    type Error = ProfileError;

    fn try_from(entries: Vec<PaletteEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<ReferencePalette> for Vec<PaletteEntry> {
    fn from(palette: ReferencePalette) -> Self {
        palette.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let palette = ReferencePalette::default();
        let labels = palette.labels().collect::<Vec<_>>();

        assert_eq!(
            labels,
            [
                "red",
                "orange",
                "yellow",
                "green",
                "turquoise",
                "blue",
                "purple",
                "pink",
                "white",
                "gray",
                "black",
                "brown"
            ]
        );
        assert_eq!(palette.get(0).map(PaletteEntry::rgb), Some((237, 28, 36)));

        let banded = palette
            .entries()
            .iter()
            .filter(|entry| entry.metric() == Metric::GrayscaleBand)
            .map(PaletteEntry::label)
            .collect::<Vec<_>>();
        assert_eq!(banded, [GRAY_LABEL]);
    }

    #[test]
    fn from_colors_assigns_grayscale_band() {
        let palette = ReferencePalette::from_colors([("ink", (10, 10, 40)), ("gray", (128, 128, 128))]).unwrap();

        assert_eq!(palette.get(0).map(PaletteEntry::metric), Some(Metric::Euclidean));
        assert_eq!(palette.get(1).map(PaletteEntry::metric), Some(Metric::GrayscaleBand));
        assert_eq!(palette.position("gray"), Some(1));
        assert_eq!(palette.position("grey"), None);
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = ReferencePalette::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidConfiguration { parameter: "palette", .. }));
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let err = ReferencePalette::from_colors([("red", (255, 0, 0)), ("red", (200, 0, 0))]).unwrap_err();
        assert!(err.to_string().contains("duplicate label 'red'"));
    }
}
