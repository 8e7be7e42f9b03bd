use crate::{reference::ReferencePalette, ProfileError, Result};
use std::collections::BTreeMap;

/// Per-label sample counts, in palette order. Every palette label has a count, starting from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTally<'a> {
    palette: &'a ReferencePalette,
    counts: Vec<u32>,
}

impl<'a> ColorTally<'a> {
    pub fn new(palette: &'a ReferencePalette) -> Self {
        Self {
            palette,
            counts: vec![0; palette.len()],
        }
    }

    /// Count one more sample for the palette entry at `index`.
    pub fn record(mut self, index: usize) -> Self {
        if let Some(count) = self.counts.get_mut(index) {
            *count += 1;
        }

        self
    }

    pub fn count(&self, label: &str) -> Option<u32> {
        self.palette.position(label).map(|index| self.counts[index])
    }

    pub fn counts(&self) -> impl Iterator<Item = (&'a str, u32)> + '_ {
        self.palette.labels().zip(self.counts.iter().copied())
    }

    /// The total number of recorded samples.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Convert the counts into rounded percentages of the total.
    ///
    /// Fails with [`ProfileError::InvalidRegion`] if nothing was recorded.
    pub fn into_distribution(self) -> Result<ColorDistribution> {
        let samples = self.total();
        if samples == 0 {
            return Err(ProfileError::InvalidRegion { width: 0, height: 0 });
        }

        let percentages = self
            .palette
            .labels()
            .zip(self.counts)
            .map(|(label, count)| {
                let percent = (count as f64 / samples as f64 * 100.0).round() as u8;
                (label.to_string(), percent)
            })
            .collect();

        Ok(ColorDistribution { percentages, samples })
    }
}

/// The share of each palette color in an image, as whole percentages in palette order.
///
/// Percentages are rounded individually, so their sum may be off from 100 by up to half a percent per label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorDistribution {
    percentages: Vec<(String, u8)>,
    samples: u32,
}

impl ColorDistribution {
    pub fn get(&self, label: &str) -> Option<u8> {
        self.iter().find(|(l, _)| *l == label).map(|(_, percent)| percent)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.percentages.iter().map(|(label, percent)| (label.as_str(), *percent))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(label, _)| label)
    }

    /// The number of points sampled from the image.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// The label with the largest share. Ties go to the label earlier in the palette.
    pub fn dominant(&self) -> Option<(&str, u8)> {
        let mut dominant: Option<(&str, u8)> = None;

        for (label, percent) in self.iter() {
            if percent > 0 && dominant.map_or(true, |(_, max_percent)| percent > max_percent) {
                dominant = Some((label, percent));
            }
        }

        dominant
    }

    /// Labels making up at least `threshold` percent of the image, largest share first.
    pub fn labels_at_least(&self, threshold: u8) -> Vec<(&str, u8)> {
        let mut labels = self
            .iter()
            .filter(|(_, percent)| *percent > 0 && *percent >= threshold)
            .collect::<Vec<_>>();

        // stable, so equal shares keep palette order
        labels.sort_by(|(_, lhs), (_, rhs)| rhs.cmp(lhs));
        labels
    }

    pub fn to_map(&self) -> BTreeMap<String, u8> {
        self.percentages.iter().cloned().collect()
    }
}
