use crate::ColorVector;

const GRAY_MAX_DEVIATION: f64 = 13.0;
const GRAY_MIN_CHANNEL: u8 = 90;
const GRAY_MAX_CHANNEL: u8 = 230;

/// How the distance between a sampled color and a palette entry is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Euclidean distance in RGB space, halved when both colors share the same predominant hue. See
    /// [`shares_predominant_hue`].
    #[default]
    Euclidean,
    /// A categorical test for achromatic mid-tones: the distance is zero for colors with a channel standard deviation
    /// below 13 whose channels all lie within 90..=230, and infinite for everything else. The entry's reference color
    /// is ignored.
    GrayscaleBand,
}

impl Metric {
    /// Return the distance from `sample` to `reference`, rounded to the nearest integer. An infinite distance means the
    /// sample can never match the entry.
    pub fn distance(self, sample: ColorVector, reference: ColorVector) -> f64 {
        match self {
            Metric::Euclidean => hue_weighted_distance(sample, reference),
            Metric::GrayscaleBand => {
                if is_achromatic_mid_tone(sample) {
                    0.0
                } else {
                    f64::INFINITY
                }
            }
        }
    }
}

fn hue_weighted_distance(sample: ColorVector, reference: ColorVector) -> f64 {
    let dr = sample.red as f64 - reference.red as f64;
    let dg = sample.green as f64 - reference.green as f64;
    let db = sample.blue as f64 - reference.blue as f64;

    let distance = (dr * dr + dg * dg + db * db).sqrt();

    if shares_predominant_hue(sample, reference) {
        (distance / 2.0).round()
    } else {
        distance.round()
    }
}

/// Whether both colors order their channels the same way: the sign of red minus green matches, and so does the sign of
/// green minus blue.
pub fn shares_predominant_hue(lhs: ColorVector, rhs: ColorVector) -> bool {
    channel_signs(lhs) == channel_signs(rhs)
}

fn channel_signs(color: ColorVector) -> (i16, i16) {
    (
        (color.red as i16 - color.green as i16).signum(),
        (color.green as i16 - color.blue as i16).signum(),
    )
}

fn is_achromatic_mid_tone(color: ColorVector) -> bool {
    let channels = [color.red, color.green, color.blue];
    let min = channels.iter().copied().min().unwrap_or(0);
    let max = channels.iter().copied().max().unwrap_or(0);

    standard_deviation(&channels) < GRAY_MAX_DEVIATION && min >= GRAY_MIN_CHANNEL && max <= GRAY_MAX_CHANNEL
}

/// The population standard deviation of the given channel values.
pub(crate) fn standard_deviation(channels: &[u8]) -> f64 {
    if channels.is_empty() {
        return 0.0;
    }

    let n = channels.len() as f64;
    let mean = channels.iter().map(|&c| c as f64).sum::<f64>() / n;
    let variance = channels.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / n;

    variance.sqrt()
}
