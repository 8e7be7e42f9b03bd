//! Tunable parameters of the color profiler.
//!
//! A configuration can be built programmatically, through [`crate::ColorProfilerBuilder`], or with the `serde` feature
//! enabled, loaded from JSON:
//!
//! ```json
//! {
//!   "granularity": 9,
//!   "margin": 0.1,
//!   "palette": [
//!     { "label": "ink", "color": { "red": 20, "green": 30, "blue": 90 } },
//!     { "label": "gray", "color": { "red": 127, "green": 127, "blue": 127 }, "metric": "GrayscaleBand" }
//!   ]
//! }
//! ```
//!
//! Missing fields take their default values.

use crate::{reference::ReferencePalette, ProfileError, Result, DEFAULT_GRANULARITY, DEFAULT_MARGIN};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProfilerConfig {
    /// The reference colors sampled pixels are classified against.
    pub palette: ReferencePalette,
    /// The approximate number of sample points along each side of the region of interest. Must be positive.
    pub granularity: u32,
    /// The fraction of the width and height excluded from each edge of the image. Must be within `0.0..1.0`; margins of
    /// `0.5` and over leave nothing to sample.
    pub margin: f64,
}

impl ProfilerConfig {
    /// Check the configuration for values the profiler can't work with.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(ProfileError::invalid_configuration("palette", "must have at least one entry"));
        }

        if self.granularity == 0 {
            return Err(ProfileError::invalid_configuration("granularity", "must be positive"));
        }

        if !(0.0..1.0).contains(&self.margin) {
            return Err(ProfileError::invalid_configuration(
                "margin",
                format!("must be within 0.0..1.0, got {}", self.margin),
            ));
        }

        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ProfilerConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_json_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ProfileError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            palette: ReferencePalette::default(),
            granularity: DEFAULT_GRANULARITY,
            margin: DEFAULT_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ProfilerConfig::default();

        assert_eq!(config.granularity, 7);
        assert_eq!(config.margin, 0.16);
        assert_eq!(config.palette.len(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_granularity_is_rejected() {
        let config = ProfilerConfig {
            granularity: 0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ProfileError::InvalidConfiguration { parameter: "granularity", .. })
        ));
    }

    #[test]
    fn margin_out_of_range_is_rejected() {
        for margin in [-0.1, 1.0, 2.5, f64::NAN, f64::INFINITY] {
            let config = ProfilerConfig {
                margin,
                ..Default::default()
            };

            assert!(
                matches!(config.validate(), Err(ProfileError::InvalidConfiguration { parameter: "margin", .. })),
                "{margin}"
            );
        }
    }

    #[test]
    fn wide_margins_pass_validation() {
        // these leave nothing to sample, which is reported when profiling
        let config = ProfilerConfig {
            margin: 0.5,
            ..Default::default()
        };

        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_json() {
        use crate::metric::Metric;

        let config = ProfilerConfig::from_json_str(
            r#"{
                "granularity": 9,
                "palette": [
                    { "label": "ink", "color": { "red": 20, "green": 30, "blue": 90 } },
                    { "label": "gray", "color": { "red": 127, "green": 127, "blue": 127 }, "metric": "GrayscaleBand" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.granularity, 9);
        assert_eq!(config.margin, 0.16);
        assert_eq!(config.palette.labels().collect::<Vec<_>>(), ["ink", "gray"]);
        assert_eq!(config.palette.get(0).map(|entry| entry.metric()), Some(Metric::Euclidean));
        assert_eq!(config.palette.get(1).map(|entry| entry.metric()), Some(Metric::GrayscaleBand));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn invalid_json_config_is_rejected() {
        assert!(matches!(
            ProfilerConfig::from_json_str(r#"{ "palette": [] }"#),
            Err(ProfileError::Config(_))
        ));
        assert!(matches!(
            ProfilerConfig::from_json_str(r#"{ "granularity": 0 }"#),
            Err(ProfileError::InvalidConfiguration { parameter: "granularity", .. })
        ));
    }
}
