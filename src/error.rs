use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfileError>;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// The image could not be opened or decoded. [`crate::ColorProfiler::detect_colors`] reports this as an absent
    /// result instead of an error.
    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The region of interest contains no sample points.
    #[error("region of interest is empty ({width}x{height})")]
    InvalidRegion { width: i64, height: i64 },

    #[error("invalid configuration: {parameter} {reason}")]
    InvalidConfiguration { parameter: &'static str, reason: String },

    #[cfg(feature = "serde")]
    #[error("failed to read configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[cfg(feature = "serde")]
    #[error("failed to read configuration file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProfileError {
    pub(crate) fn invalid_configuration(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}
