// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to classify the dominant colors of an image.
//!
//! The image is sampled on a square grid laid over its center, leaving out a margin on every edge. Each sampled pixel
//! is classified as the nearest color of a small named palette (red, orange, yellow, ..., black, brown), and the result
//! is the share of each palette color among the samples, in whole percentages. This makes it straightforward to index
//! images by their color composition, such as finding images that are mostly red and black.
//!
//! ```no_run
//! let distribution = chromata::detect_colors("photo.jpg")?;
//!
//! match distribution {
//!     Some(distribution) => println!("{:?}", distribution.labels_at_least(20)),
//!     None => println!("not an image"),
//! }
//! # Ok::<(), chromata::ProfileError>(())
//! ```
//!
//! Distance between colors is Euclidean in RGB space, halved for colors that order their channels the same way, so
//! shades of the same hue stay together. Gray is special: it matches any achromatic mid-tone, while very dark and very
//! light colors are left to black and white.

mod classifier;
mod config;
mod error;
mod grid;
mod metric;
mod reference;
mod region;
mod source;
mod tally;

pub const DEFAULT_GRANULARITY: u32 = 7;
pub const DEFAULT_MARGIN: f64 = 0.16;

pub use crate::{
    classifier::PixelClassifier,
    config::ProfilerConfig,
    error::{ProfileError, Result},
    grid::GridSampler,
    metric::{shares_predominant_hue, Metric},
    reference::{PaletteEntry, ReferencePalette, GRAY_LABEL},
    region::Region,
    source::{DecodedImage, PixelSource},
    tally::{ColorDistribution, ColorTally},
};
pub use image;
pub use palette;

use log::{debug, trace, warn};
use std::path::Path;

/// A sampled pixel color, alpha discarded.
pub type ColorVector = palette::Srgb<u8>;

/// Classify the colors of the image at `path` with the default configuration.
///
/// See [`ColorProfiler::detect_colors`].
pub fn detect_colors<P>(path: P) -> Result<Option<ColorDistribution>>
where
    P: AsRef<Path>,
{
    ColorProfiler::new().detect_colors(path)
}

/// Profiles the color composition of images. The configuration is fixed once the profiler is built, so a profiler can
/// be shared between threads freely.
#[derive(Debug, Clone, Default)]
pub struct ColorProfiler {
    config: ProfilerConfig,
}

pub struct ColorProfilerBuilder {
    config: ProfilerConfig,
}

impl ColorProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ColorProfilerBuilder {
        ColorProfilerBuilder::new()
    }

    pub fn from_config(config: ProfilerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    pub fn palette(&self) -> &ReferencePalette {
        &self.config.palette
    }

    /// The region of interest sampled from an image of the given size.
    pub fn region_for(&self, width: u32, height: u32) -> Region {
        Region::centered(width, height, self.config.margin)
    }

    /// Decode the image at `path` and profile its colors.
    ///
    /// Returns `Ok(None)` if the file can't be read or isn't an image in a supported format; the format is detected
    /// from the contents of the file. Fails with [`ProfileError::InvalidRegion`] if the image is too small for the
    /// configured margin to leave anything to sample.
    pub fn detect_colors<P>(&self, path: P) -> Result<Option<ColorDistribution>>
    where
        P: AsRef<Path>,
    {
        let decoded = match DecodedImage::open(path) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!("{err}");
                return Ok(None);
            }
        };

        debug!(
            "decoded {} image, {}x{}",
            decoded.mime_type(),
            decoded.width(),
            decoded.height()
        );

        self.profile(decoded.image()).map(Some)
    }

    /// Profile the colors of an already decoded image.
    pub fn profile<S>(&self, source: &S) -> Result<ColorDistribution>
    where
        S: PixelSource + ?Sized,
    {
        self.tally(source)?.into_distribution()
    }

    /// Sample and classify an image, returning the raw per-label counts.
    pub fn tally<S>(&self, source: &S) -> Result<ColorTally<'_>>
    where
        S: PixelSource + ?Sized,
    {
        let (width, height) = source.size();
        let region = self.region_for(width, height);

        if width == 0 || height == 0 || region.is_empty() {
            return Err(ProfileError::InvalidRegion {
                width: region.width(),
                height: region.height(),
            });
        }

        let sampler = GridSampler::new(&region, self.config.granularity);
        debug!("sampling {region:?} of a {width}x{height} image every {:.2} pixels", sampler.step());

        let classifier = PixelClassifier::new(&self.config.palette);
        let tally = sampler.fold(ColorTally::new(&self.config.palette), |tally, (x, y)| {
            // a margin of zero puts the upper bounds one past the last pixel
            let color = source.rgb_at(x.min(width - 1), y.min(height - 1));
            let index = classifier.classify(color);

            trace!("({x}, {y}) {color:?} -> {}", self.config.palette.entries()[index].label());
            tally.record(index)
        });

        debug!("classified {} samples", tally.total());
        Ok(tally)
    }
}

impl ColorProfilerBuilder {
    pub fn new() -> Self {
        Self {
            config: ProfilerConfig::default(),
        }
    }

    pub fn config(self, config: ProfilerConfig) -> Self {
        Self { config }
    }

    pub fn palette(self, palette: ReferencePalette) -> Self {
        Self {
            config: ProfilerConfig { palette, ..self.config },
        }
    }

    pub fn granularity(self, granularity: u32) -> Self {
        Self {
            config: ProfilerConfig {
                granularity,
                ..self.config
            },
        }
    }

    pub fn margin(self, margin: f64) -> Self {
        Self {
            config: ProfilerConfig { margin, ..self.config },
        }
    }

    pub fn build(self) -> Result<ColorProfiler> {
        ColorProfiler::from_config(self.config)
    }
}

impl Default for ColorProfilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
