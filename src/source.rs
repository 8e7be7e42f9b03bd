use crate::{ColorVector, ProfileError, Result};
use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, Pixel};
use std::{fs, path::Path};

/// Random access to the colors of an image.
///
/// Implemented for every [`GenericImageView`] with 8-bit channels, so any decoded `image` buffer or view can be
/// profiled directly. Alpha is discarded.
pub trait PixelSource {
    /// The width and height of the image, in pixels.
    fn size(&self) -> (u32, u32);

    /// The color at the given coordinates, which are within the image.
    fn rgb_at(&self, x: u32, y: u32) -> ColorVector;
}

impl<I> PixelSource for I
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    fn size(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn rgb_at(&self, x: u32, y: u32) -> ColorVector {
        let [red, green, blue] = self.get_pixel(x, y).to_rgb().0;
        ColorVector::new(red, green, blue)
    }
}

/// An image decoded from a file, along with the format detected from its contents.
#[derive(Debug)]
pub struct DecodedImage {
    format: ImageFormat,
    image: DynamicImage,
}

impl DecodedImage {
    /// Open and decode the image at `path`. The format is detected from the file contents, never from the extension.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let decode_error = |source: ImageError| ProfileError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let bytes = fs::read(path).map_err(|e| decode_error(e.into()))?;
        let format = image::guess_format(&bytes).map_err(decode_error)?;
        let image = image::load_from_memory_with_format(&bytes, format).map_err(decode_error)?;

        Ok(Self { format, image })
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        match self.format {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Tiff => "image/tiff",
            _ => "application/octet-stream",
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_inner(self) -> DynamicImage {
        self.image
    }
}
