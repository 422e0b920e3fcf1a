//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Resize | `DynamicImage::resize_exact` (Lanczos3 unless configured otherwise) |
//! | Encode | `DynamicImage::save_with_format`, format from the output extension |

use super::backend::{BackendError, ImageBackend};
use super::params::{Dimensions, ResampleFilter};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use std::path::Path;
use std::sync::LazyLock;

/// Extensions mapped to the codecs compiled in.
const CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static OUTPUT_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.writing_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Image file extensions that have working encoders compiled in.
pub fn supported_output_extensions() -> &'static [&'static str] {
    &OUTPUT_EXTENSIONS
}

/// Whether an output file name maps to an encoder we can use.
pub fn is_supported_output(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_output_extensions()
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Backend built on the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn output_format(path: &Path) -> Result<ImageFormat, BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    CANDIDATES
        .iter()
        .find(|(candidate, fmt)| *candidate == ext && fmt.writing_enabled())
        .map(|(_, fmt)| *fmt)
        .ok_or(BackendError::UnsupportedFormat(ext))
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn open(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    fn identify(&self, image: &DynamicImage) -> Dimensions {
        Dimensions::new(image.width(), image.height())
    }

    fn resize(
        &self,
        image: &DynamicImage,
        target: Dimensions,
        filter: ResampleFilter,
    ) -> Result<DynamicImage, BackendError> {
        if target.width == 0 || target.height == 0 {
            return Err(BackendError::ProcessingFailed(format!(
                "Cannot resize to {target}"
            )));
        }
        Ok(image.resize_exact(target.width, target.height, filter.filter_type()))
    }

    fn save(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError> {
        let format = output_format(path)?;
        // JPEG has no alpha channel
        let result = if format == ImageFormat::Jpeg {
            DynamicImage::ImageRgb8(image.to_rgb8()).save_with_format(path, format)
        } else {
            image.save_with_format(path, format)
        };
        result.map_err(|e| match e {
            ImageError::IoError(io) => BackendError::Io(io),
            other => BackendError::ProcessingFailed(format!(
                "Failed to encode {}: {}",
                path.display(),
                other
            )),
        })
    }
}
