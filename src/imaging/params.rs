//! Parameter types for image operations.
//!
//! These types describe *what* to do, not *how* to do it. They sit between
//! the [`resize`](crate::resize) pipeline (which decides which icons to
//! write) and the [`backend`](super::backend) (which does the pixel work).
//!
//! ## Types
//!
//! - [`Dimensions`] — a width/height pair in pixels.
//! - [`ResampleFilter`] — the resampling kernel used when scaling, Lanczos3 by default.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel dimensions of an image or a target icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resampling filter used for resizing.
///
/// Serialized in lowercase so it reads naturally in `icons.toml`
/// (`filter = "lanczos3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
