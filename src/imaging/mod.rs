//! Image processing — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Open** | `image::ImageReader` (format sniffed from content) |
//! | **Resize** | `resize_exact` with Lanczos3 |
//! | **Save** | `save_with_format`, format from the file extension |
//!
//! The module is split into:
//! - **Parameters**: [`Dimensions`] and [`ResampleFilter`]
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use params::{Dimensions, ResampleFilter};
pub use rust_backend::{RustBackend, is_supported_output};
