//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the four operations the icon pipeline
//! needs: open, identify, resize, and save. The decoded image type is an
//! associated type so the pipeline never touches pixels directly.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::{Dimensions, ResampleFilter};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// `open` is called once per run; `resize` is called once per bucket against
/// that same image and must leave it untouched.
pub trait ImageBackend {
    /// Decoded, in-memory image.
    type Image;

    /// Open and decode an image from disk.
    fn open(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Dimensions of a decoded image.
    fn identify(&self, image: &Self::Image) -> Dimensions;

    /// Produce a new image scaled to exactly `target`.
    fn resize(
        &self,
        image: &Self::Image,
        target: Dimensions,
        filter: ResampleFilter,
    ) -> Result<Self::Image, BackendError>;

    /// Encode and write an image, format inferred from the path extension.
    fn save(&self, image: &Self::Image, path: &Path) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records operations without touching pixels.
    ///
    /// Its "image" is just the dimensions the real one would have. `save`
    /// still writes a small placeholder file so directory effects can be
    /// asserted on.
    pub struct MockBackend {
        pub source_dims: Dimensions,
        pub fail_open: bool,
        pub fail_save_on: Option<String>,
        pub fail_resize_on: Option<Dimensions>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Open(String),
        Resize {
            from: Dimensions,
            to: Dimensions,
            filter: ResampleFilter,
        },
        Save {
            path: String,
            dims: Dimensions,
        },
    }

    impl Default for MockBackend {
        fn default() -> Self {
            Self::with_source(Dimensions::new(512, 512))
        }
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_source(source_dims: Dimensions) -> Self {
            Self {
                source_dims,
                fail_open: false,
                fail_save_on: None,
                fail_resize_on: None,
                operations: Mutex::new(Vec::new()),
            }
        }

        /// Fail `open` as if the file were corrupt.
        pub fn failing_open() -> Self {
            Self {
                fail_open: true,
                ..Self::default()
            }
        }

        /// Fail `save` for any output path containing `needle`.
        pub fn failing_save_on(needle: &str) -> Self {
            Self {
                fail_save_on: Some(needle.to_string()),
                ..Self::default()
            }
        }

        /// Fail `resize` whenever the target is `dims`.
        pub fn failing_resize_on(dims: Dimensions) -> Self {
            Self {
                fail_resize_on: Some(dims),
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        type Image = Dimensions;

        fn open(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Open(path.to_string_lossy().to_string()));
            if self.fail_open {
                return Err(BackendError::Decode("mock decode failure".to_string()));
            }
            Ok(self.source_dims)
        }

        fn identify(&self, image: &Dimensions) -> Dimensions {
            *image
        }

        fn resize(
            &self,
            image: &Dimensions,
            target: Dimensions,
            filter: ResampleFilter,
        ) -> Result<Dimensions, BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Resize {
                from: *image,
                to: target,
                filter,
            });
            if self.fail_resize_on == Some(target) {
                return Err(BackendError::ProcessingFailed(format!(
                    "mock resize failure at {target}"
                )));
            }
            Ok(target)
        }

        fn save(&self, image: &Dimensions, path: &Path) -> Result<(), BackendError> {
            let path_str = path.to_string_lossy().to_string();
            self.operations.lock().unwrap().push(RecordedOp::Save {
                path: path_str.clone(),
                dims: *image,
            });
            if self
                .fail_save_on
                .as_deref()
                .is_some_and(|needle| path_str.contains(needle))
            {
                return Err(BackendError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "mock write failure",
                )));
            }
            std::fs::write(path, image.to_string())?;
            Ok(())
        }
    }

    #[test]
    fn mock_records_open_and_resize() {
        let backend = MockBackend::with_source(Dimensions::new(800, 600));

        let img = backend.open(Path::new("/test/icon.png")).unwrap();
        assert_eq!(backend.identify(&img), Dimensions::new(800, 600));

        let resized = backend
            .resize(&img, Dimensions::new(48, 48), ResampleFilter::Lanczos3)
            .unwrap();
        assert_eq!(resized, Dimensions::new(48, 48));
        // Source untouched
        assert_eq!(img, Dimensions::new(800, 600));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], RecordedOp::Open(p) if p == "/test/icon.png"));
        assert!(matches!(
            &ops[1],
            RecordedOp::Resize {
                from: Dimensions {
                    width: 800,
                    height: 600
                },
                to: Dimensions {
                    width: 48,
                    height: 48
                },
                ..
            }
        ));
    }

    #[test]
    fn mock_failing_open() {
        let backend = MockBackend::failing_open();
        let result = backend.open(Path::new("/test/icon.png"));
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[test]
    fn mock_failing_resize_only_matches_target() {
        let backend = MockBackend::failing_resize_on(Dimensions::new(96, 96));
        let img = backend.open(Path::new("/test/icon.png")).unwrap();

        assert!(
            backend
                .resize(&img, Dimensions::new(72, 72), ResampleFilter::Lanczos3)
                .is_ok()
        );
        let result = backend.resize(&img, Dimensions::new(96, 96), ResampleFilter::Lanczos3);
        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
    }

    #[test]
    fn mock_save_writes_placeholder() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("ic_launcher.png");
        let backend = MockBackend::new();

        backend.save(&Dimensions::new(72, 72), &out).unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "72x72");
    }

    #[test]
    fn mock_save_failure_matches_needle() {
        let tmp = tempfile::TempDir::new().unwrap();
        let backend = MockBackend::failing_save_on("round");

        assert!(
            backend
                .save(&Dimensions::new(48, 48), &tmp.path().join("ic_launcher.png"))
                .is_ok()
        );
        let result = backend.save(
            &Dimensions::new(48, 48),
            &tmp.path().join("ic_launcher_round.png"),
        );
        assert!(matches!(result, Err(BackendError::Io(_))));
    }
}
