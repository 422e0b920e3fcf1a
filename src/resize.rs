//! Launcher icon generation.
//!
//! Takes one source image and writes it, resized, into every density bucket
//! of the configured size table:
//!
//! ```text
//! res/
//! ├── mipmap-mdpi/
//! │   ├── ic_launcher.png          # 48x48
//! │   └── ic_launcher_round.png    # same pixels as ic_launcher.png
//! ├── mipmap-hdpi/                 # 72x72
//! ├── mipmap-xhdpi/                # 96x96
//! ├── mipmap-xxhdpi/               # 144x144
//! └── mipmap-xxxhdpi/              # 192x192
//! ```
//!
//! ## Flow
//!
//! 1. Validate the config and check the source exists. A missing source stops
//!    the run before anything is created.
//! 2. Open the source once.
//! 3. For each bucket in table order: create the directory, resize from the
//!    full-resolution source, save the result under both icon names.
//!
//! The first failure aborts the run. Buckets written before it stay on disk.
//!
//! ## Progress
//!
//! Progress is reported as [`ResizeEvent`]s over an optional channel; the
//! CLI formats them with [`output::format_resize_event`](crate::output::format_resize_event).

use crate::config::{ConfigError, IconConfig};
use crate::imaging::{BackendError, Dimensions, ImageBackend, RustBackend};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Source file not found at {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Failed to open source image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("Failed to resize for {bucket}: {source}")]
    Resize {
        bucket: String,
        #[source]
        source: BackendError,
    },
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
}

/// Which of the two per-bucket files an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Standard,
    Round,
}

/// Progress events emitted while icons are written.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeEvent {
    SourceOpened {
        path: PathBuf,
        dimensions: Dimensions,
    },
    IconSaved {
        bucket: String,
        file: String,
        kind: IconKind,
        dimensions: Dimensions,
    },
    Completed {
        buckets: usize,
        files: usize,
    },
}

/// Output locations for one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedBucket {
    pub bucket: String,
    pub dimensions: Dimensions,
    pub dir: PathBuf,
    pub standard: PathBuf,
    pub round: PathBuf,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeReport {
    pub source_dimensions: Dimensions,
    pub buckets: Vec<PlannedBucket>,
}

impl ResizeReport {
    pub fn file_count(&self) -> usize {
        self.buckets.len() * 2
    }
}

/// Compute every output path without touching the filesystem.
pub fn plan_icons(config: &IconConfig) -> Vec<PlannedBucket> {
    config
        .buckets
        .iter()
        .map(|bucket| {
            let dir = config.res_dir.join(&bucket.name);
            PlannedBucket {
                bucket: bucket.name.clone(),
                dimensions: bucket.dimensions(),
                standard: dir.join(&config.icons.standard),
                round: dir.join(&config.icons.round),
                dir,
            }
        })
        .collect()
}

fn emit(events: Option<&Sender<ResizeEvent>>, event: ResizeEvent) {
    if let Some(tx) = events {
        // A dropped receiver only loses progress output
        tx.send(event).ok();
    }
}

/// Validate the config, then open the source image.
///
/// This is the shared front half of [`run`] and the CLI `check` command.
pub fn open_source<B: ImageBackend>(
    backend: &B,
    config: &IconConfig,
) -> Result<B::Image, ResizeError> {
    config.validate()?;
    if !config.source.exists() {
        return Err(ResizeError::SourceNotFound(config.source.clone()));
    }
    backend
        .open(&config.source)
        .map_err(|source| ResizeError::Decode {
            path: config.source.clone(),
            source,
        })
}

/// Write all icons using the pure-Rust backend.
pub fn run(
    config: &IconConfig,
    events: Option<Sender<ResizeEvent>>,
) -> Result<ResizeReport, ResizeError> {
    run_with_backend(&RustBackend::new(), config, events)
}

/// Write all icons using a specific backend (allows testing with mock).
pub fn run_with_backend<B: ImageBackend>(
    backend: &B,
    config: &IconConfig,
    events: Option<Sender<ResizeEvent>>,
) -> Result<ResizeReport, ResizeError> {
    let events = events.as_ref();
    let source = open_source(backend, config)?;
    let source_dimensions = backend.identify(&source);
    emit(
        events,
        ResizeEvent::SourceOpened {
            path: config.source.clone(),
            dimensions: source_dimensions,
        },
    );

    let plan = plan_icons(config);
    for planned in &plan {
        write_bucket(backend, &source, config, planned, events)?;
    }

    let report = ResizeReport {
        source_dimensions,
        buckets: plan,
    };
    emit(
        events,
        ResizeEvent::Completed {
            buckets: report.buckets.len(),
            files: report.file_count(),
        },
    );
    Ok(report)
}

fn write_bucket<B: ImageBackend>(
    backend: &B,
    source: &B::Image,
    config: &IconConfig,
    planned: &PlannedBucket,
    events: Option<&Sender<ResizeEvent>>,
) -> Result<(), ResizeError> {
    std::fs::create_dir_all(&planned.dir).map_err(|source| ResizeError::CreateDir {
        path: planned.dir.clone(),
        source,
    })?;

    let resized = backend
        .resize(source, planned.dimensions, config.filter)
        .map_err(|source| ResizeError::Resize {
            bucket: planned.bucket.clone(),
            source,
        })?;

    for (kind, path, file) in [
        (IconKind::Standard, &planned.standard, &config.icons.standard),
        (IconKind::Round, &planned.round, &config.icons.round),
    ] {
        save(backend, &resized, path)?;
        emit(
            events,
            ResizeEvent::IconSaved {
                bucket: planned.bucket.clone(),
                file: file.clone(),
                kind,
                dimensions: planned.dimensions,
            },
        );
    }
    Ok(())
}

fn save<B: ImageBackend>(backend: &B, image: &B::Image, path: &Path) -> Result<(), ResizeError> {
    backend
        .save(image, path)
        .map_err(|source| ResizeError::Write {
            path: path.to_path_buf(),
            source,
        })
}
