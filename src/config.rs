//! Icon configuration module.
//!
//! Handles loading, validating, and merging `icons.toml`. Stock defaults
//! reproduce the standard Android launcher icon layout; a user file only
//! needs the keys it wants to change, and CLI flags override both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source = "icon.png"                   # Source image
//! res_dir = "android/app/src/main/res"  # Android resource root
//! filter = "lanczos3"                   # Resampling filter
//!
//! [icons]
//! standard = "ic_launcher.png"
//! round = "ic_launcher_round.png"
//!
//! [[buckets]]
//! name = "mipmap-mdpi"
//! width = 48
//! height = 48
//! # ... hdpi 72, xhdpi 96, xxhdpi 144, xxxhdpi 192
//! ```
//!
//! ## Merging
//!
//! Tables merge key-by-key; arrays replace wholesale. Declaring any
//! `[[buckets]]` therefore replaces the whole size table, which keeps the
//! bucket order exactly as written.
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{Dimensions, ResampleFilter, is_supported_output};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "icons.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Icon configuration loaded from `icons.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Source image every icon is derived from.
    pub source: PathBuf,
    /// Resource root; one subdirectory per bucket is created beneath it.
    pub res_dir: PathBuf,
    /// Resampling filter used for every resize.
    pub filter: ResampleFilter,
    /// Output file names written into each bucket directory.
    pub icons: IconNames,
    /// Ordered size table.
    pub buckets: Vec<Bucket>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("icon.png"),
            res_dir: PathBuf::from("android/app/src/main/res"),
            filter: ResampleFilter::default(),
            icons: IconNames::default(),
            buckets: default_buckets(),
        }
    }
}

/// File names for the two icons written per bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconNames {
    pub standard: String,
    /// Receives the same pixels as `standard`; no circular mask is applied.
    pub round: String,
}

impl Default for IconNames {
    fn default() -> Self {
        Self {
            standard: "ic_launcher.png".to_string(),
            round: "ic_launcher_round.png".to_string(),
        }
    }
}

/// A density bucket: destination directory name plus target size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bucket {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Bucket {
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// The standard Android launcher icon densities.
pub fn default_buckets() -> Vec<Bucket> {
    vec![
        Bucket::new("mipmap-mdpi", 48, 48),
        Bucket::new("mipmap-hdpi", 72, 72),
        Bucket::new("mipmap-xhdpi", 96, 96),
        Bucket::new("mipmap-xxhdpi", 144, 144),
        Bucket::new("mipmap-xxxhdpi", 192, 192),
    ]
}

/// True when `name` is exactly one normal path component (no separators,
/// no `.` or `..`).
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

impl IconConfig {
    /// Apply CLI overrides on top of the loaded values.
    pub fn with_overrides(mut self, source: Option<PathBuf>, res_dir: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        if let Some(res_dir) = res_dir {
            self.res_dir = res_dir;
        }
        self
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation("source must not be empty".into()));
        }
        if self.res_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("res_dir must not be empty".into()));
        }

        for (key, name) in [
            ("icons.standard", &self.icons.standard),
            ("icons.round", &self.icons.round),
        ] {
            if !is_plain_file_name(name) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain file name, got {name:?}"
                )));
            }
            if !is_supported_output(name) {
                return Err(ConfigError::Validation(format!(
                    "{key} has no supported image extension: {name:?}"
                )));
            }
        }
        if self.icons.standard == self.icons.round {
            return Err(ConfigError::Validation(
                "icons.standard and icons.round must differ".into(),
            ));
        }

        if self.buckets.is_empty() {
            return Err(ConfigError::Validation("buckets must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for bucket in &self.buckets {
            if !is_plain_file_name(&bucket.name) {
                return Err(ConfigError::Validation(format!(
                    "bucket name must be a plain directory name, got {:?}",
                    bucket.name
                )));
            }
            if bucket.width == 0 || bucket.height == 0 {
                return Err(ConfigError::Validation(format!(
                    "bucket {} must have non-zero width and height",
                    bucket.name
                )));
            }
            if !seen.insert(bucket.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate bucket name: {}",
                    bucket.name
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(IconConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value and deserialize.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<IconConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IconConfig = merged.try_into()?;
    Ok(config)
}

/// Load config from `path`, merged over stock defaults.
///
/// A missing file yields the defaults. Validation is left to the caller so
/// CLI overrides can be applied first.
pub fn load_config(path: &Path) -> Result<IconConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(path)?)
}

/// Like [`load_config`], but a missing file is an error.
pub fn load_required_config(path: &Path) -> Result<IconConfig, ConfigError> {
    match load_raw_config(path)? {
        Some(overlay) => resolve_config(stock_defaults_value(), Some(overlay)),
        None => Err(ConfigError::NotFound(path.to_path_buf())),
    }
}

/// Returns a fully-commented stock `icons.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Android Icons Configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Source image every icon is derived from (PNG, JPEG, TIFF or WebP).
source = "icon.png"

# Android resource root. One directory per bucket is created beneath it.
res_dir = "android/app/src/main/res"

# Resampling filter: nearest, triangle, catmullrom, gaussian, lanczos3.
filter = "lanczos3"

# ---------------------------------------------------------------------------
# Output file names, written into every bucket directory.
# Both files receive the same pixels; the round icon is not masked.
# ---------------------------------------------------------------------------
[icons]
standard = "ic_launcher.png"
round = "ic_launcher_round.png"

# ---------------------------------------------------------------------------
# Size table. Declaring any bucket replaces the whole list.
# ---------------------------------------------------------------------------
[[buckets]]
name = "mipmap-mdpi"
width = 48
height = 48

[[buckets]]
name = "mipmap-hdpi"
width = 72
height = 72

[[buckets]]
name = "mipmap-xhdpi"
width = 96
height = 96

[[buckets]]
name = "mipmap-xxhdpi"
width = 144
height = 144

[[buckets]]
name = "mipmap-xxxhdpi"
width = 192
height = 192
"##
}
