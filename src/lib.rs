//! # Android Icons
//!
//! Resizes one source image into every Android launcher-icon density bucket
//! and writes two files per bucket:
//!
//! ```text
//! icon.png  →  res/mipmap-mdpi/ic_launcher.png          48x48
//!              res/mipmap-mdpi/ic_launcher_round.png    48x48
//!              ...
//!              res/mipmap-xxxhdpi/ic_launcher_round.png 192x192
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resize`] | The icon pipeline: plan, open once, resize per bucket, save twice |
//! | [`config`] | `icons.toml` loading, merging over stock defaults, validation |
//! | [`imaging`] | Pure-Rust image operations: open, resize (Lanczos3), save |
//! | [`output`] | CLI output formatting for progress events and `check` |
//!
//! # Design Decisions
//!
//! ## Round Icons Are Not Masked
//!
//! `ic_launcher_round.png` receives exactly the pixels written to
//! `ic_launcher.png`. Android launchers that want a circle get a square
//! icon; a real circular mask would be a separate feature.
//!
//! ## Resize From the Full-Resolution Source
//!
//! The source is decoded once and every bucket is resized from it, never from
//! a smaller bucket's output. Each resize yields a new image.
//!
//! ## Progress as Events
//!
//! [`resize::run`] reports progress through an optional
//! `std::sync::mpsc::Sender<ResizeEvent>` instead of printing. The CLI drains
//! the channel on a printer thread; tests collect it and assert on the events.
//!
//! ## No Rollback
//!
//! The first failure stops the run. Buckets already written stay on disk, and
//! re-running overwrites them.

pub mod config;
pub mod imaging;
pub mod output;
pub mod resize;

#[cfg(test)]
pub(crate) mod test_helpers;
