//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Resize
//!
//! ```text
//! Opened source image: icon.png (512x512)
//! Saved mipmap-mdpi/ic_launcher.png (48x48)
//! Saved mipmap-mdpi/ic_launcher_round.png (48x48)
//! ...
//! All icons updated successfully (5 buckets, 10 files)
//! ```
//!
//! ## Check
//!
//! ```text
//! Source: icon.png (512x512)
//! Output: android/app/src/main/res
//! 001 mipmap-mdpi (48x48)
//!     ic_launcher.png
//!     ic_launcher_round.png
//! ...
//! 5 buckets, 10 files
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and, where the CLI needs one, a `print_*` wrapper that writes
//! to stdout. Format functions are pure — no I/O, no side effects.

use crate::imaging::Dimensions;
use crate::resize::{PlannedBucket, ResizeEvent};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Resize output
// ============================================================================

/// Format a single resize progress event as display lines.
pub fn format_resize_event(event: &ResizeEvent) -> Vec<String> {
    match event {
        ResizeEvent::SourceOpened { path, dimensions } => {
            vec![format!(
                "Opened source image: {} ({})",
                path.display(),
                dimensions
            )]
        }
        ResizeEvent::IconSaved {
            bucket,
            file,
            dimensions,
            ..
        } => vec![format!("Saved {}/{} ({})", bucket, file, dimensions)],
        ResizeEvent::Completed { buckets, files } => vec![format!(
            "All icons updated successfully ({}, {})",
            plural(*buckets, "bucket"),
            plural(*files, "file")
        )],
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the `check` command output: source info plus the planned files.
pub fn format_check_output(
    source: &Path,
    source_dimensions: Dimensions,
    res_dir: &Path,
    plan: &[PlannedBucket],
) -> Vec<String> {
    let mut lines = vec![
        format!("Source: {} ({})", source.display(), source_dimensions),
        format!("Output: {}", res_dir.display()),
    ];

    for (i, planned) in plan.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            planned.bucket,
            planned.dimensions
        ));
        for path in [&planned.standard, &planned.round] {
            let name = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            lines.push(format!("{}{}", indent(1), name));
        }
    }

    lines.push(format!(
        "{}, {}",
        plural(plan.len(), "bucket"),
        plural(plan.len() * 2, "file")
    ));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(
    source: &Path,
    source_dimensions: Dimensions,
    res_dir: &Path,
    plan: &[PlannedBucket],
) {
    for line in format_check_output(source, source_dimensions, res_dir, plan) {
        println!("{}", line);
    }
}
