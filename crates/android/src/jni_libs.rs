//! Shared-library packaging
//!
//! Copies the gomobile output for each supported CPU architecture into the
//! app's jniLibs directory. A missing source architecture directory is a
//! warning, not a failure; typical gomobile runs only produce the arches
//! the source tree supports.

use gotlin_core::error::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// What a copy run did
#[derive(Debug, Default)]
pub struct CopySummary {
    /// Destination paths of every file copied
    pub copied: Vec<PathBuf>,
    /// Architectures whose source directory was absent
    pub skipped: Vec<String>,
}

impl CopySummary {
    /// True when at least one file landed in the app tree
    pub fn copied_anything(&self) -> bool {
        !self.copied.is_empty()
    }
}

/// Copy generated libraries from `output_dir/<arch>/` into
/// `jni_libs_dir/<arch>/` for each architecture, preserving file names.
pub fn copy_libs(output_dir: &Path, jni_libs_dir: &Path, arches: &[String]) -> Result<CopySummary> {
    let mut summary = CopySummary::default();

    for arch in arches {
        let src_dir = output_dir.join(arch);
        if !src_dir.is_dir() {
            warn!(arch = %arch, src = %src_dir.display(), "source arch directory absent, skipping");
            summary.skipped.push(arch.clone());
            continue;
        }

        let dest_dir = jni_libs_dir.join(arch);
        std::fs::create_dir_all(&dest_dir)?;

        for entry in std::fs::read_dir(&src_dir)? {
            let entry = entry?;
            let src_path = entry.path();
            if !src_path.is_file() {
                continue;
            }

            let dest_path = dest_dir.join(entry.file_name());
            std::fs::copy(&src_path, &dest_path)?;
            println!("  {} Copied to: {}", "OK".green(), dest_path.display());
            summary.copied.push(dest_path);
        }
    }

    Ok(summary)
}
