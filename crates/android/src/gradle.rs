//! Gradle build system integration
//!
//! Wrappers for the application build that runs after the native-library
//! pipeline. The pipeline stages replace the Gradle tasks the app used to
//! carry; the app build itself still goes through the Gradle wrapper.

use gotlin_core::error::Result;
use gotlin_core::process::{run_command_in_dir, run_command_streaming_in_dir, CommandResult};
use std::path::Path;

/// Run a Gradle task with captured output
pub fn run_task(project_dir: &Path, task: &str) -> Result<CommandResult> {
    run_command_in_dir(gradle_wrapper(), &[task], project_dir)
}

/// Run a Gradle task streaming output to the terminal
pub fn run_task_streaming(project_dir: &Path, task: &str) -> Result<i32> {
    run_command_streaming_in_dir(gradle_wrapper(), &[task], project_dir)
}

/// Build debug APK
pub fn build_debug(project_dir: &Path) -> Result<i32> {
    run_task_streaming(project_dir, "assembleDebug")
}

/// Build release APK
pub fn build_release(project_dir: &Path) -> Result<i32> {
    run_task_streaming(project_dir, "assembleRelease")
}

/// Clean build artifacts
pub fn clean(project_dir: &Path) -> Result<CommandResult> {
    run_task(project_dir, "clean")
}

/// Whether the project has a Gradle wrapper checked in
pub fn has_wrapper(project_dir: &Path) -> bool {
    project_dir.join(wrapper_file()).exists()
}

fn gradle_wrapper() -> &'static str {
    if cfg!(windows) {
        "gradlew.bat"
    } else {
        "./gradlew"
    }
}

fn wrapper_file() -> &'static str {
    if cfg!(windows) {
        "gradlew.bat"
    } else {
        "gradlew"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_wrapper() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!has_wrapper(dir.path()));

        std::fs::write(dir.path().join(wrapper_file()), b"#!/bin/sh\n").unwrap();
        assert!(has_wrapper(dir.path()));
    }
}
