//! gomobile bind invocation
//!
//! Shells out to the gomobile binary produced by the toolchain stage. The
//! binary path is an explicit input; the existence check runs before the
//! output directory is created so a missing tool leaves no half-made state.

use gotlin_core::error::{Error, Result};
use gotlin_core::process::{run_command_with_env, CommandResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Inputs for a gomobile bind run
#[derive(Debug, Clone)]
pub struct BindOptions {
    /// Path of the gomobile binary (returned by the installer stage)
    pub gomobile: PathBuf,
    /// Go source tree to compile
    pub go_dir: PathBuf,
    /// Directory receiving the generated libraries
    pub output_dir: PathBuf,
    /// gomobile target platform
    pub target: String,
}

impl BindOptions {
    /// Options for the stock Gotlin app layout
    pub fn new(gomobile: PathBuf) -> Self {
        Self {
            gomobile,
            go_dir: PathBuf::from("app/src/main/go"),
            output_dir: PathBuf::from("app/build/intermediates/go-libs"),
            target: "android".to_string(),
        }
    }
}

/// Run gomobile bind with the given options.
///
/// gomobile re-invokes `go`, so the toolchain's bin directory is prepended
/// to PATH for the child process.
pub fn generate(options: &BindOptions) -> Result<CommandResult> {
    if !options.gomobile.exists() {
        return Err(Error::file_not_found(&options.gomobile)
            .with_context("gomobile binary not found; run the installer stage first"));
    }

    std::fs::create_dir_all(&options.output_dir)?;

    let target_flag = format!("-target={}", options.target);
    let output = options.output_dir.display().to_string();
    let go_dir = options.go_dir.display().to_string();

    let path_env = toolchain_path_env(&options.gomobile)?;

    debug!(
        gomobile = %options.gomobile.display(),
        target = %options.target,
        %output,
        "running gomobile bind"
    );

    let result = run_command_with_env(
        &options.gomobile,
        &["bind", &target_flag, "-o", &output, &go_dir],
        &[("PATH", &path_env)],
    )?;

    if !result.success {
        return Err(Error::command_failed("gomobile bind", &result.stderr));
    }

    Ok(result)
}

/// PATH for the gomobile child process: the toolchain bin directory
/// followed by the current PATH.
fn toolchain_path_env(gomobile: &Path) -> Result<String> {
    let bin_dir = gomobile
        .parent()
        .ok_or_else(|| Error::io("gomobile path has no parent directory"))?;

    let current = std::env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![bin_dir.to_path_buf()];
    paths.extend(std::env::split_paths(&current));

    let joined = std::env::join_paths(paths)
        .map_err(|e| Error::io(format!("Failed to build PATH: {}", e)))?;

    Ok(joined.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_gomobile_aborts_before_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("go-libs");

        let options = BindOptions {
            gomobile: dir.path().join("missing").join("gomobile"),
            go_dir: dir.path().join("go-src"),
            output_dir: output_dir.clone(),
            target: "android".to_string(),
        };

        let err = generate(&options).unwrap_err();
        assert_eq!(err.code, gotlin_core::ErrorCode::FileNotFound);
        assert!(err.message.contains("gomobile"));

        // The precondition check must run before the output directory is
        // created.
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_default_options_match_app_layout() {
        let options = BindOptions::new(PathBuf::from("/tmp/go/bin/gomobile"));
        assert_eq!(options.go_dir, PathBuf::from("app/src/main/go"));
        assert_eq!(
            options.output_dir,
            PathBuf::from("app/build/intermediates/go-libs")
        );
        assert_eq!(options.target, "android");
    }

    #[test]
    fn test_toolchain_path_env_prepends_bin_dir() {
        let path = toolchain_path_env(Path::new("/opt/go/bin/gomobile")).unwrap();
        assert!(path.starts_with("/opt/go/bin"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_bind_surfaces_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let gomobile = dir.path().join("gomobile");
        std::fs::write(&gomobile, "#!/bin/sh\necho 'no Go package' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&gomobile, std::fs::Permissions::from_mode(0o755)).unwrap();

        let options = BindOptions {
            gomobile,
            go_dir: dir.path().join("go-src"),
            output_dir: dir.path().join("go-libs"),
            target: "android".to_string(),
        };

        let err = generate(&options).unwrap_err();
        assert_eq!(err.code, gotlin_core::ErrorCode::CommandFailed);
        assert_eq!(err.context.as_deref(), Some("no Go package"));

        // Tool existed, so the output directory was created before the run.
        assert!(options.output_dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_bind() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let gomobile = dir.path().join("gomobile");
        std::fs::write(&gomobile, "#!/bin/sh\necho \"$@\"\nexit 0\n").unwrap();
        std::fs::set_permissions(&gomobile, std::fs::Permissions::from_mode(0o755)).unwrap();

        let options = BindOptions {
            gomobile,
            go_dir: dir.path().join("go-src"),
            output_dir: dir.path().join("go-libs"),
            target: "android".to_string(),
        };

        let result = generate(&options).unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("bind"));
        assert!(result.stdout.contains("-target=android"));
    }
}
