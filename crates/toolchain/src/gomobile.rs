//! gomobile installation on top of an installed Go toolchain
//!
//! The toolchain is validated with `go version` first; only then is
//! `go install golang.org/x/mobile/cmd/gomobile@latest` run. The resulting
//! binary path is returned to the caller so the binding stage receives it
//! as an explicit input rather than through shared state.

use crate::error::{Result, ToolchainError};
use crate::fetch::GoInstaller;
use crate::GOMOBILE_PACKAGE;
use gotlin_core::process::run_command;
use std::path::PathBuf;
use tracing::debug;

/// Confirm the installed `go` binary is runnable; returns the first line of
/// its `go version` output.
pub fn verify_go(installer: &GoInstaller) -> Result<String> {
    let go_binary = installer.go_binary();

    if !go_binary.exists() {
        return Err(ToolchainError::GoNotFound(
            go_binary.display().to_string(),
        ));
    }

    let result = run_command(&go_binary, &["version"])
        .map_err(|e| ToolchainError::CommandFailed(e.to_string()))?;

    if !result.success {
        return Err(ToolchainError::CommandFailed(result.combined_output()));
    }

    Ok(result
        .stdout
        .lines()
        .next()
        .unwrap_or_default()
        .to_string())
}

/// Install gomobile and return the path of the installed binary.
///
/// `go install` drops the executable into the toolchain's `go/bin`
/// directory when the install root is the user's home (the default GOPATH
/// layout), which is exactly where the Gotlin pipeline keeps it.
pub fn install(installer: &GoInstaller) -> Result<PathBuf> {
    let version_line = verify_go(installer)?;
    debug!(%version_line, "go toolchain verified");

    let go_binary = installer.go_binary();
    let result = run_command(&go_binary, &["install", GOMOBILE_PACKAGE])
        .map_err(|e| ToolchainError::CommandFailed(e.to_string()))?;

    if !result.success {
        return Err(ToolchainError::GomobileInstall(result.combined_output()));
    }

    Ok(installer.gomobile_binary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HostPlatform;

    fn installer_at(root: &std::path::Path) -> GoInstaller {
        GoInstaller::new(
            "1.23.5",
            Some(root.to_str().unwrap()),
            "http://127.0.0.1:1/dl",
            HostPlatform::new("linux", "x86_64"),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_go_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let err = verify_go(&installer_at(dir.path())).unwrap_err();
        assert!(matches!(err, ToolchainError::GoNotFound(_)));
    }

    #[test]
    fn test_install_fails_without_toolchain() {
        // With no toolchain on disk the verify step fails, so no gomobile
        // path is ever produced.
        let dir = tempfile::tempdir().unwrap();
        let err = install(&installer_at(dir.path())).unwrap_err();
        assert!(matches!(err, ToolchainError::GoNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_install_surfaces_failed_subcommand() {
        use std::os::unix::fs::PermissionsExt;

        // A fake `go` that succeeds for `version` and fails for `install`.
        let dir = tempfile::tempdir().unwrap();
        let bin_dir = dir.path().join("go").join("bin");
        std::fs::create_dir_all(&bin_dir).unwrap();
        let go = bin_dir.join("go");
        std::fs::write(
            &go,
            "#!/bin/sh\nif [ \"$1\" = version ]; then echo 'go version go1.23.5 linux/amd64'; exit 0; fi\necho 'network unreachable' >&2\nexit 1\n",
        )
        .unwrap();
        std::fs::set_permissions(&go, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = install(&installer_at(dir.path())).unwrap_err();
        match err {
            ToolchainError::GomobileInstall(output) => {
                assert!(output.contains("network unreachable"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_install_returns_gomobile_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let bin_dir = dir.path().join("go").join("bin");
        std::fs::create_dir_all(&bin_dir).unwrap();
        let go = bin_dir.join("go");
        std::fs::write(
            &go,
            "#!/bin/sh\nif [ \"$1\" = version ]; then echo 'go version go1.23.5 linux/amd64'; fi\nexit 0\n",
        )
        .unwrap();
        std::fs::set_permissions(&go, std::fs::Permissions::from_mode(0o755)).unwrap();

        let path = install(&installer_at(dir.path())).unwrap();
        assert_eq!(path, bin_dir.join("gomobile"));
    }
}
