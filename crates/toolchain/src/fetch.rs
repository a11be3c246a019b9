//! Go toolchain download and extraction
//!
//! Installs a Go distribution under a user-scoped install root. The
//! presence of `<root>/go/bin` is treated as an existing install and skips
//! all work; contents and version are not re-validated (use `doctor` to see
//! what is actually installed). Extraction shells out to the platform
//! unarchiver: `tar` on Unix hosts, `Expand-Archive` on Windows.

use crate::error::{Result, ToolchainError};
use crate::platform::HostPlatform;
use gotlin_cli::output::format_size;
use gotlin_cli::progress;
use gotlin_core::process::run_command;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What `install` ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// `<root>/go/bin` already existed; nothing was downloaded or extracted
    AlreadyInstalled,
    /// The archive was downloaded and extracted
    Installed,
}

/// Downloads and extracts a Go toolchain
#[derive(Debug, Clone)]
pub struct GoInstaller {
    version: String,
    base_url: String,
    install_root: PathBuf,
    platform: HostPlatform,
}

impl GoInstaller {
    /// Create an installer. `install_root` falls back to the user's home
    /// directory when not configured; `~` is expanded when it is.
    pub fn new(
        version: impl Into<String>,
        install_root: Option<&str>,
        base_url: impl Into<String>,
        platform: HostPlatform,
    ) -> Result<Self> {
        let install_root = match install_root {
            Some(raw) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
            None => dirs::home_dir().ok_or(ToolchainError::NoInstallRoot)?,
        };

        Ok(Self {
            version: version.into(),
            base_url: base_url.into(),
            install_root,
            platform,
        })
    }

    /// The configured Go version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Directory the `go/` tree is extracted into
    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// `<root>/go/bin`, the install marker directory
    pub fn go_bin_dir(&self) -> PathBuf {
        self.install_root.join("go").join("bin")
    }

    /// Path of the `go` executable inside the install
    pub fn go_binary(&self) -> PathBuf {
        let name = if self.platform.is_windows() {
            "go.exe"
        } else {
            "go"
        };
        self.go_bin_dir().join(name)
    }

    /// Path of the `gomobile` executable `go install` produces
    pub fn gomobile_binary(&self) -> PathBuf {
        let name = if self.platform.is_windows() {
            "gomobile.exe"
        } else {
            "gomobile"
        };
        self.go_bin_dir().join(name)
    }

    /// Whether a Go install is already present (marker check only)
    pub fn is_installed(&self) -> bool {
        self.go_bin_dir().is_dir()
    }

    /// Download and extract the toolchain, skipping all work when the
    /// install marker directory already exists. The archive name is
    /// resolved before any network activity, so unsupported platforms
    /// never reach the download.
    pub fn install(&self) -> Result<InstallOutcome> {
        if self.is_installed() {
            debug!(root = %self.install_root.display(), "go install marker present, skipping");
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        let archive = self.platform.archive_name(&self.version)?;
        let url = self.platform.archive_url(&self.base_url, &self.version)?;

        std::fs::create_dir_all(&self.install_root)?;
        let archive_path = self.install_root.join(&archive);

        download(&url, &archive_path)?;
        extract(&archive_path, &self.install_root, self.platform.is_windows())?;

        // The archive is left in place; a later failed run will still find
        // the extracted tree via the marker check.
        if !self.is_installed() {
            return Err(ToolchainError::GoNotFound(
                self.go_bin_dir().display().to_string(),
            ));
        }

        Ok(InstallOutcome::Installed)
    }
}

/// Fetch `url` into `dest`, reporting byte progress. Returns bytes written.
fn download(url: &str, dest: &Path) -> Result<u64> {
    debug!(url, dest = %dest.display(), "downloading toolchain archive");

    let response = reqwest::blocking::get(url).map_err(|e| ToolchainError::Download {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !response.status().is_success() {
        return Err(ToolchainError::Download {
            url: url.to_string(),
            message: format!("HTTP {}", response.status()),
        });
    }

    let label = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "archive".to_string());

    let pb = match response.content_length() {
        Some(total) => progress::download_progress(total, &label),
        None => progress::spinner(&label),
    };

    let mut reader = pb.wrap_read(response);
    let mut file = std::fs::File::create(dest)?;
    let bytes = std::io::copy(&mut reader, &mut file)?;

    progress::finish_success(&pb, &format!("Downloaded {} ({})", label, format_size(bytes)));

    Ok(bytes)
}

/// Unpack `archive` into `dest_dir` using the platform unarchiver
fn extract(archive: &Path, dest_dir: &Path, windows: bool) -> Result<()> {
    let archive_str = archive.display().to_string();
    let dest_str = dest_dir.display().to_string();

    let result = if windows {
        let script = format!(
            "Expand-Archive -Path {} -DestinationPath {} -Force",
            archive_str, dest_str
        );
        run_command("powershell", &["-Command", &script])
    } else {
        run_command("tar", &["-C", &dest_str, "-xzf", &archive_str])
    }
    .map_err(|e| ToolchainError::CommandFailed(e.to_string()))?;

    if !result.success {
        return Err(ToolchainError::Extract(result.combined_output()));
    }

    Ok(())
}
