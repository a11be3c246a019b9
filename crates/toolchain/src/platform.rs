//! Host platform detection and archive-name selection
//!
//! The Go project publishes one archive per (OS, architecture) pair. Five
//! pairs are supported here; anything else is rejected before any network
//! activity happens.

use crate::error::{Result, ToolchainError};

/// The host (OS, architecture) pair, as reported by the runtime environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    pub os: String,
    pub arch: String,
}

impl HostPlatform {
    /// Detect the platform this process is running on
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// Build a platform from raw OS/architecture strings
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The distribution archive name for this platform and Go version.
    ///
    /// Fails with [`ToolchainError::UnsupportedPlatform`] for any pair
    /// outside the five published ones.
    pub fn archive_name(&self, version: &str) -> Result<String> {
        let name = match (self.os.as_str(), self.arch.as_str()) {
            ("linux", "x86_64") => format!("go{}.linux-amd64.tar.gz", version),
            ("linux", "aarch64") => format!("go{}.linux-arm64.tar.gz", version),
            ("macos", "x86_64") => format!("go{}.darwin-amd64.tar.gz", version),
            ("macos", "aarch64") => format!("go{}.darwin-arm64.tar.gz", version),
            ("windows", "x86_64") => format!("go{}.windows-amd64.zip", version),
            _ => {
                return Err(ToolchainError::UnsupportedPlatform {
                    os: self.os.clone(),
                    arch: self.arch.clone(),
                })
            }
        };
        Ok(name)
    }

    /// Full download URL for this platform under the given base endpoint
    pub fn archive_url(&self, base_url: &str, version: &str) -> Result<String> {
        let archive = self.archive_name(version)?;
        Ok(format!("{}/{}", base_url.trim_end_matches('/'), archive))
    }

    /// Whether the toolchain archive for this platform is supported at all
    pub fn is_supported(&self) -> bool {
        matches!(
            (self.os.as_str(), self.arch.as_str()),
            ("linux" | "macos", "x86_64" | "aarch64") | ("windows", "x86_64")
        )
    }

    /// Windows hosts get a zip archive and an `.exe` Go binary
    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_names_for_supported_pairs() {
        let cases = [
            ("linux", "x86_64", "go1.23.5.linux-amd64.tar.gz"),
            ("linux", "aarch64", "go1.23.5.linux-arm64.tar.gz"),
            ("macos", "x86_64", "go1.23.5.darwin-amd64.tar.gz"),
            ("macos", "aarch64", "go1.23.5.darwin-arm64.tar.gz"),
            ("windows", "x86_64", "go1.23.5.windows-amd64.zip"),
        ];

        for (os, arch, expected) in cases {
            let platform = HostPlatform::new(os, arch);
            assert_eq!(platform.archive_name("1.23.5").unwrap(), expected);
            assert!(platform.is_supported());
        }
    }

    #[test]
    fn test_unsupported_pairs_rejected() {
        for (os, arch) in [
            ("windows", "aarch64"),
            ("freebsd", "x86_64"),
            ("linux", "riscv64"),
            ("macos", "powerpc"),
        ] {
            let platform = HostPlatform::new(os, arch);
            let err = platform.archive_name("1.23.5").unwrap_err();
            assert!(matches!(err, ToolchainError::UnsupportedPlatform { .. }));
            assert!(!platform.is_supported());
        }
    }

    #[test]
    fn test_archive_url() {
        let platform = HostPlatform::new("linux", "x86_64");
        assert_eq!(
            platform
                .archive_url("https://golang.org/dl/", "1.23.5")
                .unwrap(),
            "https://golang.org/dl/go1.23.5.linux-amd64.tar.gz"
        );
    }

    #[test]
    fn test_current_reports_runtime_strings() {
        let platform = HostPlatform::current();
        assert!(!platform.os.is_empty());
        assert!(!platform.arch.is_empty());
    }
}
