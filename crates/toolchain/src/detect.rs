use crate::error::{Result, ToolchainError};
use gotlin_core::process::run_command;
use std::path::Path;

/// Represents an installed Go version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
    pub raw: String,
}

impl GoVersion {
    /// Parse a Go version from `go version` output
    /// (e.g. "go version go1.23.5 linux/amd64") or a bare "1.23.5".
    pub fn parse(version_str: &str) -> Result<Self> {
        let version_str = version_str.trim();

        let version_part = version_str
            .split_whitespace()
            .find(|s| s.starts_with("go") && s.len() > 2 && s[2..].starts_with(|c: char| c.is_ascii_digit()))
            .map(|s| &s[2..])
            .or_else(|| {
                version_str
                    .split_whitespace()
                    .find(|s| s.chars().next().is_some_and(|c| c.is_ascii_digit()))
            })
            .ok_or_else(|| ToolchainError::ParseError(version_str.to_string()))?;

        let parts: Vec<&str> = version_part.split('.').collect();

        if parts.len() < 2 {
            return Err(ToolchainError::ParseError(version_str.to_string()));
        }

        let major = parts[0]
            .parse()
            .map_err(|_| ToolchainError::ParseError(version_str.to_string()))?;
        let minor = parts[1]
            .parse()
            .map_err(|_| ToolchainError::ParseError(version_str.to_string()))?;
        let patch = parts.get(2).and_then(|p| p.parse().ok());

        Ok(Self {
            major,
            minor,
            patch,
            raw: version_str.to_string(),
        })
    }

    /// Check if this version matches a required "major.minor[.patch]" string
    pub fn matches(&self, required: &str) -> bool {
        match Self::parse(required) {
            Ok(req) => {
                self.major == req.major
                    && self.minor == req.minor
                    && req.patch.map_or(true, |p| self.patch == Some(p))
            }
            Err(_) => false,
        }
    }

    /// Format as major.minor[.patch]
    pub fn short_version(&self) -> String {
        match self.patch {
            Some(patch) => format!("{}.{}.{}", self.major, self.minor, patch),
            None => format!("{}.{}", self.major, self.minor),
        }
    }
}

/// Ask an installed `go` binary for its version
pub fn installed_version(go_binary: &Path) -> Result<GoVersion> {
    if !go_binary.exists() {
        return Err(ToolchainError::GoNotFound(
            go_binary.display().to_string(),
        ));
    }

    let result = run_command(go_binary, &["version"])
        .map_err(|e| ToolchainError::CommandFailed(e.to_string()))?;

    if !result.success {
        return Err(ToolchainError::CommandFailed(result.combined_output()));
    }

    GoVersion::parse(&result.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go_version_output() {
        let version = GoVersion::parse("go version go1.23.5 linux/amd64").unwrap();
        assert_eq!(version.major, 1);
        assert_eq!(version.minor, 23);
        assert_eq!(version.patch, Some(5));
    }

    #[test]
    fn test_parse_bare_version() {
        let version = GoVersion::parse("1.23.5").unwrap();
        assert_eq!(version.short_version(), "1.23.5");

        let version = GoVersion::parse("1.24").unwrap();
        assert_eq!(version.patch, None);
        assert_eq!(version.short_version(), "1.24");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(GoVersion::parse("").is_err());
        assert!(GoVersion::parse("go version devel").is_err());
        assert!(GoVersion::parse("one.two").is_err());
    }

    #[test]
    fn test_version_matches() {
        let version = GoVersion::parse("go version go1.23.5 darwin/arm64").unwrap();
        assert!(version.matches("1.23"));
        assert!(version.matches("1.23.5"));
        assert!(!version.matches("1.23.4"));
        assert!(!version.matches("1.22"));
        assert!(!version.matches("nonsense"));
    }

    #[test]
    fn test_installed_version_missing_binary() {
        let err = installed_version(Path::new("/nonexistent/go")).unwrap_err();
        assert!(matches!(err, ToolchainError::GoNotFound(_)));
    }
}
