use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolchainError>;

#[derive(Error, Debug)]
pub enum ToolchainError {
    #[error("Unsupported OS or architecture: {os}, {arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Go toolchain not found at path: {0}")]
    GoNotFound(String),

    #[error("Could not determine an install root (no home directory)")]
    NoInstallRoot,

    #[error("Download failed for {url}: {message}")]
    Download { url: String, message: String },

    #[error("Archive extraction failed: {0}")]
    Extract(String),

    #[error("Failed to parse Go version: {0}")]
    ParseError(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("gomobile install failed: {0}")]
    GomobileInstall(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
