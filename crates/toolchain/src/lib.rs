//! Go toolchain bootstrap for the Gotlin Android app
//!
//! This crate provides functionality to:
//! - Map the host OS/architecture to a Go distribution archive
//! - Download and extract the Go toolchain into a user-scoped directory
//! - Detect installed Go versions
//! - Install gomobile on top of the toolchain
//!
//! The binding generator stage consumes the gomobile path returned by
//! [`gomobile::install`]; nothing here is communicated through shared
//! global state.

pub mod detect;
pub mod error;
pub mod fetch;
pub mod gomobile;
pub mod platform;

pub use detect::GoVersion;
pub use error::{Result, ToolchainError};
pub use fetch::{GoInstaller, InstallOutcome};
pub use platform::HostPlatform;

/// Go version installed when the configuration does not pin one
pub const DEFAULT_GO_VERSION: &str = "1.23.5";

/// Default distribution endpoint for Go archives
pub const DEFAULT_BASE_URL: &str = "https://golang.org/dl";

/// Module path `go install`ed to obtain gomobile
pub const GOMOBILE_PACKAGE: &str = "golang.org/x/mobile/cmd/gomobile@latest";
