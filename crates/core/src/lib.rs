//! Core utilities for the Gotlin native-library tooling
//!
//! This crate provides shared functionality used across the pipeline crates:
//!
//! - **Error handling**: coded errors with context and recovery suggestions
//! - **Process execution**: safe command execution with output capture
//! - **Configuration**: TOML-based configuration with defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use gotlin_core::config::Config;
//! use gotlin_core::process::run_command;
//!
//! let config = Config::load(None).expect("config");
//! let result = run_command("go", &["version"]).expect("go not runnable");
//! println!("{} -> {}", config.schema.toolchain.go_version, result.stdout);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod process;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::process::{command_exists, run_command, CommandResult};
}
