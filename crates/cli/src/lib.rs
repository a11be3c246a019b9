//! CLI utilities for the Gotlin pipeline tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Progress indicators for downloads and multi-stage runs
//! - Status messages

#![warn(missing_docs)]

pub mod output;
pub mod progress;
