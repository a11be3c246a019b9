//! Configuration loading and schema definitions
//!
//! Shared configuration types for the Gotlin pipeline tools.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
