//! Android-side stages of the Gotlin native-library pipeline
//!
//! - **bind**: invoke gomobile to compile the Go source tree into
//!   platform-specific shared libraries
//! - **jni_libs**: copy generated libraries into the app's jniLibs tree
//! - **gradle**: wrappers for the normal application build that follows

pub mod bind;
pub mod gradle;
pub mod jni_libs;

pub use bind::{generate, BindOptions};
pub use jni_libs::{copy_libs, CopySummary};
