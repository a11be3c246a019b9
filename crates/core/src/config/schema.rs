//! Configuration schema definitions
//!
//! Types for `.gotlin-tools.toml`. Every field has a default so the file is
//! optional; an empty config describes the stock Gotlin app layout.

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default)]
    pub bind: BindConfig,

    #[serde(default)]
    pub libs: LibsConfig,
}

/// General project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Android project root (the directory holding the Gradle wrapper)
    #[serde(default = "default_project_dir")]
    pub project_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            project_dir: default_project_dir(),
        }
    }
}

fn default_project_dir() -> String {
    ".".to_string()
}

/// Go toolchain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Go version to fetch and install
    #[serde(default = "default_go_version")]
    pub go_version: String,

    /// Install root for the `go/` tree; defaults to the user's home directory
    #[serde(default)]
    pub install_root: Option<String>,

    /// Base URL for toolchain archives (mirror support)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            go_version: default_go_version(),
            install_root: None,
            base_url: default_base_url(),
        }
    }
}

fn default_go_version() -> String {
    "1.23.5".to_string()
}

fn default_base_url() -> String {
    "https://golang.org/dl".to_string()
}

/// Binding generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindConfig {
    /// Go source tree compiled by gomobile
    #[serde(default = "default_go_dir")]
    pub go_dir: String,

    /// Build-intermediate directory receiving the generated libraries
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// gomobile bind target
    #[serde(default = "default_bind_target")]
    pub target: String,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            go_dir: default_go_dir(),
            output_dir: default_output_dir(),
            target: default_bind_target(),
        }
    }
}

fn default_go_dir() -> String {
    "app/src/main/go".to_string()
}

fn default_output_dir() -> String {
    "app/build/intermediates/go-libs".to_string()
}

fn default_bind_target() -> String {
    "android".to_string()
}

/// Shared-library packaging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibsConfig {
    /// CPU architectures copied into the app
    #[serde(default = "default_arches")]
    pub arches: Vec<String>,

    /// Destination jniLibs directory inside the app source tree
    #[serde(default = "default_jni_libs_dir")]
    pub jni_libs_dir: String,
}

impl Default for LibsConfig {
    fn default() -> Self {
        Self {
            arches: default_arches(),
            jni_libs_dir: default_jni_libs_dir(),
        }
    }
}

fn default_arches() -> Vec<String> {
    vec!["armeabi-v7a".to_string(), "arm64-v8a".to_string()]
}

fn default_jni_libs_dir() -> String {
    "app/src/main/jniLibs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_app_layout() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.toolchain.go_version, "1.23.5");
        assert_eq!(schema.toolchain.base_url, "https://golang.org/dl");
        assert_eq!(schema.bind.go_dir, "app/src/main/go");
        assert_eq!(schema.bind.output_dir, "app/build/intermediates/go-libs");
        assert_eq!(schema.bind.target, "android");
        assert_eq!(schema.libs.arches, vec!["armeabi-v7a", "arm64-v8a"]);
        assert_eq!(schema.libs.jni_libs_dir, "app/src/main/jniLibs");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [toolchain]
            go_version = "1.24.0"
            "#,
        )
        .unwrap();

        assert_eq!(schema.toolchain.go_version, "1.24.0");
        assert!(schema.toolchain.install_root.is_none());
        assert_eq!(schema.bind.target, "android");
    }

    #[test]
    fn test_roundtrip() {
        let schema = ConfigSchema::default();
        let text = toml::to_string(&schema).unwrap();
        let parsed: ConfigSchema = toml::from_str(&text).unwrap();
        assert_eq!(parsed.libs.arches, schema.libs.arches);
    }
}
