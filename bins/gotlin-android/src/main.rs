//! Gotlin Android CLI
//!
//! Bootstraps the Go toolchain, installs gomobile, generates the app's
//! native shared libraries and copies them into the packaging tree. The
//! stages run individually or chained via `prebuild`, in the same order
//! the app's old Gradle tasks declared.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gotlin_android::bind::BindOptions;
use gotlin_android::{bind, gradle, jni_libs};
use gotlin_cli::output::Status;
use gotlin_core::config::Config;
use gotlin_core::error::exit_codes;
use gotlin_toolchain::{gomobile, GoInstaller, HostPlatform, InstallOutcome, ToolchainError};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gotlin-android")]
#[command(about = "Native-library pipeline for the Gotlin Android app")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and extract the Go toolchain
    #[command(name = "install-go")]
    InstallGo {
        /// Go version to install (overrides config)
        #[arg(long)]
        version: Option<String>,
        /// Install root (overrides config; defaults to the home directory)
        #[arg(long)]
        install_root: Option<String>,
    },

    /// Install gomobile using the installed toolchain
    #[command(name = "install-gomobile")]
    InstallGomobile,

    /// Generate shared libraries from the Go source tree
    Bind {
        /// gomobile binary path (defaults to the toolchain's go/bin)
        #[arg(long)]
        gomobile: Option<PathBuf>,
    },

    /// Copy generated shared libraries into the app's jniLibs tree
    #[command(name = "copy-libs")]
    CopyLibs,

    /// Run the full pipeline: install-go, install-gomobile, bind, copy-libs
    Prebuild,

    /// Build the app with Gradle (runs prebuild first unless skipped)
    Build {
        /// Build configuration
        #[arg(long, default_value = "debug")]
        configuration: String,
        /// Clean before building
        #[arg(long)]
        clean: bool,
        /// Skip the native-library pipeline
        #[arg(long)]
        skip_prebuild: bool,
    },

    /// Diagnose environment
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    if cli.verbose > 0 {
        tracing_subscriber::fmt()
            .with_env_filter("gotlin_core=debug,gotlin_toolchain=debug,gotlin_android=debug")
            .init();
    }

    let config = Config::load(cli.config.as_deref().and_then(|p| p.to_str()))?;

    let exit_code = match cli.command {
        Commands::InstallGo {
            version,
            install_root,
        } => run_install_go(&config, version.as_deref(), install_root.as_deref(), cli.quiet),
        Commands::InstallGomobile => run_install_gomobile(&config),
        Commands::Bind { gomobile } => run_bind(&config, gomobile),
        Commands::CopyLibs => run_copy_libs(&config),
        Commands::Prebuild => run_prebuild(&config, cli.quiet),
        Commands::Build {
            configuration,
            clean,
            skip_prebuild,
        } => run_build(&config, &configuration, clean, skip_prebuild, cli.quiet),
        Commands::Doctor { json } => run_doctor(&config, json),
    };

    std::process::exit(exit_code);
}

/// Build an installer from config plus CLI overrides
fn installer_from(
    config: &Config,
    version: Option<&str>,
    install_root: Option<&str>,
) -> Result<GoInstaller, ToolchainError> {
    let toolchain = &config.schema.toolchain;
    GoInstaller::new(
        version.unwrap_or(&toolchain.go_version),
        install_root.or(toolchain.install_root.as_deref()),
        toolchain.base_url.clone(),
        HostPlatform::current(),
    )
}

fn toolchain_exit_code(err: &ToolchainError) -> i32 {
    match err {
        ToolchainError::UnsupportedPlatform { .. } => exit_codes::PLATFORM_ERROR,
        _ => exit_codes::FAILURE,
    }
}

fn run_install_go(
    config: &Config,
    version: Option<&str>,
    install_root: Option<&str>,
    quiet: bool,
) -> i32 {
    let installer = match installer_from(config, version, install_root) {
        Ok(installer) => installer,
        Err(e) => {
            Status::error(&format!("Toolchain setup error: {}", e));
            return toolchain_exit_code(&e);
        }
    };

    if !quiet {
        Status::info(&format!(
            "Installing Go {} to {}...",
            installer.version(),
            installer.install_root().display()
        ));
    }

    match installer.install() {
        Ok(InstallOutcome::AlreadyInstalled) => {
            Status::success(&format!(
                "Go is already installed at: {}",
                installer.go_bin_dir().display()
            ));
            exit_codes::SUCCESS
        }
        Ok(InstallOutcome::Installed) => {
            Status::success(&format!(
                "Go {} installed at: {}",
                installer.version(),
                installer.install_root().display()
            ));
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("Go install failed: {}", e));
            toolchain_exit_code(&e)
        }
    }
}

fn run_install_gomobile(config: &Config) -> i32 {
    let installer = match installer_from(config, None, None) {
        Ok(installer) => installer,
        Err(e) => {
            Status::error(&format!("Toolchain setup error: {}", e));
            return toolchain_exit_code(&e);
        }
    };

    Status::info("Installing gomobile...");

    match gomobile::install(&installer) {
        Ok(path) => {
            Status::success(&format!("gomobile installed at: {}", path.display()));
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("gomobile install failed: {}", e));
            toolchain_exit_code(&e)
        }
    }
}

fn bind_options(config: &Config, gomobile_path: PathBuf) -> BindOptions {
    let schema = &config.schema;
    BindOptions {
        gomobile: gomobile_path,
        go_dir: PathBuf::from(&schema.bind.go_dir),
        output_dir: PathBuf::from(&schema.bind.output_dir),
        target: schema.bind.target.clone(),
    }
}

fn run_bind(config: &Config, gomobile_override: Option<PathBuf>) -> i32 {
    let gomobile_path = match gomobile_override {
        Some(path) => path,
        None => match installer_from(config, None, None) {
            Ok(installer) => installer.gomobile_binary(),
            Err(e) => {
                Status::error(&format!("Toolchain setup error: {}", e));
                return toolchain_exit_code(&e);
            }
        },
    };

    let options = bind_options(config, gomobile_path);

    Status::info(&format!(
        "Generating shared libraries from {}...",
        options.go_dir.display()
    ));

    match bind::generate(&options) {
        Ok(_) => {
            Status::success(&format!(
                "Shared libraries generated in {}",
                options.output_dir.display()
            ));
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("Binding generation failed: {}", e));
            exit_codes::FAILURE
        }
    }
}

fn run_copy_libs(config: &Config) -> i32 {
    let schema = &config.schema;
    let output_dir = PathBuf::from(&schema.bind.output_dir);
    let jni_libs_dir = PathBuf::from(&schema.libs.jni_libs_dir);

    Status::info("Copying shared libraries into the app...");

    match jni_libs::copy_libs(&output_dir, &jni_libs_dir, &schema.libs.arches) {
        Ok(summary) => {
            for arch in &summary.skipped {
                Status::warning(&format!(
                    "No generated libraries for {}: {} is absent",
                    arch,
                    output_dir.join(arch).display()
                ));
            }
            Status::success(&format!(
                "Copied {} file(s) to {}",
                summary.copied.len(),
                jni_libs_dir.display()
            ));
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("Copy failed: {}", e));
            exit_codes::FAILURE
        }
    }
}

/// The four pipeline stages in dependency order; a failure at any stage
/// halts the chain. The gomobile path flows from the install stage into
/// the bind stage as a value.
fn run_prebuild(config: &Config, quiet: bool) -> i32 {
    let installer = match installer_from(config, None, None) {
        Ok(installer) => installer,
        Err(e) => {
            Status::error(&format!("Toolchain setup error: {}", e));
            return toolchain_exit_code(&e);
        }
    };

    if !quiet {
        Status::header("Gotlin native-library pipeline");
    }

    Status::stage(1, 4, &format!("Go toolchain ({})", installer.version()));
    match installer.install() {
        Ok(InstallOutcome::AlreadyInstalled) => {
            Status::success("Go already installed")
        }
        Ok(InstallOutcome::Installed) => Status::success("Go installed"),
        Err(e) => {
            Status::error(&format!("Go install failed: {}", e));
            return toolchain_exit_code(&e);
        }
    }

    Status::stage(2, 4, "gomobile");
    let gomobile_path = match gomobile::install(&installer) {
        Ok(path) => {
            Status::success(&format!("gomobile at {}", path.display()));
            path
        }
        Err(e) => {
            Status::error(&format!("gomobile install failed: {}", e));
            return exit_codes::FAILURE;
        }
    };

    Status::stage(3, 4, "gomobile bind");
    let options = bind_options(config, gomobile_path);
    if let Err(e) = bind::generate(&options) {
        Status::error(&format!("Binding generation failed: {}", e));
        return exit_codes::FAILURE;
    }
    Status::success("Shared libraries generated");

    Status::stage(4, 4, "copy into jniLibs");
    run_copy_libs(config)
}

fn run_build(
    config: &Config,
    configuration: &str,
    clean: bool,
    skip_prebuild: bool,
    quiet: bool,
) -> i32 {
    if !skip_prebuild {
        let code = run_prebuild(config, quiet);
        if code != exit_codes::SUCCESS {
            return code;
        }
    }

    let project_dir = Path::new(&config.schema.general.project_dir);

    if clean {
        Status::info("Cleaning...");
        if let Err(e) = gradle::clean(project_dir) {
            Status::error(&format!("Clean failed: {}", e));
            return exit_codes::FAILURE;
        }
    }

    Status::info(&format!("Building {} APK...", configuration));

    let result = if configuration == "release" {
        gradle::build_release(project_dir)
    } else {
        gradle::build_debug(project_dir)
    };

    match result {
        Ok(0) => {
            Status::success("Build succeeded");
            exit_codes::SUCCESS
        }
        Ok(code) => {
            Status::error(&format!("Gradle exited with code {}", code));
            exit_codes::FAILURE
        }
        Err(e) => {
            Status::error(&format!("Build error: {}", e));
            exit_codes::FAILURE
        }
    }
}

fn run_doctor(config: &Config, json: bool) -> i32 {
    let platform = HostPlatform::current();
    let installer = installer_from(config, None, None).ok();

    let go_installed = installer.as_ref().is_some_and(|i| i.is_installed());
    let go_version = installer
        .as_ref()
        .filter(|i| i.is_installed())
        .and_then(|i| gotlin_toolchain::detect::installed_version(&i.go_binary()).ok());
    let gomobile_present = installer
        .as_ref()
        .is_some_and(|i| i.gomobile_binary().exists());
    let project_dir = Path::new(&config.schema.general.project_dir);
    let gradle_wrapper = gradle::has_wrapper(project_dir);

    if json {
        let report = serde_json::json!({
            "platform": { "os": platform.os.clone(), "arch": platform.arch.clone(), "supported": platform.is_supported() },
            "go": {
                "installed": go_installed,
                "version": go_version.as_ref().map(|v| v.short_version()),
                "required": config.schema.toolchain.go_version,
            },
            "gomobile": { "installed": gomobile_present },
            "gradle_wrapper": gradle_wrapper,
        });
        println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
        return exit_codes::SUCCESS;
    }

    println!("Environment Check");
    println!();

    if platform.is_supported() {
        Status::success(&format!("host: {}/{}", platform.os, platform.arch));
    } else {
        Status::error(&format!(
            "host: {}/{} (no Go archive published)",
            platform.os, platform.arch
        ));
    }

    match (&go_version, go_installed) {
        (Some(version), _) => {
            let required = &config.schema.toolchain.go_version;
            if version.matches(required) {
                Status::success(&format!("go: {}", version.raw));
            } else {
                Status::warning(&format!(
                    "go: {} (config pins {})",
                    version.raw, required
                ));
            }
        }
        (None, true) => Status::warning("go: install marker present but `go version` failed"),
        (None, false) => Status::warning("go: not installed (run install-go)"),
    }

    if gomobile_present {
        Status::success("gomobile: installed");
    } else {
        Status::warning("gomobile: not found (run install-gomobile)");
    }

    if gradle_wrapper {
        Status::success("gradle wrapper: present");
    } else {
        Status::warning(&format!(
            "gradle wrapper: not found in {}",
            project_dir.display()
        ));
    }

    exit_codes::SUCCESS
}
