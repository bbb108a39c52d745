pub mod config;
pub mod constants;
pub mod extension;
pub mod log;
pub mod resolve;
pub mod source;

pub use {
    config::{BuildConfig, EnvSource, ProcessEnv, TargetPlatform},
    extension::{ExtensionRegistry, ExtensionSet, ANDROID_EXTERNAL_MEMORY},
    resolve::{resolve, Resolution},
    source::{select_source, BuildContext, HeaderSource, HeaderTree},
};

use {
    anyhow::{Context, Result},
    constants::WATCHED_ENV,
    std::io::{self, Write},
};

/// Entry point for a build script: reads the cargo environment, resolves
/// once and prints the directives to stdout.
pub fn run(registry: &ExtensionRegistry) -> Result<Resolution> {
    log::setup_logging();

    let mut stdout = io::stdout().lock();
    for key in WATCHED_ENV {
        writeln!(stdout, "cargo:rerun-if-env-changed={key}")?;
    }

    let config = BuildConfig::from_env(&ProcessEnv).context("Reading Vulkan header configuration")?;
    let resolution = resolve(&config, registry)?;
    resolution.emit(&mut stdout).context("Writing cargo directives")?;
    Ok(resolution)
}
