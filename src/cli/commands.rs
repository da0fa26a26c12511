//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{ClosureCompiler, ReleaseStamp, ReleaseUpdater},
    utils::FileSystemUtils,
};
use anyhow::Context;
use std::path::Path;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments; no command runs a full build
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: Option<&Command>) -> anyhow::Result<()> {
    match command {
        None | Some(Command::Build { .. }) | Some(Command::Bump { .. }) => {
            execute_build_command(config)
        }
        Some(Command::Compress { .. }) => execute_compress_command(config),
        Some(Command::Stamp { output_file }) => execute_stamp_command(config, output_file.as_deref()),
    }
}

/// Execute the build command (the bump command is a build with compression disabled)
#[instrument(skip(config))]
fn execute_build_command(config: &Config) -> anyhow::Result<()> {
    let stamp = ReleaseStamp::for_date(config.date);
    let compressor = ClosureCompiler::new(config.compress.clone(), config.debug);

    let updater = ReleaseUpdater::new(config.clone(), &compressor);
    let report = updater
        .run(&stamp)
        .with_context(|| format!("Failed to release {stamp}"))?;

    info!("Release completed: {}", report);
    Ok(())
}

/// Execute the compress command
#[instrument(skip(config))]
fn execute_compress_command(config: &Config) -> anyhow::Result<()> {
    let compressor = ClosureCompiler::new(config.compress.clone(), config.debug);

    let updater = ReleaseUpdater::new(config.clone(), &compressor);
    let minified = updater.compress().context("Failed to compress sources")?;

    info!("Compression completed. {} file(s) minified", minified.len());
    Ok(())
}

/// Execute the stamp command
#[instrument(skip(config))]
fn execute_stamp_command(config: &Config, output_file: Option<&Path>) -> anyhow::Result<()> {
    let stamp = ReleaseStamp::for_date(config.date);

    match output_file {
        Some(path) => {
            FileSystemUtils::new()
                .create_file(path, stamp.to_env())
                .with_context(|| format!("Failed to write stamp to {}", path.display()))?;
            info!("Stamp {} written to {}", stamp, path.display());
        }
        None => print!("{}", stamp.to_env()),
    }

    Ok(())
}
