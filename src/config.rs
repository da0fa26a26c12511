//! Configuration management for the release tool
//!
//! Centralizes configuration options and provides validation.

use crate::{
    cli::{Args, Command, CompressArgs, RewriteArgs},
    error::ReleaseError,
};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default pattern for the date-encoded version (`v24.03.07`, `24.03.07`).
///
/// The boundary sits before the optional `v`, since `v` and the digits are both word characters.
pub const DEFAULT_VERSION_PATTERN: &str = r"(\bv?)\d{2}\.\d{2}\.\d{2}\b";

/// Default pattern for copyright years
pub const DEFAULT_YEAR_PATTERN: &str = r"\b\d{4}\b";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Project root every file path is relative to
    pub root: PathBuf,
    /// Release date override; today's local date when unset
    pub date: Option<NaiveDate>,
    /// Files touched by the release
    pub files: ProjectFiles,
    /// Rewrite step configuration
    pub rewrite: RewriteConfig,
    /// Compression step configuration
    pub compress: CompressConfig,
}

/// Fixed project layout, relative to the root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFiles {
    /// Main library source
    pub source: PathBuf,
    /// JSON package manifest
    pub manifest: PathBuf,
    /// README
    pub readme: PathBuf,
    /// Plaintext license
    pub license: PathBuf,
}

/// Rewrite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Regex locating the version string
    pub version_pattern: String,
    /// Regex locating copyright years
    pub year_pattern: String,
    /// Leave files untouched when their content would not change
    pub skip_unchanged: bool,
    /// Compute changes without writing anything
    pub dry_run: bool,
}

/// Compressor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressConfig {
    /// Run the compression step at all
    pub enabled: bool,
    /// Compressor executable
    pub program: String,
    /// Arguments placed before the `--js` flags
    pub program_args: Vec<String>,
    /// Value for `--compilation_level`
    pub compilation_level: String,
    /// Extra glob patterns (relative to the root) whose matches are minified too
    pub extra_sources: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            root: PathBuf::from("."),
            date: None,
            files: ProjectFiles::default(),
            rewrite: RewriteConfig::default(),
            compress: CompressConfig::default(),
        }
    }
}

impl Default for ProjectFiles {
    fn default() -> Self {
        Self {
            source: PathBuf::from("jcanvas.js"),
            manifest: PathBuf::from("package.json"),
            readme: PathBuf::from("README.md"),
            license: PathBuf::from("LICENSE.txt"),
        }
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            version_pattern: DEFAULT_VERSION_PATTERN.to_string(),
            year_pattern: DEFAULT_YEAR_PATTERN.to_string(),
            skip_unchanged: true,
            dry_run: false,
        }
    }
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "java".to_string(),
            program_args: vec!["-jar".to_string(), "closurecompiler.jar".to_string()],
            compilation_level: "SIMPLE_OPTIMIZATIONS".to_string(),
            extra_sources: Vec::new(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ReleaseError> {
        let mut config = Self {
            debug: args.debug,
            root: args.root.clone(),
            date: args.date,
            files: ProjectFiles {
                source: args.source.clone(),
                manifest: args.manifest.clone(),
                readme: args.readme.clone(),
                license: args.license.clone(),
            },
            ..Self::default()
        };

        // Override with command-specific options
        match &args.command {
            Some(Command::Build {
                rewrite,
                compress,
                skip_compress,
            }) => {
                config.apply_rewrite_args(rewrite);
                config.apply_compress_args(compress);
                if *skip_compress || rewrite.dry_run {
                    config.compress.enabled = false;
                }
            }
            Some(Command::Bump { rewrite }) => {
                config.apply_rewrite_args(rewrite);
                config.compress.enabled = false;
            }
            Some(Command::Compress { compress }) => config.apply_compress_args(compress),
            Some(Command::Stamp { .. }) | None => {}
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_rewrite_args(&mut self, args: &RewriteArgs) {
        if let Some(pattern) = &args.version_pattern {
            self.rewrite.version_pattern = pattern.clone();
        }
        if let Some(pattern) = &args.year_pattern {
            self.rewrite.year_pattern = pattern.clone();
        }
        self.rewrite.skip_unchanged = !args.force_write;
        self.rewrite.dry_run = args.dry_run;
    }

    fn apply_compress_args(&mut self, args: &CompressArgs) {
        if let Some(program) = &args.compressor {
            self.compress.program = program.clone();
            // A custom program does not inherit the java launcher arguments
            self.compress.program_args.clear();
        }
        if !args.compressor_args.is_empty() {
            self.compress.program_args = args.compressor_args.clone();
        }
        if let Some(level) = &args.compilation_level {
            self.compress.compilation_level = level.clone();
        }
        self.compress.extra_sources = args.extra_sources.clone();
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ReleaseError> {
        if !self.root.is_dir() {
            return Err(ReleaseError::validation(format!(
                "Project root not found: {}",
                self.root.display()
            )));
        }

        Regex::new(&self.rewrite.version_pattern)
            .map_err(|e| ReleaseError::pattern("version", &self.rewrite.version_pattern, e))?;
        Regex::new(&self.rewrite.year_pattern)
            .map_err(|e| ReleaseError::pattern("year", &self.rewrite.year_pattern, e))?;

        if self.compress.program.trim().is_empty() {
            return Err(ReleaseError::config("Compressor program must not be empty"));
        }
        if self.compress.compilation_level.trim().is_empty() {
            return Err(ReleaseError::config("Compilation level must not be empty"));
        }

        Ok(())
    }

    /// Resolve a project-relative path against the root
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.root.join(path)
    }

    /// Path of the main source file
    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.files.source)
    }

    /// Files receiving the version rule, in rewrite order
    pub fn version_targets(&self) -> Vec<PathBuf> {
        vec![self.resolve(&self.files.source), self.resolve(&self.files.manifest)]
    }

    /// Files receiving the year rule, in rewrite order
    pub fn year_targets(&self) -> Vec<PathBuf> {
        vec![
            self.resolve(&self.files.source),
            self.resolve(&self.files.readme),
            self.resolve(&self.files.manifest),
            self.resolve(&self.files.license),
        ]
    }
}
