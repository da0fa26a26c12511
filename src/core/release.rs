//! Release orchestration
//!
//! A single linear pass: stamp the version, stamp the year, then compress.

use crate::{
    config::Config,
    core::{
        compress::{is_minified, Compressor},
        rewrite::{FileRewriter, ReplaceRule, RewriteOutcome, WriteAction},
        stamp::ReleaseStamp,
    },
    error::{ReleaseError, Result},
    utils::fs::{normalize_path, FileSystemUtils},
};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Drives one release run
pub struct ReleaseUpdater<'a> {
    config: Config,
    compressor: &'a dyn Compressor,
    fs_utils: FileSystemUtils,
}

/// Everything a release run did
#[derive(Debug, Default)]
pub struct ReleaseReport {
    /// Stamp applied during the run
    pub stamp: Option<ReleaseStamp>,
    /// One entry per rule applied to a file
    pub rewrites: Vec<RewriteOutcome>,
    /// Minified files produced
    pub minified: Vec<PathBuf>,
}

impl ReleaseReport {
    /// Number of file writes performed
    pub fn written(&self) -> usize {
        self.count(WriteAction::Written)
    }

    /// Number of writes skipped because content was unchanged
    pub fn unchanged(&self) -> usize {
        self.count(WriteAction::Unchanged)
    }

    fn count(&self, action: WriteAction) -> usize {
        self.rewrites.iter().filter(|r| r.action == action).count()
    }
}

impl std::fmt::Display for ReleaseReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let replacements: usize = self.rewrites.iter().map(|r| r.replacements).sum();
        if let Some(stamp) = &self.stamp {
            write!(f, "{}: ", stamp)?;
        }
        write!(
            f,
            "{} replacement(s) across {} rewrite(s) ({} written, {} unchanged), {} file(s) minified",
            replacements,
            self.rewrites.len(),
            self.written(),
            self.unchanged(),
            self.minified.len()
        )
    }
}

impl<'a> ReleaseUpdater<'a> {
    /// Create a new updater with the given configuration and compressor
    pub fn new(config: Config, compressor: &'a dyn Compressor) -> Self {
        Self {
            config,
            compressor,
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Run the full release: rewrite, then compress when enabled
    #[instrument(skip(self))]
    pub fn run(&self, stamp: &ReleaseStamp) -> Result<ReleaseReport> {
        println!("Building...");

        let mut report = self.rewrite(stamp)?;
        if self.config.compress.enabled {
            report.minified = self.compress()?;
        } else {
            debug!("Compression disabled");
        }

        info!("{}", report);
        println!("Done.");
        Ok(report)
    }

    /// Stamp the version into the source and manifest, and the year into every release file
    #[instrument(skip(self))]
    pub fn rewrite(&self, stamp: &ReleaseStamp) -> Result<ReleaseReport> {
        info!("Stamping release {}", stamp);

        let rewriter = FileRewriter::new(self.config.rewrite.skip_unchanged, self.config.rewrite.dry_run);
        let version = ReplaceRule::version(&self.config.rewrite.version_pattern, stamp)?;
        let year = ReplaceRule::year(&self.config.rewrite.year_pattern, stamp)?;
        let source = self.config.source_path();

        let mut rewrites = Vec::new();
        for path in self.config.version_targets() {
            // The source file must carry a version; other files are best-effort
            let outcome = if path == source {
                rewriter.replace_in_file(&path, &version.clone().required())?
            } else {
                rewriter.replace_in_file(&path, &version)?
            };
            rewrites.push(outcome);
        }
        for path in self.config.year_targets() {
            rewrites.push(rewriter.replace_in_file(&path, &year)?);
        }

        Ok(ReleaseReport {
            stamp: Some(stamp.clone()),
            rewrites,
            minified: Vec::new(),
        })
    }

    /// Compress the source file and any extra sources
    #[instrument(skip(self))]
    pub fn compress(&self) -> Result<Vec<PathBuf>> {
        let sources = self.compress_targets()?;
        info!("Compressing {} file(s)", sources.len());

        let mut minified = Vec::with_capacity(sources.len());
        for source in &sources {
            minified.push(self.compressor.compress(source)?);
        }
        Ok(minified)
    }

    /// Source file first, then extra-source glob matches, minus duplicates and minified files
    pub fn compress_targets(&self) -> Result<Vec<PathBuf>> {
        let mut targets = vec![self.config.source_path()];
        let mut seen = vec![normalize_path(&targets[0])];

        for pattern in &self.config.compress.extra_sources {
            let matches = self
                .fs_utils
                .glob_files(&self.config.root, pattern)
                .map_err(|e| {
                    ReleaseError::validation(format!("Invalid extra source pattern {pattern}: {e}"))
                })?;

            for path in matches {
                let normalized = normalize_path(&path);
                if is_minified(&path) || seen.contains(&normalized) {
                    debug!("Skipping compress target: {}", path.display());
                    continue;
                }
                seen.push(normalized);
                targets.push(path);
            }
        }

        Ok(targets)
    }
}
