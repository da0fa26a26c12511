//! In-place text substitution for release files
//!
//! Each file is read whole as UTF-8, substituted in memory, and written back
//! over the original. Writes are not atomic: there is no temp file and no backup.

use crate::{
    core::stamp::ReleaseStamp,
    error::{ReleaseError, Result},
    utils::fs::FileSystemUtils,
};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A pattern to find and the text that replaces it
#[derive(Debug, Clone)]
pub struct ReplaceRule {
    /// Rule name used in logs and errors
    pub name: String,
    /// Compiled pattern
    pub pattern: Regex,
    /// Replacement text; `${1}`-style group references are expanded
    pub replacement: String,
    /// Maximum number of matches to replace; 0 replaces all of them
    pub limit: usize,
    /// Fail when the pattern matches nothing
    pub required: bool,
}

impl ReplaceRule {
    /// Compile a new rule
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
        limit: usize,
    ) -> Result<Self> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|e| ReleaseError::pattern(&name, pattern, e))?;
        Ok(Self {
            name,
            pattern,
            replacement: replacement.into(),
            limit,
            required: false,
        })
    }

    /// Version rule: first match only, keeping whatever the first group captured (the `v` prefix)
    pub fn version(pattern: &str, stamp: &ReleaseStamp) -> Result<Self> {
        Self::new("version", pattern, format!("${{1}}{}", stamp.version), 1)
    }

    /// Year rule: every match
    pub fn year(pattern: &str, stamp: &ReleaseStamp) -> Result<Self> {
        Self::new("year", pattern, stamp.year.clone(), 0)
    }

    /// Mark the rule as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Apply the rule to `content`, returning the new text and the number of replacements
    pub fn apply(&self, content: &str) -> (String, usize) {
        let matches = self.pattern.find_iter(content).count();
        let replacements = if self.limit == 0 {
            matches
        } else {
            matches.min(self.limit)
        };

        if replacements == 0 {
            return (content.to_string(), 0);
        }

        let updated = self
            .pattern
            .replacen(content, self.limit, self.replacement.as_str())
            .into_owned();
        (updated, replacements)
    }
}

/// What happened to a file after a rule was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// New content was written
    Written,
    /// Content was identical, so the file was left untouched
    Unchanged,
    /// Dry run: nothing was written
    DryRun,
}

/// Result of applying one rule to one file
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// Rewritten file
    pub path: PathBuf,
    /// Name of the applied rule
    pub rule: String,
    /// Number of matches replaced
    pub replacements: usize,
    /// Whether the file was written
    pub action: WriteAction,
}

/// Applies replacement rules to files in place
#[derive(Debug)]
pub struct FileRewriter {
    fs_utils: FileSystemUtils,
    skip_unchanged: bool,
    dry_run: bool,
}

impl FileRewriter {
    /// Create a new rewriter
    pub fn new(skip_unchanged: bool, dry_run: bool) -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
            skip_unchanged,
            dry_run,
        }
    }

    /// Replace matches of `rule` in the file at `path`
    #[instrument(skip(self, rule), fields(rule = %rule.name))]
    pub fn replace_in_file<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
        rule: &ReplaceRule,
    ) -> Result<RewriteOutcome> {
        let path = path.as_ref();

        let content = self
            .fs_utils
            .read_file_to_string(path)
            .map_err(|e| ReleaseError::file_system("read", path, e))?;

        let (updated, replacements) = rule.apply(&content);
        debug!("{} replacement(s) of {} pattern", replacements, rule.name);

        if replacements == 0 && rule.required {
            return Err(ReleaseError::pattern_not_found(&rule.name, path));
        }

        let action = if self.dry_run {
            WriteAction::DryRun
        } else if self.skip_unchanged && updated == content {
            debug!("Content unchanged, skipping write: {}", path.display());
            WriteAction::Unchanged
        } else {
            self.fs_utils
                .write_file(path, updated.as_bytes())
                .map_err(|e| ReleaseError::file_system("write", path, e))?;
            WriteAction::Written
        };

        info!(
            "  {}: {} {} replacement(s), {:?}",
            path.display(),
            rule.name,
            replacements,
            action
        );

        Ok(RewriteOutcome {
            path: path.to_path_buf(),
            rule: rule.name.clone(),
            replacements,
            action,
        })
    }
}

impl Default for FileRewriter {
    fn default() -> Self {
        Self::new(true, false)
    }
}
