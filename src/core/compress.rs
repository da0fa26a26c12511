//! Minification of build artifacts
//!
//! The actual minifier is an external tool behind the [`Compressor`] trait, so
//! the release flow can run against a stand-in.

use crate::{
    config::CompressConfig,
    error::{ReleaseError, Result},
    utils::{fs::FileSystemUtils, process::ProcessRunner},
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Marker inserted before the extension of minified files
pub const MINIFIED_MARKER: &str = "min";

/// Derive the minified sibling of `source`: `jcanvas.js` becomes `jcanvas.min.js`.
///
/// A path without an extension gets `.min` appended.
pub fn minified_path(source: &Path) -> PathBuf {
    let Some(stem) = source.file_stem() else {
        return source.to_path_buf();
    };

    let mut name = OsString::from(stem);
    name.push(".");
    name.push(MINIFIED_MARKER);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    source.with_file_name(name)
}

/// Whether `path` already is a minified artifact (`*.min.*` or `*.min`)
pub fn is_minified(path: &Path) -> bool {
    let stem_marked = path
        .file_stem()
        .and_then(|s| Path::new(s).extension())
        .is_some_and(|ext| ext == MINIFIED_MARKER);
    stem_marked || path.extension().is_some_and(|ext| ext == MINIFIED_MARKER)
}

/// Something that turns a source file into a minified file
pub trait Compressor {
    /// Compress `source`, returning the path of the produced file
    fn compress(&self, source: &Path) -> Result<PathBuf>;
}

/// Google Closure Compiler invoked as an external process
#[derive(Debug)]
pub struct ClosureCompiler {
    config: CompressConfig,
    fs_utils: FileSystemUtils,
    process_runner: ProcessRunner,
}

impl ClosureCompiler {
    /// Create a new compressor from configuration
    #[must_use]
    pub fn new(config: CompressConfig, debug: bool) -> Self {
        Self {
            config,
            fs_utils: FileSystemUtils::new(),
            process_runner: ProcessRunner::new(debug),
        }
    }

    /// Full argument list for compressing `source` into `output`
    pub fn command_args(&self, source: &Path, output: &Path) -> Vec<String> {
        let mut args = self.config.program_args.clone();
        args.extend([
            "--js".to_string(),
            source.to_string_lossy().into_owned(),
            "--js_output_file".to_string(),
            output.to_string_lossy().into_owned(),
            "--compilation_level".to_string(),
            self.config.compilation_level.clone(),
        ]);
        args
    }
}

impl Compressor for ClosureCompiler {
    #[instrument(skip(self))]
    fn compress(&self, source: &Path) -> Result<PathBuf> {
        if !self.fs_utils.is_file(source) {
            return Err(ReleaseError::file_system(
                "compress",
                source,
                std::io::Error::new(std::io::ErrorKind::NotFound, "source file not found"),
            ));
        }

        let output = minified_path(source);
        let args = self.command_args(source, &output);
        let args_str: Vec<&str> = args.iter().map(String::as_str).collect();

        let result = self
            .process_runner
            .run_command_with_output(&self.config.program, &args_str)?;
        debug!("Compressor exited with {:?}", result.exit_code);
        if !result.stdout.is_empty() {
            debug!("Compressor stdout: {}", result.stdout.trim_end());
        }
        if !result.stderr.is_empty() {
            debug!("Compressor stderr: {}", result.stderr.trim_end());
        }

        info!("Compressed {} -> {}", source.display(), output.display());
        Ok(output)
    }
}
