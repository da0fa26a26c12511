//! Core release functionality
//!
//! Contains the release stamp, the in-place file rewriter, the compressor
//! abstraction, and the orchestration tying them together.

pub mod compress;
pub mod release;
pub mod rewrite;
pub mod stamp;

pub use compress::{minified_path, ClosureCompiler, Compressor};
pub use release::{ReleaseReport, ReleaseUpdater};
pub use rewrite::{FileRewriter, ReplaceRule, RewriteOutcome, WriteAction};
pub use stamp::ReleaseStamp;
