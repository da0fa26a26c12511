//! Command-line argument parsing and validation

use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// jCanvas release helper - stamps the release version and copyright year, then minifies
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "release")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Project root containing the release files
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Release date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Library source file
    #[arg(long, global = true, default_value = "jcanvas.js")]
    pub source: PathBuf,

    /// JSON package manifest
    #[arg(long, global = true, default_value = "package.json")]
    pub manifest: PathBuf,

    /// README file
    #[arg(long, global = true, default_value = "README.md")]
    pub readme: PathBuf,

    /// License file
    #[arg(long, global = true, default_value = "LICENSE.txt")]
    pub license: PathBuf,

    /// Subcommand to execute; a full build when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Stamp version and year into the release files, then compress the source
    Build {
        #[command(flatten)]
        rewrite: RewriteArgs,

        #[command(flatten)]
        compress: CompressArgs,

        /// Skip the compression step
        #[arg(long)]
        skip_compress: bool,
    },

    /// Only stamp version and year into the release files
    Bump {
        #[command(flatten)]
        rewrite: RewriteArgs,
    },

    /// Only compress the source file
    Compress {
        #[command(flatten)]
        compress: CompressArgs,
    },

    /// Print the computed version and year
    Stamp {
        /// Write the stamp to this file instead of stdout
        #[arg(short = 'o', long = "output-file")]
        output_file: Option<PathBuf>,
    },
}

/// Options for the rewrite step
#[derive(ClapArgs, Debug, Default)]
pub struct RewriteArgs {
    /// Show what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Write files even when their content is unchanged
    #[arg(long)]
    pub force_write: bool,

    /// Regex locating the version string
    #[arg(long)]
    pub version_pattern: Option<String>,

    /// Regex locating copyright years
    #[arg(long)]
    pub year_pattern: Option<String>,
}

/// Options for the compression step
#[derive(ClapArgs, Debug, Default)]
pub struct CompressArgs {
    /// Compressor executable (defaults to `java -jar closurecompiler.jar`)
    #[arg(long)]
    pub compressor: Option<String>,

    /// Argument passed to the compressor before the source flags (repeatable).
    /// Replaces the default `-jar closurecompiler.jar`, so pass those again when still needed
    #[arg(long = "compressor-arg", allow_hyphen_values = true)]
    pub compressor_args: Vec<String>,

    /// Closure Compiler compilation level
    #[arg(long)]
    pub compilation_level: Option<String>,

    /// Glob of additional files to minify, relative to the root (repeatable)
    #[arg(long = "extra-sources")]
    pub extra_sources: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_arguments() {
        let args = Args::try_parse_from(["release"]).unwrap();
        assert!(!args.debug);
        assert!(args.command.is_none());
        assert_eq!(args.source, PathBuf::from("jcanvas.js"));
        assert_eq!(args.license, PathBuf::from("LICENSE.txt"));
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["release", "bump", "--debug"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_parse_date_override() {
        let args = Args::try_parse_from(["release", "--date", "2024-03-07", "stamp"]).unwrap();
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 3, 7));
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(Args::try_parse_from(["release", "--date", "07/03/2024"]).is_err());
    }

    #[test]
    fn test_parse_build_with_options() {
        let args = Args::try_parse_from([
            "release",
            "build",
            "--skip-compress",
            "--force-write",
            "--extra-sources",
            "plugins/*.js",
        ])
        .unwrap();
        match args.command {
            Some(Command::Build {
                rewrite,
                compress,
                skip_compress,
            }) => {
                assert!(skip_compress);
                assert!(rewrite.force_write);
                assert!(!rewrite.dry_run);
                assert_eq!(compress.extra_sources, vec!["plugins/*.js"]);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_parse_compressor_args() {
        let args = Args::try_parse_from([
            "release",
            "compress",
            "--compressor",
            "java",
            "--compressor-arg",
            "-jar",
            "--compressor-arg",
            "compiler.jar",
        ])
        .unwrap();
        match args.command {
            Some(Command::Compress { compress }) => {
                assert_eq!(compress.compressor.as_deref(), Some("java"));
                assert_eq!(compress.compressor_args, vec!["-jar", "compiler.jar"]);
            }
            _ => panic!("Expected Compress command"),
        }
    }
}
