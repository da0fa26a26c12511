//! # jCanvas Release
//!
//! Release helper for the jCanvas library. A release stamps a date-derived
//! version (`YY.MM.DD`) into the library source and package manifest, updates
//! the copyright year across the source, manifest, README and license, then
//! minifies the source with Google Closure Compiler.
//!
//! ## Example
//!
//! ```no_run
//! use jcanvas_release::{config::Config, core::{ClosureCompiler, ReleaseStamp, ReleaseUpdater}};
//!
//! let config = Config::default();
//! let compressor = ClosureCompiler::new(config.compress.clone(), false);
//! let report = ReleaseUpdater::new(config, &compressor).run(&ReleaseStamp::today())?;
//! println!("{report}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr; stdout only carries progress markers and stamp output.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
