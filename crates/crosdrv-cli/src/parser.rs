//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for locating ChromiumOS chroots and checkouts.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "crosdrv")]
#[command(about = "Locate ChromiumOS chroot and source checkout boundaries")]
#[command(version)]
pub struct Cli {
    /// Marker identifying a chroot root (repeatable; trailing '/' = directory)
    #[arg(
        long = "chroot-marker",
        env = "CROSDRV_CHROOT_MARKERS",
        value_delimiter = ',',
        global = true
    )]
    pub chroot_markers: Vec<String>,

    /// Marker identifying a source checkout root (repeatable; trailing '/' = directory)
    #[arg(
        long = "source-marker",
        env = "CROSDRV_SOURCE_MARKERS",
        value_delimiter = ',',
        global = true
    )]
    pub source_markers: Vec<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
