//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands.
///
/// Paths may be relative or start with `~`; they are made absolute before
/// resolution.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the chroot root enclosing PATH
    Chroot {
        /// File or directory to start from
        path: String,
    },

    /// Print the source checkout root enclosing PATH
    SourceDir {
        /// File or directory to start from
        path: String,
    },

    /// Print both boundaries of PATH
    Locate {
        /// File or directory to start from
        path: String,
        /// Emit JSON instead of `key = value` lines
        #[arg(long)]
        json: bool,
    },

    /// Print the current user's home directory
    Home,

    /// Print the current user's login name
    Whoami,
}
