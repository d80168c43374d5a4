//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to the
//! resolver and driver held by `CliContext`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crosdrv_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers};
use crosdrv_core::BoundaryKind;

/// Install the stderr subscriber so stdout carries only results.
///
/// `RUST_LOG` applies unless `--verbose` asks for debug output.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

async fn dispatch(ctx: &CliContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Chroot { path } => {
            handlers::resolve::execute(ctx, BoundaryKind::Chroot, &path).await
        }
        Commands::SourceDir { path } => {
            handlers::resolve::execute(ctx, BoundaryKind::SourceRoot, &path).await
        }
        Commands::Locate { path, json } => {
            handlers::resolve::execute_locate(ctx, &path, json).await
        }
        Commands::Home => {
            handlers::user::execute_home(ctx);
            Ok(())
        }
        Commands::Whoami => handlers::user::execute_whoami(ctx),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_markers(cli.chroot_markers, cli.source_markers);
    let result = match bootstrap(config).await {
        Ok(ctx) => {
            ctx.cancel_on_interrupt();
            let result = dispatch(&ctx, command).await;
            ctx.shutdown().await;
            result
        }
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
