//! Boundary lookup handlers: `chroot`, `source-dir` and `locate`.

use std::path::PathBuf;

use crosdrv_core::{BoundaryKind, Boundaries, normalize_user_path};

use super::record;
use crate::bootstrap::CliContext;
use crate::error::CliError;

const fn command_name(kind: BoundaryKind) -> &'static str {
    match kind {
        BoundaryKind::Chroot => "chroot",
        BoundaryKind::SourceRoot => "source-dir",
    }
}

/// Resolve the `kind` boundary enclosing `raw`.
///
/// `raw` may be relative or start with `~`. No enclosing boundary is
/// reported as [`CliError::NotFound`].
pub async fn find(ctx: &CliContext, kind: BoundaryKind, raw: &str) -> Result<PathBuf, CliError> {
    let command = command_name(kind);
    let result = lookup(ctx, kind, raw).await;
    let outcome = match &result {
        Ok(_) => "found",
        Err(CliError::NotFound { .. }) => "not_found",
        Err(_) => "error",
    };
    record(ctx, command, outcome);
    result
}

async fn lookup(ctx: &CliContext, kind: BoundaryKind, raw: &str) -> Result<PathBuf, CliError> {
    let path = normalize_user_path(raw, ctx.driver.os.as_ref())?;
    let found = ctx.resolver.resolve(kind, &path, Some(&ctx.cancel)).await?;
    found.ok_or(CliError::NotFound { kind, path })
}

/// Execute the `chroot` or `source-dir` command.
pub async fn execute(ctx: &CliContext, kind: BoundaryKind, raw: &str) -> Result<(), CliError> {
    let root = find(ctx, kind, raw).await?;
    println!("{}", root.display());
    Ok(())
}

/// Resolve both boundaries of `raw` and render them.
///
/// Missing boundaries are part of the output, not an error.
pub async fn render_locate(ctx: &CliContext, raw: &str, json: bool) -> Result<String, CliError> {
    let result = locate(ctx, raw).await;
    record(ctx, "locate", if result.is_ok() { "ok" } else { "error" });
    let boundaries = result?;

    if json {
        serde_json::to_string_pretty(&boundaries).map_err(|e| CliError::Core(e.to_string()))
    } else {
        Ok(boundaries.to_string())
    }
}

async fn locate(ctx: &CliContext, raw: &str) -> Result<Boundaries, CliError> {
    let path = normalize_user_path(raw, ctx.driver.os.as_ref())?;
    Ok(ctx.resolver.locate_cancellable(&path, &ctx.cancel).await?)
}

/// Execute the `locate` command.
pub async fn execute_locate(ctx: &CliContext, raw: &str, json: bool) -> Result<(), CliError> {
    println!("{}", render_locate(ctx, raw, json).await?);
    Ok(())
}
