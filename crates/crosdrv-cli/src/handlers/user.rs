//! Current-user handlers: `home` and `whoami`.

use std::path::PathBuf;

use super::record;
use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Home directory of the current user.
pub fn home(ctx: &CliContext) -> PathBuf {
    let home = ctx.driver.os.homedir();
    record(ctx, "home", "ok");
    home
}

/// Login name of the current user.
pub fn whoami(ctx: &CliContext) -> Result<String, CliError> {
    let result = ctx.driver.os.username();
    record(ctx, "whoami", if result.is_ok() { "ok" } else { "error" });
    Ok(result?)
}

/// Execute the `home` command.
pub fn execute_home(ctx: &CliContext) {
    println!("{}", home(ctx).display());
}

/// Execute the `whoami` command.
pub fn execute_whoami(ctx: &CliContext) -> Result<(), CliError> {
    println!("{}", whoami(ctx)?);
    Ok(())
}
