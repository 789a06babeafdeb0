//! `users` command handler

use std::process::ExitCode;

use anyhow::Result;

use linkview::application::select_users_of;
use linkview::domain::value_objects::Kind;

use super::context::CommandContext;

/// Select the scene objects using `(kind, name)` and save the selection
pub fn cmd_users(ctx: &mut CommandContext, kind: Kind, name: &str) -> Result<ExitCode> {
    let outcome = select_users_of(&mut ctx.store, &mut ctx.view, kind, name);
    ctx.save_if_dirty()?;
    Ok(ctx.finish(&outcome))
}
