//! `browse` command handler

use std::process::ExitCode;

use anyhow::{bail, Result};

use linkview::ui::browse::{run_browse, BrowseSession};

use super::context::CommandContext;

pub fn cmd_browse(mut ctx: CommandContext, search: Option<&str>) -> Result<ExitCode> {
    if ctx.printer.is_json() || !ctx.caps.is_tty {
        bail!("browse needs an interactive terminal; try `linkview show`");
    }
    if let Some(term) = search {
        ctx.view.set_search(term, &ctx.store);
    }

    let view = std::mem::take(&mut ctx.view);
    let status = {
        let mut session = BrowseSession::new(&mut ctx.store, &ctx.ops, view);
        run_browse(&mut session, ctx.printer.unicode)?;
        session.status().cloned()
    };

    ctx.save_if_dirty()?;
    Ok(match status {
        Some(outcome) => ctx.finish(&outcome),
        None => ExitCode::SUCCESS,
    })
}
