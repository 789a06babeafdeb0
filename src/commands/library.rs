//! `reload`, `open`, `delete` and `clean` command handlers

use std::process::ExitCode;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use linkview::domain::ports::{FileProbe, HostStore};

use super::context::CommandContext;

pub fn cmd_reload(ctx: &mut CommandContext, library: &str) -> Result<ExitCode> {
    let outcome = ctx.ops.reload(&mut ctx.store, &mut ctx.view, library);
    Ok(ctx.finish(&outcome))
}

pub fn cmd_open(ctx: &mut CommandContext, library: &str) -> Result<ExitCode> {
    let outcome = ctx.ops.open(&ctx.store, &mut ctx.view, library);
    Ok(ctx.finish(&outcome))
}

pub fn cmd_delete(ctx: &mut CommandContext, library: &str, yes: bool) -> Result<ExitCode> {
    if ctx.store.find_group(library).is_some() && !yes {
        let prompt = format!(
            "Delete library '{}' and everything linked from it?",
            library
        );
        if !confirm(&prompt)? {
            eprintln!("Aborted.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let outcome = ctx.ops.delete(&mut ctx.store, &mut ctx.view, library);
    ctx.save_if_dirty()?;
    Ok(ctx.finish(&outcome))
}

pub fn cmd_clean(ctx: &mut CommandContext, yes: bool) -> Result<ExitCode> {
    let broken = ctx.ops.broken_groups(&ctx.store);
    if !broken.is_empty() && !yes {
        eprintln!("Libraries with missing files:");
        for group in &broken {
            let path = ctx.ops.probe().resolve(&group.file_path);
            eprintln!("  {}  {}", group.name, path.display());
        }
        let prompt = format!("Delete {} broken library link(s)?", broken.len());
        if !confirm(&prompt)? {
            eprintln!("Aborted.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let outcome = ctx.ops.cleanup_broken(&mut ctx.store, &mut ctx.view);
    ctx.save_if_dirty()?;
    Ok(ctx.finish(&outcome))
}

/// Ask on the terminal; without one, refuse instead of guessing
fn confirm(prompt: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        bail!("refusing to delete without confirmation; pass --yes to proceed");
    }
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
