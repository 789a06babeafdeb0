//! `groups` and `show` command handlers

use std::process::ExitCode;

use anyhow::Result;

use linkview::domain::value_objects::{Kind, Outcome, OutcomeCode};

use super::context::CommandContext;

/// List libraries and whether their files exist
pub fn cmd_groups(ctx: &CommandContext) -> Result<ExitCode> {
    ctx.printer.print_groups(&ctx.group_lines());
    Ok(ExitCode::SUCCESS)
}

/// Show the linked data of one library
pub fn cmd_show(
    ctx: &mut CommandContext,
    library: Option<&str>,
    search: Option<&str>,
    collapse: &[Kind],
    collapse_all: bool,
) -> Result<ExitCode> {
    if let Some(name) = library {
        if !ctx.view.select_group_named(name, &ctx.store) {
            let outcome = ctx.view.report(
                "show",
                Outcome::error(
                    OutcomeCode::NotFound,
                    format!("Library data block not found: {}", name),
                ),
            );
            return Ok(ctx.finish(&outcome));
        }
    }

    if let Some(term) = search {
        ctx.view.set_search(term, &ctx.store);
    }

    // Categories start expanded; toggling once collapses them
    for kind in collapse {
        if ctx.view.categories().is_expanded(*kind) {
            let outcome = ctx.view.toggle_category(*kind, &ctx.store);
            if outcome.code == OutcomeCode::NotFound {
                ctx.printer.print_outcome(&outcome);
            }
        }
    }
    if collapse_all {
        let outcome = ctx.view.toggle_all(&ctx.store);
        if !outcome.changed_data() {
            ctx.printer.print_outcome(&outcome);
        }
    }

    ctx.printer.print_nodes(&ctx.view);
    Ok(ExitCode::SUCCESS)
}
