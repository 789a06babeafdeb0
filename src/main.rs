//! linkview CLI - browse linked library files and the data they contribute
//!
//! Usage: linkview [COMMAND]
//!
//! Commands:
//!   groups  List linked libraries
//!   show    Show one library's linked data, grouped by kind
//!   users   Select the objects using a linked data block
//!   browse  Interactive browse screen (default on a terminal)

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use linkview::config::{Config, Verbosity};
use linkview::logging::{init_logging, LogConfig, LogFormat};
use linkview::presentation::{Cli, ColorWhen, Commands};

use commands::browse::cmd_browse;
use commands::context::{project_root_of, CommandContext};
use commands::library::{cmd_clean, cmd_delete, cmd_open, cmd_reload};
use commands::list::{cmd_groups, cmd_show};
use commands::users::cmd_users;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let root = project_root_of(&cli.manifest);
    let (config, warnings) = Config::load_or_default(Some(&root));
    init_logging(&log_config(&cli, &config));
    if !cli.json {
        for warning in &warnings {
            eprintln!("Warning: {}", warning);
        }
    }

    let mut ctx = CommandContext::load(&cli, &config)?;

    match cli.command {
        Some(Commands::Groups) => cmd_groups(&ctx),
        Some(Commands::Show {
            library,
            search,
            collapse,
            collapse_all,
        }) => cmd_show(
            &mut ctx,
            library.as_deref(),
            search.as_deref(),
            &collapse,
            collapse_all,
        ),
        Some(Commands::Users { kind, name }) => cmd_users(&mut ctx, kind, &name),
        Some(Commands::Reload { library }) => cmd_reload(&mut ctx, &library),
        Some(Commands::Open { library }) => cmd_open(&mut ctx, &library),
        Some(Commands::Delete { library, yes }) => cmd_delete(&mut ctx, &library, yes),
        Some(Commands::Clean { yes }) => cmd_clean(&mut ctx, yes),
        Some(Commands::Browse { search }) => cmd_browse(ctx, search.as_deref()),
        None if ctx.caps.is_tty && !cli.json => cmd_browse(ctx, None),
        None => cmd_groups(&ctx),
    }
}

/// `-v` flags and the config verbosity both raise the level; quiet lowers it
fn log_config(cli: &Cli, config: &Config) -> LogConfig {
    let log = if config.output.verbosity == Verbosity::Quiet && cli.verbose == 0 {
        LogConfig::default().with_level(Level::ERROR)
    } else {
        LogConfig::from_verbosity(cli.verbose.max(config.output.verbosity.as_count()))
    };
    let log = log.with_ansi(cli.color != Some(ColorWhen::Never));
    if cli.json {
        log.with_format(LogFormat::Json)
    } else {
        log
    }
}
