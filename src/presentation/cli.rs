//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--manifest, --json, --ascii, --color, --verbose) are
//! inherited by all subcommands. Without a subcommand the browse screen opens.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Kind;

/// Default manifest file name, looked up in the current directory
pub const DEFAULT_MANIFEST: &str = "linkview.toml";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// linkview - browse linked library files and the data they contribute
#[derive(Parser, Debug)]
#[command(name = "linkview")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'linkview' without a command to open the browse screen.")]
pub struct Cli {
    /// Scene manifest to read (and write back after changes)
    #[arg(short, long, global = true, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Use ASCII icons only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List linked libraries and whether their files exist
    Groups,

    /// Show the linked data of one library, grouped by kind
    Show {
        /// Library name (default: the first library)
        library: Option<String>,

        /// Only show rows matching this term (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Collapse these categories (repeatable or comma-separated)
        #[arg(long, value_enum, value_delimiter = ',')]
        collapse: Vec<Kind>,

        /// Collapse every category
        #[arg(long, conflicts_with = "collapse")]
        collapse_all: bool,
    },

    /// Select the scene objects that use a linked data block
    Users {
        /// Kind of the data block
        #[arg(value_enum)]
        kind: Kind,

        /// Name of the data block
        name: String,
    },

    /// Reload a library from its file
    Reload {
        /// Library name
        library: String,
    },

    /// Open a library file in a new instance of the configured program
    Open {
        /// Library name
        library: String,
    },

    /// Delete a library and everything linked from it
    Delete {
        /// Library name
        library: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every library whose file is missing
    Clean {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Open the interactive browse screen
    Browse {
        /// Initial search term
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_browse() {
        let cli = Cli::try_parse_from(["linkview"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.manifest, PathBuf::from(DEFAULT_MANIFEST));
    }

    #[test]
    fn test_cli_parse_show_with_args() {
        let cli = Cli::try_parse_from([
            "linkview",
            "show",
            "props.blend",
            "--search",
            "cube",
            "--collapse",
            "mesh,material",
            "--manifest",
            "scenes/a.toml",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.manifest, PathBuf::from("scenes/a.toml"));
        match cli.command {
            Some(Commands::Show {
                library,
                search,
                collapse,
                collapse_all,
            }) => {
                assert_eq!(library.as_deref(), Some("props.blend"));
                assert_eq!(search.as_deref(), Some("cube"));
                assert_eq!(collapse, vec![Kind::Mesh, Kind::Material]);
                assert!(!collapse_all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_users() {
        let cli = Cli::try_parse_from(["linkview", "users", "collection", "Hero"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Users { kind: Kind::Collection, ref name }) if name == "Hero"
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["linkview", "users", "sound", "Boom"]).is_err());
    }

    #[test]
    fn test_cli_parse_delete_yes() {
        let cli = Cli::try_parse_from(["linkview", "-vv", "delete", "a.blend", "-y"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Delete { yes: true, .. })));
    }

    #[test]
    fn test_cli_collapse_conflicts_with_collapse_all() {
        let result = Cli::try_parse_from([
            "linkview",
            "show",
            "--collapse",
            "mesh",
            "--collapse-all",
        ]);
        assert!(result.is_err());
    }
}
