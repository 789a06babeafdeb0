//! Shared setup for command handlers

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, Result};

use linkview::application::ViewController;
use linkview::config::{ColorMode, Config};
use linkview::domain::ports::HostStore;
use linkview::domain::value_objects::{Outcome, Severity};
use linkview::infrastructure::ManifestStore;
use linkview::presentation::{
    create_library_ops, create_view, Cli, ColorWhen, ConcreteLibraryOps, OutputFormat, Printer,
};
use linkview::ui::render::GroupLine;
use linkview::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Everything a command needs, wired from the CLI flags and config
pub struct CommandContext {
    pub store: ManifestStore,
    pub ops: ConcreteLibraryOps,
    pub view: ViewController,
    pub printer: Printer,
    pub caps: TerminalCapabilities,
}

/// Directory the manifest lives in; `//` paths and project config resolve against it
pub fn project_root_of(manifest: &Path) -> PathBuf {
    manifest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

impl CommandContext {
    pub fn load(cli: &Cli, config: &Config) -> Result<Self> {
        let store = ManifestStore::load(&cli.manifest)
            .with_context(|| format!("could not open manifest {}", cli.manifest.display()))?;
        let caps = detect_capabilities();
        let ops = create_library_ops(config, store.project_root());
        let mut view = create_view(config, cli.json);
        view.rebuild(&store);

        Ok(Self {
            store,
            ops,
            view,
            printer: printer_for(cli, config, &caps),
            caps,
        })
    }

    /// Library lines with a fresh existence check
    pub fn group_lines(&self) -> Vec<GroupLine> {
        self.store
            .list_groups()
            .iter()
            .map(|group| GroupLine {
                name: group.name.clone(),
                file_path: group.file_path.to_string(),
                exists: self.ops.exists(group),
            })
            .collect()
    }

    /// Write the manifest back if anything changed
    pub fn save_if_dirty(&mut self) -> Result<()> {
        if self.store.is_dirty() {
            self.store.save().context("could not save manifest")?;
        }
        Ok(())
    }

    /// Print an outcome and map its severity to an exit code
    pub fn finish(&self, outcome: &Outcome) -> ExitCode {
        self.printer.print_outcome(outcome);
        exit_code(outcome)
    }
}

pub fn exit_code(outcome: &Outcome) -> ExitCode {
    match outcome.severity {
        Severity::Error => ExitCode::FAILURE,
        Severity::Info | Severity::Warning => ExitCode::SUCCESS,
    }
}

pub fn printer_for(cli: &Cli, config: &Config, caps: &TerminalCapabilities) -> Printer {
    let color = match (cli.color, config.output.color) {
        (Some(ColorWhen::Always), _) => true,
        (Some(ColorWhen::Never), _) => false,
        (None, ColorMode::Always) => true,
        (None, ColorMode::Never) => false,
        (Some(ColorWhen::Auto), _) | (None, ColorMode::Auto) => caps.supports_color,
    };
    Printer {
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        unicode: !cli.ascii && config.output.unicode && caps.supports_unicode,
        color,
    }
}
