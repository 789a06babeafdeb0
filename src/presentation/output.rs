//! Output Rendering
//!
//! Text or NDJSON output for the one-shot commands. In JSON mode view events
//! (rebuilds, outcomes) are already streamed by the event sink; this module
//! adds the command's own payload as one more NDJSON line.

use crossterm::style::Stylize;

use crate::application::ViewController;
use crate::domain::value_objects::{Outcome, Severity};
use crate::ui::render::{empty_list_message, render_groups, render_nodes, render_outcome, GroupLine};
use crate::ui::theme::severity_color;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON output for scripting
    Json,
}

/// Formats command results for the terminal
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub format: OutputFormat,
    pub unicode: bool,
    pub color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            unicode: true,
            color: false,
        }
    }
}

impl Printer {
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn format_groups(&self, groups: &[GroupLine]) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({
                "event": "groups",
                "groups": groups
                    .iter()
                    .map(|g| serde_json::json!({
                        "name": g.name,
                        "filepath": g.file_path,
                        "exists": g.exists,
                    }))
                    .collect::<Vec<_>>(),
            })
            .to_string(),
            OutputFormat::Text if groups.is_empty() => empty_list_message(false, ""),
            OutputFormat::Text => render_groups(groups, None, self.unicode),
        }
    }

    pub fn format_nodes(&self, view: &ViewController) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({
                "event": "nodes",
                "group": view.selected_group().map(|g| g.name.as_str()),
                "search": view.view_state().search_term,
                "nodes": view.visible_nodes().collect::<Vec<_>>(),
            })
            .to_string(),
            OutputFormat::Text if view.visible_count() == 0 => empty_list_message(
                !view.groups().is_empty(),
                &view.view_state().search_term,
            ),
            OutputFormat::Text => render_nodes(view.visible_nodes(), None, self.unicode, false),
        }
    }

    /// Text line for an outcome; `None` in JSON mode (the sink already emitted it)
    pub fn format_outcome(&self, outcome: &Outcome) -> Option<String> {
        if self.is_json() {
            return None;
        }
        let line = render_outcome(outcome, self.unicode);
        if self.color {
            Some(line.with(severity_color(outcome.severity)).to_string())
        } else {
            Some(line)
        }
    }

    pub fn print_groups(&self, groups: &[GroupLine]) {
        println!("{}", self.format_groups(groups));
    }

    pub fn print_nodes(&self, view: &ViewController) {
        println!("{}", self.format_nodes(view));
    }

    /// Info to stdout, warnings and errors to stderr
    pub fn print_outcome(&self, outcome: &Outcome) {
        let Some(line) = self.format_outcome(outcome) else {
            return;
        };
        match outcome.severity {
            Severity::Info => println!("{}", line),
            Severity::Warning | Severity::Error => eprintln!("{}", line),
        }
    }
}
