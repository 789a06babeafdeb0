use crossterm::style::Color;

use crate::domain::value_objects::{Kind, Severity};

/// Design tokens for the linkview CLI.
///
/// All icons and colors must be sourced from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "›";
    pub const BROKEN: &str = "✗";
    pub const LIBRARY: &str = "●";

    // Category disclosure.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";

    // Record kinds.
    pub const COLLECTION: &str = "▣";
    pub const OBJECT: &str = "◆";
    pub const MESH: &str = "△";
    pub const MATERIAL: &str = "◍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";
    pub const BROKEN: &str = "[x]";
    pub const LIBRARY: &str = "*";

    pub const EXPANDED: &str = "[v]";
    pub const COLLAPSED: &str = "[>]";

    pub const COLLECTION: &str = "[C]";
    pub const OBJECT: &str = "[O]";
    pub const MESH: &str = "[M]";
    pub const MATERIAL: &str = "[T]";
}

/// Icon for a category header's disclosure state
pub fn disclosure_icon(is_expanded: bool, unicode: bool) -> &'static str {
    match (is_expanded, unicode) {
        (true, true) => icons::EXPANDED,
        (false, true) => icons::COLLAPSED,
        (true, false) => icons_ascii::EXPANDED,
        (false, false) => icons_ascii::COLLAPSED,
    }
}

pub fn kind_icon(kind: Kind, unicode: bool) -> &'static str {
    if unicode {
        match kind {
            Kind::Collection => icons::COLLECTION,
            Kind::Object => icons::OBJECT,
            Kind::Mesh => icons::MESH,
            Kind::Material => icons::MATERIAL,
        }
    } else {
        match kind {
            Kind::Collection => icons_ascii::COLLECTION,
            Kind::Object => icons_ascii::OBJECT,
            Kind::Mesh => icons_ascii::MESH,
            Kind::Material => icons_ascii::MATERIAL,
        }
    }
}

pub fn severity_icon(severity: Severity, unicode: bool) -> &'static str {
    match (severity, unicode) {
        (Severity::Info, true) => icons::SUCCESS,
        (Severity::Warning, true) => icons::WARNING,
        (Severity::Error, true) => icons::ERROR,
        (Severity::Info, false) => icons_ascii::SUCCESS,
        (Severity::Warning, false) => icons_ascii::WARNING,
        (Severity::Error, false) => icons_ascii::ERROR,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => colors::SUCCESS,
        Severity::Warning => colors::WARNING,
        Severity::Error => colors::ERROR,
    }
}
