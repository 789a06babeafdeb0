//! Terminal UI: design tokens, text rendering and the browse screen.

pub mod browse;
pub mod render;
pub mod terminal;
pub mod theme;
