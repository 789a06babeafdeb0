//! Keyboard input mapping for the browse screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Up,
    Down,
    PrevGroup,
    NextGroup,
    /// Toggle a header, or select users of a row
    Activate,
    ToggleAll,
    Reload,
    Open,
    Delete,
    Clean,
    Refresh,
    StartSearch,
    SearchChar(char),
    SearchBackspace,
    EndSearch,
    ClearSearch,
    Quit,
}

/// Whether keys edit the search term or drive the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Convert a keyboard event to a BrowseAction
pub fn key_to_action(key: KeyEvent, mode: InputMode) -> Option<BrowseAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(BrowseAction::Quit);
    }

    match mode {
        InputMode::Search => match key.code {
            KeyCode::Enter | KeyCode::Up | KeyCode::Down => Some(BrowseAction::EndSearch),
            KeyCode::Esc => Some(BrowseAction::ClearSearch),
            KeyCode::Backspace => Some(BrowseAction::SearchBackspace),
            KeyCode::Char(c) => Some(BrowseAction::SearchChar(c)),
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(BrowseAction::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(BrowseAction::Down),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(BrowseAction::PrevGroup),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(BrowseAction::NextGroup),
            KeyCode::Enter | KeyCode::Char(' ') => Some(BrowseAction::Activate),
            KeyCode::Char('a') => Some(BrowseAction::ToggleAll),
            KeyCode::Char('r') => Some(BrowseAction::Reload),
            KeyCode::Char('o') => Some(BrowseAction::Open),
            KeyCode::Char('d') | KeyCode::Delete => Some(BrowseAction::Delete),
            KeyCode::Char('c') => Some(BrowseAction::Clean),
            KeyCode::Char('f') => Some(BrowseAction::Refresh),
            KeyCode::Char('/') => Some(BrowseAction::StartSearch),
            KeyCode::Char('q') | KeyCode::Esc => Some(BrowseAction::Quit),
            _ => None,
        },
    }
}
