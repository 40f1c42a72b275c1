use crossterm::event::KeyCode;

pub const KEY_QUIT: KeyCode = KeyCode::Esc;
pub const KEY_SUGGESTION: KeyCode = KeyCode::Tab;
pub const KEY_MODE_CYCLE: KeyCode = KeyCode::F(2);
pub const KEY_SORT_CYCLE: KeyCode = KeyCode::F(3);
pub const KEY_CLEAR_FILTERS: KeyCode = KeyCode::F(4);
pub const KEY_RETRY: KeyCode = KeyCode::F(5);

/// Width of the left filter panel.
pub const PANEL_WIDTH: u16 = 32;
/// Header: title row, search row, separator.
pub const HEADER_ROWS: u16 = 3;
/// Status: share line and key help.
pub const STATUS_ROWS: u16 = 2;

pub const HELP_LINE: &str =
    "Type to search · Tab first suggestion · Up/Down+Enter specialty · F2 mode · F3 sort · F4 clear · F5 refresh · Esc quit";
