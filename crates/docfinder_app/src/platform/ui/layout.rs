use super::constants::{HEADER_ROWS, PANEL_WIDTH, STATUS_ROWS};

/// Pane geometry for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub panel_width: u16,
    pub body_top: u16,
    pub body_rows: u16,
    pub list_left: u16,
    pub status_row: u16,
}

pub fn compute(width: u16, height: u16) -> Layout {
    let panel_width = PANEL_WIDTH.min(width / 2);
    let body_top = HEADER_ROWS;
    let status_row = height.saturating_sub(STATUS_ROWS);
    let body_rows = status_row.saturating_sub(body_top);
    Layout {
        width,
        height,
        panel_width,
        body_top,
        body_rows,
        list_left: panel_width.saturating_add(2),
        status_row,
    }
}
