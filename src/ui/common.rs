use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::types::DisplayRow;

// -- Color Palette --

pub const COLOR_LABEL: Color = Color::Rgb(0xaa, 0xaa, 0xaa);
pub const COLOR_VALUE: Color = Color::White;
pub const COLOR_MISSING: Color = Color::Rgb(0xff, 0x55, 0x55);
pub const COLOR_ROW_BG: Color = Color::Rgb(0x3a, 0x3a, 0x3a);
pub const COLOR_BUTTON_BG: Color = Color::Rgb(0x4a, 0x6f, 0xa5);
pub const COLOR_BUTTON_BUSY_BG: Color = Color::Rgb(0x3a, 0x5f, 0x95);
pub const COLOR_ACCENT: Color = Color::Cyan;
pub const COLOR_DIM: Color = Color::DarkGray;
pub const COLOR_BORDER: Color = Color::Rgb(0x5a, 0x5a, 0x5a);

/// Styles shared by every panel
pub struct Theme {
    pub label: Style,
    pub value: Style,
    pub not_installed: Style,
    pub error: Style,
    pub button: Style,
    pub button_busy: Style,
    pub border: Style,
    pub title: Style,
    pub hint: Style,
}

/// The one style set, built at compile time and never re-created per panel
pub static THEME: Theme = Theme {
    label: Style::new()
        .fg(COLOR_LABEL)
        .bg(COLOR_ROW_BG)
        .add_modifier(Modifier::BOLD),
    value: Style::new().fg(COLOR_VALUE).bg(COLOR_ROW_BG),
    not_installed: Style::new().fg(COLOR_MISSING).bg(COLOR_ROW_BG),
    error: Style::new().fg(COLOR_MISSING),
    button: Style::new().fg(Color::White).bg(COLOR_BUTTON_BG),
    button_busy: Style::new()
        .fg(COLOR_LABEL)
        .bg(COLOR_BUTTON_BUSY_BG)
        .add_modifier(Modifier::ITALIC),
    border: Style::new().fg(COLOR_BORDER),
    title: Style::new().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    hint: Style::new().fg(COLOR_DIM),
};

// -- Row layout, in cells --

/// Padding inside a row, each side
pub const ROW_PADDING: usize = 1;
/// Minimum gap between label and value
pub const LABEL_GAP: usize = 2;

/// Cells a row needs to show label and value on one line
pub fn row_width(row: &DisplayRow) -> usize {
    2 * ROW_PADDING + row.label.width() + LABEL_GAP + row.value.width()
}

/// Lines for one row laid out in `width` cells.
///
/// A row that fits stays on one line with the value right-aligned; otherwise
/// the value moves to a second line.
pub fn row_lines(row: &DisplayRow, width: usize) -> Vec<Line<'static>> {
    let value_style = if row.missing {
        THEME.not_installed
    } else {
        THEME.value
    };
    let pad = " ".repeat(ROW_PADDING);

    if row_width(row) <= width {
        let fill = width - 2 * ROW_PADDING - row.label.width() - row.value.width();
        return vec![Line::from(vec![
            Span::styled(format!("{}{}", pad, row.label), THEME.label),
            Span::styled(" ".repeat(fill), THEME.value),
            Span::styled(format!("{}{}", row.value, pad), value_style),
        ])];
    }

    vec![
        Line::from(Span::styled(format!("{}{}", pad, row.label), THEME.label)),
        Line::from(Span::styled(format!("{}{}", row.value, pad), value_style))
            .alignment(Alignment::Right),
    ]
}

/// Keybinding hint line, e.g. `  Enter  Run check`
pub fn key_hint(key: &str, desc: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {} ", key),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", desc), THEME.hint),
    ]
}
