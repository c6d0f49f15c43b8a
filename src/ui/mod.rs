pub mod bottom_bar;
pub mod common;
pub mod header_bar;
pub mod help_overlay;
pub mod panel;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::app::App;

/// Smallest terminal the panel is usable in
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 12;

/// Split the terminal into header, canvas and bottom bar
pub fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(2), // Header bar
        Constraint::Min(1),    // Canvas holding the panel
        Constraint::Length(1), // Bottom bar
    ])
    .areas(area)
}

/// Area the panel floats in
pub fn canvas_area(area: Rect) -> Rect {
    let [_, canvas, _] = layout(area);
    canvas
}

/// Root render dispatcher
pub fn render(frame: &mut Frame, app: &App) {
    if app.too_small {
        render_too_small(frame);
        return;
    }

    let area = frame.area();
    let [header, canvas, bottom] = layout(area);

    header_bar::render(frame, app, header);
    panel::render(frame, &app.panel, app.host.panel_rect(canvas));
    bottom_bar::render(frame, app, bottom);

    if app.show_help {
        help_overlay::render(frame, area);
    }
}

fn render_too_small(frame: &mut Frame) {
    use ratatui::layout::{Alignment, Flex};
    use ratatui::style::Style;
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;
    use crate::ui::common::{COLOR_DIM, COLOR_MISSING};

    let area = frame.area();
    let [center_y] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(36)])
        .flex(Flex::Center)
        .areas(center_y);

    let text = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default().fg(COLOR_MISSING),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Please resize to at least {}x{}", MIN_COLS, MIN_ROWS),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, center);
}
