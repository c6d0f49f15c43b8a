use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use ratatui::Frame;

use crate::host::{px_to_cols, px_to_rows, CELL_HEIGHT, CELL_WIDTH};
use crate::panel::{PanelContent, SysInfoPanel, ERROR_MESSAGE};
use crate::types::TriggerState;
use crate::ui::common::*;

/// Draw the panel into `rect` (already clamped to the canvas)
pub fn render(frame: &mut Frame, panel: &SysInfoPanel, rect: Rect) {
    frame.render_widget(Clear, rect);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(THEME.border)
        .title(Span::styled(" System Info ", THEME.title));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let [button_area, _gap, content_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    let trigger = panel.trigger();
    let button_style = match trigger {
        TriggerState::Idle => THEME.button,
        TriggerState::Checking => THEME.button_busy,
    };
    let button = Paragraph::new(trigger.label())
        .alignment(Alignment::Center)
        .style(button_style);
    frame.render_widget(button, button_area);

    let content_area = Rect {
        height: content_area
            .height
            .min(px_to_rows(panel.content_height())),
        ..content_area
    };
    let lines = content_lines(panel, content_area.width as usize);
    frame.render_widget(Paragraph::new(lines), content_area);
}

/// Lines of the content region, starting at the scroll position
pub fn content_lines(panel: &SysInfoPanel, width: usize) -> Vec<Line<'static>> {
    match panel.content() {
        PanelContent::Empty => Vec::new(),
        PanelContent::Rows(rows) => rows
            .iter()
            .skip(panel.scroll())
            .flat_map(|row| row_lines(row, width))
            .collect(),
        PanelContent::Failed(err) => vec![Line::from(Span::styled(
            format!("{} ({})", ERROR_MESSAGE, err),
            THEME.error,
        ))
        .alignment(Alignment::Center)],
    }
}

/// Rows visible in the content region
pub fn visible_rows(panel: &SysInfoPanel) -> usize {
    px_to_rows(panel.content_height()) as usize
}

/// Post-layout measurements of the current rows: width and height of each,
/// in logical pixels.
///
/// Heights are taken at the width the sizer is about to choose, so a row the
/// width rule makes room for is never counted as wrapped.
pub fn measure_rows(panel: &SysInfoPanel) -> (Vec<u32>, Vec<u32>) {
    let PanelContent::Rows(rows) = panel.content() else {
        return (Vec::new(), Vec::new());
    };

    let widths: Vec<u32> = rows
        .iter()
        .map(|row| row_width(row) as u32 * CELL_WIDTH)
        .collect();
    let max_width = widths.iter().copied().max().unwrap_or(0);

    // two border columns
    let inner_cols = px_to_cols(panel.sizer().fit_width(max_width)).saturating_sub(2) as usize;
    let heights = rows
        .iter()
        .map(|row| row_lines(row, inner_cols).len() as u32 * CELL_HEIGHT)
        .collect();

    (widths, heights)
}
