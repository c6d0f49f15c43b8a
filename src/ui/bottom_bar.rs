use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::host::{px_to_cols, px_to_rows};
use crate::panel::HostPanel;
use crate::ui::common::*;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    spans.extend(key_hint("Enter", "Check"));
    spans.extend(key_hint("j/k", "Scroll"));
    spans.extend(key_hint("[ ]", "Height"));
    spans.extend(key_hint("< >", "Width"));
    spans.extend(key_hint("?", "Help"));
    spans.extend(key_hint("q", "Quit"));

    // Right-align the panel size readout
    let size = app.host.size();
    let readout = format!(
        " {}x{} px ({}x{}) ",
        size.width,
        size.height,
        px_to_cols(size.width),
        px_to_rows(size.height)
    );
    let hints_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(hints_len + readout.len());
    if remaining > 0 {
        spans.push(Span::raw(" ".repeat(remaining)));
    }
    spans.push(Span::styled(readout, THEME.hint));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
