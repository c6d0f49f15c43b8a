use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::ui::common::*;

const TITLE: &str = " System Info Panel";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let now = chrono_free_time();

    let endpoint_text = format!(" {} ", app.client.url());
    let clock_text = format!("  {}", now);
    let used = TITLE.len() + endpoint_text.len() + clock_text.len();
    let pad_len = (area.width as usize).saturating_sub(used);

    let title_line = Line::from(vec![
        Span::styled(TITLE, THEME.title),
        Span::raw(" ".repeat(pad_len)),
        Span::styled(
            endpoint_text,
            Style::default().fg(COLOR_LABEL).add_modifier(Modifier::ITALIC),
        ),
        Span::styled(clock_text, THEME.hint),
    ]);

    let separator_line = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        THEME.border,
    ));

    let paragraph = Paragraph::new(vec![title_line, separator_line]);
    frame.render_widget(paragraph, area);
}

/// Current UTC time as HH:MM:SS
fn chrono_free_time() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let secs_of_day = secs % 86400;
    let h = secs_of_day / 3600;
    let m = (secs_of_day % 3600) / 60;
    let s = secs_of_day % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
