use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame, area: Rect) {
    let [center_y] = Layout::vertical([Constraint::Length(16)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(46)])
        .flex(Flex::Center)
        .areas(center_y);

    // Clear the area behind the overlay
    frame.render_widget(Clear, center);

    let block = Block::default()
        .title(" Help \u{2014} Keybindings ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        help_line("Enter / r", "Run system info check"),
        help_line("j / k", "Scroll rows"),
        help_line("[ / ]", "Shrink / grow panel height"),
        help_line("< / >", "Shrink / grow panel width"),
        help_line("?", "Toggle this help"),
        help_line("q / Esc", "Quit"),
        help_line("Ctrl+C", "Quit to shell"),
        Line::from(""),
        Line::from(Span::styled(
            " The panel resizes itself after each check.",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            " Manual resizes never shrink the row area",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            " below its minimum.",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, center);
}

fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:>10}  ", key),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
