use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let palette = app.theme.palette();
    let area = centered_rect(70, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let section = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let key = Style::default().fg(palette.key);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  Global", section)),
        Line::from(vec![
            Span::styled("    ?         ", key),
            Span::raw("Toggle this help"),
        ]),
        Line::from(vec![
            Span::styled("    q         ", key),
            Span::raw("Quit application"),
        ]),
        Line::from(vec![
            Span::styled("    t         ", key),
            Span::raw("Toggle light/dark theme"),
        ]),
        Line::from(vec![
            Span::styled("    x         ", key),
            Span::raw("Dismiss load notice"),
        ]),
        Line::from(""),
        Line::from(Span::styled("  List View", section)),
        Line::from(vec![
            Span::styled("    ↑/k ↓/j   ", key),
            Span::raw("Navigate up/down"),
        ]),
        Line::from(vec![
            Span::styled("    Enter     ", key),
            Span::raw("Open link detail"),
        ]),
        Line::from(vec![
            Span::styled("    /         ", key),
            Span::raw("Search (applied as you type)"),
        ]),
        Line::from(vec![
            Span::styled("    Tab/S-Tab ", key),
            Span::raw("Next/previous category"),
        ]),
        Line::from(vec![
            Span::styled("    f         ", key),
            Span::raw("Open the tag picker"),
        ]),
        Line::from(vec![
            Span::styled("    [ / ]     ", key),
            Span::raw("Back / forward through category history"),
        ]),
        Line::from(vec![
            Span::styled("    g/G       ", key),
            Span::raw("Jump to first/last page"),
        ]),
        Line::from(vec![
            Span::styled("    y         ", key),
            Span::raw("Copy link URL to clipboard"),
        ]),
        Line::from(vec![
            Span::styled("    o         ", key),
            Span::raw("Open link in browser"),
        ]),
        Line::from(vec![
            Span::styled("    Esc       ", key),
            Span::raw("Clear search"),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Detail View", section)),
        Line::from(vec![
            Span::styled("    ↑/↓       ", key),
            Span::raw("Scroll description"),
        ]),
        Line::from(vec![
            Span::styled("    y / o     ", key),
            Span::raw("Copy URL / open in browser"),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Tag Picker", section)),
        Line::from(vec![
            Span::styled("    Space     ", key),
            Span::raw("Toggle tag on/off"),
        ]),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Help — Keybindings ")
                .title_bottom(
                    Line::from(" Press ? or Esc to close ")
                        .style(Style::default().fg(palette.dim)),
                ),
        )
        .style(Style::default().fg(palette.fg));

    frame.render_widget(help, area);
}

/// Create a centered rectangle using percentage of parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
