use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let palette = app.theme.palette();
    let entry = match app.detail_entry() {
        Some(e) => e,
        None => return,
    };

    // Layout: header(6) + description(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Metadata header ──
    let mut tag_spans = vec![Span::styled(" Tags: ", Style::default().fg(palette.dim))];
    if entry.tags.is_empty() {
        tag_spans.push(Span::styled("(none)", Style::default().fg(palette.dim)));
    }
    for tag in &entry.tags {
        tag_spans.push(Span::styled(
            format!("#{} ", tag),
            Style::default().fg(palette.accent),
        ));
    }

    let meta_lines = vec![
        Line::from(vec![
            Span::raw(format!(" {:<2} ", entry.icon)),
            Span::styled(
                &entry.title,
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Category: ", Style::default().fg(palette.dim)),
            Span::styled(&entry.category, Style::default().fg(palette.accent)),
        ]),
        Line::from(vec![
            Span::styled(" URL: ", Style::default().fg(palette.dim)),
            Span::styled(
                &entry.url,
                Style::default().fg(palette.link).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(tag_spans),
    ];

    let meta_block = Paragraph::new(meta_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" Link Detail "),
    );
    frame.render_widget(meta_block, chunks[0]);

    // ── Description ──
    let description = Paragraph::new(entry.description.as_str())
        .style(Style::default().fg(palette.fg))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim))
                .title(" Description ")
                .title_bottom(
                    Line::from(format!(" scroll: {} ", app.detail_scroll))
                        .alignment(Alignment::Right),
                ),
        );
    frame.render_widget(description, chunks[1]);

    // ── Status bar ──
    let key_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let status_line = Line::from(vec![
        Span::styled(" ↑↓", key_style),
        Span::raw(" Scroll  "),
        Span::styled("y", key_style),
        Span::raw(" Copy URL  "),
        Span::styled("o", key_style),
        Span::raw(" Open in browser  "),
        Span::styled("Esc", key_style),
        Span::raw(" Back  "),
        Span::styled(&app.status_msg, Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[2]);
}
