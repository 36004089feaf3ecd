use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Tag picker: every distinct tag from the full catalog with its usage
/// count; multiple tags can be active at once.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let palette = app.theme.palette();

    // Header(3) + Content(min) + Status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let active_summary = if app.filter.active_tags.is_empty() {
        "none active".to_string()
    } else {
        app.filter
            .active_tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Tag Filters ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" [{}]", active_summary),
            Style::default().fg(palette.dim),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.dim)),
    );
    frame.render_widget(header, chunks[0]);

    // ── Tag list ──
    let items: Vec<ListItem> = app
        .tags
        .iter()
        .map(|tag| {
            let active = app.filter.is_tag_active(tag);
            let marker = if active { "[x]" } else { "[ ]" };
            let count = app
                .catalog
                .entries()
                .iter()
                .filter(|entry| entry.tags.contains(tag))
                .count();
            let tag_style = if active {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(palette.dim)),
                Span::styled(format!("#{}", tag), tag_style),
                Span::styled(format!("  ({})", count), Style::default().fg(palette.dim)),
            ]))
        })
        .collect();

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim))
        .title(" Tags (Space to toggle) ");

    if items.is_empty() {
        let empty = Paragraph::new("\n   No tags in this catalog")
            .style(Style::default().fg(palette.dim))
            .block(list_block);
        frame.render_widget(empty, chunks[1]);
    } else {
        let list_widget = List::new(items)
            .block(list_block)
            .highlight_style(
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        list_state.select(Some(app.tags_selected));
        frame.render_stateful_widget(list_widget, chunks[1], &mut list_state);
    }

    // ── Status bar ──
    let key_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let status_line = Line::from(vec![
        Span::styled(" ↑↓", key_style),
        Span::raw(" Navigate  "),
        Span::styled("Space", key_style),
        Span::raw(" Toggle  "),
        Span::styled("Esc", key_style),
        Span::raw(" Back  "),
        Span::styled(&app.status_msg, Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[2]);
}
