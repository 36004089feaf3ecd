use crate::app::{App, InputMode};
use crate::ui::truncate_str;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let palette = app.theme.palette();

    // Layout: header(3) + search(3) + filters(4) + list(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let mut header_lines = vec![Line::from(Span::styled(
        format!(" Link Explorer   [{} links]", app.visible.len()),
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    ))];
    if let Some(ref notice) = app.notice {
        header_lines.push(Line::from(Span::styled(
            format!(" ⚠ {}  (x to dismiss)", notice),
            Style::default().fg(palette.alert),
        )));
    }
    let header = Paragraph::new(header_lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.dim)),
    );
    frame.render_widget(header, chunks[0]);

    // ── Search bar ──
    let search_style = match app.input_mode {
        InputMode::Editing => Style::default().fg(palette.key),
        InputMode::Normal => Style::default().fg(palette.dim),
    };
    let search_label = if app.input_mode == InputMode::Editing {
        " 🔍 Search (Enter to apply, Esc to cancel): "
    } else {
        " 🔍 Search (/): "
    };
    let search_text = format!("{}{}", search_label, app.filter.search);
    let search_bar = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(" Search "),
    );
    frame.render_widget(search_bar, chunks[1]);

    // Set cursor position when editing
    if app.input_mode == InputMode::Editing {
        let cursor_x = chunks[1].x
            + UnicodeWidthStr::width(search_label) as u16
            + UnicodeWidthStr::width(app.filter.search.as_str()) as u16;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    // ── Filter strip: categories + tags ──
    let mut category_spans = vec![Span::raw(" ")];
    for category in &app.categories {
        let active = category.to_lowercase() == app.filter.category.to_lowercase();
        let style = if active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.dim)
        };
        category_spans.push(Span::styled(capitalize(category), style));
        category_spans.push(Span::raw("  "));
    }

    let mut tag_spans = vec![Span::raw(" ")];
    if app.tags.is_empty() {
        tag_spans.push(Span::styled("(no tags)", Style::default().fg(palette.dim)));
    }
    for tag in &app.tags {
        let style = if app.filter.is_tag_active(tag) {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };
        tag_spans.push(Span::styled(format!("#{}", tag), style));
        tag_spans.push(Span::raw("  "));
    }

    let filters = Paragraph::new(vec![Line::from(category_spans), Line::from(tag_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim))
            .title(" Filters [Tab: category, f: tags] "),
    );
    frame.render_widget(filters, chunks[2]);

    // ── List ──
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim))
        .title(" Links ")
        .title_bottom(Line::from(page_info(app)).alignment(Alignment::Right));

    if app.visible.is_empty() {
        // Explicit empty state instead of a blank list.
        let message = if app.catalog.is_empty() {
            "Catalog is empty"
        } else {
            "No links match the current filters"
        };
        let empty = Paragraph::new(format!("\n   {}", message))
            .style(Style::default().fg(palette.dim))
            .block(list_block);
        frame.render_widget(empty, chunks[3]);
    } else {
        let description_width = (area.width as usize).saturating_sub(40);
        let items: Vec<ListItem> = app
            .visible_page()
            .iter()
            .filter_map(|&index| app.catalog.get(index))
            .map(|entry| {
                let mut spans = vec![
                    Span::raw(format!("{:<2} ", entry.icon)),
                    Span::styled(
                        entry.title.clone(),
                        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", truncate_str(&entry.description, description_width)),
                        Style::default().fg(palette.dim),
                    ),
                ];
                for tag in &entry.tags {
                    spans.push(Span::styled(
                        format!(" #{}", tag),
                        Style::default().fg(palette.accent),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

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
        list_state.select(Some(app.list_selected));
        frame.render_stateful_widget(list_widget, chunks[3], &mut list_state);
    }

    // ── Status bar ──
    let key_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let nav_style = if app.history.can_back() || app.history.can_forward() {
        key_style
    } else {
        Style::default().fg(palette.dim)
    };
    let status_line = Line::from(vec![
        Span::styled(" ↑↓", key_style),
        Span::raw(" Navigate  "),
        Span::styled("/", key_style),
        Span::raw(" Search  "),
        Span::styled("Enter", key_style),
        Span::raw(" Detail  "),
        Span::styled("[ ]", nav_style),
        Span::raw(" Back/Fwd  "),
        Span::styled("t", key_style),
        Span::raw(format!(" Theme ({})  ", app.theme)),
        Span::styled("?", key_style),
        Span::raw(" Help  "),
        Span::styled("q", key_style),
        Span::raw(" Quit  "),
        Span::styled(&app.status_msg, Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[4]);
}

fn page_info(app: &App) -> String {
    format!(
        " {}-{} of {} ",
        if app.visible.is_empty() { 0 } else { app.list_offset + 1 },
        app.list_offset + app.visible_page().len(),
        app.visible.len()
    )
}

/// Uppercase the first character, as the category labels are stored
/// lowercase in the catalog.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("games"), "Games");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ai"), "Ai");
    }
}
