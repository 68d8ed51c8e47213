use {
    crate::{
        feed::FeedView,
        ui::renderer::{badge_style_color, heading, EMPTY_TEXT, LOADING_TEXT},
    },
    ratatui::{
        layout::{Constraint, Layout as RatLayout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
        Frame,
    },
};

/// Render the main UI layout
pub fn render_layout(f: &mut Frame, area: Rect, view: &FeedView, status: &str) {
    let chunks = RatLayout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Feed
            Constraint::Length(3), // Footer/Status
        ])
        .split(area);

    render_header(f, chunks[0], view);

    match view {
        FeedView::Loading => render_message(f, chunks[1], LOADING_TEXT),
        FeedView::Empty => render_message(f, chunks[1], EMPTY_TEXT),
        FeedView::Feed { .. } => render_feed_table(f, chunks[1], view),
    }

    render_footer(f, chunks[2], status);
}

fn render_header(f: &mut Frame, area: Rect, view: &FeedView) {
    let header = Block::default().borders(Borders::ALL).title("Events History");

    let text = vec![Line::from(vec![
        Span::styled(
            heading(view),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ('r' refresh, 'q' or Esc quit)"),
    ])];

    f.render_widget(Paragraph::new(text).block(header), area);
}

fn render_message(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(message.to_string()).block(block), area);
}

fn render_feed_table(f: &mut Frame, area: Rect, view: &FeedView) {
    let header = Row::new(vec!["Event", "Time", "Details"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .items()
        .iter()
        .map(|item| {
            let badge = Span::styled(
                item.label,
                Style::default()
                    .fg(badge_style_color(item.badge_color))
                    .add_modifier(Modifier::BOLD),
            );

            let details = if item.malformed {
                Span::styled(item.summary(), Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(item.summary())
            };

            Row::new(vec![
                Cell::from(badge),
                Cell::from(Span::styled(
                    item.display_timestamp.clone(),
                    Style::default().fg(Color::Gray),
                )),
                Cell::from(details),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(18), // Event
        Constraint::Length(24), // Time
        Constraint::Min(20),    // Details
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Recent Events"));

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame, area: Rect, status: &str) {
    let footer = Block::default().borders(Borders::ALL).title("Status");

    let text = vec![Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::Green)),
        Span::raw(status.to_string()),
    ])];

    f.render_widget(
        Paragraph::new(text).block(footer).wrap(Wrap { trim: true }),
        area,
    );
}
