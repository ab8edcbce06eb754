use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::presentation::view_models::RowViewModel;

pub(crate) fn render(f: &mut Frame, area: Rect, rows: &[RowViewModel]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Detailed forecast ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));

    if rows.is_empty() {
        let placeholder = Paragraph::new("No forecast loaded.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    row.date.clone(),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(row.headline.clone(), Style::default().fg(Color::White)),
            ])];
            for category in &row.category_lines {
                lines.push(Line::from(Span::styled(
                    format!("    {}", category),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(Text::from(lines))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
