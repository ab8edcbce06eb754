use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::view_models::MetricsPanelViewModel;

pub(crate) fn render(f: &mut Frame, area: Rect, vm: &MetricsPanelViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(Span::styled(
            format!(" {} ", vm.title),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = if vm.loading {
        vec![Line::from(Span::styled(
            "Loading metrics...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if let Some(error) = &vm.error {
        vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))]
    } else if let Some(message) = &vm.empty_message {
        vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        vm.cards
            .iter()
            .map(|card| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<10}", card.category),
                        Style::default()
                            .fg(Color::LightCyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(card.detail.clone(), Style::default().fg(Color::White)),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
