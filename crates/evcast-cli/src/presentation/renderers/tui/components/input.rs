use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::view_models::InputViewModel;

pub(crate) fn render(f: &mut Frame, area: Rect, vm: &InputViewModel) {
    let border_color = if vm.validation_error.is_some() {
        Color::Red
    } else if vm.submit_enabled {
        Color::Cyan
    } else {
        Color::Yellow
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Forecast horizon (months) ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));

    let action_style = if vm.submit_enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {}_", vm.value),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("[ {} ]", vm.action_label), action_style),
    ];

    if let Some(error) = &vm.validation_error {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
