use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::presentation::view_models::{StatusBarViewModel, StatusLevel};

pub(crate) fn render(f: &mut Frame, area: Rect, vm: &StatusBarViewModel) {
    let color = match vm.level {
        StatusLevel::Info => Color::Gray,
        StatusLevel::Success => Color::Green,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    };

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            vm.message.clone(),
            Style::default().fg(color),
        )),
        layout[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            vm.hints.clone(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right),
        layout[1],
    );
}
