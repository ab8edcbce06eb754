use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::view_models::{HeaderViewModel, ScreenViewModel};

pub(crate) fn render(f: &mut Frame, area: Rect, vm: &HeaderViewModel) {
    let title = Line::from(vec![
        Span::styled(
            "== ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            vm.title.clone(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " ==",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    f.render_widget(Paragraph::new(title), layout[0]);
    f.render_widget(
        Paragraph::new(Span::styled(
            vm.service_url.clone(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right),
        layout[1],
    );
}

/// One-line flash area: a transport-error banner takes precedence over the
/// informational empty-forecast notice.
pub(crate) fn render_flash(f: &mut Frame, area: Rect, vm: &ScreenViewModel) {
    let line = if let Some(banner) = &vm.banner {
        Line::from(vec![
            Span::styled(
                banner.message.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", banner.dismiss_hint),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else if let Some(notice) = &vm.notice {
        Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::LightBlue),
        ))
    } else {
        return;
    };

    f.render_widget(Paragraph::new(line), area);
}
