use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::components;
use crate::presentation::view_models::ScreenViewModel;

pub(crate) fn draw(f: &mut Frame, vm: &ScreenViewModel) {
    let has_flash = vm.banner.is_some() || vm.notice.is_some();

    let mut constraints = vec![
        Constraint::Length(1), // header
        Constraint::Length(3), // horizon input
    ];
    if has_flash {
        constraints.push(Constraint::Length(1)); // banner / notice line
    }
    constraints.push(Constraint::Min(8)); // charts + table
    if vm.metrics.visible {
        constraints.push(Constraint::Length(metrics_height(vm)));
    }
    constraints.push(Constraint::Length(1)); // status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let mut idx = 0;
    components::header::render(f, chunks[idx], &vm.header);
    idx += 1;
    components::input::render(f, chunks[idx], &vm.input);
    idx += 1;
    if has_flash {
        components::header::render_flash(f, chunks[idx], vm);
        idx += 1;
    }
    render_main(f, chunks[idx], vm);
    idx += 1;
    if vm.metrics.visible {
        components::metrics::render(f, chunks[idx], &vm.metrics);
        idx += 1;
    }
    components::status::render(f, chunks[idx], &vm.status_bar);
}

fn render_main(f: &mut Frame, area: Rect, vm: &ScreenViewModel) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    components::charts::render_column(f, halves[0], vm.charts.as_ref());
    components::table::render(f, halves[1], &vm.rows);
}

fn metrics_height(vm: &ScreenViewModel) -> u16 {
    let content = if vm.metrics.loading
        || vm.metrics.error.is_some()
        || vm.metrics.empty_message.is_some()
    {
        1
    } else {
        vm.metrics.cards.len().clamp(1, 6)
    };
    content as u16 + 2 // borders
}
