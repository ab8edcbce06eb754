use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::presentation::view_models::{
    BarChartViewModel, ChartsViewModel, LineChartViewModel, SeriesEmphasis,
};

pub(crate) fn render_column(f: &mut Frame, area: Rect, charts: Option<&ChartsViewModel>) {
    let Some(charts) = charts else {
        let placeholder = Paragraph::new("Charts appear once a forecast is loaded.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Charts "));
        f.render_widget(placeholder, area);
        return;
    };

    let constraints = if charts.category_demand.is_some() {
        vec![
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ]
    } else {
        vec![Constraint::Percentage(50), Constraint::Percentage(50)]
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_line_chart(f, rows[0], &charts.sales);
    render_line_chart(f, rows[1], &charts.demand);
    if let Some(bar) = &charts.category_demand {
        render_bar_chart(f, rows[2], bar);
    }
}

fn render_line_chart(f: &mut Frame, area: Rect, vm: &LineChartViewModel) {
    let datasets = vm
        .series
        .iter()
        .map(|series| {
            let (color, marker) = match series.emphasis {
                SeriesEmphasis::Primary => (Color::Cyan, Marker::Braille),
                SeriesEmphasis::Secondary => (Color::DarkGray, Marker::Dot),
            };
            Dataset::default()
                .name(series.name.clone())
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&series.points)
        })
        .collect::<Vec<_>>();

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(Span::styled(
            format!(" {} ", vm.title),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )))
        .x_axis(
            Axis::default()
                .bounds(vm.x_bounds)
                .labels(vm.x_axis_labels.clone())
                .style(Style::default().fg(Color::Gray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, vm.y_max])
                .labels(vm.y_axis_labels.clone())
                .style(Style::default().fg(Color::Gray)),
        );

    f.render_widget(chart, area);
}

fn render_bar_chart(f: &mut Frame, area: Rect, vm: &BarChartViewModel) {
    let data: Vec<(&str, u64)> = vm
        .bars
        .iter()
        .map(|bar| (bar.label.as_str(), bar.value))
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(Span::styled(
            format!(" {} ", vm.title),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )))
        .data(&data)
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(chart, area);
}
