//! Chart and table rendering for sweep results.
//!
//! Purely a projection of the core crate's numbers: faceted prevalence
//! curves laid out in presentation order, and a summary table with one
//! row per grid point.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
};

use episim_core::model::{Compartment, GridSummary, SimulationResult};
use episim_core::sweep::{SortOrder, SweepResults};

use crate::util::format::{format_count, format_levers, format_r0};

/// Render one facet per grid point, in the given presentation order.
///
/// The facet layout keeps the grid shape (exposure rates as rows,
/// infection probabilities as columns); ordering permutes which point
/// lands in which cell.
pub fn render_facets(
    frame: &mut Frame,
    area: Rect,
    results: &SweepResults,
    order: SortOrder,
    selected: usize,
) {
    let (rows, cols) = results.shape();
    if rows == 0 || cols == 0 {
        let msg = Paragraph::new("No grid points").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    let ordered = results.sorted_indices(order);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let slot = row * cols + col;
            let Some(&idx) = ordered.get(slot) else {
                continue;
            };
            let highlighted = slot == selected;
            render_prevalence_curve(
                frame,
                *cell,
                &results.series[idx],
                &results.summaries[idx],
                highlighted,
            );
        }
    }
}

/// One prevalence curve with its lever caption.
fn render_prevalence_curve(
    frame: &mut Frame,
    area: Rect,
    series: &SimulationResult,
    summary: &GridSummary,
    highlighted: bool,
) {
    let border_style = if highlighted {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format_levers(
            summary.exposure_rate,
            summary.infection_probability,
        ));

    if area.width < 16 || area.height < 5 {
        let msg = Paragraph::new("Area too small")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(msg, area);
        return;
    }

    // Chart data points: (step, mean infected count)
    let data: Vec<(f64, f64)> = series
        .prevalence()
        .into_iter()
        .enumerate()
        .map(|(step, infected)| (step as f64, infected))
        .collect();

    let x_max = data.last().map_or(1.0, |(x, _)| *x);
    // Pad the top so the peak does not sit on the frame edge.
    let y_max = (summary.peak_prevalence * 1.1).max(1.0);

    let dataset = Dataset::default()
        .name(Compartment::Infected.label())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Red))
        .data(&data);

    let x_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", x_max / 2.0)),
        Span::raw(format!("{x_max:.0}")),
    ];
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", y_max / 2.0)),
        Span::raw(format!("{y_max:.0}")),
    ];

    let x_axis = Axis::default().bounds([0.0, x_max]).labels(x_labels);
    let y_axis = Axis::default().bounds([0.0, y_max]).labels(y_labels);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Summary table: one row per grid point, in presentation order.
pub fn render_summary_table(
    frame: &mut Frame,
    area: Rect,
    results: &SweepResults,
    order: SortOrder,
    selected: usize,
) {
    let header = Row::new(vec![
        Cell::from("rate"),
        Cell::from("prob"),
        Cell::from("total cases"),
        Cell::from("peak"),
        Cell::from("peak step"),
        Cell::from("R0"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = results
        .sorted_indices(order)
        .into_iter()
        .enumerate()
        .map(|(slot, idx)| {
            let summary = &results.summaries[idx];
            let row = Row::new(vec![
                Cell::from(format!("{:.1}", summary.exposure_rate)),
                Cell::from(format!("{:.3}", summary.infection_probability)),
                Cell::from(format_count(summary.total_cases)),
                Cell::from(format_count(summary.peak_prevalence)),
                Cell::from(summary.peak_step.to_string()),
                Cell::from(format_r0(&summary.estimated_r0)),
            ]);
            if slot == selected {
                row.style(Style::default().fg(Color::Yellow))
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Grid summaries"),
    );

    frame.render_widget(table, area);
}
