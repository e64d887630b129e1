//! Figure rendering: charts for responses, a canvas for pole-zero maps.

use super::ThemeColors;
use crate::plot::{Figure, MarkerKind, SeriesKind};
use crate::presenter::PlotSlot;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap,
    },
    Frame,
};

/// Draw one figure slot, or its error in place of the figure.
pub(super) fn draw_slot(
    f: &mut Frame<'_>,
    area: Rect,
    slot: &PlotSlot,
    fallback_title: &str,
    colors: &ThemeColors,
) {
    match slot {
        Ok(fig) if has_markers(fig) => draw_map(f, area, fig, colors),
        Ok(fig) => draw_chart(f, area, fig, colors),
        Err(message) => draw_error(f, area, fallback_title, message, colors),
    }
}

fn has_markers(fig: &Figure) -> bool {
    fig.series
        .iter()
        .any(|s| matches!(s.kind, SeriesKind::Markers(_)))
}

fn figure_block<'a>(title: &str, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(colors.heading))
        .style(Style::default().bg(colors.bg))
}

fn draw_chart(f: &mut Frame<'_>, area: Rect, fig: &Figure, colors: &ThemeColors) {
    // Point buffers must outlive the datasets borrowing them.
    let buffers: Vec<(SeriesKind, Vec<(f64, f64)>)> = fig
        .series
        .iter()
        .map(|s| {
            let points = match s.kind {
                SeriesKind::Step => s.step_outline(),
                _ => s.points.clone(),
            };
            let finite = points
                .into_iter()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect();
            (s.kind, finite)
        })
        .collect();

    let datasets: Vec<Dataset<'_>> = buffers
        .iter()
        .map(|(kind, points)| {
            let color = match kind {
                SeriesKind::Guide => colors.guide,
                SeriesKind::Markers(MarkerKind::Pole) => colors.pole,
                SeriesKind::Markers(MarkerKind::Zero) => colors.zero,
                SeriesKind::Line | SeriesKind::Step => colors.trace,
            };
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(points)
        })
        .collect();

    let [x_min, x_max] = fig.x_bounds;
    let [y_min, y_max] = fig.y_bounds;

    let x_axis = Axis::default()
        .title(fig.x_label.clone())
        .style(Style::default().fg(colors.text))
        .bounds(fig.x_bounds)
        .labels(vec![
            format_axis_label(x_min),
            format_axis_label((x_min + x_max) / 2.0),
            format_axis_label(x_max),
        ]);

    let y_axis = Axis::default()
        .title(fig.y_label.clone())
        .style(Style::default().fg(colors.text))
        .bounds(fig.y_bounds)
        .labels(vec![
            format_axis_label(y_min),
            format_axis_label((y_min + y_max) / 2.0),
            format_axis_label(y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(figure_block(&fig.title, colors))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(None);

    f.render_widget(chart, area);
}

fn draw_map(f: &mut Frame<'_>, area: Rect, fig: &Figure, colors: &ThemeColors) {
    let title = format!("{} ({} / {})", fig.title, fig.x_label, fig.y_label);

    let canvas = Canvas::default()
        .block(figure_block(&title, colors))
        .x_bounds(fig.x_bounds)
        .y_bounds(fig.y_bounds)
        .marker(Marker::Braille)
        .paint(|ctx| {
            for series in fig.series.iter().filter(|s| s.kind == SeriesKind::Guide) {
                for pair in series.points.windows(2) {
                    let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, colors.guide));
                }
            }
            ctx.layer();

            for series in &fig.series {
                let SeriesKind::Markers(kind) = series.kind else {
                    continue;
                };
                let color = match kind {
                    MarkerKind::Pole => colors.pole,
                    MarkerKind::Zero => colors.zero,
                };
                for &(x, y) in &series.points {
                    ctx.print(
                        x,
                        y,
                        Span::styled(
                            kind.symbol(),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

fn draw_error(f: &mut Frame<'_>, area: Rect, title: &str, message: &str, colors: &ThemeColors) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Cannot draw this figure",
            Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(colors.text))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(figure_block(title, colors))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// Format axis label with smart precision.
fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}
