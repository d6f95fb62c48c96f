//! Node elevation chart

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::super::app::App;

/// Scatter chart of node number vs. elevation
pub struct ElevationChart;

impl ElevationChart {
    /// Render the elevation chart for the stored nodes
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let points: Vec<(f64, f64)> = app
            .network
            .nodes()
            .iter()
            .map(|(number, elevation)| (*number as f64, *elevation))
            .collect();

        if points.is_empty() {
            return;
        }

        let (x_bounds, y_bounds) = Self::bounds(&points);

        let datasets = vec![Dataset::default()
            .name("Elevation")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Cyan))
            .data(&points)];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Node Elevations")
                    .title_alignment(Alignment::Center),
            )
            .x_axis(
                Axis::default()
                    .title("Node Number")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(x_bounds)
                    .labels(Self::axis_labels(x_bounds)),
            )
            .y_axis(
                Axis::default()
                    .title("Elevation (m)")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(y_bounds)
                    .labels(Self::axis_labels(y_bounds)),
            );

        f.render_widget(chart, area);
    }

    /// Axis bounds with a margin so single points don't sit on the frame.
    fn bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
        let mut x_min = f64::MAX;
        let mut x_max = f64::MIN;
        let mut y_min = f64::MAX;
        let mut y_max = f64::MIN;

        for (x, y) in points {
            x_min = x_min.min(*x);
            x_max = x_max.max(*x);
            y_min = y_min.min(*y);
            y_max = y_max.max(*y);
        }

        let x_pad = ((x_max - x_min) * 0.1).max(1.0);
        let y_pad = ((y_max - y_min) * 0.1).max(1.0);

        (
            [x_min - x_pad, x_max + x_pad],
            [y_min - y_pad, y_max + y_pad],
        )
    }

    fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
        let mid = (bounds[0] + bounds[1]) / 2.0;
        vec![
            format!("{:.1}", bounds[0]),
            format!("{mid:.1}"),
            format!("{:.1}", bounds[1]),
        ]
    }
}
