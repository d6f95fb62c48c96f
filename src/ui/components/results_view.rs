//! Analysis results pane

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::super::app::App;
use crate::analysis::{self, ResultRecord};
use crate::ui::layout::LayoutManager;

/// Analysis results component
pub struct ResultsView;

impl ResultsView {
    /// Render the results table and the raw result mapping
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let Some(results) = app.results.as_ref() else {
            let notice = Paragraph::new("No analysis results yet. Press 'r' to run the analysis.")
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Results")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(notice, area);
            return;
        };

        let chunks = LayoutManager::results_layout(area);

        // One row per request: its output columns and the reported values
        let rows: Vec<Row> = results
            .iter()
            .map(|(request, record)| {
                let (head, pressure, elev) = match record {
                    ResultRecord::Node { head, pressure, .. } => (
                        app.format_value(*head),
                        app.format_value(*pressure),
                        String::new(),
                    ),
                    ResultRecord::Element { elev, .. } => (String::new(), String::new(), app.format_value(*elev)),
                };
                let q = match record {
                    ResultRecord::Node { q, .. } | ResultRecord::Element { q, .. } => app.format_value(*q),
                };
                Row::new(vec![
                    format!("{request}: {}", request.column_names()),
                    q,
                    head,
                    pressure,
                    elev,
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec!["Output", "Q", "HEAD", "PRESSURE", "ELEV"]).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Results")
                .title_alignment(Alignment::Center),
        );

        f.render_widget(table, chunks[0]);

        // Raw result mapping, as the original dumped it
        let dump = serde_json::to_string_pretty(&analysis::results_json(results))
            .unwrap_or_else(|_| "{}".to_string());
        let raw = Paragraph::new(dump)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Raw Results")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false });
        f.render_widget(raw, chunks[1]);
    }
}
