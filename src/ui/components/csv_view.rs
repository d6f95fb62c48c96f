//! CSV preview pane

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::super::app::App;

/// Verbatim CSV table component
pub struct CsvView;

impl CsvView {
    /// Render the loaded CSV file, or a hint when none is loaded
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let Some(table) = app.csv_table.as_ref() else {
            let notice = Paragraph::new("No CSV file loaded. Press 'a' to choose a file.")
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("📄 CSV Preview")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(notice, area);
            return;
        };

        let column_count = table.column_count().max(1);
        let widths = vec![Constraint::Ratio(1, column_count as u32); column_count];

        let rows: Vec<Row> = table
            .rows
            .iter()
            .map(|cells| Row::new(cells.clone()))
            .collect();

        let preview = Table::new(rows, widths)
            .header(Row::new(table.header.clone()).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("📄 {}", table.source))
                    .title_alignment(Alignment::Center),
            );

        f.render_widget(preview, area);
    }
}
