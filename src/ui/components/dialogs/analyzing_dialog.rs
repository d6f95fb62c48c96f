//! Simple modal dialog shown while the analysis task runs

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::layout::LayoutManager;

pub struct AnalyzingDialog;

impl AnalyzingDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect(50, 25, f.area());

        let spinner = "⟳"; // simple indicator
        let lines = vec![
            Line::from(Span::styled(
                format!("{spinner} Running network analysis..."),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::raw(format!("{} output requests", app.requests.len()))),
        ];

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Please wait"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));

        // Clear the area first to draw a modal
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}
