//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::{App, Section};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if app.analyzing {
            "🔄 Running network analysis...".to_string()
        } else if app.form.is_some() {
            "Tab: next field • ←/→: change option • Enter: save • Esc: cancel".to_string()
        } else if app.section == Section::Analysis {
            "a: add request • d: remove request • r: run analysis • ?: help • q: quit".to_string()
        } else {
            "a: add/set • e: edit • J/K: sections • r: run analysis • ?: help • q: quit".to_string()
        };

        let status_color = if app.analyzing {
            Color::Yellow
        } else if app.error_message.is_some() {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
