//! Input form dialog component

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use crate::ui::forms::FieldKind;

const FIELD_HEIGHT: u16 = 3;

/// Input form dialog component
pub struct FormDialog;

impl FormDialog {
    /// Render the open form, one bordered input box per field
    pub fn render(f: &mut Frame, app: &App) {
        let Some(form) = app.form.as_ref() else {
            return;
        };

        let field_count = form.state.fields.len() as u16;
        let dialog_height = field_count * FIELD_HEIGHT + 4; // outer border + instructions
        let dialog_area = LayoutManager::centered_rect_lines(60, dialog_height, f.area());
        f.render_widget(Clear, dialog_area);

        let outer = Block::default()
            .borders(Borders::ALL)
            .title(form.state.title)
            .title_alignment(Alignment::Center);
        f.render_widget(outer, dialog_area);

        for (index, field) in form.state.fields.iter().enumerate() {
            let field_rect = Rect::new(
                dialog_area.x + 2,
                dialog_area.y + 1 + index as u16 * FIELD_HEIGHT,
                dialog_area.width.saturating_sub(4),
                FIELD_HEIGHT,
            );

            // Skip fields that would overflow a short terminal
            if field_rect.bottom() >= dialog_area.bottom() {
                break;
            }

            let focused = index == form.state.focus;
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };

            let value = if matches!(field.kind, FieldKind::Select { .. }) {
                format!("◂ {} ▸", field.display_value())
            } else {
                field.display_value().to_string()
            };

            let input = Paragraph::new(value)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(field.label)
                        .title_alignment(Alignment::Left),
                )
                .style(style)
                .alignment(Alignment::Left);
            f.render_widget(input, field_rect);
        }

        // Instructions on the last line inside the dialog
        let instructions_rect = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 1 + field_count * FIELD_HEIGHT,
            dialog_area.width.saturating_sub(4),
            1,
        );
        if instructions_rect.bottom() < dialog_area.bottom() {
            let instructions = Paragraph::new("Press Enter to save, Esc to cancel")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(instructions, instructions_rect);
        }
    }
}
