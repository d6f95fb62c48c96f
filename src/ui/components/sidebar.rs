//! Sidebar listing the input sections

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::{App, Section};

/// Sidebar component
pub struct Sidebar;

impl Sidebar {
    /// Render the section list
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let items: Vec<ListItem> = Section::ALL
            .iter()
            .map(|section| {
                let style = if *section == app.section {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                let title = match Self::record_count(app, *section) {
                    Some(count) => format!("{} ({count})", section.title()),
                    None => section.title().to_string(),
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", section.icon()), style),
                    Span::styled(title, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("💧 Network")
                .title_alignment(Alignment::Center),
        );

        f.render_widget(list, area);
    }

    /// Record count badge for the keyed sections.
    fn record_count(app: &App, section: Section) -> Option<usize> {
        match section {
            Section::Nodes => Some(app.network.nodes().len()),
            Section::Conduits => Some(app.network.conduits().len()),
            Section::Analysis => Some(app.requests.len()),
            _ => None,
        }
    }
}
