//! Main pane: tables for the current input section

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::super::app::{App, Section};
use super::{CsvView, ElevationChart, ResultsView};
use crate::ui::layout::LayoutManager;

/// Section view component
pub struct SectionView;

impl SectionView {
    /// Render the current section
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        match app.section {
            Section::Nodes => Self::render_nodes(f, area, app),
            Section::Conduits => Self::render_conduits(f, area, app),
            Section::SurgeTank => Self::render_surge_tank(f, area, app),
            Section::Orifice => Self::render_orifice(f, area, app),
            Section::Reservoir => Self::render_reservoir(f, area, app),
            Section::FlowSchedule => Self::render_flow_schedule(f, area, app),
            Section::Parameters => Self::render_parameters(f, area, app),
            Section::Analysis => Self::render_analysis(f, area, app),
            Section::CsvPreview => CsvView::render(f, area, app),
        }
    }

    fn header_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    fn selection_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    fn section_block(title: String) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
    }

    /// Column label with the measurement unit, when units are enabled.
    fn with_unit(app: &App, label: &str, unit: &str) -> String {
        if app.config.display.show_units {
            format!("{label} ({unit})")
        } else {
            label.to_string()
        }
    }

    fn render_notice(f: &mut Frame, area: Rect, title: String, message: &str) {
        let notice = Paragraph::new(message)
            .block(Self::section_block(title))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(notice, area);
    }

    fn render_nodes(f: &mut Frame, area: Rect, app: &App) {
        let title = format!("📍 {}", Section::Nodes.title());
        if app.network.nodes().is_empty() {
            Self::render_notice(
                f,
                area,
                title,
                "No nodes defined. Press 'a' to add the first node.",
            );
            return;
        }

        let chunks = LayoutManager::nodes_section_layout(area);

        let rows: Vec<Row> = app
            .network
            .nodes()
            .iter()
            .map(|(number, elevation)| {
                Row::new(vec![number.to_string(), app.format_value(*elevation)])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(12)])
            .header(Row::new(vec![
                "Node Number".to_string(),
                Self::with_unit(app, "Elevation", "m"),
            ])
            .style(Self::header_style()))
            .block(Self::section_block(title))
            .row_highlight_style(Self::selection_style())
            .highlight_symbol("→ ");

        f.render_stateful_widget(table, chunks[0], &mut app.table_state.clone());
        ElevationChart::render(f, chunks[1], app);
    }

    fn render_conduits(f: &mut Frame, area: Rect, app: &App) {
        let title = format!("🔧 {}", Section::Conduits.title());
        if app.network.conduits().is_empty() {
            Self::render_notice(
                f,
                area,
                title,
                "No conduits defined. Press 'a' to add the first conduit.",
            );
            return;
        }

        let rows: Vec<Row> = app
            .network
            .conduits()
            .iter()
            .map(|(id, conduit)| {
                Row::new(vec![
                    id.clone(),
                    app.format_value(conduit.length),
                    app.format_value(conduit.diameter),
                    app.format_value(conduit.thickness),
                    app.format_value(conduit.manning),
                    conduit.material.to_string(),
                    app.format_value(conduit.celerity),
                    app.format_value(conduit.cplus),
                    app.format_value(conduit.cminus),
                    conduit.numseg.to_string(),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(8),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(7),
        ];

        let table = Table::new(rows, widths)
            .header(Row::new(vec![
                "ID".to_string(),
                Self::with_unit(app, "Length", "m"),
                Self::with_unit(app, "Diam", "m"),
                Self::with_unit(app, "Thick", "m"),
                "Manning".to_string(),
                "Material".to_string(),
                Self::with_unit(app, "Celerity", "m/s"),
                "CPLUS".to_string(),
                "CMINUS".to_string(),
                "NUMSEG".to_string(),
            ])
            .style(Self::header_style()))
            .block(Self::section_block(title))
            .row_highlight_style(Self::selection_style())
            .highlight_symbol("→ ");

        f.render_stateful_widget(table, area, &mut app.table_state.clone());
    }

    /// Property/value table for the singleton sections.
    fn render_properties(f: &mut Frame, area: Rect, title: String, properties: Vec<(String, String)>) {
        let rows: Vec<Row> = properties
            .into_iter()
            .map(|(name, value)| Row::new(vec![name, value]))
            .collect();

        let table = Table::new(rows, [Constraint::Min(24), Constraint::Min(12)])
            .header(Row::new(vec!["Property", "Value"]).style(Self::header_style()))
            .block(Self::section_block(title));

        f.render_widget(table, area);
    }

    fn render_surge_tank(f: &mut Frame, area: Rect, app: &App) {
        let title = format!("🛢️ {}", Section::SurgeTank.title());
        let Some(tank) = app.network.surge_tank() else {
            return Self::render_notice(
                f,
                area,
                title,
                "Surge tank not set. Press 'a' to enter its properties.",
            );
        };

        Self::render_properties(
            f,
            area,
            title,
            vec![
                (Self::with_unit(app, "Diameter", "m"), app.format_value(tank.diameter)),
                (
                    Self::with_unit(app, "Top Elevation", "m"),
                    app.format_value(tank.top_elevation),
                ),
                (
                    Self::with_unit(app, "Bottom Elevation", "m"),
                    app.format_value(tank.bottom_elevation),
                ),
                ("Material".to_string(), tank.material.to_string()),
                (Self::with_unit(app, "Thickness", "m"), app.format_value(tank.thickness)),
                ("Manning's Coefficient".to_string(), app.format_value(tank.manning)),
                (
                    Self::with_unit(app, "Celerity", "m/s"),
                    app.format_value(tank.celerity),
                ),
            ],
        );
    }

    fn render_orifice(f: &mut Frame, area: Rect, app: &App) {
        let title = format!("⭕ {}", Section::Orifice.title());
        let Some(orifice) = app.network.orifice() else {
            return Self::render_notice(
                f,
                area,
                title,
                "Orifice not set. Press 'a' to enter its properties.",
            );
        };

        Self::render_properties(
            f,
            area,
            title,
            vec![
                (
                    Self::with_unit(app, "Diameter", "m"),
                    app.format_value(orifice.diameter),
                ),
                ("Cd Upward".to_string(), app.format_value(orifice.cd_upward)),
                ("Cd Downward".to_string(), app.format_value(orifice.cd_downward)),
                ("CPLUS".to_string(), app.format_value(orifice.cplus)),
                ("CMINUS".to_string(), app.format_value(orifice.cminus)),
            ],
        );
    }

    fn render_reservoir(f: &mut Frame, area: Rect, app: &App) {
        let title = format!("🌊 {}", Section::Reservoir.title());
        let Some(reservoir) = app.network.reservoir() else {
            return Self::render_notice(
                f,
                area,
                title,
                "Reservoir not set. Press 'a' to enter its water level.",
            );
        };

        Self::render_properties(
            f,
            area,
            title,
            vec![(
                Self::with_unit(app, "Water Level", "m"),
                app.format_value(reservoir.water_level),
            )],
        );
    }

    fn render_flow_schedule(f: &mut Frame, area: Rect, app: &App) {
        let title = format!("📈 {}", Section::FlowSchedule.title());
        let Some(schedule) = app.network.flow_schedule() else {
            return Self::render_notice(
                f,
                area,
                title,
                "Flow schedule not set. Press 'a' to enter time and discharge points.",
            );
        };

        // The sequences are parallel but may differ in length; show every
        // entry and leave the shorter column blank past its end.
        let row_count = schedule.time.len().max(schedule.discharge.len());
        let rows: Vec<Row> = (0..row_count)
            .map(|i| {
                let time = schedule.time.get(i).map(|t| app.format_value(*t)).unwrap_or_default();
                let discharge = schedule
                    .discharge
                    .get(i)
                    .map(|q| app.format_value(*q))
                    .unwrap_or_default();
                Row::new(vec![time, discharge])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Min(14), Constraint::Min(14)])
            .header(Row::new(vec![
                Self::with_unit(app, "Time", "s"),
                Self::with_unit(app, "Discharge", "m³/s"),
            ])
            .style(Self::header_style()))
            .block(Self::section_block(title));

        f.render_widget(table, area);
    }

    fn render_parameters(f: &mut Frame, area: Rect, app: &App) {
        let title = format!("⚙️ {}", Section::Parameters.title());
        let Some(params) = app.network.computational_params() else {
            return Self::render_notice(
                f,
                area,
                title,
                "Computational parameters not set. Press 'a' to enter them.",
            );
        };

        Self::render_properties(
            f,
            area,
            title,
            vec![
                ("DTCOMP".to_string(), app.format_value(params.dtcomp)),
                ("DTOUT".to_string(), app.format_value(params.dtout)),
                ("TMAX".to_string(), app.format_value(params.tmax)),
            ],
        );
    }

    fn render_analysis(f: &mut Frame, area: Rect, app: &App) {
        let chunks = LayoutManager::analysis_section_layout(area);

        let title = format!("📊 {}", Section::Analysis.title());
        if app.requests.is_empty() {
            Self::render_notice(
                f,
                chunks[0],
                title,
                "No output requests. Press 'a' to add one (e.g., NODE 10).",
            );
        } else {
            let items: Vec<ListItem> = app
                .requests
                .iter()
                .map(|request| ListItem::new(request.to_string()))
                .collect();

            let list = List::new(items)
                .block(Self::section_block(title))
                .highlight_style(Self::selection_style())
                .highlight_symbol("→ ");

            let mut state = ratatui::widgets::ListState::default();
            state.select(Some(app.selected_row));
            f.render_stateful_widget(list, chunks[0], &mut state);
        }

        ResultsView::render(f, chunks[1], app);
    }
}
