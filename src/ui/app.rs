//! Application state and business logic

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use ratatui::widgets::TableState;
use tokio::task::JoinHandle;

use crate::analysis::{self, AnalysisResults, OutputRequest};
use crate::config::Config;
use crate::constants::{
    ERROR_CSV_LOAD_FAILED, ERROR_NOT_A_REQUEST, ERROR_NO_REQUESTS, SUCCESS_CONDUIT_SAVED, SUCCESS_CSV_LOADED,
    SUCCESS_FLOW_SCHEDULE_SAVED, SUCCESS_NODE_SAVED, SUCCESS_ORIFICE_SAVED, SUCCESS_PARAMS_SAVED,
    SUCCESS_REQUEST_ADDED, SUCCESS_RESERVOIR_SAVED, SUCCESS_SURGE_TANK_SAVED,
};
use crate::csv_preview::CsvTable;
use crate::network::{
    Conduit, ComputationalParams, FlowSchedule, HydraulicNetwork, Material, Orifice, SurgeTank,
};
use crate::ui::forms::{FormField, FormState};

/// Input sections listed in the sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Nodes,
    Conduits,
    SurgeTank,
    Orifice,
    Reservoir,
    FlowSchedule,
    Parameters,
    Analysis,
    CsvPreview,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Nodes,
        Section::Conduits,
        Section::SurgeTank,
        Section::Orifice,
        Section::Reservoir,
        Section::FlowSchedule,
        Section::Parameters,
        Section::Analysis,
        Section::CsvPreview,
    ];

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Section::Nodes => "Nodes",
            Section::Conduits => "Conduits",
            Section::SurgeTank => "Surge Tank",
            Section::Orifice => "Orifice",
            Section::Reservoir => "Reservoir",
            Section::FlowSchedule => "Flow Schedule",
            Section::Parameters => "Computational Parameters",
            Section::Analysis => "Network Analysis",
            Section::CsvPreview => "CSV Preview",
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Nodes => "📍",
            Section::Conduits => "🔧",
            Section::SurgeTank => "🛢️",
            Section::Orifice => "⭕",
            Section::Reservoir => "🌊",
            Section::FlowSchedule => "📈",
            Section::Parameters => "⚙️",
            Section::Analysis => "📊",
            Section::CsvPreview => "📄",
        }
    }

    /// The identifier used for this section in the configuration file.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Nodes => "nodes",
            Section::Conduits => "conduits",
            Section::SurgeTank => "surge-tank",
            Section::Orifice => "orifice",
            Section::Reservoir => "reservoir",
            Section::FlowSchedule => "flow-schedule",
            Section::Parameters => "parameters",
            Section::Analysis => "analysis",
            Section::CsvPreview => "csv",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.slug() == slug)
    }
}

/// Which store operation an open form feeds on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Node,
    Conduit,
    SurgeTank,
    Orifice,
    Reservoir,
    FlowSchedule,
    Parameters,
    OutputRequest,
    CsvPath,
}

/// A form dialog currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveForm {
    pub target: FormTarget,
    pub state: FormState,
}

const MATERIAL_OPTIONS: &[&str] = &["Concrete", "Steel"];

/// Application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub network: HydraulicNetwork,
    pub section: Section,
    pub selected_row: usize,
    pub table_state: TableState,
    pub form: Option<ActiveForm>,
    pub requests: Vec<OutputRequest>,
    pub results: Option<AnalysisResults>,
    pub analyzing: bool,
    // Background analysis task handle (if a run is in progress)
    pub analysis_task: Option<JoinHandle<AnalysisResults>>,
    pub csv_table: Option<CsvTable>,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub show_help: bool,           // Toggle for help panel
    pub help_scroll_offset: usize, // Scroll position for help panel
}

impl App {
    /// Create a new App instance
    #[must_use]
    pub fn new(config: Config) -> Self {
        let section = Section::from_slug(&config.ui.default_section).unwrap_or(Section::Nodes);

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            should_quit: false,
            config,
            network: HydraulicNetwork::new(),
            section,
            selected_row: 0,
            table_state,
            form: None,
            requests: Vec::new(),
            results: None,
            analyzing: false,
            analysis_task: None,
            csv_table: None,
            error_message: None,
            info_message: None,
            show_help: false,
            help_scroll_offset: 0,
        }
    }

    /// Format a numeric table cell with the configured precision.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.config.display.float_precision)
    }

    /// Number of selectable rows in the current section's table.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self.section {
            Section::Nodes => self.network.nodes().len(),
            Section::Conduits => self.network.conduits().len(),
            Section::Analysis => self.requests.len(),
            _ => 0,
        }
    }

    pub fn next_section(&mut self) {
        let index = Section::ALL
            .iter()
            .position(|section| *section == self.section)
            .unwrap_or(0);
        self.section = Section::ALL[(index + 1) % Section::ALL.len()];
        self.reset_selection();
    }

    pub fn previous_section(&mut self) {
        let index = Section::ALL
            .iter()
            .position(|section| *section == self.section)
            .unwrap_or(0);
        self.section = Section::ALL[index.checked_sub(1).unwrap_or(Section::ALL.len() - 1)];
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.selected_row = 0;
        self.table_state.select(Some(0));
    }

    pub fn next_row(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected_row = (self.selected_row + 1) % count;
            self.table_state.select(Some(self.selected_row));
        }
    }

    pub fn previous_row(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected_row = self.selected_row.checked_sub(1).unwrap_or(count - 1);
            self.table_state.select(Some(self.selected_row));
        }
    }

    /// Open an empty form for the current section.
    ///
    /// Singleton sections pre-fill from the stored record so re-submission
    /// overwrites it; the parameters form starts from the widget defaults.
    pub fn open_form(&mut self) {
        let form = match self.section {
            Section::Nodes => ActiveForm {
                target: FormTarget::Node,
                state: FormState::new(
                    "📍 Node Input",
                    vec![
                        FormField::integer("Node Number", 1),
                        FormField::float("Elevation (m)", 0.0),
                    ],
                ),
            },
            Section::Conduits => ActiveForm {
                target: FormTarget::Conduit,
                state: FormState::new("🔧 Conduit Input", Self::conduit_fields(None, None)),
            },
            Section::SurgeTank => ActiveForm {
                target: FormTarget::SurgeTank,
                state: FormState::new(
                    "🛢️ Surge Tank Input",
                    Self::surge_tank_fields(self.network.surge_tank()),
                ),
            },
            Section::Orifice => ActiveForm {
                target: FormTarget::Orifice,
                state: FormState::new("⭕ Orifice Input", Self::orifice_fields(self.network.orifice())),
            },
            Section::Reservoir => {
                let mut field = FormField::float("Water Level (m)", 0.0);
                if let Some(reservoir) = self.network.reservoir() {
                    field = field.with_value(reservoir.water_level.to_string());
                }
                ActiveForm {
                    target: FormTarget::Reservoir,
                    state: FormState::new("🌊 Reservoir Input", vec![field]),
                }
            }
            Section::FlowSchedule => {
                let (time, discharge) = match self.network.flow_schedule() {
                    Some(schedule) => (
                        Self::join_floats(&schedule.time),
                        Self::join_floats(&schedule.discharge),
                    ),
                    None => (String::new(), String::new()),
                };
                ActiveForm {
                    target: FormTarget::FlowSchedule,
                    state: FormState::new(
                        "📈 Flow Schedule Input",
                        vec![
                            FormField::float_list("Time Points (comma-separated)").with_value(time),
                            FormField::float_list("Discharge Points (comma-separated)").with_value(discharge),
                        ],
                    ),
                }
            }
            Section::Parameters => {
                let params = self.network.computational_params().unwrap_or_default();
                ActiveForm {
                    target: FormTarget::Parameters,
                    state: FormState::new(
                        "⚙️ Computational Parameters",
                        vec![
                            FormField::float("DTCOMP", 0.0).with_value(params.dtcomp.to_string()),
                            FormField::float("DTOUT", 0.0).with_value(params.dtout.to_string()),
                            FormField::float("TMAX", 0.0).with_value(params.tmax.to_string()),
                        ],
                    ),
                }
            }
            Section::Analysis => ActiveForm {
                target: FormTarget::OutputRequest,
                state: FormState::new(
                    "📊 Add Output Request",
                    vec![FormField::text("Request (e.g., NODE 10 or ELEM ST)")],
                ),
            },
            Section::CsvPreview => ActiveForm {
                target: FormTarget::CsvPath,
                state: FormState::new("📄 Load CSV File", vec![FormField::text("CSV File Path")]),
            },
        };

        self.form = Some(form);
    }

    /// Open the form pre-filled from the selected row.
    ///
    /// Falls back to [`App::open_form`] for sections without rows; its
    /// singleton pre-fill already behaves like an edit there.
    pub fn open_edit_form(&mut self) {
        match self.section {
            Section::Nodes => {
                let Some((number, elevation)) = self
                    .network
                    .nodes()
                    .iter()
                    .nth(self.selected_row)
                    .map(|(number, elevation)| (*number, *elevation))
                else {
                    return self.open_form();
                };
                self.form = Some(ActiveForm {
                    target: FormTarget::Node,
                    state: FormState::new(
                        "📍 Node Input",
                        vec![
                            FormField::integer("Node Number", 1).with_value(number.to_string()),
                            FormField::float("Elevation (m)", 0.0).with_value(elevation.to_string()),
                        ],
                    ),
                });
            }
            Section::Conduits => {
                let Some((id, conduit)) = self
                    .network
                    .conduits()
                    .iter()
                    .nth(self.selected_row)
                    .map(|(id, conduit)| (id.clone(), conduit.clone()))
                else {
                    return self.open_form();
                };
                self.form = Some(ActiveForm {
                    target: FormTarget::Conduit,
                    state: FormState::new("🔧 Conduit Input", Self::conduit_fields(Some(&id), Some(&conduit))),
                });
            }
            _ => self.open_form(),
        }
    }

    fn conduit_fields(id: Option<&str>, conduit: Option<&Conduit>) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("Conduit ID"),
            FormField::float("Length (m)", 0.0),
            FormField::float("Diameter (m)", 0.0),
            FormField::float("Thickness (m)", 0.0),
            FormField::float("Manning's Coefficient", 0.0),
            FormField::select("Material", MATERIAL_OPTIONS),
            FormField::float("Celerity (m/s)", 0.0),
            FormField::float("CPLUS", 0.0),
            FormField::float("CMINUS", 0.0),
            FormField::integer("NUMSEG", 1),
        ];
        if let Some(id) = id {
            fields[0] = FormField::text("Conduit ID").with_value(id);
        }
        if let Some(conduit) = conduit {
            fields[1] = fields[1].clone().with_value(conduit.length.to_string());
            fields[2] = fields[2].clone().with_value(conduit.diameter.to_string());
            fields[3] = fields[3].clone().with_value(conduit.thickness.to_string());
            fields[4] = fields[4].clone().with_value(conduit.manning.to_string());
            fields[5] = fields[5].clone().with_value(conduit.material.as_str());
            fields[6] = fields[6].clone().with_value(conduit.celerity.to_string());
            fields[7] = fields[7].clone().with_value(conduit.cplus.to_string());
            fields[8] = fields[8].clone().with_value(conduit.cminus.to_string());
            fields[9] = fields[9].clone().with_value(conduit.numseg.to_string());
        }
        fields
    }

    fn surge_tank_fields(surge_tank: Option<&SurgeTank>) -> Vec<FormField> {
        let mut fields = vec![
            FormField::float("Diameter (m)", 0.0),
            FormField::float("Top Elevation (m)", 0.0),
            FormField::float("Bottom Elevation (m)", 0.0),
            FormField::select("Material", MATERIAL_OPTIONS),
            FormField::float("Thickness (m)", 0.0),
            FormField::float("Manning's Coefficient", 0.0),
            FormField::float("Celerity (m/s)", 0.0),
        ];
        if let Some(tank) = surge_tank {
            fields[0] = fields[0].clone().with_value(tank.diameter.to_string());
            fields[1] = fields[1].clone().with_value(tank.top_elevation.to_string());
            fields[2] = fields[2].clone().with_value(tank.bottom_elevation.to_string());
            fields[3] = fields[3].clone().with_value(tank.material.as_str());
            fields[4] = fields[4].clone().with_value(tank.thickness.to_string());
            fields[5] = fields[5].clone().with_value(tank.manning.to_string());
            fields[6] = fields[6].clone().with_value(tank.celerity.to_string());
        }
        fields
    }

    fn orifice_fields(orifice: Option<&Orifice>) -> Vec<FormField> {
        let mut fields = vec![
            FormField::float("Diameter (m)", 0.0),
            FormField::float("Cd Upward", 0.0),
            FormField::float("Cd Downward", 0.0),
            FormField::float("CPLUS", 0.0),
            FormField::float("CMINUS", 0.0),
        ];
        if let Some(orifice) = orifice {
            fields[0] = fields[0].clone().with_value(orifice.diameter.to_string());
            fields[1] = fields[1].clone().with_value(orifice.cd_upward.to_string());
            fields[2] = fields[2].clone().with_value(orifice.cd_downward.to_string());
            fields[3] = fields[3].clone().with_value(orifice.cplus.to_string());
            fields[4] = fields[4].clone().with_value(orifice.cminus.to_string());
        }
        fields
    }

    fn join_floats(values: &[f64]) -> String {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Close the form without touching the store.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form.
    ///
    /// On a parse error the form stays open and the error dialog shows; on
    /// success the store mutation has happened and the form closes.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };

        match self.apply_form(&form) {
            Ok(message) => {
                self.info_message = Some(message.to_string());
                self.reset_selection();
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.form = Some(form);
            }
        }
    }

    fn apply_form(&mut self, form: &ActiveForm) -> Result<&'static str> {
        let state = &form.state;
        match form.target {
            FormTarget::Node => {
                let number = state.field(0).integer_value()?;
                let elevation = state.field(1).float_value()?;
                self.network.add_node(number, elevation);
                log::info!("node {number} saved with elevation {elevation}");
                Ok(SUCCESS_NODE_SAVED)
            }
            FormTarget::Conduit => {
                let id = state.field(0).text_value();
                let numseg = u32::try_from(state.field(9).integer_value()?).context("NUMSEG is out of range")?;
                let conduit = Conduit {
                    length: state.field(1).float_value()?,
                    diameter: state.field(2).float_value()?,
                    thickness: state.field(3).float_value()?,
                    manning: state.field(4).float_value()?,
                    material: Material::from_str(state.field(5).selected_option())
                        .map_err(anyhow::Error::msg)?,
                    celerity: state.field(6).float_value()?,
                    cplus: state.field(7).float_value()?,
                    cminus: state.field(8).float_value()?,
                    numseg,
                };
                log::info!("conduit '{id}' saved");
                self.network.add_conduit(id, conduit);
                Ok(SUCCESS_CONDUIT_SAVED)
            }
            FormTarget::SurgeTank => {
                let surge_tank = SurgeTank {
                    diameter: state.field(0).float_value()?,
                    top_elevation: state.field(1).float_value()?,
                    bottom_elevation: state.field(2).float_value()?,
                    material: Material::from_str(state.field(3).selected_option())
                        .map_err(anyhow::Error::msg)?,
                    thickness: state.field(4).float_value()?,
                    manning: state.field(5).float_value()?,
                    celerity: state.field(6).float_value()?,
                };
                self.network.set_surge_tank(surge_tank);
                log::info!("surge tank properties saved");
                Ok(SUCCESS_SURGE_TANK_SAVED)
            }
            FormTarget::Orifice => {
                let orifice = Orifice {
                    diameter: state.field(0).float_value()?,
                    cd_upward: state.field(1).float_value()?,
                    cd_downward: state.field(2).float_value()?,
                    cplus: state.field(3).float_value()?,
                    cminus: state.field(4).float_value()?,
                };
                self.network.set_orifice(orifice);
                log::info!("orifice properties saved");
                Ok(SUCCESS_ORIFICE_SAVED)
            }
            FormTarget::Reservoir => {
                let water_level = state.field(0).float_value()?;
                self.network.set_reservoir(water_level);
                log::info!("reservoir water level set to {water_level}");
                Ok(SUCCESS_RESERVOIR_SAVED)
            }
            FormTarget::FlowSchedule => {
                let schedule = FlowSchedule {
                    time: state.field(0).float_list_value()?,
                    discharge: state.field(1).float_list_value()?,
                };
                log::info!(
                    "flow schedule saved with {} time points and {} discharge points",
                    schedule.time.len(),
                    schedule.discharge.len()
                );
                self.network.set_flow_schedule(schedule);
                Ok(SUCCESS_FLOW_SCHEDULE_SAVED)
            }
            FormTarget::Parameters => {
                let params = ComputationalParams {
                    dtcomp: state.field(0).float_value()?,
                    dtout: state.field(1).float_value()?,
                    tmax: state.field(2).float_value()?,
                };
                self.network.set_computational_params(params);
                log::info!("computational parameters saved");
                Ok(SUCCESS_PARAMS_SAVED)
            }
            FormTarget::OutputRequest => {
                let line = state.field(0).text_value();
                match analysis::OutputRequest::parse(&line)? {
                    Some(request) => {
                        log::info!("output request added: {request}");
                        self.requests.push(request);
                        Ok(SUCCESS_REQUEST_ADDED)
                    }
                    None => anyhow::bail!(ERROR_NOT_A_REQUEST),
                }
            }
            FormTarget::CsvPath => {
                let path = PathBuf::from(state.field(0).text_value());
                let table = CsvTable::load(&path).context(ERROR_CSV_LOAD_FAILED)?;
                log::info!("loaded CSV preview from {} ({} rows)", table.source, table.rows.len());
                self.csv_table = Some(table);
                Ok(SUCCESS_CSV_LOADED)
            }
        }
    }

    /// Remove the selected output request (Network Analysis section).
    pub fn remove_selected_request(&mut self) {
        if self.section == Section::Analysis && self.selected_row < self.requests.len() {
            let request = self.requests.remove(self.selected_row);
            log::info!("output request removed: {request}");
            if self.selected_row >= self.requests.len() && self.selected_row > 0 {
                self.selected_row -= 1;
            }
            self.table_state.select(Some(self.selected_row));
        }
    }

    /// Start the analysis as a background task.
    pub fn run_analysis(&mut self) {
        if self.analysis_task.is_some() {
            return;
        }
        if self.requests.is_empty() {
            self.error_message = Some(ERROR_NO_REQUESTS.to_string());
            return;
        }

        self.analyzing = true;
        let requests = self.requests.clone();
        log::info!("analysis started for {} requests", requests.len());
        self.analysis_task = Some(tokio::spawn(async move { analysis::analyze(&requests) }));
    }
}
