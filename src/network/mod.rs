//! In-memory record store for the hydraulic network.
//!
//! The store holds the entities entered through the dashboard forms and
//! returns them unchanged. Every add/set operation is an unconditional
//! upsert; re-submitting a record with the same key overwrites the previous
//! one. Nothing here touches the filesystem, the store lives and dies with
//! the session.

pub mod types;

use std::collections::BTreeMap;

pub use types::{Conduit, ComputationalParams, FlowSchedule, Material, Orifice, Reservoir, SurgeTank};

/// The network being described in the current session.
///
/// Keyed collections iterate in key order so tables and the elevation chart
/// render deterministically.
#[derive(Debug, Clone, Default)]
pub struct HydraulicNetwork {
    nodes: BTreeMap<i64, f64>,
    conduits: BTreeMap<String, Conduit>,
    surge_tank: Option<SurgeTank>,
    orifice: Option<Orifice>,
    reservoir: Option<Reservoir>,
    flow_schedule: Option<FlowSchedule>,
    computational_params: Option<ComputationalParams>,
}

impl HydraulicNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the network, or overwrite its elevation if the node
    /// number already exists.
    pub fn add_node(&mut self, node_number: i64, elevation: f64) {
        self.nodes.insert(node_number, elevation);
    }

    #[must_use]
    pub fn node(&self, node_number: i64) -> Option<f64> {
        self.nodes.get(&node_number).copied()
    }

    #[must_use]
    pub fn nodes(&self) -> &BTreeMap<i64, f64> {
        &self.nodes
    }

    /// Add a conduit to the network, overwriting any previous record with
    /// the same id.
    pub fn add_conduit(&mut self, conduit_id: impl Into<String>, conduit: Conduit) {
        self.conduits.insert(conduit_id.into(), conduit);
    }

    #[must_use]
    pub fn conduit(&self, conduit_id: &str) -> Option<&Conduit> {
        self.conduits.get(conduit_id)
    }

    #[must_use]
    pub fn conduits(&self) -> &BTreeMap<String, Conduit> {
        &self.conduits
    }

    pub fn set_surge_tank(&mut self, surge_tank: SurgeTank) {
        self.surge_tank = Some(surge_tank);
    }

    #[must_use]
    pub fn surge_tank(&self) -> Option<&SurgeTank> {
        self.surge_tank.as_ref()
    }

    pub fn set_orifice(&mut self, orifice: Orifice) {
        self.orifice = Some(orifice);
    }

    #[must_use]
    pub fn orifice(&self) -> Option<&Orifice> {
        self.orifice.as_ref()
    }

    pub fn set_reservoir(&mut self, water_level: f64) {
        self.reservoir = Some(Reservoir { water_level });
    }

    #[must_use]
    pub fn reservoir(&self) -> Option<Reservoir> {
        self.reservoir
    }

    pub fn set_flow_schedule(&mut self, schedule: FlowSchedule) {
        self.flow_schedule = Some(schedule);
    }

    #[must_use]
    pub fn flow_schedule(&self) -> Option<&FlowSchedule> {
        self.flow_schedule.as_ref()
    }

    pub fn set_computational_params(&mut self, params: ComputationalParams) {
        self.computational_params = Some(params);
    }

    #[must_use]
    pub fn computational_params(&self) -> Option<ComputationalParams> {
        self.computational_params
    }
}
