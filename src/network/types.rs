//! Record types for the hydraulic network entities.

use std::fmt;
use std::str::FromStr;

/// Pipe wall material offered by the conduit and surge tank forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Concrete,
    Steel,
}

impl Material {
    /// All selectable materials, in form display order.
    pub const ALL: [Material; 2] = [Material::Concrete, Material::Steel];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Concrete => "Concrete",
            Material::Steel => "Steel",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Concrete" => Ok(Material::Concrete),
            "Steel" => Ok(Material::Steel),
            other => Err(format!("unknown material '{other}'")),
        }
    }
}

/// A pipe segment connecting two network nodes.
///
/// `cplus` and `cminus` are the characteristic coefficients along the C+
/// and C- characteristics; they are stored for display only.
#[derive(Debug, Clone, PartialEq)]
pub struct Conduit {
    pub length: f64,
    pub diameter: f64,
    pub thickness: f64,
    pub manning: f64,
    pub material: Material,
    pub celerity: f64,
    pub cplus: f64,
    pub cminus: f64,
    pub numseg: u32,
}

/// Open standpipe absorbing pressure transients.
#[derive(Debug, Clone, PartialEq)]
pub struct SurgeTank {
    pub diameter: f64,
    pub top_elevation: f64,
    pub bottom_elevation: f64,
    pub material: Material,
    pub thickness: f64,
    pub manning: f64,
    pub celerity: f64,
}

/// Flow-restricting device with separate discharge coefficients per
/// flow direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Orifice {
    pub diameter: f64,
    pub cd_upward: f64,
    pub cd_downward: f64,
    pub cplus: f64,
    pub cminus: f64,
}

/// Reservoir boundary, described only by its water level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reservoir {
    pub water_level: f64,
}

/// Inflow schedule as parallel time/discharge sequences.
///
/// The sequences are stored exactly as entered; their lengths are not
/// required to match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowSchedule {
    pub time: Vec<f64>,
    pub discharge: Vec<f64>,
}

/// Time-stepping parameters for an analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputationalParams {
    /// Computational time step (s).
    pub dtcomp: f64,
    /// Output interval (s).
    pub dtout: f64,
    /// Maximum simulation time (s).
    pub tmax: f64,
}

impl Default for ComputationalParams {
    fn default() -> Self {
        Self {
            dtcomp: 0.01,
            dtout: 0.1,
            tmax: 500.0,
        }
    }
}
