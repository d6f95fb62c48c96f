//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Sidebar sizing
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 28;
pub const SIDEBAR_MIN_WIDTH: u16 = 20;
pub const SIDEBAR_MAX_WIDTH: u16 = 40;

// Display
pub const FLOAT_PRECISION_DEFAULT: usize = 3;
pub const FLOAT_PRECISION_MAX: usize = 9;

// Success Messages
pub const SUCCESS_NODE_SAVED: &str = "✅ Node saved";
pub const SUCCESS_CONDUIT_SAVED: &str = "✅ Conduit saved";
pub const SUCCESS_SURGE_TANK_SAVED: &str = "✅ Surge tank properties set";
pub const SUCCESS_ORIFICE_SAVED: &str = "✅ Orifice properties set";
pub const SUCCESS_RESERVOIR_SAVED: &str = "✅ Reservoir water level set";
pub const SUCCESS_FLOW_SCHEDULE_SAVED: &str = "✅ Flow schedule set";
pub const SUCCESS_PARAMS_SAVED: &str = "✅ Computational parameters set";
pub const SUCCESS_REQUEST_ADDED: &str = "✅ Output request added";
pub const SUCCESS_ANALYSIS_DONE: &str = "✅ Analysis complete";
pub const SUCCESS_CSV_LOADED: &str = "✅ CSV file loaded";

// Error Messages
pub const ERROR_CSV_LOAD_FAILED: &str = "❌ Failed to load CSV file";
pub const ERROR_NO_REQUESTS: &str = "❌ No output requests to analyze. Press 'a' to add one.";
pub const ERROR_NOT_A_REQUEST: &str = "❌ Requests must start with NODE or ELEM";

// Config
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";
