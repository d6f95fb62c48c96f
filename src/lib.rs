//! Penstock - a terminal dashboard for hydraulic pipe networks
//!
//! This library provides a terminal-based interface for describing a
//! hydraulic pipe network - nodes, conduits, surge tank, orifice, reservoir,
//! flow schedule, and computational parameters - and for displaying an
//! analysis of that network. Records are held in memory for the lifetime of
//! a session; the interactive UI is built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`network`] - In-memory record store for the network entities
//! * [`analysis`] - Output requests and the analysis routine
//! * [`csv_preview`] - Verbatim CSV table loading
//! * [`ui`] - Terminal user interface components

/// Output requests and the network analysis routine
pub mod analysis;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Verbatim CSV preview loading
pub mod csv_preview;

/// Logging setup for debugging and error tracking
pub mod logger;

/// In-memory record store for the hydraulic network
pub mod network;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the store and its record types for convenient access
pub use network::{
    Conduit, ComputationalParams, FlowSchedule, HydraulicNetwork, Material, Orifice, Reservoir, SurgeTank,
};
