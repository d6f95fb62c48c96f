//! Reusable UI components

pub mod csv_view;
pub mod dialogs;
pub mod elevation_chart;
pub mod help_panel;
pub mod results_view;
pub mod section_view;
pub mod sidebar;
pub mod status_bar;

pub use csv_view::CsvView;
pub use elevation_chart::ElevationChart;
pub use help_panel::HelpPanel;
pub use results_view::ResultsView;
pub use section_view::SectionView;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
