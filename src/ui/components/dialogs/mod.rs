//! Dialog components module

mod analyzing_dialog;
mod error_dialog;
mod form_dialog;
mod info_dialog;

pub use analyzing_dialog::AnalyzingDialog;
pub use error_dialog::ErrorDialog;
pub use form_dialog::FormDialog;
pub use info_dialog::InfoDialog;
