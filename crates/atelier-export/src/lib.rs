//! atelier-export
//!
//! JSON export documents: the per-iteration history and the full request
//! audit log. Both exclude image bytes and neither is loaded back in.

pub mod error;
pub mod history;
pub mod logs;

pub use error::ExportError;
pub use history::export_history;
pub use logs::export_full_logs;
