//! atelier-session
//!
//! Session-scoped state and the submit pipeline: the append-only iteration
//! store, the output-language setting, and the single logical transaction
//! that takes an upload through ingestion, the model call, and commit or
//! rollback.

pub mod error;
pub mod language;
pub mod session;
pub mod store;

pub use error::SessionError;
pub use language::OutputLanguage;
pub use session::{ProgressStats, Session, SubmitOutcome};
pub use store::IterationStore;
