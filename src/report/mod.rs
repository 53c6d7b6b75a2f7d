//! Report module - run summaries and metadata export

pub mod run_export;
pub mod summary;

pub use run_export::*;
pub use summary::*;
