pub mod error;
pub mod logical_function;
pub mod genes;
pub mod evaluation;
pub mod export_import;
pub mod report;
pub mod sampling;
pub mod pipeline;


pub use error::{RegulatoryLogicError, Result};
pub use pipeline::{run, ReportConfig};
