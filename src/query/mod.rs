pub mod engine;
pub mod trace;

pub use engine::{run, QueryOutcome, FILE_PARAM};
pub use trace::{Severity, TraceEntry};
