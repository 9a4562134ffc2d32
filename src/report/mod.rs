//! CSV report emission for comparison sessions.

pub mod domain;
pub mod dump;
pub mod service;

pub use domain::{header_row, ReportCfg, ReportSink};
pub use dump::debug_dump;
pub use service::{compare_matrices, Evaluator};
