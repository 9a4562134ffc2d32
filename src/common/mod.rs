//! Shared utilities that glue the metrics, report and matching domains together.
pub mod config;
pub mod error;
pub mod log;
pub mod time;

pub use config::{AppCfg, ColorMode};
pub use error::{CmpCode, CmpError, CmpResult};
