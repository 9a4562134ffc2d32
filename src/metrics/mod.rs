//! Comparison metrics between a computed array and its reference.

pub mod console;
pub mod domain;
pub mod service;

pub use console::Palette;
pub use domain::{Evaluation, MetricVector, Status, Thresholds};
pub use service::{compute_metrics, evaluate};
