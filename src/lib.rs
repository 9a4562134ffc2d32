// lib.rs - output-vs-reference comparison and reporting
pub mod common;
pub mod matching;
pub mod metrics;
pub mod report;

pub use common::{AppCfg, CmpCode, CmpError, CmpResult, ColorMode};
pub use matching::{check_match, check_match_with, ScoreOrder, TopK};
pub use metrics::{compute_metrics, evaluate, Evaluation, MetricVector, Palette, Status, Thresholds};
pub use report::{compare_matrices, debug_dump, Evaluator, ReportCfg, ReportSink};
