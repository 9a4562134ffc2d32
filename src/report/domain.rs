//! Report rows and the sink contract they are appended to.

use std::io::Write;

use crate::common::config::AppCfg;
use crate::common::error::CmpResult;
use crate::metrics::domain::{
    format_value, Evaluation, MetricVector, Thresholds, METRIC_NAMES, NUM_METRICS,
};
use crate::metrics::Palette;

/// Number of cells in every header and data row.
pub const ROW_CELLS: usize = 2 + 2 * NUM_METRICS;

/// Row-oriented destination owned by the caller; the evaluator only appends.
pub trait ReportSink {
    fn write_row(&mut self, cells: &[String]) -> CmpResult<()>;
}

impl<W: Write> ReportSink for csv::Writer<W> {
    fn write_row(&mut self, cells: &[String]) -> CmpResult<()> {
        self.write_record(cells)?;
        Ok(())
    }
}

/// In-memory sink, mostly useful for inspection and tests.
impl ReportSink for Vec<Vec<String>> {
    fn write_row(&mut self, cells: &[String]) -> CmpResult<()> {
        self.push(cells.to_vec());
        Ok(())
    }
}

/// Behaviour switches for an evaluator session.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ReportCfg {
    pub palette: Palette,
    /// Compute and emit a data row on the header call when data is supplied.
    pub emit_on_priming_call: bool,
    pub log_level: u8,
}

impl Default for ReportCfg {
    fn default() -> Self {
        Self {
            palette: Palette::PLAIN,
            emit_on_priming_call: false,
            log_level: 1,
        }
    }
}

impl ReportCfg {
    pub fn from_cfg(cfg: &AppCfg) -> Self {
        Self {
            palette: Palette::from_cfg(cfg),
            emit_on_priming_call: cfg.emit_on_priming_call,
            log_level: cfg.log_level,
        }
    }
}

/// Header row: test index, obtained columns, threshold columns, verdict.
pub fn header_row() -> Vec<String> {
    let mut row = Vec::with_capacity(ROW_CELLS);
    row.push("TEST INDEX".to_string());
    for (idx, name) in METRIC_NAMES.iter().enumerate() {
        row.push(format!("M{} OBTAINED {}", idx + 1, name.to_uppercase()));
    }
    for (idx, name) in METRIC_NAMES.iter().enumerate() {
        row.push(format!("M{} THRESHOLD {}", idx + 1, name.to_uppercase()));
    }
    row.push("PASS / FAIL".to_string());
    row
}

/// Data row for one comparison.
pub fn data_row(
    test_index: u64,
    metrics: &MetricVector,
    thresholds: &Thresholds,
    eval: &Evaluation,
) -> Vec<String> {
    let mut row = Vec::with_capacity(ROW_CELLS);
    row.push(test_index.to_string());
    row.extend(metrics.to_array().iter().map(|v| format_value(*v)));
    row.extend(thresholds.report_cells());
    row.push(eval.verdict_status().as_str().to_string());
    row
}
