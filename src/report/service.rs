//! Evaluator session: header priming, per-comparison rows and diagnostics.

use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::Path;

use ndarray::ArrayViewD;

use crate::common::config::AppCfg;
use crate::common::error::{CmpCode, CmpError, CmpResult};
use crate::common::log::{self, Level};
use crate::common::time;
use crate::metrics::console;
use crate::metrics::domain::Thresholds;
use crate::metrics::service::{compute_metrics, evaluate};

use super::domain::{data_row, header_row, ReportCfg, ReportSink};

/// One report session.
///
/// The first `generate_report` call writes the header row. `test_index` is
/// written as-is into every data row; callers advance it themselves.
/// Not thread-safe: share behind a lock if needed.
pub struct Evaluator<W: Write = Stdout> {
    cfg: ReportCfg,
    thresholds: Thresholds,
    header_written: bool,
    test_index: u64,
    diagnostics: W,
}

impl Evaluator<Stdout> {
    /// Evaluator printing its summaries to stdout.
    pub fn new(cfg: ReportCfg) -> Self {
        Self::with_diagnostics(cfg, io::stdout())
    }
}

impl<W: Write> Evaluator<W> {
    /// Evaluator printing its summaries to `diagnostics`.
    pub fn with_diagnostics(cfg: ReportCfg, diagnostics: W) -> Self {
        Self {
            cfg,
            thresholds: Thresholds::default(),
            header_written: false,
            test_index: 0,
            diagnostics,
        }
    }

    pub fn header_written(&self) -> bool {
        self.header_written
    }

    pub fn test_index(&self) -> u64 {
        self.test_index
    }

    pub fn set_test_index(&mut self, index: u64) {
        self.test_index = index;
    }

    /// Move to the next test and return the new index.
    pub fn advance_test_index(&mut self) -> u64 {
        self.test_index += 1;
        self.test_index
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn diagnostics(&self) -> &W {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> W {
        self.diagnostics
    }

    /// Append to `sink` and return the verdict.
    ///
    /// The first call only writes the header and returns `Ok(true)`, even when
    /// data is supplied, unless `emit_on_priming_call` is set. Every later
    /// call needs both arrays. When the first call may emit a row, passing
    /// exactly one array is rejected before the header is written.
    pub fn generate_report<S>(
        &mut self,
        sink: &mut S,
        computed: Option<ArrayViewD<'_, f64>>,
        reference: Option<ArrayViewD<'_, f64>>,
    ) -> CmpResult<bool>
    where
        S: ReportSink + ?Sized,
    {
        let pair = match (computed, reference) {
            (Some(c), Some(r)) => Ok(Some((c, r))),
            (None, None) => Ok(None),
            _ => Err(CmpError::invalid(
                "generate_report needs both computed and reference, or neither",
            )),
        };

        if !self.header_written {
            // Validate before the header goes out when this call may also emit a row.
            let pair = if self.cfg.emit_on_priming_call {
                pair?
            } else {
                None
            };
            return match pair {
                Some(pair) => self.emit_row(sink, pair, true),
                None => {
                    self.write_header(sink)?;
                    Ok(true)
                }
            };
        }

        match pair? {
            Some(pair) => self.emit_row(sink, pair, false),
            None => Err(CmpError::invalid(
                "generate_report needs both computed and reference after the header",
            )),
        }
    }

    fn write_header<S>(&mut self, sink: &mut S) -> CmpResult<()>
    where
        S: ReportSink + ?Sized,
    {
        sink.write_row(&header_row())?;
        self.header_written = true;
        log::log_json(
            self.cfg.log_level,
            Level::Info,
            "report",
            "report.header",
            CmpCode::Ok as u32,
            0,
        );
        Ok(())
    }

    fn emit_row<S>(
        &mut self,
        sink: &mut S,
        (computed, reference): (ArrayViewD<'_, f64>, ArrayViewD<'_, f64>),
        with_header: bool,
    ) -> CmpResult<bool>
    where
        S: ReportSink + ?Sized,
    {
        let start = time::now_ms();
        let metrics = compute_metrics(computed, reference)?;
        let eval = evaluate(&metrics, &self.thresholds);
        if with_header {
            self.write_header(sink)?;
        }
        console::write_summary(
            &mut self.diagnostics,
            &metrics,
            &self.thresholds,
            &eval,
            &self.cfg.palette,
        )?;
        sink.write_row(&data_row(self.test_index, &metrics, &self.thresholds, &eval))?;
        log::log_json(
            self.cfg.log_level,
            Level::Info,
            "report",
            "report.row",
            CmpCode::Ok as u32,
            time::elapsed_ms(start),
        );

        Ok(eval.verdict)
    }
}

/// Compare one pair and write a fresh CSV report (header plus one row) to `path`.
///
/// Relative paths resolve against `cfg.report_root`. Returns the verdict.
pub fn compare_matrices(
    cfg: &AppCfg,
    computed: ArrayViewD<'_, f64>,
    reference: ArrayViewD<'_, f64>,
    path: impl AsRef<Path>,
) -> CmpResult<bool> {
    let path = cfg.report_root.join(path.as_ref());
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    let mut wtr = csv::Writer::from_writer(file);

    let mut evaluator = Evaluator::new(ReportCfg {
        emit_on_priming_call: false,
        ..ReportCfg::from_cfg(cfg)
    });
    evaluator.generate_report(&mut wtr, None, None)?;
    let verdict = evaluator.generate_report(&mut wtr, Some(computed), Some(reference))?;
    wtr.flush()?;

    log::log_json(
        cfg.log_level,
        Level::Debug,
        "report",
        "report.compare_matrices",
        CmpCode::Ok as u32,
        0,
    );
    Ok(verdict)
}
