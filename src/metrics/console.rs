//! Human-readable summary block printed after each comparison.

use std::io::Write;

use colored::Color;

use crate::common::config::AppCfg;
use crate::common::error::CmpResult;

use super::domain::{format_value, Evaluation, MetricVector, Status, Thresholds};

const RULE: &str = "------------------------------------------------------------";

/// Console labels for the bounded metrics, in vector order.
const SUMMARY_LABELS: [&str; 4] = [
    "Min Pixel Accuracy",
    "Average Pixel Accuracy",
    "Percentage of wrong values",
    "Pixel-wise L2 error",
];

/// Styling applied to the summary block. Disabled palettes emit plain text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub const PLAIN: Palette = Palette { enabled: false };
    pub const ANSI: Palette = Palette { enabled: true };

    pub fn from_cfg(cfg: &AppCfg) -> Self {
        Palette {
            enabled: cfg.color.enabled(),
        }
    }

    /// Render a per-metric status; failures are shown in bright red.
    ///
    /// Escape codes are written whenever the palette is enabled, whether or
    /// not the destination is a terminal.
    pub fn status(&self, status: Status) -> String {
        match (status, self.enabled) {
            (Status::Fail, true) => paint(status.as_str(), Color::BrightRed),
            _ => status.as_str().to_string(),
        }
    }
}

fn paint(text: &str, color: Color) -> String {
    format!("\x1b[{}m{text}\x1b[0m", color.to_fg_str())
}

/// Render the summary block for one comparison.
pub fn render_summary(
    metrics: &MetricVector,
    thresholds: &Thresholds,
    eval: &Evaluation,
    palette: &Palette,
) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(" Obtained values \n");
    out.push_str(RULE);
    out.push('\n');
    for (idx, label) in SUMMARY_LABELS.iter().enumerate() {
        out.push_str(&format!(
            " Obtained {label}: {}% (max allowed={}%), {}\n",
            format_value(metrics[idx]),
            thresholds.get(idx),
            palette.status(eval.statuses[idx])
        ));
    }
    out.push_str(&format!(
        " Obtained Global Sum Difference: {}\n",
        format_value(metrics.sum_abs_diff)
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Write the summary block to `out`.
pub fn write_summary<W: Write>(
    out: &mut W,
    metrics: &MetricVector,
    thresholds: &Thresholds,
    eval: &Evaluation,
    palette: &Palette,
) -> CmpResult<()> {
    out.write_all(render_summary(metrics, thresholds, eval, palette).as_bytes())?;
    Ok(())
}
