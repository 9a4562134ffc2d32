//! Domain primitives for output-vs-reference comparison.

use std::fmt;
use std::ops::Index;

/// Number of metrics in a [`MetricVector`].
pub const NUM_METRICS: usize = 5;

/// Number of metrics gated by a threshold.
pub const NUM_BOUNDED: usize = 4;

/// Upper bounds applied to the first four metrics, in percent.
pub const DEFAULT_THRESHOLDS: [f64; NUM_BOUNDED] = [2.0, 1.0, 0.0, 1.0];

/// Display label for the unbounded `sum_abs_diff` threshold.
pub const UNBOUNDED_LABEL: &str = "Inf";

/// Report names for each metric, in vector order.
pub const METRIC_NAMES: [&str; NUM_METRICS] = [
    "min pixel accuracy",
    "average pixel accuracy",
    "percentage of correct values",
    "pixel-wise l2 error",
    "global sum difference",
];

/// Error statistics for one comparison.
///
/// The first four entries are percentages of `ref_scale`; `sum_abs_diff` is
/// the raw L1 distance and is informational only.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct MetricVector {
    pub max_error_pct: f64,
    pub mean_error_pct: f64,
    pub percent_wrong: f64,
    pub l2_error_pct: f64,
    pub sum_abs_diff: f64,
}

impl MetricVector {
    /// Values in report order.
    pub fn to_array(&self) -> [f64; NUM_METRICS] {
        [
            self.max_error_pct,
            self.mean_error_pct,
            self.percent_wrong,
            self.l2_error_pct,
            self.sum_abs_diff,
        ]
    }
}

impl Index<usize> for MetricVector {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        match idx {
            0 => &self.max_error_pct,
            1 => &self.mean_error_pct,
            2 => &self.percent_wrong,
            3 => &self.l2_error_pct,
            4 => &self.sum_abs_diff,
            _ => panic!("metric index {idx} out of range"),
        }
    }
}

/// Upper bounds for the four bounded metrics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Thresholds(pub [f64; NUM_BOUNDED]);

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds(DEFAULT_THRESHOLDS)
    }
}

impl Thresholds {
    pub(crate) fn get(&self, idx: usize) -> f64 {
        self.0[idx]
    }

    /// Threshold cells for a report row: four numbers then the unbounded marker.
    pub fn report_cells(&self) -> [String; NUM_METRICS] {
        [
            self.0[0].to_string(),
            self.0[1].to_string(),
            self.0[2].to_string(),
            self.0[3].to_string(),
            UNBOUNDED_LABEL.to_string(),
        ]
    }
}

/// Per-metric outcome.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "Pass",
            Status::Fail => "Fail",
        }
    }

    pub fn from_pass(pass: bool) -> Self {
        if pass {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking a [`MetricVector`] against [`Thresholds`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Evaluation {
    pub statuses: [Status; NUM_BOUNDED],
    pub verdict: bool,
}

impl Evaluation {
    pub fn verdict_status(&self) -> Status {
        Status::from_pass(self.verdict)
    }
}

/// Format a metric value the way report cells expect (`nan`, `inf`, `2.5`, `10.0`).
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{value:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_report_order() {
        let m = MetricVector {
            max_error_pct: 1.0,
            mean_error_pct: 2.0,
            percent_wrong: 3.0,
            l2_error_pct: 4.0,
            sum_abs_diff: 5.0,
        };
        for (idx, value) in m.to_array().iter().enumerate() {
            assert_eq!(m[idx], *value);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_sum_panics() {
        let _ = MetricVector::default()[NUM_METRICS];
    }

    #[test]
    fn thresholds_follow_metric_order() {
        let t = Thresholds::default();
        let bounded: Vec<f64> = (0..NUM_BOUNDED).map(|idx| t.get(idx)).collect();
        assert_eq!(bounded, DEFAULT_THRESHOLDS.to_vec());
    }

    #[test]
    fn threshold_cells_end_with_unbounded_marker() {
        assert_eq!(Thresholds::default().report_cells(), ["2", "1", "0", "1", "Inf"]);
    }

    #[test]
    fn values_format_like_report_cells() {
        assert_eq!(format_value(10.0), "10.0");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_value(f64::NAN), "nan");
    }
}
