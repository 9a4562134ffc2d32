//! Metric computation and the pass/fail policy.

use ndarray::{ArrayView, Dimension};

use crate::common::error::{CmpError, CmpResult};

use super::domain::{Evaluation, MetricVector, Status, Thresholds, NUM_BOUNDED};

/// Share of `ref_scale` above which an element counts as wrong.
const WRONG_FRACTION: f64 = 0.02;

/// Max that propagates NaN instead of skipping it.
fn nan_max(acc: f64, value: f64) -> f64 {
    if acc.is_nan() || value.is_nan() {
        f64::NAN
    } else {
        acc.max(value)
    }
}

/// Normalise a raw error against `ref_scale`.
///
/// A zero reference keeps an exact zero and maps everything else to `+inf`.
fn to_percent(raw: f64, ref_scale: f64) -> f64 {
    if ref_scale == 0.0 {
        if raw == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        raw / ref_scale * 100.0
    }
}

/// Compute the five comparison metrics for `computed` against `reference`.
///
/// Arrays may differ in shape but must hold the same number of elements;
/// both are walked in logical (row-major) order.
pub fn compute_metrics<D, E>(
    computed: ArrayView<'_, f64, D>,
    reference: ArrayView<'_, f64, E>,
) -> CmpResult<MetricVector>
where
    D: Dimension,
    E: Dimension,
{
    if computed.len() != reference.len() {
        return Err(CmpError::shape_mismatch(computed.len(), reference.len()));
    }
    if reference.is_empty() {
        return Err(CmpError::invalid("cannot compare empty arrays"));
    }

    let n = reference.len() as f64;
    let ref_scale = reference.iter().map(|r| r.abs()).fold(0.0, nan_max);
    let diff: Vec<f64> = computed
        .iter()
        .zip(reference.iter())
        .map(|(c, r)| (c - r).abs())
        .collect();

    let max_raw = diff.iter().copied().fold(0.0, nan_max);
    let sum_abs_diff: f64 = diff.iter().sum();
    let mean_raw = sum_abs_diff / n;
    let l2_raw = (diff.iter().map(|d| d * d).sum::<f64>() / n).sqrt();

    // No zero-reference guard here: with ref_scale == 0 any nonzero diff is wrong.
    let cutoff = WRONG_FRACTION * ref_scale;
    let wrong = diff.iter().filter(|d| **d > cutoff).count();

    Ok(MetricVector {
        max_error_pct: to_percent(max_raw, ref_scale),
        mean_error_pct: to_percent(mean_raw, ref_scale),
        percent_wrong: wrong as f64 / n * 100.0,
        l2_error_pct: to_percent(l2_raw, ref_scale),
        sum_abs_diff,
    })
}

/// Check the four bounded metrics against `thresholds`.
///
/// A NaN `max_error_pct` fails every bounded metric. NaN in any other metric
/// is not special-cased and compares as within bounds.
pub fn evaluate(metrics: &MetricVector, thresholds: &Thresholds) -> Evaluation {
    let nan_max_error = metrics.max_error_pct.is_nan();
    let mut statuses = [Status::Pass; NUM_BOUNDED];
    for (idx, status) in statuses.iter_mut().enumerate() {
        if metrics[idx] > thresholds.get(idx) || nan_max_error {
            *status = Status::Fail;
        }
    }
    let verdict = statuses.iter().all(|s| *s == Status::Pass);
    Evaluation { statuses, verdict }
}
