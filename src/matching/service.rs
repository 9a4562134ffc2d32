//! Top-1 / top-5 checks over a flattened score array.

use std::cmp::Ordering;

use ndarray::{ArrayView, Dimension};

use crate::common::error::{CmpError, CmpResult};

use super::domain::{ScoreOrder, TopK, TOP_K};

/// Ascending order with NaN placed after every number; ties keep index order.
fn ascending(a: f64, b: f64) -> Ordering {
    a.is_nan()
        .cmp(&b.is_nan())
        .then_with(|| a.partial_cmp(&b).unwrap_or(Ordering::Equal))
}

/// Indices of `scores` sorted best-first under `order`.
pub fn rank<D: Dimension>(scores: ArrayView<'_, f64, D>, order: ScoreOrder) -> Vec<usize> {
    let flat: Vec<f64> = scores.iter().copied().collect();
    let mut idx: Vec<usize> = (0..flat.len()).collect();
    match order {
        ScoreOrder::LowerIsBetter => idx.sort_by(|&a, &b| ascending(flat[a], flat[b])),
        ScoreOrder::HigherIsBetter => idx.sort_by(|&a, &b| {
            flat[a]
                .is_nan()
                .cmp(&flat[b].is_nan())
                .then_with(|| ascending(flat[b], flat[a]))
        }),
    }
    idx
}

/// Check whether `expected` is the first, or among the first five, entries
/// of the ascending argsort of `output`.
///
/// "Top" means the smallest scores here.
pub fn check_match<D: Dimension>(output: ArrayView<'_, f64, D>, expected: usize) -> CmpResult<TopK> {
    check_match_with(output, expected, ScoreOrder::LowerIsBetter)
}

/// [`check_match`] with an explicit score order.
pub fn check_match_with<D: Dimension>(
    output: ArrayView<'_, f64, D>,
    expected: usize,
    order: ScoreOrder,
) -> CmpResult<TopK> {
    if output.len() < TOP_K {
        return Err(CmpError::invalid(format!(
            "top-{TOP_K} check needs at least {TOP_K} scores, got {}",
            output.len()
        )));
    }
    let ranked = rank(output, order);
    Ok(TopK {
        top1: ranked[0] == expected,
        top5: ranked[..TOP_K].contains(&expected),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CmpCode;
    use ndarray::{arr1, arr2};

    const SCORES: [f64; 6] = [0.1, 0.9, 0.3, 0.05, 0.2, 0.6];

    #[test]
    fn smallest_score_is_top1() {
        let out = arr1(&SCORES);
        let m = check_match(out.view(), 3).unwrap();
        assert_eq!(m, TopK { top1: true, top5: true });
    }

    #[test]
    fn ascending_top5_excludes_the_largest() {
        let out = arr1(&SCORES);
        // index 1 holds the largest score, so it is last in ascending order
        let m = check_match(out.view(), 1).unwrap();
        assert_eq!(m, TopK { top1: false, top5: false });

        let m = check_match(out.view(), 5).unwrap();
        assert_eq!(m, TopK { top1: false, top5: true });
    }

    #[test]
    fn rank_pins_ascending_argsort() {
        let out = arr1(&SCORES);
        assert_eq!(rank(out.view(), ScoreOrder::LowerIsBetter), vec![3, 0, 4, 2, 5, 1]);
    }

    #[test]
    fn higher_is_better_reverses_the_ranking() {
        let out = arr1(&SCORES);
        assert_eq!(rank(out.view(), ScoreOrder::HigherIsBetter), vec![1, 5, 2, 4, 0, 3]);
        let m = check_match_with(out.view(), 1, ScoreOrder::HigherIsBetter).unwrap();
        assert_eq!(m, TopK { top1: true, top5: true });
    }

    #[test]
    fn multi_dimensional_output_is_flattened() {
        let out = arr2(&[[0.1, 0.9, 0.3], [0.05, 0.2, 0.6]]);
        let m = check_match(out.view(), 3).unwrap();
        assert!(m.top1);
    }

    #[test]
    fn ties_keep_index_order() {
        let out = arr1(&[0.5, 0.5, 0.5, 0.5, 0.5, 0.5]);
        let m = check_match(out.view(), 0).unwrap();
        assert!(m.top1);
        let m = check_match(out.view(), 5).unwrap();
        assert_eq!(m, TopK { top1: false, top5: false });
    }

    #[test]
    fn nan_scores_sort_last_in_both_orders() {
        let out = arr1(&[f64::NAN, 0.3, 0.1, 0.2, 0.4, 0.5]);
        assert_eq!(*rank(out.view(), ScoreOrder::LowerIsBetter).last().unwrap(), 0);
        assert_eq!(*rank(out.view(), ScoreOrder::HigherIsBetter).last().unwrap(), 0);
    }

    #[test]
    fn out_of_range_expected_never_matches() {
        let out = arr1(&SCORES);
        let m = check_match(out.view(), 99).unwrap();
        assert_eq!(m, TopK { top1: false, top5: false });
    }

    #[test]
    fn fewer_than_five_scores_is_invalid() {
        let out = arr1(&[0.1, 0.2, 0.3]);
        let err = check_match(out.view(), 0).unwrap_err();
        assert_eq!(err.code, CmpCode::InvalidInput);
    }
}
