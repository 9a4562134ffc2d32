//! Types for top-k classification checks.

/// Number of candidates considered by the top-5 check.
pub const TOP_K: usize = 5;

/// Which end of the score range counts as the best prediction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ScoreOrder {
    /// Smallest score first (plain ascending argsort).
    #[default]
    LowerIsBetter,
    /// Largest score first, for confidences and logits.
    HigherIsBetter,
}

/// Result of matching one output against its expected class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TopK {
    pub top1: bool,
    pub top5: bool,
}
