//! Top-1 / top-5 classification match checks.

pub mod domain;
pub mod service;

pub use domain::{ScoreOrder, TopK};
pub use service::{check_match, check_match_with};
