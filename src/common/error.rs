//! Error handling primitives shared across the crate.

use std::borrow::Cow;

use thiserror::Error;

/// Stable error codes reported alongside every failure.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CmpCode {
    /// Success code used as a sentinel in log lines.
    Ok = 0,
    /// Computed and reference arrays hold a different number of elements.
    ShapeMismatch = 1,
    /// Input failed validation (empty arrays, missing data, bad index).
    InvalidInput = 2,
    /// Report sink or dump file could not be written or read.
    Io = 3,
    /// Catch-all for bugs.
    Internal = 4,
}

/// Canonical error type for the crate.
#[derive(Clone, Debug, Error)]
#[error("{code:?}: {msg}")]
pub struct CmpError {
    /// Machine parsable error code.
    pub code: CmpCode,
    /// Developer facing message.
    pub msg: Cow<'static, str>,
}

/// Result alias used throughout the crate.
pub type CmpResult<T> = Result<T, CmpError>;

impl CmpError {
    /// Create a new error with the provided code and message.
    pub fn new(code: CmpCode, msg: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    /// Element counts of the two arrays differ.
    pub fn shape_mismatch(computed: usize, reference: usize) -> Self {
        Self::new(
            CmpCode::ShapeMismatch,
            format!("computed has {computed} elements, reference has {reference}"),
        )
    }

    /// Validation helper.
    pub fn invalid(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::new(CmpCode::InvalidInput, msg)
    }

    /// IO error helper.
    pub fn io(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::new(CmpCode::Io, msg)
    }

    /// Internal error helper.
    pub fn internal(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::new(CmpCode::Internal, msg)
    }
}

impl From<std::io::Error> for CmpError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<csv::Error> for CmpError {
    fn from(err: csv::Error) -> Self {
        Self::io(format!("csv: {err}"))
    }
}

impl From<serde_yaml::Error> for CmpError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::io(format!("yaml: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(CmpCode::Ok as u32, 0);
        assert_eq!(CmpCode::ShapeMismatch as u32, 1);
        assert_eq!(CmpCode::InvalidInput as u32, 2);
        assert_eq!(CmpCode::Io as u32, 3);
        assert_eq!(CmpCode::Internal as u32, 4);
    }

    #[test]
    fn shape_mismatch_names_both_counts() {
        let err = CmpError::shape_mismatch(3, 4);
        assert_eq!(err.code, CmpCode::ShapeMismatch);
        assert_eq!(
            err.to_string(),
            "ShapeMismatch: computed has 3 elements, reference has 4"
        );
    }

    #[test]
    fn io_errors_map_to_io_code() {
        let err: CmpError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code, CmpCode::Io);
    }
}
