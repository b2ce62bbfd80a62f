//! 配置校验错误类型

use thiserror::Error;

/// Errors reported by strict option validation.
///
/// Sanitization itself is total and never fails; this is only returned by
/// [`SanitizeOptions::validate`](crate::SanitizeOptions::validate) for
/// callers who want bad length/padding combinations rejected up front
/// instead of clamped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// `padding` leaves no room for any output characters.
    #[error("padding ({padding}) exceeds maximum length ({length})")]
    PaddingExceedsLength { padding: usize, length: usize },
}
