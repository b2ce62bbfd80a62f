//! Sanitization options.
//!
//! Options deserialize from a plain mapping (JSON or similar): missing keys
//! take the documented defaults, unknown keys are ignored.

use crate::error::OptionsError;
use serde::{Deserialize, Serialize};

/// Default maximum output length in characters.
pub const DEFAULT_LENGTH: usize = 255;

/// Configuration for a [`Sanitizer`](crate::Sanitizer).
///
/// All fields have defaults, so `SanitizeOptions::default()` gives the
/// standard behavior: 255-character limit, no padding, whitespace runs
/// collapsed to a single space, illegal characters deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Characters reserved for the caller to append later (e.g. a file
    /// extension), subtracted from `length`.
    pub padding: usize,
    /// Maximum output length in Unicode scalar values.
    pub length: usize,
    /// Replacement for each maximal run of Unicode whitespace.
    pub whitespace: String,
    /// Replacement for each filtered-out illegal character. Empty means
    /// deletion. Adjacent illegal characters are replaced independently,
    /// without collapsing.
    pub replace: String,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            padding: 0,
            length: DEFAULT_LENGTH,
            whitespace: String::from(" "),
            replace: String::new(),
        }
    }
}

impl SanitizeOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding reserved for a later suffix.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Set the maximum output length in characters.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the whitespace-run replacement string.
    pub fn with_whitespace(mut self, whitespace: impl Into<String>) -> Self {
        self.whitespace = whitespace.into();
        self
    }

    /// Set the illegal-character replacement string.
    pub fn with_replace(mut self, replace: impl Into<String>) -> Self {
        self.replace = replace.into();
        self
    }

    /// Number of characters actually available for output.
    ///
    /// Saturates at zero when `padding >= length`; sanitizing with such
    /// options yields the empty string. Use [`validate`](Self::validate) to
    /// reject that combination instead.
    pub fn effective_length(&self) -> usize {
        self.length.saturating_sub(self.padding)
    }

    /// Reject option combinations that clamp the output to nothing.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.padding > self.length {
            return Err(OptionsError::PaddingExceedsLength {
                padding: self.padding,
                length: self.length,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SanitizeOptions::default();
        assert_eq!(options.padding, 0);
        assert_eq!(options.length, 255);
        assert_eq!(options.whitespace, " ");
        assert_eq!(options.replace, "");
        assert_eq!(options.effective_length(), 255);
    }

    #[test]
    fn test_builder_methods() {
        let options = SanitizeOptions::new()
            .with_length(200)
            .with_padding(5)
            .with_whitespace("_")
            .with_replace("-");
        assert_eq!(options.length, 200);
        assert_eq!(options.padding, 5);
        assert_eq!(options.whitespace, "_");
        assert_eq!(options.replace, "-");
        assert_eq!(options.effective_length(), 195);
    }

    #[test]
    fn test_effective_length_saturates() {
        let options = SanitizeOptions::new().with_length(10).with_padding(10);
        assert_eq!(options.effective_length(), 0);

        let options = SanitizeOptions::new().with_length(5).with_padding(10);
        assert_eq!(options.effective_length(), 0);
    }

    #[test]
    fn test_validate() {
        assert!(SanitizeOptions::default().validate().is_ok());
        assert!(SanitizeOptions::new()
            .with_length(10)
            .with_padding(10)
            .validate()
            .is_ok());

        let err = SanitizeOptions::new()
            .with_length(5)
            .with_padding(10)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            crate::OptionsError::PaddingExceedsLength {
                padding: 10,
                length: 5
            }
        );
    }

    #[test]
    fn test_deserialize_partial_mapping() {
        let options: SanitizeOptions = serde_json::from_str(r#"{"padding": 10}"#).unwrap();
        assert_eq!(options.padding, 10);
        assert_eq!(options.length, 255);
        assert_eq!(options.whitespace, " ");
        assert_eq!(options.replace, "");
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let options: SanitizeOptions =
            serde_json::from_str(r#"{"length": 100, "no_such_key": true}"#).unwrap();
        assert_eq!(options.length, 100);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let options = SanitizeOptions::new().with_whitespace("_").with_length(64);
        let json = serde_json::to_string(&options).unwrap();
        let back: SanitizeOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}
