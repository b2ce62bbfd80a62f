//! The sanitization pipeline.
//!
//! A [`Sanitizer`] holds one raw input string and one immutable set of
//! options; every accessor is a pure function of those two values. The
//! pipeline stages run in a fixed order:
//!
//! 1. normalize — trim, collapse whitespace runs
//! 2. filter illegal characters
//! 3. filter Windows reserved device names
//! 4. filter blank results
//! 5. strip leading dashes
//! 6. truncate to `length - padding` characters
//!
//! The order is load-bearing: whitespace is collapsed before character
//! filtering, and the reserved/blank checks run on the character-filtered
//! string so that e.g. `"com4|"` still collapses to a reserved name.

use crate::options::SanitizeOptions;
use crate::patterns::{FALLBACK_NAME, ILLEGAL_CHARS, LEADING_DASHES, RESERVED_NAMES, WHITESPACE_RUN};
use regex::NoExpand;
use std::fmt;

/// Turns an arbitrary string into one safe to use as a filename on
/// Windows, macOS and Linux.
///
/// # Example
///
/// ```
/// use safe_filename::{SanitizeOptions, Sanitizer};
///
/// let sanitizer = Sanitizer::with_defaults("  what\\ēver//wëird:user:înput: ");
/// assert_eq!(sanitizer.to_string(), "whatēverwëirduserînput");
///
/// let options = SanitizeOptions::new().with_whitespace("_");
/// assert_eq!(Sanitizer::new("x\tx", options).to_string(), "x_x");
/// ```
#[derive(Debug, Clone)]
pub struct Sanitizer {
    raw: String,
    options: SanitizeOptions,
}

impl Sanitizer {
    /// Create a sanitizer for one input string.
    pub fn new(raw: impl Into<String>, options: SanitizeOptions) -> Self {
        Self {
            raw: raw.into(),
            options,
        }
    }

    /// Create a sanitizer with default options.
    pub fn with_defaults(raw: impl Into<String>) -> Self {
        Self::new(raw, SanitizeOptions::default())
    }

    /// The original, untouched input.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The options this sanitizer was built with.
    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Stage 1: strip surrounding whitespace and collapse every inner run of
    /// Unicode whitespace into one occurrence of the configured replacement.
    pub fn normalize(&self) -> String {
        WHITESPACE_RUN
            .replace_all(self.raw.trim(), NoExpand(&self.options.whitespace))
            .into_owned()
    }

    /// Stages 1-5: the fully filtered name, before truncation.
    pub fn sanitize(&self) -> String {
        let name = self.normalize();
        let name = self.filter_characters(&name);
        let name = self.filter_reserved(name);
        let name = self.filter_blank(name);
        self.filter_leading_dashes(name)
    }

    /// The full pipeline: sanitize, then cut to the first
    /// `length - padding` Unicode scalar values.
    ///
    /// Counting is per scalar value, not per byte and not per grapheme
    /// cluster, so a base character and its combining mark can be split at
    /// the cut point. When `padding >= length` the result is empty; see
    /// [`SanitizeOptions::validate`] to reject that up front.
    pub fn truncate(&self) -> String {
        let limit = self.options.effective_length();
        let name = self.sanitize();
        if name.chars().count() > limit {
            tracing::debug!(limit, "truncating sanitized filename");
            name.chars().take(limit).collect()
        } else {
            name
        }
    }

    /// Replace every illegal character with the configured replacement.
    /// Each occurrence is substituted independently; runs are not collapsed.
    fn filter_characters(&self, name: &str) -> String {
        ILLEGAL_CHARS
            .replace_all(name, NoExpand(&self.options.replace))
            .into_owned()
    }

    /// Map Windows reserved device names to the fallback. Full-string,
    /// case-insensitive match only.
    fn filter_reserved(&self, name: String) -> String {
        let upper = name.to_uppercase();
        if RESERVED_NAMES.contains(&upper.as_str()) {
            tracing::debug!(name = %name, "reserved device name, substituting fallback");
            FALLBACK_NAME.to_string()
        } else {
            name
        }
    }

    /// Map an empty result to the fallback.
    fn filter_blank(&self, name: String) -> String {
        if name.is_empty() {
            tracing::trace!("blank filename, substituting fallback");
            FALLBACK_NAME.to_string()
        } else {
            name
        }
    }

    /// Strip the longest leading run of `dash, optional single whitespace`.
    fn filter_leading_dashes(&self, name: String) -> String {
        match LEADING_DASHES.find(&name) {
            Some(m) => name[m.end()..].to_string(),
            None => name,
        }
    }
}

/// Formats as the final sanitized, truncated name.
impl fmt::Display for Sanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.truncate())
    }
}

/// One-shot sanitization with default options.
pub fn sanitize(raw: &str) -> String {
    Sanitizer::with_defaults(raw).truncate()
}

/// One-shot sanitization with explicit options.
pub fn sanitize_with(raw: &str, options: &SanitizeOptions) -> String {
    Sanitizer::new(raw, options.clone()).truncate()
}
