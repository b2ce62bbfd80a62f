//! Safe Filename Library
//!
//! This crate turns arbitrary strings into filenames that are safe across
//! Windows, macOS and Linux. It is a pure string transformation: no I/O, no
//! filesystem access, no shared state. Every call is a deterministic function
//! of the input string and the options, so it is safe to use from any number
//! of threads without coordination.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `sanitizer`: The `Sanitizer` pipeline (normalize, filter, truncate)
//! - `options`: `SanitizeOptions` configuration
//! - `patterns`: Compiled character classes and the reserved-name table
//! - `error`: Strict option validation error
//!
//! # Example
//!
//! ```
//! use safe_filename::{sanitize, sanitize_with, SanitizeOptions};
//!
//! assert_eq!(sanitize("  my file?.txt "), "my file.txt");
//! assert_eq!(sanitize("CON"), "file");
//!
//! let options = SanitizeOptions::new()
//!     .with_whitespace("_")
//!     .with_padding(4); // room for ".pdf"
//! assert_eq!(sanitize_with("invoice 2024", &options), "invoice_2024");
//! ```

pub mod error;
pub mod options;
pub mod patterns;
pub mod sanitizer;

// Re-export commonly used types
pub use error::OptionsError;
pub use options::{SanitizeOptions, DEFAULT_LENGTH};
pub use patterns::{FALLBACK_NAME, RESERVED_NAMES};
pub use sanitizer::{sanitize, sanitize_with, Sanitizer};
