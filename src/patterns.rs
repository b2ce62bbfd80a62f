//! 文件名净化的字符类与常量表

use regex::Regex;
use std::sync::LazyLock;

/// Substituted whenever the pipeline would otherwise produce a reserved or
/// blank name. Must itself pass every filter: lowercase, non-reserved,
/// non-empty, no leading dash.
pub const FALLBACK_NAME: &str = "file";

/// Device names Windows refuses as filenames regardless of extension.
/// Matching is against the uppercased full string; `COM10` is not reserved.
pub const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are unsafe in filenames on at least one major OS:
/// the full Unicode control category plus a fixed punctuation blacklist.
pub(crate) static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\p{Cc}\[\]{}|/\\`!@$*()<>?'";:]"#).unwrap());

/// A maximal run of Unicode whitespace.
pub(crate) static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Leading dash runs: one dash, optionally followed by a single whitespace
/// character, repeated, anchored at the start.
pub(crate) static LEADING_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-\s?)+").unwrap());
