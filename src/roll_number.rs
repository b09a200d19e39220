//! Roll number validation and expansion.
//!
//! A roll number looks like `FA21-BCE-123`: intake year, three-letter
//! programme code, three-digit serial.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{GpaError, Result, INVALID_FORMAT_MESSAGE};

lazy_static! {
    static ref ROLL_NUMBER_PATTERN: Regex =
        Regex::new(r"^FA[0-9]{2}-[A-Z]{3}-[0-9]{3}$").expect("roll number pattern is valid");
}

/// Check a candidate (already trimmed) against `FAXX-ABC-000`.
pub fn validate(candidate: &str) -> bool {
    ROLL_NUMBER_PATTERN.is_match(candidate)
}

/// A validated roll number. Only constructible through [`RollNumber::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RollNumber(String);

impl RollNumber {
    pub fn parse(candidate: &str) -> Result<Self> {
        if validate(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(GpaError::InvalidFormat(INVALID_FORMAT_MESSAGE.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the final numeric segment, e.g. `FA21-BCE`.
    pub fn prefix(&self) -> &str {
        // The pattern guarantees a hyphen followed by exactly three digits.
        &self.0[..self.0.len() - 4]
    }

    /// The trailing three-digit serial as an integer.
    pub fn serial(&self) -> u16 {
        self.0[self.0.len() - 3..]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }
}

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RollNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for RollNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Expand a first/last pair into every roll number between them, inclusive.
///
/// Both endpoints must be valid and share a prefix. Nothing is produced on
/// failure.
pub fn expand_range(first: &str, last: &str) -> Result<Vec<RollNumber>> {
    let mismatch = || {
        GpaError::InvalidFormat("Invalid roll number format or mismatched prefixes.".to_string())
    };

    let first = RollNumber::parse(first.trim()).map_err(|_| mismatch())?;
    let last = RollNumber::parse(last.trim()).map_err(|_| mismatch())?;
    if first.prefix() != last.prefix() {
        return Err(mismatch());
    }

    let (start, end) = (first.serial(), last.serial());
    if start > end {
        return Err(GpaError::InvalidFormat(format!(
            "First roll number {first} comes after last roll number {last}."
        )));
    }

    Ok((start..=end)
        .map(|serial| RollNumber(format!("{}-{:03}", first.prefix(), serial)))
        .collect())
}

/// Parse a comma-separated list of roll numbers. Empty entries are skipped.
/// The first invalid entry rejects the whole list.
pub fn parse_list(input: &str) -> Result<Vec<RollNumber>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            RollNumber::parse(entry).map_err(|_| {
                GpaError::InvalidFormat(format!(
                    "Invalid roll number format: {entry}. Please use FAXX-ABC-000"
                ))
            })
        })
        .collect()
}
