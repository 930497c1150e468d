//! Parser for the line-oriented case file.
//!
//! ```text
//! <number of cases>
//! <S>            then S resource identifiers, one per line
//! <Q>            then Q requests, one per line
//! ...            repeated for every case
//! ```
//!
//! Identifiers are whole lines and may contain spaces. Only the line
//! terminator is stripped; counts may carry surrounding whitespace.

use std::str::Lines;

use thiserror::Error;

use crate::log_debug;
use crate::models::Case;

/// Errors found while reading case input. All are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected {expected}, found end of input")]
    MissingRecord { line: usize, expected: &'static str },
    #[error("line {line}: invalid count {value:?}")]
    InvalidCount { line: usize, value: String },
    #[error("line {line}: declared {declared} {what} but only {available} follow")]
    MalformedCount {
        line: usize,
        what: &'static str,
        declared: usize,
        available: usize,
    },
    #[error("line {line}: unexpected record {value:?} after {cases} declared cases")]
    TrailingRecords {
        line: usize,
        value: String,
        cases: usize,
    },
}

/// Line cursor that tracks 1-based line numbers for error reporting.
struct Records<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    fn next_record(&mut self) -> Option<&'a str> {
        let record = self.lines.next()?;
        self.line += 1;
        Some(record)
    }

    fn count(&mut self, expected: &'static str) -> Result<(usize, usize), ParseError> {
        let record = self.next_record().ok_or(ParseError::MissingRecord {
            line: self.line + 1,
            expected,
        })?;
        let count = record
            .trim()
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidCount {
                line: self.line,
                value: record.to_string(),
            })?;
        Ok((count, self.line))
    }

    fn list(&mut self, what: &'static str) -> Result<Vec<String>, ParseError> {
        let (declared, line) = self.count(what)?;
        let mut items = Vec::new();
        for available in 0..declared {
            match self.next_record() {
                Some(record) => items.push(record.to_string()),
                None => {
                    return Err(ParseError::MalformedCount {
                        line,
                        what,
                        declared,
                        available,
                    })
                }
            }
        }
        Ok(items)
    }
}

/// Parse every case from `text`.
///
/// Trailing blank lines are accepted; any other record after the declared
/// cases is rejected.
pub fn parse_cases(text: &str) -> Result<Vec<Case>, ParseError> {
    parse_cases_verbose(text, 0)
}

pub(crate) fn parse_cases_verbose(text: &str, verbosity: u8) -> Result<Vec<Case>, ParseError> {
    let mut records = Records::new(text);
    let (case_count, _) = records.count("case count")?;
    log_debug!(verbosity, "Reading {} cases", case_count);

    let mut cases = Vec::new();
    for case_number in 1..=case_count {
        let resources = records.list("resources")?;
        let requests = records.list("requests")?;
        log_debug!(
            verbosity,
            "Case #{}: {} resources, {} requests",
            case_number,
            resources.len(),
            requests.len()
        );
        cases.push(Case::new(resources, requests));
    }

    while let Some(record) = records.next_record() {
        if !record.trim().is_empty() {
            return Err(ParseError::TrailingRecords {
                line: records.line,
                value: record.to_string(),
                cases: case_count,
            });
        }
    }

    Ok(cases)
}
