use lazy_static::lazy_static;
use regex::Regex;

use crate::error::SweepError;

/// How much of an unparsable report is carried in the error for diagnosis
const SNIPPET_CHARS: usize = 200;

lazy_static! {
    // The simulator prints one statistics line per cache level, e.g.
    // [L1] hits=900 misses=100 miss_rate=0.1 evictions=10 writebacks=5
    // The value is a plain decimal, no sign or exponent
    static ref L1_MISS_RATE: Regex =
        Regex::new(r"\[L1\].*miss_rate=([0-9]+(?:\.[0-9]+)?)").unwrap();
}

/// Pulls the L1 miss rate out of a simulator report
///
/// Searches the report for the L1 statistics line and parses its
/// `miss_rate=` field. The `.` in the pattern doesn't cross line boundaries,
/// so the L2 line's field can never be picked up by mistake
///
/// # Arguments
///
/// * `report`: The simulator's full textual report
///
/// returns: Result<f64, SweepError>, a `Parse` error carrying a truncated
/// copy of the report when the expected line is absent
///
/// # Examples
///
/// ```
/// use cachesweep::report::extract_l1_miss_rate;
/// let report = "[L1] hits=9 misses=1 miss_rate=0.1 evictions=0 writebacks=0";
/// assert_eq!(extract_l1_miss_rate(report).unwrap(), 0.1);
/// ```
pub fn extract_l1_miss_rate(report: &str) -> Result<f64, SweepError> {
    let captures = L1_MISS_RATE
        .captures(report)
        .ok_or_else(|| parse_error(report))?;
    captures[1].parse::<f64>().map_err(|_| parse_error(report))
}

fn parse_error(report: &str) -> SweepError {
    SweepError::Parse {
        snippet: report.chars().take(SNIPPET_CHARS).collect(),
    }
}
