//! `flightdeck decode`: decode every status frame in a recorded file.

use crate::commands::read_input;
use crate::error::CliError;
use crate::output;
use anyhow::Result;
use flightdeck_status::{Status, decode};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
pub struct DecodedLine {
    pub line: usize,
    pub status: Status,
}

#[derive(Debug, Serialize)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Default, Serialize)]
pub struct DecodeReport {
    pub statuses: Vec<DecodedLine>,
    pub ignored: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Decode the lines of `input`.
///
/// Fails only when the input held no decodable frame but did hold malformed
/// ones.
pub fn execute(input: &str, last: bool, json: bool) -> Result<()> {
    let lines = read_input(input)?;
    let mut report = decode_lines(&lines);
    info!(
        decoded = report.statuses.len(),
        ignored = report.ignored,
        skipped = report.skipped.len(),
        "Decoded input"
    );

    if report.statuses.is_empty() && !report.skipped.is_empty() {
        return Err(CliError::MalformedInput(format!(
            "no status frame in {input} could be decoded ({} malformed)",
            report.skipped.len()
        ))
        .into());
    }

    if last {
        let keep = report.statuses.len().saturating_sub(1);
        report.statuses.drain(..keep);
    }

    output::print_decode_report(&report, json);
    Ok(())
}

pub fn decode_lines<S: AsRef<str>>(lines: &[S]) -> DecodeReport {
    let mut report = DecodeReport::default();
    for (index, line) in lines.iter().enumerate() {
        let line_number = index.saturating_add(1);
        let text = line.as_ref();
        if text.trim().is_empty() {
            report.ignored = report.ignored.saturating_add(1);
            continue;
        }
        match decode(text) {
            Ok(status) => report.statuses.push(DecodedLine {
                line: line_number,
                status,
            }),
            Err(err) if err.is_not_status_record() => {
                debug!(line = line_number, %err, "Ignoring record");
                report.ignored = report.ignored.saturating_add(1);
            }
            Err(err) => {
                warn!(line = line_number, %err, "Skipping malformed status frame");
                report.skipped.push(SkippedLine {
                    line: line_number,
                    reason: err.to_string(),
                });
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_lines_sorts_outcomes() {
        let lines = [
            r#"{"timestamp":"2018-03-25T00:39:48Z","event":"Status","Flags":16842765}"#,
            r#"{"timestamp":"2018-03-25T00:39:49Z","event":"Music","MusicTrack":"NoTrack"}"#,
            "",
            "{ broken",
        ];
        let report = decode_lines(&lines);
        assert_eq!(report.statuses.len(), 1);
        assert_eq!(report.statuses.first().map(|d| d.line), Some(1));
        assert_eq!(report.ignored, 2);
        assert_eq!(report.skipped.first().map(|s| s.line), Some(4));
    }
}
