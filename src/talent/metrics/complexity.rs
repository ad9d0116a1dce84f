//! Interpretation of external complexity analyzer reports

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Score when the report carries no average complexity figure
pub const NEUTRAL_COMPLEXITY_SCORE: f64 = 50.0;

lazy_static! {
    static ref INLINE_AVG_RE: Result<Regex, regex::Error> = Regex::new(r"AvgCCN:\s*([\d.]+)");
}

/// `AvgCCN: 2.4` style figure
fn inline_average(report: &str) -> Option<f64> {
    let re = INLINE_AVG_RE.as_ref().ok()?;
    re.captures(report)?.get(1)?.as_str().parse().ok()
}

/// Summary headers that span two words in lizard's table
const MULTIWORD_HEADERS: &[(&str, &str)] = &[
    ("Total nloc", "Total_nloc"),
    ("Fun Cnt", "Fun_Cnt"),
    ("Warning cnt", "Warning_cnt"),
    ("Fun Rt", "Fun_Rt"),
    ("nloc Rt", "nloc_Rt"),
];

/// Column of `AvgCCN` in a header row, and whether the row is the totals header
fn avgccn_header(line: &str) -> Option<(usize, bool)> {
    let normalized = MULTIWORD_HEADERS
        .iter()
        .fold(line.to_string(), |acc, (from, to)| acc.replace(from, to));
    let headers: Vec<&str> = normalized.split_whitespace().collect();
    let column = headers.iter().position(|h| *h == "AvgCCN")?;
    Some((column, headers.first() == Some(&"Total_nloc")))
}

/// Value under `column` in the first data row after line `header`
fn value_below(lines: &[&str], header: usize, column: usize) -> Option<f64> {
    let row = lines[header + 1..]
        .iter()
        .find(|l| !l.trim().is_empty() && !l.trim_start().starts_with(['-', '=']))?;
    row.split_whitespace().nth(column)?.parse().ok()
}

/// Tabular report: the `Total nloc` summary row covers the whole folder and
/// wins; a per-file table is used only when no summary row exists.
fn tabular_average(report: &str) -> Option<f64> {
    let lines: Vec<&str> = report.lines().collect();
    let headers: Vec<(usize, usize, bool)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| avgccn_header(line).map(|(col, total)| (idx, col, total)))
        .collect();

    let (idx, column, _) = headers
        .iter()
        .find(|(_, _, total)| *total)
        .or_else(|| headers.first())?;
    value_below(&lines, *idx, *column)
}

/// Parse the average cyclomatic complexity from an analyzer report
#[must_use]
pub fn parse_average_complexity(report: &str) -> Option<f64> {
    inline_average(report)
        .or_else(|| tabular_average(report))
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Map a complexity value to 0-100: 1 maps to 100, 9 and above to 0
#[must_use]
pub fn complexity_to_score(average: f64) -> f64 {
    (100.0 - (average - 1.0) * 12.5).clamp(0.0, 100.0)
}

/// Score a folder's complexity report; a report without a figure scores 50
#[must_use]
pub fn summarize_complexity_report(report: &str) -> f64 {
    match parse_average_complexity(report) {
        Some(average) => complexity_to_score(average),
        None => {
            debug!("No average complexity in analyzer report, using neutral score");
            NEUTRAL_COMPLEXITY_SCORE
        }
    }
}
