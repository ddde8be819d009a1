//! The three reporting policies over one [`BalanceReport`].
//!
//! Each renderer returns the lines to print. Range restriction filters by
//! the event's own line only; the underlying scan (and so the set of
//! matched pairs) is the same whatever range the caller asks for.

use crate::balance::{BalanceReport, Event};

/// Whole-file policy: `Balanced`, or the count and list of unclosed
/// opening lines in stack order. Extra closes are not surfaced here.
pub fn whole_file(report: &BalanceReport) -> Vec<String> {
    if report.balanced() {
        vec!["Balanced".to_string()]
    } else {
        vec![
            format!("Net unclosed: {}", report.unclosed.len()),
            format!("Unclosed lines: {}", format_lines(&report.unclosed)),
        ]
    }
}

/// Range policy: one line per event whose own line falls in
/// `[start, end]`, in document order, then a summary of the in-range
/// unclosed opens.
pub fn range(report: &BalanceReport, start: usize, end: usize) -> Vec<String> {
    let in_range = |line: usize| line >= start && line <= end;

    let mut out = Vec::new();
    for event in &report.events {
        if !in_range(event.line()) {
            continue;
        }
        match *event {
            Event::Open { line } => out.push(format!("Open: {line}")),
            Event::Close { line, opened_line } => {
                out.push(format!("Close: {line} (matches {opened_line})"));
            }
            Event::ExtraClose { line } => out.push(format!("Extra Close: {line}")),
        }
    }

    let unclosed: Vec<usize> = report
        .unclosed
        .iter()
        .copied()
        .filter(|&line| in_range(line))
        .collect();
    if unclosed.is_empty() {
        out.push("Balanced in range".to_string());
    } else {
        out.push(format!("Net unclosed: {}", format_lines(&unclosed)));
    }
    out
}

/// Unmatched-only policy: just the in-range extra closes and unclosed
/// opens, one line each. Matched pairs are never reported.
pub fn find_unclosed(report: &BalanceReport, start: usize, end: usize) -> Vec<String> {
    let in_range = |line: usize| line >= start && line <= end;

    let mut out = Vec::new();
    for &line in report.extra_closes.iter().filter(|&&line| in_range(line)) {
        out.push(format!("Extra closing div at line {line}"));
    }
    for &line in report.unclosed.iter().filter(|&&line| in_range(line)) {
        out.push(format!("Unclosed div opened at line {line}"));
    }
    out
}

/// `[3, 7, 12]` — the list format the reports use for line numbers.
fn format_lines(lines: &[usize]) -> String {
    let items: Vec<String> = lines.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
