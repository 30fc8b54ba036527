//! Plain-text rendering of a QC report: severity sections, a library-size
//! bar chart, and the derived letter grade.

use degsanity_protocol::{Finding, Grade, QCReport};
use std::fmt::Write;

const BAR_WIDTH: usize = 40;

pub fn render_report(report: &QCReport) -> String {
    let mut out = String::new();
    render_section(&mut out, "CRITICAL ISSUES", "\u{25b8}", &report.flags);
    render_section(&mut out, "WARNINGS", "\u{25b8}", &report.warnings);
    render_section(&mut out, "PASSED", "\u{2713}", &report.passed);
    render_library_chart(&mut out, &report.library_sizes);
    let grade = Grade::from_report(report);
    let _ = writeln!(out, "Grade: {} - {}", grade.letter(), grade.summary());
    out
}

fn render_section(out: &mut String, title: &str, bullet: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}");
    for finding in findings {
        let _ = writeln!(out, "  {bullet} {}", finding.message);
    }
    let _ = writeln!(out);
}

fn render_library_chart(out: &mut String, library_sizes: &[f64]) {
    let max = library_sizes.iter().copied().fold(f64::NAN, f64::max);
    if !(max > 0.0) {
        return;
    }
    let _ = writeln!(out, "Library Size Distribution");
    for (i, size) in library_sizes.iter().enumerate() {
        let width = ((size / max) * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(out, "  S{:<3} {:<BAR_WIDTH$} {size}", i + 1, "#".repeat(width));
    }
    let _ = writeln!(out);
}
