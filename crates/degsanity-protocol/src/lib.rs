//! Shared machine-readable contracts between the degsanity QC engine and
//! its consumers (CLI, renderers, services).

use serde::{Deserialize, Serialize};

/// Bucket a finding lands in. Fixed at creation; a finding never moves
/// between buckets afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Pass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Pass,
            message: message.into(),
        }
    }
}

/// One QC analysis result. Built once per `analyze` call, immutable
/// afterwards. Within each bucket, findings keep the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QCReport {
    pub flags: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub passed: Vec<Finding>,
    pub library_sizes: Vec<f64>,
    pub sample_count: usize,
}

impl QCReport {
    /// Route a finding into the bucket its severity dictates.
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.flags.push(finding),
            Severity::Warning => self.warnings.push(finding),
            Severity::Pass => self.passed.push(finding),
        }
    }

    pub fn finding_count(&self) -> usize {
        self.flags.len() + self.warnings.len() + self.passed.len()
    }
}

/// Letter grade derived from a report by the consumer; never stored on
/// the report itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
}

impl Grade {
    pub fn from_report(report: &QCReport) -> Self {
        if !report.flags.is_empty() {
            Grade::C
        } else if !report.warnings.is_empty() {
            Grade::B
        } else {
            Grade::APlus
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::B => "B",
            Grade::C => "C",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Grade::APlus => "Analysis quality excellent",
            Grade::B => "Minor issues detected",
            Grade::C => "Critical issues require attention",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(flags: usize, warnings: usize) -> QCReport {
        let mut report = QCReport::default();
        for i in 0..flags {
            report.push(Finding::error(format!("flag {i}")));
        }
        for i in 0..warnings {
            report.push(Finding::warning(format!("warning {i}")));
        }
        report.push(Finding::pass("ok"));
        report
    }

    #[test]
    fn test_push_routes_by_severity() {
        let report = report_with(1, 2);
        assert_eq!(report.flags.len(), 1);
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.passed.len(), 1);
        assert_eq!(report.finding_count(), 4);
    }

    #[test]
    fn test_grade_ladder() {
        assert_eq!(Grade::from_report(&report_with(0, 0)), Grade::APlus);
        assert_eq!(Grade::from_report(&report_with(0, 1)), Grade::B);
        assert_eq!(Grade::from_report(&report_with(1, 0)), Grade::C);
        assert_eq!(Grade::from_report(&report_with(1, 3)), Grade::C);
    }

    #[test]
    fn test_report_serializes_with_original_field_names() {
        let mut report = QCReport {
            library_sizes: vec![9820.0, 10490.0],
            sample_count: 2,
            ..Default::default()
        };
        report.push(Finding::warning("Marginal sample size (n=2). Power may be limited."));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("librarySizes").is_some());
        assert!(json.get("sampleCount").is_some());
        assert_eq!(json["warnings"][0]["severity"], "warning");
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::C).unwrap(), "\"C\"");
    }
}
