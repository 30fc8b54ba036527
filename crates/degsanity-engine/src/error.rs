use serde::Serialize;
use std::{error::Error, fmt};

/// Any of these aborts the whole analysis; there is no partial report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QcErrorKind {
    MalformedMatrix,
    EmptyMatrix,
    UnparsableCell,
    DegenerateLibrarySize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QcError {
    pub kind: QcErrorKind,
    pub message: String,
}

impl QcError {
    pub fn new(kind: QcErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::new(QcErrorKind::MalformedMatrix, message)
    }

    pub(crate) fn empty(message: impl Into<String>) -> Self {
        Self::new(QcErrorKind::EmptyMatrix, message)
    }

    pub(crate) fn unparsable_cell(gene: &str, sample: &str, cell: &str) -> Self {
        Self::new(
            QcErrorKind::UnparsableCell,
            format!("Count for gene '{gene}' in sample '{sample}' is not numeric: '{cell}'"),
        )
    }

    pub(crate) fn degenerate(message: impl Into<String>) -> Self {
        Self::new(QcErrorKind::DegenerateLibrarySize, message)
    }
}

impl fmt::Display for QcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for QcError {}
