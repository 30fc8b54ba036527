//! Deterministic QC engine for gene-expression count tables: five
//! independent checks aggregated into a [`QCReport`] partitioned by
//! severity. Repeated calls on identical input produce identical
//! reports; input problems abort the whole analysis as a typed
//! [`QcError`] rather than degrading the report.

pub mod checks;
pub mod error;
pub mod matrix;
pub mod stats;

pub use error::{QcError, QcErrorKind};
pub use matrix::{CountMatrix, GeneRow, MetadataSchema, MetadataTable};

use degsanity_protocol::QCReport;

/// Without fold-change data the extreme-fold-change check is omitted
/// entirely, never fed synthetic values.
pub fn analyze(
    matrix: &CountMatrix,
    metadata: Option<&MetadataTable>,
) -> Result<QCReport, QcError> {
    analyze_with_fold_changes(matrix, metadata, None)
}

/// Checks run in a fixed order; findings keep that order within each
/// severity bucket.
pub fn analyze_with_fold_changes(
    matrix: &CountMatrix,
    metadata: Option<&MetadataTable>,
    fold_changes: Option<&[f64]>,
) -> Result<QCReport, QcError> {
    let counts = matrix.parsed_counts()?;
    let library_sizes = stats::column_sums(&counts, matrix.sample_count());

    let mut report = QCReport {
        sample_count: matrix.sample_count(),
        ..Default::default()
    };
    report.push(checks::sample_size(matrix.sample_count()));
    report.push(checks::sparsity(&counts, matrix.sample_count()));
    report.push(checks::library_balance(&library_sizes)?);
    if let Some(metadata) = metadata
        && let Some(finding) = checks::batch_confounding(metadata)
    {
        report.push(finding);
    }
    if let Some(fold_changes) = fold_changes {
        report.push(checks::extreme_fold_changes(fold_changes));
    }
    report.library_sizes = library_sizes;
    Ok(report)
}
