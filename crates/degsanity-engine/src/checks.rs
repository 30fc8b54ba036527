//! The five QC checks, each a pure decision function returning at most
//! one finding. All thresholds are strict; a value sitting exactly on a
//! boundary falls to the less severe bucket.

use crate::error::QcError;
use crate::matrix::MetadataTable;
use crate::stats;
use degsanity_protocol::Finding;
use itertools::{Itertools, MinMaxResult};

const MIN_SAMPLES: usize = 6;
const ADEQUATE_SAMPLES: usize = 10;
const SPARSE_ZERO_FRACTION: f64 = 0.8;
const SPARSE_GENES_ERROR_PERCENT: f64 = 50.0;
const SPARSE_GENES_WARN_PERCENT: f64 = 30.0;
const LIBRARY_RATIO_LIMIT: f64 = 10.0;
const LIBRARY_CV_LIMIT: f64 = 0.5;
const EXTREME_LOG2_FC: f64 = 8.0;
const EXTREME_FC_GENE_LIMIT: usize = 5;

pub fn sample_size(sample_count: usize) -> Finding {
    if sample_count < MIN_SAMPLES {
        Finding::error(format!(
            "Low sample size (n={sample_count}). Need \u{2265}3 per group."
        ))
    } else if sample_count < ADEQUATE_SAMPLES {
        Finding::warning(format!(
            "Marginal sample size (n={sample_count}). Power may be limited."
        ))
    } else {
        Finding::pass(format!("Sample size adequate (n={sample_count})"))
    }
}

// The percentage is rounded to one decimal before the thresholds see it,
// so the displayed number and the decision always agree.
pub fn sparsity(counts: &[Vec<f64>], sample_count: usize) -> Finding {
    let sparse_genes = counts
        .iter()
        .filter(|row| {
            let zeros = row.iter().filter(|&&c| c == 0.0).count();
            zeros as f64 / sample_count as f64 > SPARSE_ZERO_FRACTION
        })
        .count();
    let zero_percent = stats::round1(100.0 * sparse_genes as f64 / counts.len() as f64);
    if zero_percent > SPARSE_GENES_ERROR_PERCENT {
        Finding::error(format!(
            "{zero_percent:.1}% genes have >80% zeros. Poor sequencing depth."
        ))
    } else if zero_percent > SPARSE_GENES_WARN_PERCENT {
        Finding::warning(format!(
            "{zero_percent:.1}% genes have >80% zeros. Consider filtering."
        ))
    } else {
        Finding::pass(format!(
            "Low-expression genes: {zero_percent:.1}% (acceptable)"
        ))
    }
}

// A zero or non-finite mean, or a zero minimum library size, leaves the
// statistics undefined: `DegenerateLibrarySize`, never a non-finite result.
pub fn library_balance(library_sizes: &[f64]) -> Result<Finding, QcError> {
    let (min, max) = match library_sizes.iter().copied().minmax() {
        MinMaxResult::MinMax(min, max) => (min, max),
        MinMaxResult::OneElement(only) => (only, only),
        MinMaxResult::NoElements => {
            return Err(QcError::degenerate("no library sizes to evaluate"));
        }
    };
    let mean = stats::mean(library_sizes);
    if !mean.is_finite() || mean.abs() < f64::EPSILON {
        return Err(QcError::degenerate(format!(
            "mean library size {mean} leaves the coefficient of variation undefined"
        )));
    }
    if min <= 0.0 {
        return Err(QcError::degenerate(format!(
            "minimum library size {min} leaves the max/min ratio undefined"
        )));
    }
    let ratio = max / min;
    if ratio > LIBRARY_RATIO_LIMIT {
        return Ok(Finding::error(format!(
            "Library size ratio {ratio:.1}x. Normalization critical."
        )));
    }
    let cv = stats::population_std_dev(library_sizes, mean) / mean;
    if cv > LIBRARY_CV_LIMIT {
        Ok(Finding::warning(format!(
            "Library size CV={:.1}%. Check normalization.",
            cv * 100.0
        )))
    } else {
        Ok(Finding::pass(format!(
            "Library sizes balanced (CV={:.1}%)",
            cv * 100.0
        )))
    }
}

// A single batch says nothing, so no finding at all.
pub fn batch_confounding(metadata: &MetadataTable) -> Option<Finding> {
    let samples = metadata.sample_count();
    let batches = metadata.batch_labels().iter().unique().count();
    if batches > 1 && batches == samples {
        Some(Finding::warning(
            "Each sample has unique batch. Confounded with condition.",
        ))
    } else if batches > 1 {
        Some(Finding::pass(
            "Batch structure detected. Ensure batch correction.",
        ))
    } else {
        None
    }
}

// Fold changes come from the caller; the engine never invents them.
pub fn extreme_fold_changes(fold_changes: &[f64]) -> Finding {
    let extreme = fold_changes
        .iter()
        .filter(|fc| fc.abs() > EXTREME_LOG2_FC)
        .count();
    if extreme > EXTREME_FC_GENE_LIMIT {
        Finding::warning(format!(
            "{extreme} genes with |log2FC| > 8. Verify biological relevance."
        ))
    } else {
        Finding::pass("No extreme fold changes detected")
    }
}
