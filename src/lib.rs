//! degsanity: a quality-control gate for gene-expression count tables.
//!
//! Screens a count matrix for statistical pitfalls (too few replicates,
//! excessive sparsity, unbalanced sequencing depth, batch confounding,
//! implausible effect sizes) before a differential-expression analysis
//! is trusted. The deterministic analysis itself lives in
//! `degsanity-engine`; the shared report contracts in
//! `degsanity-protocol`. This crate adds the surrounding plumbing:
//! delimited-text ingestion, demo data, and text rendering.

pub mod demo;
pub mod report_text;
pub mod table;

pub use degsanity_engine::{
    CountMatrix, MetadataSchema, MetadataTable, QcError, QcErrorKind, analyze,
    analyze_with_fold_changes,
};
pub use degsanity_protocol::{Finding, Grade, QCReport, Severity};
