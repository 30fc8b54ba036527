//! Delimited-text ingestion: raw CSV/TSV text to tokenized rows. Shape
//! validation is deliberately left to the engine; this layer only splits
//! cells.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use degsanity_engine::{MetadataSchema, MetadataTable, QcError};
use std::fs;

/// Pick the cell delimiter from the header line. Tab wins when present,
/// since tab-separated gene tables routinely contain commas in
/// annotation fields; otherwise comma.
pub fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or("");
    if header.contains('\t') { b'\t' } else { b',' }
}

/// Tokenize delimited text into rows of string cells. Blank lines
/// (including a trailing newline) are dropped; ragged rows are passed
/// through untouched for the engine to judge.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let delimiter = detect_delimiter(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.context("Bad delimited line")?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

pub fn load_rows(path: &str) -> Result<Vec<Vec<String>>> {
    let text = fs::read_to_string(path).with_context(|| format!("Could not read '{path}'"))?;
    parse_rows(&text)
}

/// Batch metadata is optional: a table without sample rows (header only,
/// or nothing at all) is treated as absent so the remaining checks still
/// run. A table that does have sample rows must still validate.
pub fn optional_metadata(
    rows: &[Vec<String>],
    schema: &MetadataSchema,
) -> std::result::Result<Option<MetadataTable>, QcError> {
    if rows.len() < 2 {
        return Ok(None);
    }
    MetadataTable::from_rows(rows, schema).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_table() {
        let rows = parse_rows("gene,s1,s2\nGAPDH,10,20\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["gene", "s1", "s2"]);
        assert_eq!(rows[1], ["GAPDH", "10", "20"]);
    }

    #[test]
    fn test_tab_table() {
        let rows = parse_rows("gene\ts1\ts2\nGAPDH\t10\t20").unwrap();
        assert_eq!(rows[1], ["GAPDH", "10", "20"]);
    }

    #[test]
    fn test_tab_wins_over_comma() {
        assert_eq!(detect_delimiter("gene\ts1,extra\ts2"), b'\t');
        let rows = parse_rows("gene\ts1,extra\ts2\nG\t1\t2").unwrap();
        assert_eq!(rows[0], ["gene", "s1,extra", "s2"]);
    }

    #[test]
    fn test_trailing_blank_line_dropped() {
        let rows = parse_rows("gene,s1\nG,1\n\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let rows = parse_rows("gene,s1,s2\nG,1\n").unwrap();
        assert_eq!(rows[1], ["G", "1"]);
    }

    #[test]
    fn test_header_only_metadata_is_skipped() {
        let rows = parse_rows("sample,condition,batch\n").unwrap();
        let metadata = optional_metadata(&rows, &MetadataSchema::default()).unwrap();
        assert!(metadata.is_none());
        assert!(optional_metadata(&[], &MetadataSchema::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_analysis_proceeds_without_usable_metadata() {
        // Header-only metadata must not abort the analysis; the report
        // simply lacks a batch finding.
        let metadata = optional_metadata(
            &parse_rows("sample,condition,batch\n").unwrap(),
            &MetadataSchema::default(),
        )
        .unwrap();
        let matrix =
            degsanity_engine::CountMatrix::from_rows(&crate::demo::demo_count_matrix()).unwrap();
        let report = degsanity_engine::analyze(&matrix, metadata.as_ref()).unwrap();
        assert_eq!(report.finding_count(), 3);
        assert!(
            !report
                .passed
                .iter()
                .chain(&report.warnings)
                .any(|f| f.message.contains("batch"))
        );
    }

    #[test]
    fn test_populated_metadata_still_validates() {
        let rows = parse_rows("sample,condition,batch\ns1,ctrl\n").unwrap();
        assert!(optional_metadata(&rows, &MetadataSchema::default()).is_err());
    }
}
