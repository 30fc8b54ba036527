//! Built-in demonstration count matrix for the CLI `demo` subcommand.

/// Three housekeeping/cancer genes across six samples. Deliberately
/// marginal: enough samples to analyze, few enough to draw the
/// sample-size warning.
pub fn demo_count_matrix() -> Vec<Vec<String>> {
    [
        ["gene", "sample1", "sample2", "sample3", "sample4", "sample5", "sample6"],
        ["GAPDH", "5420", "5890", "5120", "5340", "5670", "5230"],
        ["TP53", "3200", "3450", "3100", "890", "920", "850"],
        ["MYC", "1200", "1150", "1340", "2100", "2340", "2210"],
    ]
    .iter()
    .map(|row| row.iter().map(|cell| cell.to_string()).collect())
    .collect()
}
