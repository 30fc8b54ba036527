use crate::error::QcError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneRow {
    id: String,
    counts: Vec<String>, // raw cells; a failed parse is a typed error, never a silent zero
}

impl GeneRow {
    #[inline(always)]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline(always)]
    pub fn counts(&self) -> &[String] {
        &self.counts
    }
}

/// Validated genes-by-samples count table: rectangular, at least one
/// sample column, at least one gene row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountMatrix {
    sample_names: Vec<String>,
    genes: Vec<GeneRow>,
}

impl CountMatrix {
    // Rows are header-first, gene id in column 0. Shape violations are
    // rejected here so the checks never see a ragged or empty table.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, QcError> {
        let header = match rows.first() {
            Some(header) => header,
            None => return Err(QcError::malformed("count matrix has no rows")),
        };
        if header.len() < 2 {
            return Err(QcError::malformed(
                "count matrix header has no sample columns",
            ));
        }
        if rows.len() < 2 {
            return Err(QcError::empty(
                "count matrix has a header but no gene rows",
            ));
        }
        let width = header.len();
        let mut genes = Vec::with_capacity(rows.len() - 1);
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != width {
                return Err(QcError::malformed(format!(
                    "row {} has {} cells, header has {}",
                    i,
                    row.len(),
                    width
                )));
            }
            genes.push(GeneRow {
                id: row[0].clone(),
                counts: row[1..].to_vec(),
            });
        }
        Ok(Self {
            sample_names: header[1..].to_vec(),
            genes,
        })
    }

    #[inline(always)]
    pub fn sample_count(&self) -> usize {
        self.sample_names.len()
    }

    #[inline(always)]
    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    #[inline(always)]
    pub fn sample_names(&self) -> &[String] {
        &self.sample_names
    }

    #[inline(always)]
    pub fn genes(&self) -> &[GeneRow] {
        &self.genes
    }

    /// The first non-numeric cell aborts with `UnparsableCell`.
    pub(crate) fn parsed_counts(&self) -> Result<Vec<Vec<f64>>, QcError> {
        let mut parsed = Vec::with_capacity(self.genes.len());
        for gene in &self.genes {
            let mut row = Vec::with_capacity(gene.counts.len());
            for (j, cell) in gene.counts.iter().enumerate() {
                match cell.trim().parse::<f64>() {
                    Ok(value) if value.is_finite() => row.push(value),
                    _ => {
                        return Err(QcError::unparsable_cell(
                            &gene.id,
                            &self.sample_names[j],
                            cell,
                        ));
                    }
                }
            }
            parsed.push(row);
        }
        Ok(parsed)
    }
}

/// Named column roles for the metadata table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSchema {
    pub batch_column: usize,
}

impl Default for MetadataSchema {
    fn default() -> Self {
        Self { batch_column: 2 }
    }
}

/// One batch label per sample row. Alignment with the count matrix's
/// sample columns is positional and assumed, as in the upstream format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataTable {
    batch_labels: Vec<String>,
}

impl MetadataTable {
    // Needs a header plus at least one sample row; every sample row must
    // reach the batch column the schema names.
    pub fn from_rows(rows: &[Vec<String>], schema: &MetadataSchema) -> Result<Self, QcError> {
        if rows.len() < 2 {
            return Err(QcError::malformed(
                "metadata needs a header row and at least one sample row",
            ));
        }
        let mut batch_labels = Vec::with_capacity(rows.len() - 1);
        for (i, row) in rows.iter().enumerate().skip(1) {
            match row.get(schema.batch_column) {
                Some(label) => batch_labels.push(label.clone()),
                None => {
                    return Err(QcError::malformed(format!(
                        "metadata row {} has no batch column (index {})",
                        i, schema.batch_column
                    )));
                }
            }
        }
        Ok(Self { batch_labels })
    }

    #[inline(always)]
    pub fn batch_labels(&self) -> &[String] {
        &self.batch_labels
    }

    #[inline(always)]
    pub fn sample_count(&self) -> usize {
        self.batch_labels.len()
    }
}
