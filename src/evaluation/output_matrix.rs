use std::fmt;

use crate::error::{RegulatoryLogicError, Result};
use crate::logical_function::OutputBit;

pub const FUNCTION_COLUMN: &str = "Function";

const FUNCTION_LABEL_PREFIX: &str = "Function ";
const UNAVAILABLE: &str = "N/A";

/// One cell of the output matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneOutput {
    Bit(OutputBit),
    /// The function has no entry for the gene's input pair.
    Unavailable,
}

impl GeneOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneOutput::Bit(true) => "1",
            GeneOutput::Bit(false) => "0",
            GeneOutput::Unavailable => UNAVAILABLE,
        }
    }

    pub fn bit(&self) -> Option<OutputBit> {
        match self {
            GeneOutput::Bit(bit) => Some(*bit),
            GeneOutput::Unavailable => None,
        }
    }

    /// Reads a persisted cell. Only "0" and "1" are valid report values.
    pub fn parse_bit(value: &str) -> Option<Self> {
        match value {
            "1" => Some(GeneOutput::Bit(true)),
            "0" => Some(GeneOutput::Bit(false)),
            _ => None,
        }
    }
}

impl fmt::Display for GeneOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    function_index: usize,
    cells: Vec<GeneOutput>,
}

impl OutputRow {
    pub fn new(function_index: usize, cells: Vec<GeneOutput>) -> Self {
        Self { function_index, cells }
    }

    pub fn get_function_index(&self) -> usize {
        self.function_index
    }

    pub fn get_cells(&self) -> &[GeneOutput] {
        &self.cells
    }

    pub fn label(&self) -> String {
        format!("{}{}", FUNCTION_LABEL_PREFIX, self.function_index)
    }
}

/// Rows are filtered functions, columns are genes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMatrix {
    gene_labels: Vec<String>,
    rows: Vec<OutputRow>,
}

impl OutputMatrix {
    pub fn new(gene_labels: Vec<String>, rows: Vec<OutputRow>) -> Self {
        Self { gene_labels, rows }
    }

    pub fn get_gene_labels(&self) -> &[String] {
        &self.gene_labels
    }

    pub fn get_rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.gene_labels.len()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<GeneOutput> {
        self.rows.get(row).and_then(|r| r.cells.get(column)).copied()
    }

    /// `Function, Gene1, ..., GeneN`
    pub fn headers(&self) -> Vec<String> {
        std::iter::once(FUNCTION_COLUMN.to_string())
            .chain(self.gene_labels.iter().cloned())
            .collect()
    }

    /// `Function {index}` followed by one "0"/"1" per gene.
    pub fn table_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                std::iter::once(row.label())
                    .chain(row.cells.iter().map(|cell| cell.as_str().to_string()))
                    .collect()
            })
            .collect()
    }

    /// Rebuilds a matrix from the textual form produced by [`headers`](Self::headers)
    /// and [`table_rows`](Self::table_rows). Line numbers in errors are 1-based, header included.
    pub fn from_table(headers: &[String], rows: &[Vec<String>]) -> Result<Self> {
        let (first, gene_labels) = headers.split_first().ok_or_else(|| malformed(1, "empty header"))?;
        if first != FUNCTION_COLUMN {
            return Err(malformed(1, format!("first column should be '{}', found '{}'", FUNCTION_COLUMN, first)));
        }

        let parsed_rows = rows
            .iter()
            .enumerate()
            .map(|(i, fields)| parse_row(i + 2, fields, gene_labels.len()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(gene_labels.to_vec(), parsed_rows))
    }
}

fn parse_row(line: usize, fields: &[String], n_genes: usize) -> Result<OutputRow> {
    if fields.len() != n_genes + 1 {
        return Err(malformed(line, format!("expected {} fields, found {}", n_genes + 1, fields.len())));
    }
    let function_index = fields[0]
        .strip_prefix(FUNCTION_LABEL_PREFIX)
        .and_then(|index| index.parse::<usize>().ok())
        .ok_or_else(|| malformed(line, format!("bad function label '{}'", fields[0])))?;
    let cells = fields[1..]
        .iter()
        .map(|value| {
            GeneOutput::parse_bit(value).ok_or_else(|| malformed(line, format!("bad output value '{}'", value)))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(OutputRow::new(function_index, cells))
}

fn malformed(line: usize, reason: impl Into<String>) -> RegulatoryLogicError {
    RegulatoryLogicError::MalformedReport { line: Some(line), reason: reason.into() }
}
