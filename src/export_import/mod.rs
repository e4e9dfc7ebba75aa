use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use csv::{ReaderBuilder, Writer};
use log::info;

use crate::error::{RegulatoryLogicError, Result};
use crate::evaluation::OutputMatrix;

pub const DEFAULT_REPORT_PATH: &str = "gene_outputs.csv";

/// Writes the header row and then every data row as comma-delimited records.
pub fn write_report<W: Write>(writer: W, headers: &[String], rows: &[Vec<String>]) -> csv::Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn persist<P: AsRef<Path>>(headers: &[String], rows: &[Vec<String>], destination: P) -> Result<()> {
    let path = destination.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| RegulatoryLogicError::persistence(parent, e))?;
    }

    let file = fs::File::create(path).map_err(|e| RegulatoryLogicError::persistence(path, e))?;
    write_report(file, headers, rows).map_err(|e| csv_error(path, e))?;
    info!("Saved {} rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn persist_matrix<P: AsRef<Path>>(matrix: &OutputMatrix, destination: P) -> Result<()> {
    persist(&matrix.headers(), &matrix.table_rows(), destination)
}

/// Reads the header and data rows written by [`write_report`].
pub fn parse_report<R: Read>(reader: R) -> csv::Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let rows = rdr
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<csv::Result<Vec<Vec<String>>>>()?;
    Ok((headers, rows))
}

pub fn read_report<P: AsRef<Path>>(source: P) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let path = source.as_ref();
    let file = fs::File::open(path).map_err(|e| RegulatoryLogicError::persistence(path, e))?;
    parse_report(file).map_err(|e| csv_error(path, e))
}

pub fn read_matrix<P: AsRef<Path>>(source: P) -> Result<OutputMatrix> {
    let (headers, rows) = read_report(source)?;
    OutputMatrix::from_table(&headers, &rows)
}

fn csv_error(path: &Path, err: csv::Error) -> RegulatoryLogicError {
    let line = err.position().map(|pos| pos.line() as usize);
    match err.into_kind() {
        csv::ErrorKind::Io(source) => RegulatoryLogicError::persistence(path, source),
        other => RegulatoryLogicError::MalformedReport { line, reason: format!("{:?}", other) },
    }
}
