//! Tabular persistence for case results.
//!
//! Writing and reading go through the same column names so the aggregation
//! pass is schema-checked against what the runner produced. Reads are
//! strict: a file without the dilation column, with a non-numeric field, or
//! with no data rows is reported as malformed with its path, never skipped.

use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{DilationRow, SimulationResult};

/// Name of the dilation factor column, the one the aggregator consumes.
pub const DILATION_COLUMN: &str = "Fator_Dilatacao";

/// Extension of persisted case tables.
pub const TABLE_EXTENSION: &str = "csv";

/// Write a case result as a CSV table, overwriting any previous file.
pub fn write_case_table(path: &Path, result: &SimulationResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| Error::Table {
        path: path.to_path_buf(),
        source,
    })?;

    for i in 0..result.len() {
        let row = DilationRow {
            distancia_rs: result.distances_rs[i],
            distancia_metros: result.distances_m[i],
            fator_dilatacao: result.dilation_factors[i],
        };
        writer.serialize(row).map_err(|source| Error::Table {
            path: path.to_path_buf(),
            source,
        })?;
    }

    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Read the dilation factor column of a persisted case table.
pub fn read_dilation_column(path: &Path) -> Result<Vec<f64>> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| Error::malformed(path, e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::malformed(path, e.to_string()))?;
    let column = headers
        .iter()
        .position(|h| h == DILATION_COLUMN)
        .ok_or_else(|| Error::malformed(path, format!("missing column '{DILATION_COLUMN}'")))?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::malformed(path, e.to_string()))?;
        let field = record.get(column).ok_or_else(|| {
            Error::malformed(
                path,
                format!("row {} is missing column '{DILATION_COLUMN}'", values.len() + 1),
            )
        })?;
        let value: f64 = field.parse().map_err(|_| {
            Error::malformed(
                path,
                format!("non-numeric value '{field}' in column '{DILATION_COLUMN}'"),
            )
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(Error::malformed(path, "no data rows"));
    }
    Ok(values)
}
