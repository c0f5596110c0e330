//! Tabular export of curve data
//!
//! Builds polars [`DataFrame`]s from parsed curves, one column per curve in
//! curve order, and writes them to Parquet.

use crate::error::{LasError, Result};
use crate::models::{DataSection, LasDocument};
use indexmap::IndexMap;
use polars::prelude::{Column, DataFrame, ParquetCompression, ParquetWriter};
use std::fs::File;
use std::path::Path;
use tracing::debug;

impl LasDocument {
    /// Curve data as a DataFrame: `f64` columns, `String` columns for `{S}` curves
    pub fn logs_frame(&self) -> Result<DataFrame> {
        build_frame(&self.curves_order, &self.logs, &self.string_data)
    }
}

impl DataSection {
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        build_frame(&self.curves_order, &self.data, &self.string_data)
    }
}

fn build_frame(
    order: &[String],
    numeric: &IndexMap<String, Vec<f64>>,
    strings: &IndexMap<String, Vec<String>>,
) -> Result<DataFrame> {
    let columns: Vec<Column> = order
        .iter()
        .filter_map(|name| {
            if let Some(values) = strings.get(name) {
                Some(Column::new(name.as_str().into(), values.as_slice()))
            } else {
                numeric
                    .get(name)
                    .map(|values| Column::new(name.as_str().into(), values.as_slice()))
            }
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}

/// Write the document's curve data to a Snappy-compressed Parquet file
///
/// Returns the number of rows written.
pub fn write_parquet(document: &LasDocument, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let mut df = document.logs_frame()?;

    let file = File::create(path).map_err(|e| LasError::write(path, e))?;
    ParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .finish(&mut df)?;

    debug!(
        "Wrote {} rows x {} curves to {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df.height())
}
