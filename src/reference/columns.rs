//! Locating and casting reference columns in Arrow record batches.

use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::compute::kernels::cast;
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::{GrowthError, Result};

/// Index of the first candidate header present in `schema`, ignoring ASCII case
#[must_use]
pub fn find_column(schema: &Schema, candidates: &[String]) -> Option<usize> {
    candidates.iter().find_map(|candidate| {
        schema
            .fields()
            .iter()
            .position(|field| field.name().eq_ignore_ascii_case(candidate))
    })
}

/// Fetch a column by candidate names and cast it to `target`
fn column_as(
    batch: &RecordBatch,
    table: &str,
    column: &'static str,
    candidates: &[String],
    target: &DataType,
) -> Result<ArrayRef> {
    let idx = find_column(&batch.schema(), candidates).ok_or_else(|| GrowthError::MissingColumn {
        table: table.to_string(),
        column,
        candidates: candidates.join(", "),
    })?;

    let array = batch.column(idx);
    if array.data_type() == target {
        return Ok(array.clone());
    }

    log::debug!(
        "Casting column '{}' in {} from {} to {}",
        column,
        table,
        array.data_type(),
        target
    );
    Ok(cast::cast(array, target)?)
}

pub fn float_column(
    batch: &RecordBatch,
    table: &str,
    column: &'static str,
    candidates: &[String],
) -> Result<Float64Array> {
    let array = column_as(batch, table, column, candidates, &DataType::Float64)?;
    array
        .as_any()
        .downcast_ref::<Float64Array>()
        .cloned()
        .ok_or_else(|| GrowthError::InvalidReference(format!("{column} in {table} is not numeric")))
}

pub fn int_column(
    batch: &RecordBatch,
    table: &str,
    column: &'static str,
    candidates: &[String],
) -> Result<Int64Array> {
    let array = column_as(batch, table, column, candidates, &DataType::Int64)?;
    array
        .as_any()
        .downcast_ref::<Int64Array>()
        .cloned()
        .ok_or_else(|| GrowthError::InvalidReference(format!("{column} in {table} is not an integer")))
}

pub fn string_column(
    batch: &RecordBatch,
    table: &str,
    column: &'static str,
    candidates: &[String],
) -> Result<StringArray> {
    let array = column_as(batch, table, column, candidates, &DataType::Utf8)?;
    array
        .as_any()
        .downcast_ref::<StringArray>()
        .cloned()
        .ok_or_else(|| GrowthError::InvalidReference(format!("{column} in {table} is not text")))
}
