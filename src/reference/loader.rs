//! Reference table loading
//!
//! Reads the WHO LMS tables from CSV or Parquet files into Arrow record
//! batches, then indexes the rows by their lookup key. Rows that cannot be
//! used (nulls, unknown codes, invalid parameters) are skipped and counted.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::{Array, Float64Array, StringArray};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::columns::{float_column, int_column, string_column};
use super::lms::{AgeKey, HeightKey, LmsParams};
use super::store::ReferenceTables;
use super::table::ReferenceTable;
use crate::config::{ColumnMapping, ReferenceSource};
use crate::error::util::{safe_open_file, validate_directory};
use crate::error::{GrowthError, Result};
use crate::models::types::{Indicator, MeasurementKind, Sex};
use crate::utils::logging::{log_empty_table, log_table_load_start, log_table_loaded};

/// Row bookkeeping for one table load
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows indexed
    pub kept: usize,
    /// Rows dropped because a value was missing or invalid
    pub skipped: usize,
    /// Rows dropped because their key was already present
    pub duplicates: usize,
}

/// Load all four reference tables described by `source`.
///
/// The tables are read in parallel; any file error aborts the load.
/// An empty table is allowed and only produces a warning, since lookups
/// against it simply yield no result.
pub fn load_reference_tables(source: &ReferenceSource) -> Result<ReferenceTables> {
    validate_directory(source.directory(), "WHO reference tables")?;
    let start = Instant::now();

    let ((weight_for_age, height_for_age), (weight_for_height, head_circumference_for_age)) =
        rayon::join(
            || {
                rayon::join(
                    || load_age_table(source, Indicator::WeightForAge),
                    || load_age_table(source, Indicator::HeightForAge),
                )
            },
            || {
                rayon::join(
                    || load_height_table(source),
                    || load_age_table(source, Indicator::HeadCircumferenceForAge),
                )
            },
        );

    let tables = ReferenceTables::new(
        weight_for_age?,
        height_for_age?,
        weight_for_height?,
        head_circumference_for_age?,
    );

    for (indicator, rows) in tables.row_counts() {
        if rows == 0 {
            log_empty_table(indicator, &source.path_for(indicator));
        }
    }
    log::info!(
        "Loaded WHO reference tables from {} in {:?}",
        source.directory().display(),
        start.elapsed()
    );

    Ok(tables)
}

/// Load one of the age-indexed tables
pub fn load_age_table(source: &ReferenceSource, indicator: Indicator) -> Result<ReferenceTable<AgeKey>> {
    let path = source.path_for(indicator);
    let start = Instant::now();
    log_table_load_start(indicator, &path);

    let batches = read_table_batches(&path)?;
    let (table, stats) = index_age_rows(&batches, &source.columns, &table_name(&path))?;

    log_table_loaded(indicator, &path, &stats, start.elapsed());
    Ok(table)
}

/// Load the weight-for-length/height table
pub fn load_height_table(source: &ReferenceSource) -> Result<ReferenceTable<HeightKey>> {
    let indicator = Indicator::WeightForHeight;
    let path = source.path_for(indicator);
    let start = Instant::now();
    log_table_load_start(indicator, &path);

    let batches = read_table_batches(&path)?;
    let (table, stats) = index_height_rows(&batches, &source.columns, &table_name(&path))?;

    log_table_loaded(indicator, &path, &stats, start.elapsed());
    Ok(table)
}

fn table_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Read a reference file into record batches, picking the reader by extension
pub fn read_table_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));

    if is_parquet {
        read_parquet_table(path)
    } else {
        read_csv_table(path)
    }
}

fn read_csv_table(path: &Path) -> Result<Vec<RecordBatch>> {
    let mut file = safe_open_file(path, "reading reference CSV")?;

    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, None)?;
    file.rewind()
        .map_err(|e| GrowthError::io(path, "Failed to rewind reference CSV", e))?;

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(batches)
}

fn read_parquet_table(path: &Path) -> Result<Vec<RecordBatch>> {
    let file: File = safe_open_file(path, "reading reference parquet file")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(batches)
}

/// The L, M and S columns of one batch
struct LmsColumns {
    l: Float64Array,
    m: Float64Array,
    s: Float64Array,
}

impl LmsColumns {
    fn from_batch(batch: &RecordBatch, columns: &ColumnMapping, table: &str) -> Result<Self> {
        Ok(Self {
            l: float_column(batch, table, "L", &columns.l)?,
            m: float_column(batch, table, "M", &columns.m)?,
            s: float_column(batch, table, "S", &columns.s)?,
        })
    }

    fn params(&self, row: usize) -> Option<LmsParams> {
        if self.l.is_null(row) || self.m.is_null(row) || self.s.is_null(row) {
            return None;
        }
        LmsParams::new(self.l.value(row), self.m.value(row), self.s.value(row))
    }
}

fn sex_at(sexes: &StringArray, row: usize) -> Option<Sex> {
    if sexes.is_null(row) {
        return None;
    }
    Sex::from_code(sexes.value(row))
}

/// Index age-keyed rows from already-read batches
pub fn index_age_rows(
    batches: &[RecordBatch],
    columns: &ColumnMapping,
    table: &str,
) -> Result<(ReferenceTable<AgeKey>, LoadStats)> {
    let mut index = ReferenceTable::new();
    let mut stats = LoadStats::default();

    for batch in batches {
        let ages = int_column(batch, table, "age", &columns.age_months)?;
        let sexes = string_column(batch, table, "sex", &columns.sex)?;
        let lms = LmsColumns::from_batch(batch, columns, table)?;

        for row in 0..batch.num_rows() {
            let age = if ages.is_null(row) {
                None
            } else {
                u32::try_from(ages.value(row)).ok()
            };

            match (age, sex_at(&sexes, row), lms.params(row)) {
                (Some(age), Some(sex), Some(params)) => {
                    if index.insert(AgeKey::new(age, sex), params) {
                        stats.kept += 1;
                    } else {
                        stats.duplicates += 1;
                    }
                }
                _ => stats.skipped += 1,
            }
        }
    }

    Ok((index, stats))
}

/// Index (sex, measurement kind, height)-keyed rows from already-read batches
pub fn index_height_rows(
    batches: &[RecordBatch],
    columns: &ColumnMapping,
    table: &str,
) -> Result<(ReferenceTable<HeightKey>, LoadStats)> {
    let mut index = ReferenceTable::new();
    let mut stats = LoadStats::default();

    for batch in batches {
        let heights = float_column(batch, table, "height", &columns.height_cm)?;
        let kinds = string_column(batch, table, "measurement kind", &columns.measurement_kind)?;
        let sexes = string_column(batch, table, "sex", &columns.sex)?;
        let lms = LmsColumns::from_batch(batch, columns, table)?;

        for row in 0..batch.num_rows() {
            let kind = if kinds.is_null(row) {
                None
            } else {
                MeasurementKind::from_code(kinds.value(row))
            };
            let key = match (sex_at(&sexes, row), kind, heights.is_null(row)) {
                (Some(sex), Some(kind), false) => HeightKey::new(sex, kind, heights.value(row)),
                _ => None,
            };

            match (key, lms.params(row)) {
                (Some(key), Some(params)) => {
                    if index.insert(key, params) {
                        stats.kept += 1;
                    } else {
                        stats.duplicates += 1;
                    }
                }
                _ => stats.skipped += 1,
            }
        }
    }

    Ok((index, stats))
}
