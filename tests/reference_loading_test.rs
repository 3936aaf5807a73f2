//! Loading the reference tables from CSV and Parquet files

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use growth_screen::{
    GrowthError, Indicator, MeasurementKind, ReferenceSource, Sex, load_reference_tables,
    lms_zscore,
};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/reference")
}

fn write_parquet(path: &Path, batch: &RecordBatch) {
    let file = File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
    writer.write(batch).unwrap();
    writer.close().unwrap();
}

fn age_batch(ages: Vec<i64>, sexes: Vec<&str>, m: Vec<f64>) -> RecordBatch {
    let n = ages.len();
    RecordBatch::try_from_iter([
        ("age_months", Arc::new(Int64Array::from(ages)) as ArrayRef),
        ("sex", Arc::new(StringArray::from(sexes)) as ArrayRef),
        ("L", Arc::new(Float64Array::from(vec![1.0; n])) as ArrayRef),
        ("M", Arc::new(Float64Array::from(m)) as ArrayRef),
        ("S", Arc::new(Float64Array::from(vec![0.05; n])) as ArrayRef),
    ])
    .unwrap()
}

#[test]
fn test_loads_csv_fixtures() {
    let source = ReferenceSource {
        directory: fixture_dir(),
        ..ReferenceSource::default()
    };
    let tables = load_reference_tables(&source).unwrap();

    for (indicator, rows) in tables.row_counts() {
        assert_eq!(rows, 4, "{indicator} should have four rows");
    }

    let wfa = tables
        .lookup_by_age(Indicator::WeightForAge, 18, Sex::Female)
        .unwrap();
    assert!((wfa.l - -0.05).abs() < 1e-12);
    assert!((wfa.m - 9.8).abs() < 1e-12);

    // Integer L column is widened to float
    let hfa = tables
        .lookup_by_age(Indicator::HeightForAge, 24, Sex::Male)
        .unwrap();
    assert!((hfa.l - 1.0).abs() < f64::EPSILON);

    let length = tables
        .lookup_by_height(Sex::Male, MeasurementKind::Length, 86.0)
        .unwrap();
    let height = tables
        .lookup_by_height(Sex::Male, MeasurementKind::Height, 86.0)
        .unwrap();
    assert!(length.m < height.m);

    assert!(tables.lookup_by_height(Sex::Female, MeasurementKind::Height, 78.0).is_none());
}

#[test]
fn test_every_row_scores_zero_at_its_median() {
    let source = ReferenceSource {
        directory: fixture_dir(),
        ..ReferenceSource::default()
    };
    let tables = load_reference_tables(&source).unwrap();

    let age_rows = [
        Indicator::WeightForAge,
        Indicator::HeightForAge,
        Indicator::HeadCircumferenceForAge,
    ]
    .into_iter()
    .flat_map(|indicator| tables.age_table(indicator).unwrap().iter())
    .map(|(_, params)| *params);
    let height_rows = tables.height_table().iter().map(|(_, params)| *params);

    let mut checked = 0;
    for params in age_rows.chain(height_rows) {
        assert_eq!(lms_zscore(params.m, params), Some(0.0), "{params:?}");
        checked += 1;
    }
    assert_eq!(checked, 16);
}

#[test]
fn test_loads_parquet_tables() {
    let dir = tempfile::tempdir().unwrap();

    for name in ["wfa.parquet", "lhfa.parquet", "hcfa.parquet"] {
        let batch = age_batch(vec![6, 6, 7], vec!["male", "female", "male"], vec![7.9, 7.3, 8.3]);
        write_parquet(&dir.path().join(name), &batch);
    }

    let wfh = RecordBatch::try_from_iter([
        ("sex", Arc::new(StringArray::from(vec!["boy", "girl"])) as ArrayRef),
        ("measurement_kind", Arc::new(StringArray::from(vec!["length", "length"])) as ArrayRef),
        ("height_cm", Arc::new(Float64Array::from(vec![67.5, 67.5])) as ArrayRef),
        ("L", Arc::new(Float64Array::from(vec![-0.35, -0.38])) as ArrayRef),
        ("M", Arc::new(Float64Array::from(vec![7.9, 7.6])) as ArrayRef),
        ("S", Arc::new(Float64Array::from(vec![0.08, 0.085])) as ArrayRef),
    ])
    .unwrap();
    write_parquet(&dir.path().join("wfh.parquet"), &wfh);

    let source = ReferenceSource {
        directory: dir.path().to_path_buf(),
        weight_for_age: "wfa.parquet".to_string(),
        height_for_age: "lhfa.parquet".to_string(),
        weight_for_height: "wfh.parquet".to_string(),
        head_circumference_for_age: "hcfa.parquet".to_string(),
        ..ReferenceSource::default()
    };
    let tables = load_reference_tables(&source).unwrap();

    let wfa = tables
        .lookup_by_age(Indicator::WeightForAge, 7, Sex::Male)
        .unwrap();
    assert!((wfa.m - 8.3).abs() < 1e-12);
    assert!(tables.lookup_by_age(Indicator::WeightForAge, 7, Sex::Female).is_none());

    let girl = tables
        .lookup_by_height(Sex::Female, MeasurementKind::Length, 67.5)
        .unwrap();
    assert!((girl.s - 0.085).abs() < 1e-12);
}

#[test]
fn test_missing_directory_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let source = ReferenceSource {
        directory: dir.path().join("does-not-exist"),
        ..ReferenceSource::default()
    };

    let err = load_reference_tables(&source).unwrap_err();
    assert!(matches!(err, GrowthError::NotFound { .. }));
}

#[test]
fn test_missing_file_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["wfa-all.csv", "lhfa-all.csv", "hcfa-all.csv"] {
        fs::copy(fixture_dir().join(name), dir.path().join(name)).unwrap();
    }

    let source = ReferenceSource {
        directory: dir.path().to_path_buf(),
        ..ReferenceSource::default()
    };
    assert!(load_reference_tables(&source).is_err());
}

#[test]
fn test_empty_table_loads_with_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["wfa-all.csv", "lhfa-all.csv", "wfh-all.csv"] {
        fs::copy(fixture_dir().join(name), dir.path().join(name)).unwrap();
    }
    fs::write(dir.path().join("hcfa-all.csv"), "Usia,Gender,L,M,S\n99,X,1,0,0\n").unwrap();

    let source = ReferenceSource {
        directory: dir.path().to_path_buf(),
        ..ReferenceSource::default()
    };
    let tables = load_reference_tables(&source).unwrap();

    assert!(
        tables
            .lookup_by_age(Indicator::HeadCircumferenceForAge, 18, Sex::Male)
            .is_none()
    );
    assert!(
        tables
            .lookup_by_age(Indicator::WeightForAge, 18, Sex::Male)
            .is_some()
    );
}
