//! The four WHO reference tables, immutable after construction

use super::lms::{AgeKey, HeightKey, LmsParams};
use super::table::ReferenceTable;
use crate::models::types::{Indicator, MeasurementKind, Sex};

/// All reference data needed for a screening.
///
/// Built once, then only read. It holds no interior mutability, so it can
/// be shared behind an `Arc` or a plain reference across threads.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    weight_for_age: ReferenceTable<AgeKey>,
    height_for_age: ReferenceTable<AgeKey>,
    weight_for_height: ReferenceTable<HeightKey>,
    head_circumference_for_age: ReferenceTable<AgeKey>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ReferenceTables {
    #[must_use]
    pub const fn new(
        weight_for_age: ReferenceTable<AgeKey>,
        height_for_age: ReferenceTable<AgeKey>,
        weight_for_height: ReferenceTable<HeightKey>,
        head_circumference_for_age: ReferenceTable<AgeKey>,
    ) -> Self {
        Self {
            weight_for_age,
            height_for_age,
            weight_for_height,
            head_circumference_for_age,
        }
    }

    #[must_use]
    pub fn builder() -> ReferenceTablesBuilder {
        ReferenceTablesBuilder::default()
    }

    /// The age-indexed table for `indicator`, if it is age-indexed
    #[must_use]
    pub const fn age_table(&self, indicator: Indicator) -> Option<&ReferenceTable<AgeKey>> {
        match indicator {
            Indicator::WeightForAge => Some(&self.weight_for_age),
            Indicator::HeightForAge => Some(&self.height_for_age),
            Indicator::HeadCircumferenceForAge => Some(&self.head_circumference_for_age),
            Indicator::WeightForHeight => None,
        }
    }

    #[must_use]
    pub const fn height_table(&self) -> &ReferenceTable<HeightKey> {
        &self.weight_for_height
    }

    /// Exact (age, sex) lookup in an age-indexed table
    #[must_use]
    pub fn lookup_by_age(&self, indicator: Indicator, age_months: u32, sex: Sex) -> Option<LmsParams> {
        self.age_table(indicator)?
            .lookup(&AgeKey::new(age_months, sex))
    }

    /// Lookup in the weight-for-length/height table, height rounded to 0.1 cm
    #[must_use]
    pub fn lookup_by_height(
        &self,
        sex: Sex,
        kind: MeasurementKind,
        height_cm: f64,
    ) -> Option<LmsParams> {
        let key = HeightKey::new(sex, kind, height_cm)?;
        self.weight_for_height.lookup(&key)
    }

    /// Row count per indicator, in `Indicator::ALL` order
    #[must_use]
    pub fn row_counts(&self) -> [(Indicator, usize); 4] {
        [
            (Indicator::WeightForAge, self.weight_for_age.len()),
            (Indicator::HeightForAge, self.height_for_age.len()),
            (Indicator::WeightForHeight, self.weight_for_height.len()),
            (
                Indicator::HeadCircumferenceForAge,
                self.head_circumference_for_age.len(),
            ),
        ]
    }
}

/// In-memory construction of reference tables, for embedded data and tests
#[derive(Debug, Clone)]
pub struct ReferenceTablesBuilder {
    weight_for_age: ReferenceTable<AgeKey>,
    height_for_age: ReferenceTable<AgeKey>,
    weight_for_height: ReferenceTable<HeightKey>,
    head_circumference_for_age: ReferenceTable<AgeKey>,
}

impl Default for ReferenceTablesBuilder {
    fn default() -> Self {
        Self {
            weight_for_age: ReferenceTable::new(),
            height_for_age: ReferenceTable::new(),
            weight_for_height: ReferenceTable::new(),
            head_circumference_for_age: ReferenceTable::new(),
        }
    }
}

impl ReferenceTablesBuilder {
    /// Add an age-indexed row. Rows for `WeightForHeight` or with invalid
    /// parameters are ignored; the first row for a key wins.
    #[must_use]
    pub fn age_row(mut self, indicator: Indicator, age_months: u32, sex: Sex, l: f64, m: f64, s: f64) -> Self {
        let table = match indicator {
            Indicator::WeightForAge => &mut self.weight_for_age,
            Indicator::HeightForAge => &mut self.height_for_age,
            Indicator::HeadCircumferenceForAge => &mut self.head_circumference_for_age,
            Indicator::WeightForHeight => return self,
        };
        if let Some(params) = LmsParams::new(l, m, s) {
            table.insert(AgeKey::new(age_months, sex), params);
        }
        self
    }

    /// Add a weight-for-length/height row
    #[must_use]
    pub fn height_row(
        mut self,
        sex: Sex,
        kind: MeasurementKind,
        height_cm: f64,
        l: f64,
        m: f64,
        s: f64,
    ) -> Self {
        if let (Some(key), Some(params)) = (HeightKey::new(sex, kind, height_cm), LmsParams::new(l, m, s)) {
            self.weight_for_height.insert(key, params);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> ReferenceTables {
        ReferenceTables::new(
            self.weight_for_age,
            self.height_for_age,
            self.weight_for_height,
            self.head_circumference_for_age,
        )
    }
}
