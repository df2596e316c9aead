use crate::domain::model::{Grouping, Record, Statistics};
use crate::utils::error::{RecordError, Result};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;

/// 記憶體內的記錄集合，保持載入順序
///
/// `sort_by_name` 是唯一會改變內部順序的操作，其餘查詢都回傳新的資料。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// 整批取代現有內容，不做合併
    pub fn replace(&mut self, records: Vec<Record>) {
        tracing::debug!(
            "Replacing {} records with {} records",
            self.records.len(),
            records.len()
        );
        self.records = records;
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter_by_value(&self, min_value: f64) -> Vec<Record> {
        self.records
            .iter()
            .filter(|record| record.value >= min_value)
            .cloned()
            .collect()
    }

    /// Sorts the store itself by name and returns the reordered contents.
    ///
    /// Stable, so records sharing a name keep their relative order.
    /// Use [`RecordStore::sorted_by_name`] to get a sorted copy instead.
    pub fn sort_by_name(&mut self) -> &[Record] {
        self.records.sort_by(|a, b| compare_names(&a.name, &b.name));
        &self.records
    }

    pub fn sorted_by_name(&self) -> Vec<Record> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| compare_names(&a.name, &b.name));
        sorted
    }

    pub fn group_by_name(&self) -> Grouping {
        self.records.iter().cloned().collect()
    }

    pub fn average_value(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }

        let total: f64 = self.records.iter().map(|record| record.value).sum();
        total / self.records.len() as f64
    }

    pub fn min_value(&self) -> Result<f64> {
        self.fold_values("min", f64::min)
    }

    pub fn max_value(&self) -> Result<f64> {
        self.fold_values("max", f64::max)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            count: self.records.len(),
            average: self.average_value(),
            min: self.min_value().ok(),
            max: self.max_value().ok(),
        }
    }

    fn fold_values(&self, operation: &'static str, pick: fn(f64, f64) -> f64) -> Result<f64> {
        let (first, rest) = self
            .records
            .split_first()
            .ok_or(RecordError::EmptyStore { operation })?;

        Ok(rest.iter().fold(first.value, |acc, record| pick(acc, record.value)))
    }
}

thread_local! {
    // root 語系 (und)，tertiary 強度：先比字母，再比重音，最後比大小寫
    static ROOT_COLLATOR: Collator =
        Collator::try_new(&locale!("und").into(), CollatorOptions::new())
            .expect("root collation data is compiled into icu_collator");
}

/// Locale-aware name ordering using the CLDR root collation.
///
/// Accented letters sort next to their base letter (`éclair` < `fig`) and
/// lowercase precedes uppercase when names otherwise tie (`apple` < `Apple`).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| collator.compare(a, b))
}
