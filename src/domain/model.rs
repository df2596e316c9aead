use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// 單筆資料。欄位缺漏或型別錯誤時反序列化失敗
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub value: f64,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }
}

/// Records grouped by `name`.
///
/// Keys keep first-seen order and each group keeps the order its records
/// were pushed in. Serializes as a JSON object in that same key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    groups: Vec<(String, Vec<Record>)>,
    index: HashMap<String, usize>,
}

impl Grouping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        match self.index.get(&record.name) {
            Some(&slot) => self.groups[slot].1.push(record),
            None => {
                self.index.insert(record.name.clone(), self.groups.len());
                self.groups.push((record.name.clone(), vec![record]));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Record]> {
        self.index
            .get(name)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 所有群組內的記錄總數
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }
}

impl FromIterator<Record> for Grouping {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut grouping = Grouping::new();
        for record in iter {
            grouping.push(record);
        }
        grouping
    }
}

impl Serialize for Grouping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, records) in &self.groups {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub average: f64,
    /// 空資料集時為 None
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub filtered: Vec<Record>,
    pub sorted: Vec<Record>,
    pub grouped: Grouping,
    pub statistics: Statistics,
}

#[derive(Debug, Clone)]
pub struct ProcessingReport {
    pub loaded_records: usize,
    pub filtered_records: usize,
    pub group_count: usize,
    pub statistics: Statistics,
    pub output_paths: Vec<String>,
}
