use serde::{Deserialize, Serialize};

/// One known page: where it lives and how its table maps onto fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub name: String,
    pub url: String,
    pub table_selector: String,
    pub fields: Vec<String>,
}

/// One table row: a single state or territory's cell values, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub values: Vec<String>,
}

impl StateRecord {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// First column, by convention the state or territory name.
    pub fn name(&self) -> &str {
        self.values.first().map(|s| s.as_str()).unwrap_or("")
    }
}

/// Everything extracted from one page, frozen after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub source_url: String,
    pub fields: Vec<String>,
    pub records: Vec<StateRecord>,
    pub skipped_rows: usize,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Array-of-objects form: one object per record, keys in schema order.
    pub fn to_json_value(&self) -> serde_json::Value {
        let rows = self
            .records
            .iter()
            .map(|r| {
                let mut obj = serde_json::Map::new();
                for (field, value) in self.fields.iter().zip(&r.values) {
                    obj.insert(field.clone(), serde_json::Value::String(value.clone()));
                }
                serde_json::Value::Object(obj)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}
