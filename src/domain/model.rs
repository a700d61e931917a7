use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element of the top-level comments array, kept as raw JSON so that
/// unknown fields survive untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Value,
}

impl Record {
    pub fn new(data: Value) -> Self {
        Self { data }
    }
}

/// A tag after restructuring: `tag_name` becomes `name`, everything else
/// lands in `metrics` in its original order. `name` carries whatever JSON
/// value `tag_name` held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagObject {
    pub name: Value,
    pub metrics: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeGroup {
    pub theme: String,
    pub tags: Vec<TagObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Restructured { themes: usize, tags: usize },
    PassedThrough,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestructureSummary {
    pub total_records: usize,
    pub restructured_records: usize,
    pub passthrough_records: usize,
    pub themes: usize,
    pub tags: usize,
}

impl RestructureSummary {
    pub fn record(&mut self, outcome: RecordOutcome) {
        self.total_records += 1;
        match outcome {
            RecordOutcome::Restructured { themes, tags } => {
                self.restructured_records += 1;
                self.themes += themes;
                self.tags += tags;
            }
            RecordOutcome::PassedThrough => self.passthrough_records += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub processed_records: Vec<Record>,
    pub summary: RestructureSummary,
}
