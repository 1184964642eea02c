//! # API Facade
//!
//! A thin layer between UI clients and the builder. It resolves the record
//! mapping (config plus per-call overrides), turns raw JSON input into
//! records, and hands them to [`crate::builder::build`].
//!
//! Like the rest of the library it takes and returns plain Rust values:
//! no stdout, no terminal, no process exit.

use serde_json::Value;

use crate::builder;
use crate::config::PicklistConfig;
use crate::error::{PicklistError, Result};
use crate::model::OptionPairList;
use crate::record::{Record, RecordMapping};

/// Per-call replacements for configured mapping values.
#[derive(Debug, Clone, Default)]
pub struct MappingOverrides {
    pub value_field: Option<String>,
    pub display_format: Option<String>,
}

pub struct PicklistApi {
    config: PicklistConfig,
}

impl PicklistApi {
    pub fn new(config: PicklistConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PicklistConfig {
        &self.config
    }

    pub fn mapping(&self, overrides: &MappingOverrides) -> Result<RecordMapping> {
        let value_field = overrides
            .value_field
            .as_deref()
            .unwrap_or(&self.config.value_field);
        let display_format = overrides
            .display_format
            .as_deref()
            .unwrap_or(&self.config.display_format);
        RecordMapping::new(value_field, display_format)
    }

    pub fn build_records(
        &self,
        records: &[Record],
        mapping: &RecordMapping,
    ) -> Result<OptionPairList> {
        builder::build(mapping.apply_all(records))
    }

    /// Parse and build in one step.
    pub fn build_json(&self, input: &str, overrides: &MappingOverrides) -> Result<OptionPairList> {
        let mapping = self.mapping(overrides)?;
        let records = parse_records(input)?;
        self.build_records(&records, &mapping)
    }
}

/// Parse a JSON array of objects.
pub fn parse_records(input: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(input)?;
    let Value::Array(items) = value else {
        return Err(PicklistError::Api("Input must be a JSON array".into()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(PicklistError::Api(format!(
                "Input element {} is not a JSON object",
                i
            ))),
        })
        .collect()
}
