//! Untyped rows as selectable items.
//!
//! Data that arrives as JSON objects (query results, fixtures, API payloads)
//! has no Rust type to implement [`Selectable`] on. A [`RecordMapping`] says
//! which field is the value and how the display text is composed, and
//! [`MappedRecord`] applies it to one row.
//!
//! Display formats use `{field}` placeholders, so `"{id} - {name}"` turns
//! `{"id": 1, "name": "Alice"}` into `1 - Alice`. Write `{{` and `}}` for
//! literal braces.

use serde_json::{Map, Value};

use crate::error::{ItemError, PicklistError, Result};
use crate::selectable::Selectable;

pub type Record = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMapping {
    value_field: String,
    display_format: String,
    segments: Vec<Segment>,
}

impl RecordMapping {
    pub fn new(value_field: impl Into<String>, display_format: impl Into<String>) -> Result<Self> {
        let value_field = value_field.into().trim().to_string();
        if value_field.is_empty() {
            return Err(PicklistError::Config("value field cannot be empty".into()));
        }
        let display_format = display_format.into();
        let segments = parse_format(&display_format)?;
        Ok(Self {
            value_field,
            display_format,
            segments,
        })
    }

    pub fn value_field(&self) -> &str {
        &self.value_field
    }

    pub fn display_format(&self) -> &str {
        &self.display_format
    }

    pub fn apply<'a>(&'a self, record: &'a Record) -> MappedRecord<'a> {
        MappedRecord {
            record,
            mapping: self,
        }
    }

    pub fn apply_all<'a>(&'a self, records: &'a [Record]) -> Vec<MappedRecord<'a>> {
        records.iter().map(|record| self.apply(record)).collect()
    }
}

/// A record viewed through a mapping.
#[derive(Debug, Clone, Copy)]
pub struct MappedRecord<'a> {
    record: &'a Record,
    mapping: &'a RecordMapping,
}

impl Selectable for MappedRecord<'_> {
    fn value(&self) -> std::result::Result<String, ItemError> {
        field_text(self.record, &self.mapping.value_field)
    }

    fn display_text(&self) -> std::result::Result<String, ItemError> {
        let mut out = String::new();
        for segment in &self.mapping.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(name) => out.push_str(&field_text(self.record, name)?),
            }
        }
        Ok(out)
    }
}

fn field_text(record: &Record, field: &str) -> std::result::Result<String, ItemError> {
    match record.get(field) {
        None => Err(ItemError::missing_field(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Null) => Err(ItemError::new(format!("field `{}` is null", field))),
        Some(_) => Err(ItemError::new(format!(
            "field `{}` is not a scalar value",
            field
        ))),
    }
}

fn parse_format(format: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(PicklistError::Config(format!(
                        "unclosed placeholder in display format `{}`",
                        format
                    )));
                }
                let name = name.trim();
                if name.is_empty() {
                    return Err(PicklistError::Config(format!(
                        "empty placeholder in display format `{}`",
                        format
                    )));
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(name.to_string()));
            }
            '}' => {
                return Err(PicklistError::Config(format!(
                    "unmatched `}}` in display format `{}`",
                    format
                )));
            }
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}
