use std::fmt;
use thiserror::Error;

/// Which accessor of a [`Selectable`](crate::selectable::Selectable) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Value,
    DisplayText,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemField::Value => write!(f, "value"),
            ItemField::DisplayText => write!(f, "display text"),
        }
    }
}

/// Failure raised by an item's own accessor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ItemError {
    message: String,
}

impl ItemError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(format!("missing field `{}`", field))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum PicklistError {
    #[error("Invalid item at position {index}: could not read {field}: {source}")]
    InvalidItem {
        index: usize,
        field: ItemField,
        #[source]
        source: ItemError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PicklistError>;
