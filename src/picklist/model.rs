use serde::Serialize;
use std::ops::Index;
use std::slice;

use crate::error::Result;
use crate::selectable::Selectable;

/// One option of a selection control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OptionPair {
    value: String,
    display_text: String,
}

impl OptionPair {
    pub(crate) fn new(value: String, display_text: String) -> Self {
        Self {
            value,
            display_text,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}

impl From<OptionPair> for (String, String) {
    fn from(pair: OptionPair) -> Self {
        (pair.value, pair.display_text)
    }
}

/// Options in the order they should be rendered.
///
/// Duplicates are kept: whether two items may share a value is up to
/// whoever supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OptionPairList(Vec<OptionPair>);

impl OptionPairList {
    pub(crate) fn from_vec(pairs: Vec<OptionPair>) -> Self {
        Self(pairs)
    }

    /// Shorthand for [`crate::builder::build`].
    pub fn from_selectables<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Selectable,
    {
        crate::builder::build(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, OptionPair> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[OptionPair] {
        &self.0
    }

    /// First option carrying `value`, if any.
    pub fn find_by_value(&self, value: &str) -> Option<&OptionPair> {
        self.0.iter().find(|pair| pair.value == value)
    }

    pub fn into_vec(self) -> Vec<OptionPair> {
        self.0
    }
}

impl Index<usize> for OptionPairList {
    type Output = OptionPair;

    fn index(&self, index: usize) -> &OptionPair {
        &self.0[index]
    }
}

impl IntoIterator for OptionPairList {
    type Item = OptionPair;
    type IntoIter = std::vec::IntoIter<OptionPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptionPairList {
    type Item = &'a OptionPair;
    type IntoIter = slice::Iter<'a, OptionPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
