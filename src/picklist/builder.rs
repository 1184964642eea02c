//! # Pair List Builder
//!
//! Maps a sequence of [`Selectable`] items onto an [`OptionPairList`]. Each
//! item contributes exactly one [`OptionPair`], in input order, holding
//! whatever its accessors returned.
//!
//! The first accessor failure aborts the build and is reported as
//! [`PicklistError::InvalidItem`]; no partial list is handed back.

use log::{debug, warn};

use crate::error::{ItemError, ItemField, PicklistError, Result};
use crate::model::{OptionPair, OptionPairList};
use crate::selectable::Selectable;

pub fn build<I>(items: I) -> Result<OptionPairList>
where
    I: IntoIterator,
    I::Item: Selectable,
{
    let items = items.into_iter();
    let mut pairs = Vec::with_capacity(items.size_hint().0);

    for (index, item) in items.enumerate() {
        let value = item
            .value()
            .map_err(|source| invalid_item(index, ItemField::Value, source))?;
        let display_text = item
            .display_text()
            .map_err(|source| invalid_item(index, ItemField::DisplayText, source))?;
        pairs.push(OptionPair::new(value, display_text));
    }

    debug!("built {} option pairs", pairs.len());
    Ok(OptionPairList::from_vec(pairs))
}

fn invalid_item(index: usize, field: ItemField, source: ItemError) -> PicklistError {
    warn!("item {} failed to provide its {}: {}", index, field, source);
    PicklistError::InvalidItem {
        index,
        field,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone)]
    struct Customer {
        id: u32,
        name: &'static str,
    }

    impl Selectable for Customer {
        fn value(&self) -> std::result::Result<String, ItemError> {
            Ok(self.id.to_string())
        }

        fn display_text(&self) -> std::result::Result<String, ItemError> {
            Ok(format!("{} - {}", self.id, self.name))
        }
    }

    struct Fixed(&'static str, &'static str);

    impl Selectable for Fixed {
        fn value(&self) -> std::result::Result<String, ItemError> {
            Ok(self.0.to_string())
        }

        fn display_text(&self) -> std::result::Result<String, ItemError> {
            Ok(self.1.to_string())
        }
    }

    struct Broken {
        field: ItemField,
    }

    impl Selectable for Broken {
        fn value(&self) -> std::result::Result<String, ItemError> {
            match self.field {
                ItemField::Value => Err(ItemError::new("no id assigned")),
                ItemField::DisplayText => Ok("x".to_string()),
            }
        }

        fn display_text(&self) -> std::result::Result<String, ItemError> {
            Err(ItemError::new("name unavailable"))
        }
    }

    struct Counting<'a> {
        calls: &'a Cell<usize>,
    }

    impl Selectable for Counting<'_> {
        fn value(&self) -> std::result::Result<String, ItemError> {
            self.calls.set(self.calls.get() + 1);
            Ok("v".to_string())
        }

        fn display_text(&self) -> std::result::Result<String, ItemError> {
            Ok("d".to_string())
        }
    }

    fn customers() -> Vec<Customer> {
        vec![
            Customer { id: 1, name: "Alice" },
            Customer { id: 2, name: "Bob" },
        ]
    }

    #[test]
    fn builds_pairs_in_input_order() {
        let list = build(&customers()).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].value(), "1");
        assert_eq!(list[0].display_text(), "1 - Alice");
        assert_eq!(list[1].value(), "2");
        assert_eq!(list[1].display_text(), "2 - Bob");
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let items: Vec<Customer> = Vec::new();
        let list = build(&items).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn keeps_duplicate_values() {
        let items = [Fixed("1", "1 - Alice"), Fixed("1", "1 - Alicia")];
        let list = build(&items).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].value(), "1");
        assert_eq!(list[1].value(), "1");
        assert_eq!(list[1].display_text(), "1 - Alicia");
    }

    #[test]
    fn passes_empty_strings_through() {
        let list = build([Fixed("", "")]).unwrap();
        assert_eq!(list[0].value(), "");
        assert_eq!(list[0].display_text(), "");
    }

    #[test]
    fn repeated_builds_are_equal() {
        let items = customers();
        assert_eq!(build(&items).unwrap(), build(&items).unwrap());
    }

    #[test]
    fn accepts_owned_items_and_trait_objects() {
        let owned = build(customers()).unwrap();
        assert_eq!(owned.len(), 2);

        let mixed: Vec<Box<dyn Selectable>> = vec![
            Box::new(Customer { id: 5, name: "Eve" }),
            Box::new(Fixed("other", "Other")),
        ];
        let list = build(&mixed).unwrap();
        assert_eq!(list[0].display_text(), "5 - Eve");
        assert_eq!(list[1].value(), "other");
    }

    #[test]
    fn value_failure_is_reported_with_position() {
        let items: Vec<Box<dyn Selectable>> = vec![
            Box::new(Fixed("1", "one")),
            Box::new(Broken {
                field: ItemField::Value,
            }),
        ];

        let err = build(&items).unwrap_err();
        match err {
            PicklistError::InvalidItem {
                index,
                field,
                source,
            } => {
                assert_eq!(index, 1);
                assert_eq!(field, ItemField::Value);
                assert_eq!(source.message(), "no id assigned");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn display_text_failure_is_reported() {
        let err = build([Broken {
            field: ItemField::DisplayText,
        }])
        .unwrap_err();

        assert!(matches!(
            err,
            PicklistError::InvalidItem {
                index: 0,
                field: ItemField::DisplayText,
                ..
            }
        ));
        assert!(err.to_string().contains("name unavailable"));
    }

    #[test]
    fn stops_at_first_failure() {
        let calls = Cell::new(0);
        let items: Vec<Box<dyn Selectable + '_>> = vec![
            Box::new(Broken {
                field: ItemField::Value,
            }),
            Box::new(Counting { calls: &calls }),
        ];

        assert!(build(&items).is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn from_selectables_matches_build() {
        let items = customers();
        assert_eq!(
            OptionPairList::from_selectables(&items).unwrap(),
            build(&items).unwrap()
        );
    }
}
