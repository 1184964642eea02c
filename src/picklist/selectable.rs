//! The `Selectable` capability.
//!
//! Anything that can be offered as an option in a selection control
//! implements [`Selectable`]: it hands out a *value* (the identifier the
//! backend stores) and a *display text* (the label a person reads). The two
//! are independent, so an implementation is free to format several of its
//! fields into the label while keeping the value a bare id.
//!
//! Accessors are fallible. Whatever they return is used verbatim; the
//! builder never trims, checks or rewrites it.

use crate::error::ItemError;

pub trait Selectable {
    fn value(&self) -> Result<String, ItemError>;
    fn display_text(&self) -> Result<String, ItemError>;
}

impl<T: Selectable + ?Sized> Selectable for &T {
    fn value(&self) -> Result<String, ItemError> {
        (**self).value()
    }

    fn display_text(&self) -> Result<String, ItemError> {
        (**self).display_text()
    }
}

impl<T: Selectable + ?Sized> Selectable for Box<T> {
    fn value(&self) -> Result<String, ItemError> {
        (**self).value()
    }

    fn display_text(&self) -> Result<String, ItemError> {
        (**self).display_text()
    }
}
