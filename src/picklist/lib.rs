//! # Picklist
//!
//! Picklist turns domain objects into the option lists that selection
//! controls (dropdowns, radio groups) are rendered from. It is a library
//! first; the bundled CLI is one client of it.
//!
//! ## The Core Mapping
//!
//! ```text
//!   [Selectable, Selectable, ...]  ──build──▶  [OptionPair, OptionPair, ...]
//!        value()  display_text()                  value    display_text
//! ```
//!
//! Each item yields exactly one pair, in input order. Nothing is filtered,
//! sorted, deduplicated or rewritten. The first item whose accessor fails
//! aborts the build with [`error::PicklistError::InvalidItem`].
//!
//! ```
//! use picklist::builder::build;
//! use picklist::error::ItemError;
//! use picklist::selectable::Selectable;
//!
//! struct Customer { id: u32, name: String }
//!
//! impl Selectable for Customer {
//!     fn value(&self) -> Result<String, ItemError> {
//!         Ok(self.id.to_string())
//!     }
//!     fn display_text(&self) -> Result<String, ItemError> {
//!         Ok(format!("{} - {}", self.id, self.name))
//!     }
//! }
//!
//! let customers = vec![
//!     Customer { id: 1, name: "Alice".into() },
//!     Customer { id: 2, name: "Bob".into() },
//! ];
//! let options = build(&customers).unwrap();
//! assert_eq!(options[1].display_text(), "2 - Bob");
//! ```
//!
//! ## Layers
//!
//! - The core ([`selectable`], [`builder`], [`model`]) is pure: no I/O, no
//!   shared state.
//! - [`record`] lets untyped JSON rows act as selectable items.
//! - [`api`] and [`config`] serve UI clients; the CLI in `main.rs` is the
//!   only place that touches stdout, stderr or exit codes.
//!
//! ## Module Overview
//!
//! - [`selectable`]: the `Selectable` capability trait
//! - [`builder`]: the pair list builder
//! - [`model`]: `OptionPair` and `OptionPairList`
//! - [`record`]: JSON records and field mappings
//! - [`api`]: facade used by UI clients
//! - [`config`]: persisted mapping defaults
//! - [`logging`]: logger setup for binaries
//! - [`error`]: error types

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod record;
pub mod selectable;
