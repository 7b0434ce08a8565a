//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod collection;
mod selection;

pub use collection::{Collection, CollectionField, CollectionItem, WINDOW_PARTS_KEY};
pub use selection::{OptionEntry, OutputMode};
