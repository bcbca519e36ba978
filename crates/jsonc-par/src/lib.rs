//! Recursive-descent parser and value tree API for the jsonc decoder.
//!
//! [`parse`] builds a [`Document`] into a caller-supplied [`jsonc_util::Arena`];
//! [`parse_owned`] is the convenience entry point for callers with no arena
//! of their own.

mod document;
mod parser;
mod value;

pub use document::{parse, parse_owned, Document, OwnedDocument};
pub use parser::{Parser, MAX_NESTING_DEPTH};
pub use value::Value;
