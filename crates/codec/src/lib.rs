//! Serialization adapter between Moneta money values and generic JSON
//! documents.
//!
//! A document encoder lowers values it cannot represent natively through
//! [`serialize`], and a document decoder runs every parsed node through
//! [`deserialize`]. Together the two hooks give lossless round trips for
//! `Money` embedded anywhere inside a larger document tree.

pub mod error;
pub mod json;

pub use error::{CodecError, CodecResult};
pub use json::{Decoded, HookInput, MONEY_TYPE, TYPE_KEY, deserialize, serialize};
