//! # tagvalid-derive
//!
//! Derive macro for tagvalid.
//!
//! `#[derive(Record)]` builds the field table that `tagvalid` walks during
//! validation: one descriptor per field with its name, declared type,
//! visibility and `#[tag(...)]` entries.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod record;

/// Derive `tagvalid::Record` and `tagvalid::ToFieldValue` for a struct with
/// named fields.
///
/// Tags are written as `#[tag(key = "value", ...)]` on each field; any key may
/// be used, so custom tag names work the same as the default `validation`.
/// A field whose type has no `ToFieldValue` impl can be marked
/// `#[tag(opaque)]`; rules on it then report a type mismatch.
///
/// The field descriptor table is built once per type. Generic parameters
/// must be `'static`.
#[proc_macro_derive(Record, attributes(tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
