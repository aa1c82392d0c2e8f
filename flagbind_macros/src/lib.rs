//! Procedural macros for `flagbind`.
//!
//! `#[derive(FlagBind)]` implements `flagbind::Bind` for a struct with
//! named fields. Every exported field becomes a `flagbind::Field` whose flag
//! name is derived from the field name at bind time. Field attributes tune
//! the result:
//!
//! - `#[flag(name = "...")]` overrides the flag name; `"-"` skips the field.
//! - `#[flag(default = ...)]` supplies raw text (or a literal used as text)
//!   applied when the struct is bound.
//! - `#[flag(usage = "...")]` sets help text.
//! - `#[flag(skip)]` leaves the field out.
//!
//! On the struct, `#[flag(crate = "path")]` points generated code at a
//! renamed `flagbind` dependency.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `flagbind::Bind`.
#[proc_macro_derive(FlagBind, attributes(flag))]
pub fn derive_flag_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
