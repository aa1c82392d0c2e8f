//! Expansion of `#[derive(FlagBind)]`.

mod crate_path;
mod generate;
mod literals;
mod naming;
mod parse;
mod type_utils;

use proc_macro2::TokenStream;
use syn::DeriveInput;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let (struct_attrs, fields) = parse::parse_input(input)?;
    let krate = crate_path::resolve(struct_attrs.crate_path.as_ref());
    generate::bind_impl(input, &fields, &krate)
}
