//! Crate path resolution for renamed dependencies.
//!
//! Turns the optional `#[flag(crate = "...")]` value into the path that
//! generated code uses in place of `flagbind`.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the crate path, defaulting to `flagbind`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { flagbind }, |path| quote! { #path })
}
