//! Code generation for the `Bind` impl.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{DeriveInput, Visibility};

use super::naming::flag_name;
use super::parse::FieldAttrs;
use super::type_utils::is_unsupported;

/// Builds `impl Bind for #ident`.
///
/// Only `pub` fields are bound. Skipped and ignored fields are left out
/// before their types are looked at.
pub(super) fn bind_impl(
    input: &DeriveInput,
    fields: &[(syn::Field, FieldAttrs)],
    krate: &TokenStream,
) -> syn::Result<TokenStream> {
    let entries = fields
        .iter()
        .filter(|(field, attrs)| matches!(field.vis, Visibility::Public(_)) && !attrs.is_ignored())
        .map(|(field, attrs)| field_entry(field, attrs, krate))
        .collect::<syn::Result<Vec<_>>>()?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #krate::Bind for #ident #ty_generics #where_clause {
            fn flag_fields(&mut self) -> ::std::vec::Vec<#krate::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

fn field_entry(
    field: &syn::Field,
    attrs: &FieldAttrs,
    krate: &TokenStream,
) -> syn::Result<TokenStream> {
    let Some(member) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "FlagBind requires named fields"));
    };
    let ident = member.unraw().to_string();
    if is_unsupported(&field.ty) {
        let flag = attrs
            .name
            .as_ref()
            .map_or_else(|| flag_name(&ident), syn::LitStr::value);
        return Err(syn::Error::new_spanned(
            &field.ty,
            format!("unsupported type for flag -{flag}"),
        ));
    }

    let name = attrs.name.as_ref().map(|name| quote! { .name(#name) });
    let default = attrs.default.as_ref().map(|text| quote! { .default(#text) });
    let usage = attrs.usage.as_ref().map(|usage| quote! { .usage(#usage) });
    // A failed `Bindable` bound is reported on the field's type.
    let span = field.ty.span();
    Ok(quote_spanned! { span =>
        #krate::Field::new(#ident, &mut self.#member) #name #default #usage
    })
}
