//! Attribute and input parsing for `#[derive(FlagBind)]`.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr};

use super::literals::{default_text, lit_str};

/// Struct-level `#[flag(...)]` settings.
#[derive(Default)]
pub(super) struct StructAttrs {
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[flag(...)]` settings.
#[derive(Default)]
pub(super) struct FieldAttrs {
    pub name: Option<LitStr>,
    pub default: Option<String>,
    pub usage: Option<LitStr>,
    pub skip: bool,
}

impl FieldAttrs {
    /// Whether the field was opted out with `skip` or `name = "-"`.
    pub(super) fn is_ignored(&self) -> bool {
        self.skip || self.name.as_ref().is_some_and(|name| name.value() == "-")
    }
}

fn flag_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("flag"))
}

fn unknown_key(meta: &ParseNestedMeta) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "attribute".to_owned(), ToString::to_string);
    syn::Error::new_spanned(&meta.path, format!("unknown flag attribute `{key}`"))
}

pub(super) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in flag_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            match meta.path.get_ident().map(ToString::to_string).as_deref() {
                Some("crate") => {
                    let lit = lit_str(&meta, "crate")?;
                    out.crate_path = Some(syn::parse_str(&lit.value()).map_err(|err| {
                        syn::Error::new(lit.span(), format!("invalid crate path: {err}"))
                    })?);
                    Ok(())
                }
                _ => Err(unknown_key(&meta)),
            }
        })?;
    }
    Ok(out)
}

pub(super) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in flag_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            match meta.path.get_ident().map(ToString::to_string).as_deref() {
                Some("name") => {
                    let lit = lit_str(&meta, "name")?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "name must not be empty"));
                    }
                    out.name = Some(lit);
                }
                Some("default") => out.default = Some(default_text(&meta, "default")?),
                Some("usage") => out.usage = Some(lit_str(&meta, "usage")?),
                Some("skip") => out.skip = true,
                _ => return Err(unknown_key(&meta)),
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Collects the named fields of a struct with their parsed attributes.
///
/// Enums, unions, tuple structs and unit structs are rejected.
pub(super) fn parse_input(
    input: &DeriveInput,
) -> syn::Result<(StructAttrs, Vec<(syn::Field, FieldAttrs)>)> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "FlagBind can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "FlagBind requires named fields",
        ));
    };
    let fields = named
        .named
        .iter()
        .map(|field| Ok((field.clone(), parse_field_attrs(&field.attrs)?)))
        .collect::<syn::Result<Vec<_>>>()?;
    Ok((struct_attrs, fields))
}
