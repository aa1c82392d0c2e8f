//! Literal parsing helpers for `#[flag(...)]` attributes.

use syn::meta::ParseNestedMeta;
use syn::{Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp};

/// Parses `key = "..."`.
pub(super) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(lit) => Ok(lit),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}

/// Parses `key = <literal>` into the raw text a setter will receive.
///
/// Strings are taken verbatim. Integer and float literals (optionally
/// negated) and booleans are rendered as decimal text, so `default = 25`
/// and `default = "25"` are equivalent.
pub(super) fn default_text(meta: &ParseNestedMeta, key: &str) -> syn::Result<String> {
    let expr = meta.value()?.parse::<Expr>()?;
    literal_text(&expr).ok_or_else(|| {
        syn::Error::new_spanned(&expr, format!("{key} must be a string or scalar literal"))
    })
}

fn literal_text(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => lit_text(lit),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => match expr.as_ref() {
            Expr::Lit(ExprLit {
                lit: lit @ (Lit::Int(_) | Lit::Float(_)),
                ..
            }) => lit_text(lit).map(|digits| format!("-{digits}")),
            _ => None,
        },
        _ => None,
    }
}

fn lit_text(lit: &Lit) -> Option<String> {
    match lit {
        Lit::Str(s) => Some(s.value()),
        Lit::Int(i) => Some(i.base10_digits().to_owned()),
        Lit::Float(f) => Some(f.base10_digits().to_owned()),
        Lit::Bool(b) => Some(b.value.to_string()),
        _ => None,
    }
}
