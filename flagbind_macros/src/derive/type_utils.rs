//! Shallow inspection of field types.
//!
//! Whether a type can back a flag is ultimately decided by the
//! `flagbind::Bindable` trait. These helpers only catch type shapes that can
//! never implement it, so the error can name the flag.

use syn::{GenericArgument, PathArguments, Type};

/// Returns the inner type if `ty` is `Option<T>`.
///
/// Only the last path segment is checked, so `std::option::Option<T>`
/// matches too. Not recursive.
pub(super) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let last = path.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Whether `ty` is a compound shape with no flag representation.
///
/// Arrays, tuples, slices, references, pointers, function pointers, trait
/// objects and `!` are rejected, also when wrapped in `Option`.
pub(super) fn is_unsupported(ty: &Type) -> bool {
    match ty {
        Type::Group(group) => is_unsupported(&group.elem),
        Type::Paren(paren) => is_unsupported(&paren.elem),
        Type::Path(_) => option_inner(ty).is_some_and(is_unsupported),
        Type::Array(_)
        | Type::Tuple(_)
        | Type::Slice(_)
        | Type::Reference(_)
        | Type::Ptr(_)
        | Type::BareFn(_)
        | Type::TraitObject(_)
        | Type::ImplTrait(_)
        | Type::Never(_) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for field type inspection.

    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    #[case::option(parse_quote!(Option<u32>), true)]
    #[case::qualified(parse_quote!(std::option::Option<String>), true)]
    #[case::plain(parse_quote!(u32), false)]
    #[case::vec(parse_quote!(Vec<u32>), false)]
    fn detects_option(#[case] ty: Type, #[case] is_option: bool) {
        assert_eq!(option_inner(&ty).is_some(), is_option);
    }

    #[rstest]
    #[case::scalar(parse_quote!(i64), false)]
    #[case::duration(parse_quote!(std::time::Duration), false)]
    #[case::custom(parse_quote!(Level), false)]
    #[case::optional(parse_quote!(Option<f32>), false)]
    #[case::array(parse_quote!([u8; 4]), true)]
    #[case::tuple(parse_quote!((u16, u16)), true)]
    #[case::unit(parse_quote!(()), true)]
    #[case::reference(parse_quote!(&'static str), true)]
    #[case::pointer(parse_quote!(*const u8), true)]
    #[case::function(parse_quote!(fn(&str)), true)]
    #[case::trait_object(parse_quote!(Box<dyn Fn()>), false)]
    #[case::bare_trait_object(parse_quote!(dyn Fn()), true)]
    #[case::optional_tuple(parse_quote!(Option<(u8, u8)>), true)]
    fn flags_unsupported_shapes(#[case] ty: Type, #[case] unsupported: bool) {
        assert_eq!(is_unsupported(&ty), unsupported);
    }
}
