//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to
//! recognise `Option<T>` wrappers and `bool` switches.

use syn::{GenericArgument, PathArguments, Type};

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}

/// Returns the inner type if `ty` is `Option<T>`.
///
/// Only the final path segment is inspected, so `std::option::Option<T>` and
/// `core::option::Option<T>` match too. The check is not recursive.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    let last = p.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    extract_first_type_argument(&last.arguments)
}

/// Whether `ty` is the plain `bool` type.
pub(crate) fn is_bool(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Path(type_path) if type_path.qself.is_none() && type_path.path.is_ident("bool")
    )
}
