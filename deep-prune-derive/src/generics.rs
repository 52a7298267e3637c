//! Generic type parameter handling and trait bound management.
//!
//! This module adds `ToValue` bounds only for generics that appear in fields
//! converted through `ToValue`.
//!
//! ## Skipped fields
//!
//! Fields marked `#[prune(skip)]` or `#[prune(with = path)]`, and every
//! `PhantomData<T>` field, contribute no bounds:
//!
//! ```ignore
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T should NOT require ToValue
//! }
//! ```
//!
//! Without this, `TypedId<Connection>` would fail to implement `ToValue`
//! whenever `Connection` doesn't, even though `_marker` never reaches the
//! value tree.

use syn::{parse_quote, Ident};

use crate::{crate_path, types::is_phantom_data};

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            if is_phantom_data(ty) {
                return;
            }
            if let Some(qself) = &path.qself {
                collect_generics_from_type(&qself.ty, generics, result);
            }
            for segment in &path.path.segments {
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }
            }

            // Check if the leading segment names a generic parameter
            if let Some(first) = path.path.segments.first() {
                for param in generics.type_params() {
                    if first.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                        result.push(param.ident.clone());
                    }
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Array(array) => {
            collect_generics_from_type(&array.elem, generics, result);
        }
        syn::Type::Slice(slice) => {
            collect_generics_from_type(&slice.elem, generics, result);
        }
        syn::Type::Paren(paren) => {
            collect_generics_from_type(&paren.elem, generics, result);
        }
        syn::Type::Group(group) => {
            collect_generics_from_type(&group.elem, generics, result);
        }
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        _ => {}
    }
}

/// Adds `ToValue` bounds to generic parameters used in converted fields.
pub(crate) fn add_to_value_bounds(mut generics: syn::Generics, used_generics: &[Ident]) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            let to_value_path = crate_path("ToValue");
            param.bounds.push(parse_quote!(#to_value_path));
        }
    }
    generics
}
