//! Type utilities for the derive macro.

/// Checks if a type is `PhantomData<...>`, by last path segment.
///
/// Matches `PhantomData<T>`, `std::marker::PhantomData<T>`, and
/// `core::marker::PhantomData<T>`. Type aliases are not seen through.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };

    if path.qself.is_some() {
        return false;
    }

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
}
