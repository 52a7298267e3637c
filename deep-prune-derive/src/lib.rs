//! Derive macros for `deep-prune`.
//!
//! This crate generates the conversion code behind `#[derive(Prune)]`. It:
//! - reads `#[prune(...)]` container, variant, and field attributes
//! - emits a `ToValue` implementation that builds a `Value` tree
//!
//! It does **not** prune anything. Emptiness rules live in the main
//! `deep-prune` crate and are applied at runtime by `Prunable::prune`.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

#[cfg(feature = "slog")]
use proc_macro2::Span;
use proc_macro2::{Ident, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod rename;
mod strategy;
mod transform;
mod types;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_to_value_bounds;

/// Derives `deep_prune::ToValue` for structs and enums.
///
/// The generated tree mirrors the shape of the type:
///
/// - Named-field struct: a `Mapping` of its fields, in declaration order.
/// - Newtype struct: the inner field's value.
/// - Tuple struct with two or more fields: a `Sequence`.
/// - Unit struct: `Null`.
/// - Enum unit variant: `Text` holding the variant name.
/// - Other enum variants: a single-entry `Mapping` from the variant name to
///   the payload, built with the struct rules above.
///
/// # Container Attributes
///
/// - `#[prune(rename_all = "...")]` - Renames struct fields or enum variants.
///   Accepts `lowercase`, `UPPERCASE`, `PascalCase`, `camelCase`, `snake_case`,
///   `SCREAMING_SNAKE_CASE`, and `kebab-case`.
///
/// # Field Attributes
///
/// - **No annotation**: The field is converted with `ToValue`.
/// - `#[prune(skip)]`: The field is left out of the tree. Use this for fields
///   whose type does not implement `ToValue`.
/// - `#[prune(rename = "name")]`: Uses `name` as the mapping key.
/// - `#[prune(with = path)]`: Converts the field by calling
///   `path(&field) -> Value`.
///
/// `PhantomData` fields are always skipped and add no trait bounds.
///
/// # Variant Attributes
///
/// - `#[prune(rename = "name")]` and `#[prune(skip)]` (the variant converts to
///   `Null`).
///
/// Unions are rejected at compile time.
///
/// # Additional Generated Impls
///
/// - `slog::Value` (behind `cfg(feature = "slog")`): routes the value through
///   `deep_prune::slog::ToPrunedJson`, so only the pruned form is logged. The
///   derive first looks for a top-level `slog` crate; if not found, it checks
///   the `DEEP_PRUNE_SLOG_CRATE` env var for an alternate path (e.g.,
///   `my_log::slog`). If neither is available, compilation fails with a clear
///   error.
#[proc_macro_derive(Prune, attributes(prune))]
pub fn derive_prune(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the deep-prune crate root.
///
/// Handles crate renaming (e.g., `pruner = { package = "deep-prune", ... }`).
/// Inside deep-prune itself the crate is reachable as `::deep_prune` through
/// its `extern crate self` alias, which also keeps doctests working.
fn crate_root() -> TokenStream {
    match crate_name("deep-prune") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::deep_prune },
    }
}

/// Returns the token stream to reference the slog crate root.
///
/// Handles crate renaming (e.g., `my_slog = { package = "slog", ... }`).
/// If the top-level `slog` crate is not available, falls back to the
/// `DEEP_PRUNE_SLOG_CRATE` env var, which should be a path like `my_log::slog`.
#[cfg(feature = "slog")]
fn slog_crate() -> Result<TokenStream> {
    match crate_name("slog") {
        Ok(FoundCrate::Itself) => Ok(quote! { crate }),
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            Ok(quote! { ::#ident })
        }
        Err(_) => {
            let env_value = std::env::var("DEEP_PRUNE_SLOG_CRATE").map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    "slog support is enabled, but no top-level `slog` crate was found. \
Set the DEEP_PRUNE_SLOG_CRATE env var to a path (e.g., `my_log::slog`) or add \
`slog` as a direct dependency.",
                )
            })?;
            let path = syn::parse_str::<syn::Path>(&env_value).map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    format!("DEEP_PRUNE_SLOG_CRATE must be a valid Rust path (got `{env_value}`)"),
                )
            })?;
            Ok(quote! { #path })
        }
    }
}

/// Builds a path to an item exported from the deep-prune crate root.
fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    body: TokenStream,
    used_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { rename_all } = parse_container_options(&attrs)?;

    let crate_root = crate_root();

    let derive_output = match data {
        Data::Struct(data) => {
            let output = derive_struct(data, &generics, rename_all)?;
            DeriveOutput {
                body: output.body,
                used_generics: output.used_generics,
            }
        }
        Data::Enum(data) => {
            let output = derive_enum(&ident, data, &generics, rename_all)?;
            DeriveOutput {
                body: output.body,
                used_generics: output.used_generics,
            }
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Prune` cannot be derived for unions",
            ));
        }
    };

    let bounded_generics = add_to_value_bounds(generics, &derive_output.used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded_generics.split_for_impl();
    let body = &derive_output.body;

    // Only generate slog impl when the slog feature is enabled on deep-prune-derive.
    #[cfg(feature = "slog")]
    let slog_impl = {
        let slog_crate = slog_crate()?;
        quote! {
            impl #impl_generics #slog_crate::Value for #ident #ty_generics #where_clause {
                fn serialize(
                    &self,
                    record: &#slog_crate::Record<'_>,
                    key: #slog_crate::Key,
                    serializer: &mut dyn #slog_crate::Serializer,
                ) -> #slog_crate::Result {
                    let pruned = #crate_root::slog::ToPrunedJson::to_pruned_json(self);
                    #slog_crate::Value::serialize(&pruned, record, key, serializer)
                }
            }
        }
    };

    #[cfg(not(feature = "slog"))]
    let slog_impl = quote! {};

    Ok(quote! {
        impl #impl_generics #crate_root::ToValue for #ident #ty_generics #where_clause {
            fn to_value(&self) -> #crate_root::Value {
                #body
            }
        }

        #slog_impl
    })
}
