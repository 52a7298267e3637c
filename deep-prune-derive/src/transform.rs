//! Shared field conversion logic for struct and enum derivation.
//!
//! Structs and enum variants have the same three field shapes (named, tuple,
//! unit). This module turns a list of fields into the expression that builds
//! their `Value`, so `derive_struct` and `derive_enum` only differ in how they
//! bind the fields.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned, Fields, Result};

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    rename::RenameRule,
    strategy::{parse_field_options, Strategy},
    types::is_phantom_data,
};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) used_generics: &'a mut Vec<Ident>,
    /// Applied to named fields without an explicit `rename`.
    pub(crate) rename_all: Option<RenameRule>,
}

/// A set of fields lowered to a binding pattern and a value-building body.
pub(crate) struct FieldsOutput {
    /// Destructuring pattern, without the path: `{ a, b, .. }`, `(field_0, _)`,
    /// or empty for unit shapes.
    pub(crate) pattern: TokenStream,
    /// Expression evaluating to a `Value` using the bindings from `pattern`.
    pub(crate) value: TokenStream,
}

/// Generates the conversion expression for a single bound field.
///
/// ## Field Conversion Rules
///
/// | Annotation | Behavior |
/// |------------|----------|
/// | None | `ToValue::to_value(binding)` |
/// | `#[prune(skip)]` | omitted |
/// | `#[prune(with = path)]` | `path(binding)` |
///
/// Returns `None` for fields that do not appear in the tree.
pub(crate) fn generate_field_value(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: &Strategy,
) -> Option<TokenStream> {
    if is_phantom_data(ty) {
        return None;
    }

    match strategy {
        Strategy::Skip => None,
        Strategy::Convert => {
            collect_generics_from_type(ty, ctx.generics, ctx.used_generics);
            let to_value_path = crate_path("ToValue");
            Some(quote_spanned! { span =>
                #to_value_path::to_value(#binding)
            })
        }
        // No bounds: the user function decides what it needs
        Strategy::With(path) => Some(quote_spanned! { span =>
            #path(#binding)
        }),
    }
}

/// Lowers a field list of any shape.
pub(crate) fn generate_fields(ctx: &mut DeriveContext<'_>, fields: Fields) -> Result<FieldsOutput> {
    match fields {
        Fields::Named(fields) => generate_named_fields(ctx, fields),
        Fields::Unnamed(fields) => generate_unnamed_fields(ctx, fields),
        Fields::Unit => {
            let value_path = crate_path("Value");
            Ok(FieldsOutput {
                pattern: quote! {},
                value: quote! { #value_path::Null },
            })
        }
    }
}

fn generate_named_fields(
    ctx: &mut DeriveContext<'_>,
    fields: syn::FieldsNamed,
) -> Result<FieldsOutput> {
    let value_path = crate_path("Value");
    let mapping_path = crate_path("Mapping");
    let mut bindings = Vec::new();
    let mut inserts = Vec::new();

    for field in fields.named {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        let ident = field
            .ident
            .ok_or_else(|| syn::Error::new(span, "named field should have an identifier"))?;

        let Some(value) = generate_field_value(ctx, &field.ty, &ident, span, &options.strategy)
        else {
            continue;
        };

        let field_name = ident.unraw().to_string();
        let key = options.rename.unwrap_or_else(|| match ctx.rename_all {
            Some(rule) => rule.apply_to_field(&field_name),
            None => field_name,
        });
        inserts.push(quote_spanned! { span =>
            __prune_mapping.insert(#key, #value);
        });
        bindings.push(ident);
    }

    let capacity = inserts.len();
    Ok(FieldsOutput {
        pattern: quote! { { #(#bindings,)* .. } },
        value: quote! {{
            let mut __prune_mapping = #mapping_path::with_capacity(#capacity);
            #(#inserts)*
            #value_path::Mapping(__prune_mapping)
        }},
    })
}

fn generate_unnamed_fields(
    ctx: &mut DeriveContext<'_>,
    fields: syn::FieldsUnnamed,
) -> Result<FieldsOutput> {
    let value_path = crate_path("Value");
    let is_newtype = fields.unnamed.len() == 1;
    let mut patterns = Vec::new();
    let mut values = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        if let Some(rename) = &options.rename {
            return Err(syn::Error::new(
                span,
                format!("`rename = \"{rename}\"` has no effect on a tuple field"),
            ));
        }
        let binding = format_ident!("field_{index}");

        match generate_field_value(ctx, &field.ty, &binding, span, &options.strategy) {
            Some(value) => {
                patterns.push(quote! { #binding });
                values.push(value);
            }
            None => patterns.push(quote! { _ }),
        }
    }

    let value = if is_newtype {
        // Newtypes are transparent
        values
            .pop()
            .unwrap_or_else(|| quote! { #value_path::Null })
    } else {
        let capacity = values.len();
        quote! {{
            let mut __prune_items = ::std::vec::Vec::with_capacity(#capacity);
            #(__prune_items.push(#values);)*
            #value_path::Sequence(__prune_items)
        }}
    };

    Ok(FieldsOutput {
        pattern: quote! { ( #(#patterns),* ) },
        value,
    })
}
