//! Enum-specific `ToValue` derivation.
//!
//! This module generates one match arm per variant and collects generic
//! parameters that require trait bounds.
//!
//! Variants are externally tagged: a unit variant becomes its name as `Text`,
//! any other variant becomes `{ name: payload }`.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{DataEnum, Fields, Result};

use crate::{
    crate_path,
    rename::RenameRule,
    strategy::parse_variant_options,
    transform::{generate_fields, DeriveContext, FieldsOutput},
};

pub(crate) struct EnumDeriveOutput {
    pub(crate) body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    generics: &syn::Generics,
    rename_all: Option<RenameRule>,
) -> Result<EnumDeriveOutput> {
    let value_path = crate_path("Value");
    let mapping_path = crate_path("Mapping");
    let mut arms = Vec::new();
    let mut used_generics = Vec::new();

    for variant in data.variants {
        let variant_ident = &variant.ident;
        let options = parse_variant_options(&variant.attrs)?;

        if options.skip {
            arms.push(quote! {
                #name::#variant_ident { .. } => #value_path::Null
            });
            continue;
        }

        let tag = options.rename.unwrap_or_else(|| {
            let variant_name = variant_ident.to_string();
            match rename_all {
                Some(rule) => rule.apply_to_variant(&variant_name),
                None => variant_name,
            }
        });

        if matches!(variant.fields, Fields::Unit) {
            arms.push(quote! {
                #name::#variant_ident => #value_path::Text(::std::string::String::from(#tag))
            });
            continue;
        }

        // Field names inside a variant keep their identifiers; `rename_all`
        // on an enum only renames variants.
        let mut derive_ctx = DeriveContext {
            generics,
            used_generics: &mut used_generics,
            rename_all: None,
        };
        let FieldsOutput { pattern, value } = generate_fields(&mut derive_ctx, variant.fields)?;
        arms.push(quote! {
            #name::#variant_ident #pattern => {
                let mut __prune_tagged = #mapping_path::with_capacity(1);
                __prune_tagged.insert(#tag, #value);
                #value_path::Mapping(__prune_tagged)
            }
        });
    }

    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms),*
            }
        }
    };

    Ok(EnumDeriveOutput {
        body,
        used_generics,
    })
}
