//! Struct-specific `ToValue` derivation.
//!
//! This module destructures `self` and collects generic parameters that
//! require trait bounds.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{DataStruct, Fields, Result};

use crate::{
    rename::RenameRule,
    transform::{generate_fields, DeriveContext, FieldsOutput},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    data: DataStruct,
    generics: &syn::Generics,
    rename_all: Option<RenameRule>,
) -> Result<StructDeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
        rename_all,
    };

    let is_unit = matches!(data.fields, Fields::Unit);
    let FieldsOutput { pattern, value } = generate_fields(&mut ctx, data.fields)?;

    let body = if is_unit {
        value
    } else {
        quote! {
            let Self #pattern = self;
            #value
        }
    };

    Ok(StructDeriveOutput {
        body,
        used_generics,
    })
}
