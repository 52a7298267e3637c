//! Parsing of `#[prune(...)]` field and variant attributes.
//!
//! This module maps attribute syntax to conversion decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{meta::ParseNestedMeta, spanned::Spanned, Attribute, LitStr, Meta, Result};

/// Field conversion strategy based on `#[prune(...)]` attributes.
///
/// ## Strategy Mapping
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Convert` | Field converts through `ToValue` |
/// | `#[prune(skip)]` | `Skip` | Field is left out of the tree |
/// | `#[prune(with = path)]` | `With(path)` | Field converts through `path(&field)` |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No strategy option: convert with `ToValue`.
    Convert,
    /// `#[prune(skip)]`: omit the field.
    ///
    /// The field type needs no trait implementations.
    Skip,
    /// `#[prune(with = path)]`: call a user function returning a `Value`.
    With(syn::Path),
}

/// Everything `#[prune(...)]` can say about a single field.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) strategy: Strategy,
    /// Explicit mapping key, overriding the identifier and `rename_all`.
    pub(crate) rename: Option<String>,
}

/// Everything `#[prune(...)]` can say about an enum variant.
#[derive(Clone, Debug, Default)]
pub(crate) struct VariantOptions {
    pub(crate) skip: bool,
    pub(crate) rename: Option<String>,
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "conflicting #[prune] strategies on the same field: use only one of `skip` or `with`",
        ));
    }
    *target = Some(next);
    Ok(())
}

fn set_rename(target: &mut Option<String>, meta: &ParseNestedMeta<'_>) -> Result<()> {
    if target.is_some() {
        return Err(meta.error("duplicate `rename` option"));
    }
    let lit: LitStr = meta.value()?.parse()?;
    *target = Some(lit.value());
    Ok(())
}

/// Yields the `#[prune(...)]` list attributes, rejecting other forms.
fn prune_lists(attrs: &[Attribute]) -> Result<Vec<&syn::MetaList>> {
    let mut lists = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("prune") {
            continue;
        }
        match &attr.meta {
            Meta::List(list) => lists.push(list),
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected an option list (e.g., #[prune(skip)])",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[prune]",
                ));
            }
        }
    }
    Ok(lists)
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut strategy: Option<Strategy> = None;
    let mut rename: Option<String> = None;

    for list in prune_lists(attrs)? {
        list.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                set_strategy(&mut strategy, Strategy::Skip, meta.path.span())
            } else if meta.path.is_ident("with") {
                let path: syn::Path = meta.value()?.parse()?;
                set_strategy(&mut strategy, Strategy::With(path), meta.path.span())
            } else if meta.path.is_ident("rename") {
                set_rename(&mut rename, &meta)
            } else {
                Err(meta.error(format!(
                    "unknown field option `{}`; expected `skip`, `with`, or `rename`",
                    meta.path
                        .get_ident()
                        .map_or_else(|| "?".to_string(), ToString::to_string)
                )))
            }
        })?;
    }

    // Default: no strategy option means convert with ToValue
    Ok(FieldOptions {
        strategy: strategy.unwrap_or(Strategy::Convert),
        rename,
    })
}

pub(crate) fn parse_variant_options(attrs: &[Attribute]) -> Result<VariantOptions> {
    let mut options = VariantOptions::default();

    for list in prune_lists(attrs)? {
        list.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if options.skip {
                    return Err(meta.error("duplicate `skip` option"));
                }
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                set_rename(&mut options.rename, &meta)
            } else {
                Err(meta.error(format!(
                    "unknown variant option `{}`; expected `skip` or `rename`",
                    meta.path
                        .get_ident()
                        .map_or_else(|| "?".to_string(), ToString::to_string)
                )))
            }
        })?;
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_convert() {
        let attrs = parse_attrs(quote! {});
        let options = parse_field_options(&attrs).unwrap();
        assert!(matches!(options.strategy, Strategy::Convert));
        assert!(options.rename.is_none());
    }

    #[test]
    fn skip_returns_skip() {
        let attrs = parse_attrs(quote! { #[prune(skip)] });
        let options = parse_field_options(&attrs).unwrap();
        assert!(matches!(options.strategy, Strategy::Skip));
    }

    #[test]
    fn with_parses_path() {
        let attrs = parse_attrs(quote! { #[prune(with = my_module::to_value)] });
        let options = parse_field_options(&attrs).unwrap();
        match options.strategy {
            Strategy::With(path) => assert_eq!(path.segments.len(), 2),
            other => panic!("expected With, got {other:?}"),
        }
    }

    #[test]
    fn rename_combines_with_strategy() {
        let attrs = parse_attrs(quote! { #[prune(rename = "userName", with = convert)] });
        let options = parse_field_options(&attrs).unwrap();
        assert_eq!(options.rename.as_deref(), Some("userName"));
        assert!(matches!(options.strategy, Strategy::With(_)));
    }

    #[test]
    fn conflicting_strategies_error() {
        let attrs = parse_attrs(quote! {
            #[prune(skip)]
            #[prune(with = convert)]
        });
        let result = parse_field_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("conflicting #[prune] strategies"));
    }

    #[test]
    fn duplicate_rename_errors() {
        let attrs = parse_attrs(quote! { #[prune(rename = "a", rename = "b")] });
        let result = parse_field_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("duplicate `rename`"));
    }

    #[test]
    fn bare_prune_errors() {
        let attrs = parse_attrs(quote! { #[prune] });
        let result = parse_field_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("expected an option list"));
    }

    #[test]
    fn name_value_syntax_error() {
        let attrs = parse_attrs(quote! { #[prune = "value"] });
        let result = parse_field_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("name-value syntax is not supported"));
    }

    #[test]
    fn unknown_field_option_errors() {
        let attrs = parse_attrs(quote! { #[prune(keep)] });
        let result = parse_field_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown field option `keep`"));
    }

    #[test]
    fn variant_options_parse() {
        let attrs = parse_attrs(quote! { #[prune(skip, rename = "gone")] });
        let options = parse_variant_options(&attrs).unwrap();
        assert!(options.skip);
        assert_eq!(options.rename.as_deref(), Some("gone"));
    }

    #[test]
    fn variant_rejects_with() {
        let attrs = parse_attrs(quote! { #[prune(with = convert)] });
        let result = parse_variant_options(&attrs);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown variant option `with`"));
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! {
            #[derive(Clone)]
            #[serde(skip)]
        });
        let options = parse_field_options(&attrs).unwrap();
        assert!(matches!(options.strategy, Strategy::Convert));
    }
}
