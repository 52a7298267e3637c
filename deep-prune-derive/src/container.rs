//! Container-level attribute parsing for `#[derive(Prune)]`.
//!
//! This module handles attributes on the struct/enum itself, not on fields.

use syn::{Attribute, LitStr, Meta, Result};

use crate::rename::RenameRule;

/// Options parsed from container-level `#[prune(...)]` attributes.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Case convention applied to field names (structs) or variant names (enums).
    pub(crate) rename_all: Option<RenameRule>,
}

/// Parses container-level `#[prune(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("prune") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                // Bare #[prune] on container - no meaning, ignore
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename_all") {
                        if options.rename_all.is_some() {
                            return Err(meta.error("duplicate `rename_all` option"));
                        }
                        let lit: LitStr = meta.value()?.parse()?;
                        let rule = RenameRule::parse(&lit.value()).ok_or_else(|| {
                            syn::Error::new(
                                lit.span(),
                                format!(
                                    "unknown rename rule `{}`; expected one of {}",
                                    lit.value(),
                                    RenameRule::EXPECTED
                                ),
                            )
                        })?;
                        options.rename_all = Some(rule);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `rename_all`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[prune]",
                ));
            }
        }
    }

    Ok(options)
}
