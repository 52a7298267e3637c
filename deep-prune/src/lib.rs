//! Recursive "deep prune" for nested data.
//!
//! Given a tree of mappings, sequences, and scalars, this crate produces an
//! equivalent tree with every empty member removed, so placeholder values do
//! not leak into serialized output, logs, or storage.
//!
//! This crate separates:
//! - **Model**: the [`Value`] tree and its node kinds.
//! - **Pruning**: the [`is_empty`] predicate and the [`sanitize`] walk.
//! - **Conversion**: [`ToValue`] / [`Prunable`] for turning Rust data into a
//!   `Value`, with `#[derive(Prune)]` for your own types.
//!
//! Key rules:
//! - `Null`, whitespace-only text, empty containers, and callables are empty.
//! - `0` and `false` are data and are always kept.
//! - Containers that become empty after pruning are removed from their parent,
//!   recursively.
//! - Timestamps (`Temporal`) are atomic and pass through as the same handle.
//! - Top-level `Null` becomes an empty mapping.
//!
//! ```rust
//! use deep_prune::{Prunable, Prune, Value};
//!
//! #[derive(Prune)]
//! struct Profile {
//!     name: String,
//!     bio: Option<String>,
//!     tags: Vec<String>,
//!     visits: u32,
//! }
//!
//! let profile = Profile {
//!     name: "John".into(),
//!     bio: None,
//!     tags: vec!["  ".into()],
//!     visits: 0,
//! };
//! let pruned = profile.prune();
//! assert_eq!(pruned.get("name"), Some(&Value::from("John")));
//! assert_eq!(pruned.get("visits"), Some(&Value::from(0u32)));
//! assert!(pruned.get("bio").is_none());
//! assert!(pruned.get("tags").is_none());
//! ```
//!
//! What this crate does not do:
//! - perform I/O or logging of its own
//! - validate schemas or coerce types
//!
//! Integrations live behind feature flags: `serde` (JSON conversion and
//! [`sanitize_json`]) and `slog` (structured logging of pruned payloads).

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
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else,
    clippy::cast_lossless
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use deep_prune_derive::Prune;

#[allow(unused_extern_crates)]
extern crate self as deep_prune;

// Module declarations
mod convert;
#[cfg(feature = "serde")]
mod json;
mod prune;
#[cfg(feature = "slog")]
pub mod slog;
mod value;

// Re-exports
pub use convert::{Prunable, ToValue};
#[cfg(feature = "serde")]
pub use json::sanitize_json;
pub use prune::{is_empty, sanitize, PruneError, Result, Sanitizer, DEFAULT_MAX_DEPTH};
pub use value::{Callable, IntoIter, Iter, Mapping, Number, Temporal, Value, ValueKind};
