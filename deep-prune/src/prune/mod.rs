//! Emptiness classification and the recursive pruning walk.
//!
//! Pruning is a depth-first walk with two phases per container:
//!
//! 1. **Pre-check**: each child is classified with [`is_empty`] on its raw
//!    form. Empty children are dropped without being walked.
//! 2. **Sanitize and filter**: surviving children are walked recursively and
//!    dropped again if their pruned form turned out empty.
//!
//! The walk borrows its input and builds a new tree. `Temporal` leaves are the
//! only nodes shared between input and output.

mod error;

use std::convert::Infallible;

pub use error::{PruneError, Result};

use crate::value::{Mapping, Value};

/// Default nesting limit used by [`Sanitizer::new`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Classifies a single value as empty without walking into its children.
///
/// Empty values are `Null`, whitespace-only text, sequences and mappings with
/// no raw entries, and callables. Numbers (including zero), booleans
/// (including `false`), temporals and non-empty text are never empty.
///
/// A container whose entries are all empty is *not* empty here; that takes a
/// full [`sanitize`] to find out.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Callable(_) => true,
        Value::Text(text) => text.trim().is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(mapping) => mapping.is_empty(),
        Value::Number(_) | Value::Bool(_) | Value::Temporal(_) => false,
    }
}

/// Returns a copy of `value` with every empty member removed, recursively.
///
/// - `Null` at the top level becomes an empty mapping.
/// - `Temporal` passes through as the same handle.
/// - Sequences keep surviving elements in order.
/// - Mappings keep surviving fields in order; fields whose pruned value is an
///   empty sequence or empty mapping are dropped, so emptiness cascades up.
/// - Other scalars pass through unchanged.
///
/// The walk is unbounded. Use [`Sanitizer`] to cap nesting depth.
///
/// ```rust
/// use deep_prune::{sanitize, Mapping, Value};
///
/// let input = Value::from(Mapping::from([
///     ("name", Value::from("John")),
///     ("bio", Value::from("   ")),
///     ("count", Value::from(0)),
/// ]));
/// let expected = Value::from(Mapping::from([
///     ("name", Value::from("John")),
///     ("count", Value::from(0)),
/// ]));
/// assert_eq!(sanitize(&input), expected);
/// ```
pub fn sanitize(value: &Value) -> Value {
    let unbounded = |_: usize| Ok::<(), Infallible>(());
    match walk(value, 0, &unbounded) {
        Ok(pruned) => pruned,
        Err(never) => match never {},
    }
}

/// A pruning walker with a nesting limit.
///
/// Value trees are acyclic by construction, so the only way a walk can run
/// away is by being very deep. `Sanitizer` reports that as
/// [`PruneError::DepthLimitExceeded`] instead of exhausting the stack.
///
/// ```rust
/// use deep_prune::{PruneError, Sanitizer, Value};
///
/// let deep = Value::Sequence(vec![Value::Sequence(vec![Value::from(1)])]);
/// let sanitizer = Sanitizer::new().with_max_depth(1);
/// assert_eq!(
///     sanitizer.sanitize(&deep),
///     Err(PruneError::DepthLimitExceeded { limit: 1 })
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sanitizer {
    max_depth: Option<usize>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    /// A walker limited to [`DEFAULT_MAX_DEPTH`] nested containers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// A walker with no nesting limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Caps the number of nested containers the walker will enter.
    ///
    /// The root container counts as depth 1. Scalars sit at depth 0 and are
    /// accepted by any limit, including zero.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Prunes `value`, failing if it nests deeper than the configured limit.
    pub fn sanitize(&self, value: &Value) -> Result<Value> {
        let guard = |depth: usize| match self.max_depth {
            Some(limit) if depth > limit => Err(PruneError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        };
        walk(value, 0, &guard)
    }
}

/// Recursive walk shared by the bounded and unbounded entrypoints.
///
/// `guard` is consulted with the new depth each time a container is entered.
fn walk<E, G>(value: &Value, depth: usize, guard: &G) -> Result<Value, E>
where
    G: Fn(usize) -> Result<(), E>,
{
    match value {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        Value::Temporal(temporal) => Ok(Value::Temporal(temporal.clone())),
        Value::Sequence(items) => {
            let depth = depth + 1;
            guard(depth)?;
            walk_sequence(items, depth, guard).map(Value::Sequence)
        }
        Value::Mapping(mapping) => {
            let depth = depth + 1;
            guard(depth)?;
            walk_mapping(mapping, depth, guard).map(Value::Mapping)
        }
        Value::Text(_) | Value::Number(_) | Value::Bool(_) | Value::Callable(_) => {
            Ok(value.clone())
        }
    }
}

fn walk_sequence<E, G>(items: &[Value], depth: usize, guard: &G) -> Result<Vec<Value>, E>
where
    G: Fn(usize) -> Result<(), E>,
{
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if is_empty(item) {
            continue;
        }
        let pruned = walk(item, depth, guard)?;
        if !is_empty(&pruned) {
            kept.push(pruned);
        }
    }
    Ok(kept)
}

fn walk_mapping<E, G>(mapping: &Mapping, depth: usize, guard: &G) -> Result<Mapping, E>
where
    G: Fn(usize) -> Result<(), E>,
{
    let mut kept = Mapping::with_capacity(mapping.len());
    for (key, field) in mapping {
        if is_empty(field) {
            continue;
        }
        match field {
            Value::Sequence(_) | Value::Mapping(_) | Value::Temporal(_) => {
                let pruned = walk(field, depth, guard)?;
                if !is_pruned_container_empty(&pruned) {
                    kept.insert(key, pruned);
                }
            }
            _ => {
                kept.insert(key, field.clone());
            }
        }
    }
    Ok(kept)
}

/// A pruned field is dropped from its parent only when it collapsed to an
/// empty container. Temporals never do.
fn is_pruned_container_empty(pruned: &Value) -> bool {
    match pruned {
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(mapping) => mapping.is_empty(),
        _ => false,
    }
}
