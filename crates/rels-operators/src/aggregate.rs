//! Single-attribute fold.

use rels_core::{Relation, Scalar};

/// Left fold of `f` over the values of `attr`, in relation order.
/// Tuples lacking the attribute contribute `Null`.
pub fn aggregate<A, F>(input: &Relation, attr: &str, init: A, f: F) -> A
where
    F: Fn(A, &Scalar) -> A,
{
    input.iter().fold(init, |acc, t| f(acc, t.value(attr)))
}
