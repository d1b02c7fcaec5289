//! Predicate builders and combinators for select/delete/update.
//!
//! Combinators evaluate left to right. Predicates are expected to be pure, so
//! whether the right side runs after the left has decided is not observable.

use rels_core::{Scalar, Tuple};

pub fn and<P, Q>(p: P, q: Q) -> impl Fn(&Tuple) -> bool
where
    P: Fn(&Tuple) -> bool,
    Q: Fn(&Tuple) -> bool,
{
    move |t| p(t) && q(t)
}

pub fn or<P, Q>(p: P, q: Q) -> impl Fn(&Tuple) -> bool
where
    P: Fn(&Tuple) -> bool,
    Q: Fn(&Tuple) -> bool,
{
    move |t| p(t) || q(t)
}

pub fn not<P>(p: P) -> impl Fn(&Tuple) -> bool
where
    P: Fn(&Tuple) -> bool,
{
    move |t| !p(t)
}

/// True when `attr` is present, non-null and equal to `value`.
pub fn value_eq(attr: impl Into<String>, value: impl Into<Scalar>) -> impl Fn(&Tuple) -> bool {
    let attr = attr.into();
    let value = value.into();
    move |t| match t.get(&attr) {
        Some(v) => !v.is_null() && *v == value,
        None => false,
    }
}
