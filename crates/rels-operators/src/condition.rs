//! Join conditions: one (left attribute, right attribute, comparator) triple
//! per key pairing. A join ANDs all of its conditions, in the order given.

use std::fmt;
use std::sync::Arc;

use rels_core::error::{Error, Result};
use rels_core::{Relation, Scalar};

/// Caller-defined comparison over a left/right value pair.
pub type CompareFn = dyn Fn(&Scalar, &Scalar) -> bool + Send + Sync;

#[derive(Clone)]
enum CompareKind {
    Builtin(fn(&Scalar, &Scalar) -> bool),
    Custom(Arc<CompareFn>),
}

/// A named binary predicate deciding whether two values match.
///
/// Missing attributes reach the comparator as `Scalar::Null`.
#[derive(Clone)]
pub struct Comparator {
    name: &'static str,
    kind: CompareKind,
}

fn eq(l: &Scalar, r: &Scalar) -> bool {
    l == r
}
fn ne(l: &Scalar, r: &Scalar) -> bool {
    l != r
}
fn lt(l: &Scalar, r: &Scalar) -> bool {
    l < r
}
fn le(l: &Scalar, r: &Scalar) -> bool {
    l <= r
}
fn gt(l: &Scalar, r: &Scalar) -> bool {
    l > r
}
fn ge(l: &Scalar, r: &Scalar) -> bool {
    l >= r
}

impl Comparator {
    /// Plain value equality. The only comparator the hash join is correct for.
    pub const EQ: Comparator = Comparator::builtin("eq", eq);
    pub const NE: Comparator = Comparator::builtin("ne", ne);
    pub const LT: Comparator = Comparator::builtin("lt", lt);
    pub const LE: Comparator = Comparator::builtin("le", le);
    pub const GT: Comparator = Comparator::builtin("gt", gt);
    pub const GE: Comparator = Comparator::builtin("ge", ge);

    const fn builtin(name: &'static str, f: fn(&Scalar, &Scalar) -> bool) -> Self {
        Self {
            name,
            kind: CompareKind::Builtin(f),
        }
    }

    pub fn new<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(&Scalar, &Scalar) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            kind: CompareKind::Custom(Arc::new(f)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn matches(&self, left: &Scalar, right: &Scalar) -> bool {
        match &self.kind {
            CompareKind::Builtin(f) => f(left, right),
            CompareKind::Custom(f) => f(left, right),
        }
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comparator({})", self.name)
    }
}

/// Canonical equality comparator.
pub const EQ: Comparator = Comparator::EQ;

#[derive(Debug, Clone)]
pub struct Condition {
    left: String,
    right: String,
    comparator: Comparator,
}

impl Condition {
    pub fn new(left: impl Into<String>, right: impl Into<String>, comparator: Comparator) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            comparator,
        }
    }

    /// Equality condition `left == right`.
    pub fn eq(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(left, right, Comparator::EQ)
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }
}

/// All conditions hold for the pair; stops at the first that does not.
#[inline]
pub(crate) fn all_match(
    conditions: &[Condition],
    left: &rels_core::Tuple,
    right: &rels_core::Tuple,
) -> bool {
    conditions.iter().all(|c| {
        c.comparator
            .matches(left.value(&c.left), right.value(&c.right))
    })
}

/// One element of a flattened `left, right, comparator, ...` argument list.
#[derive(Debug, Clone)]
pub enum JoinArg {
    Attr(String),
    Compare(Comparator),
}

impl From<&str> for JoinArg {
    fn from(s: &str) -> Self {
        JoinArg::Attr(s.to_string())
    }
}

impl From<String> for JoinArg {
    fn from(s: String) -> Self {
        JoinArg::Attr(s)
    }
}

impl From<Comparator> for JoinArg {
    fn from(c: Comparator) -> Self {
        JoinArg::Compare(c)
    }
}

/// Parse `(left, right, comparator)` repeated N times into conditions.
pub fn parse_join_conditions(args: &[JoinArg]) -> Result<Vec<Condition>> {
    if args.len() % 3 != 0 {
        return Err(Error::InvalidArgument(format!(
            "join arguments should be multiples of (left, right, comparator), got {}",
            args.len()
        )));
    }

    args.chunks_exact(3)
        .enumerate()
        .map(|(i, triple)| match triple {
            [JoinArg::Attr(l), JoinArg::Attr(r), JoinArg::Compare(c)] => {
                Ok(Condition::new(l.clone(), r.clone(), c.clone()))
            }
            _ => Err(Error::InvalidArgument(format!(
                "join condition {} must be (attribute, attribute, comparator)",
                i
            ))),
        })
        .collect()
}

/// Equality conditions on every attribute the two relations share, judged by
/// the heading of each relation's first tuple.
pub fn natural_conditions(left: &Relation, right: &Relation) -> Vec<Condition> {
    let right_heading = right.heading();
    left.heading()
        .into_iter()
        .filter(|a| right_heading.contains(a))
        .map(|a| Condition::eq(a.clone(), a))
        .collect()
}
