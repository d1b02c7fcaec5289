//! Fluent, chainable access to the operators.
//!
//! ```
//! use rels_core::{Relation, Tuple};
//! use rels_operators::{Condition, RelationExt};
//! use rels_operators::predicate::value_eq;
//!
//! let people: Relation = vec![
//!     [("id", 1i64), ("age", 30)].into_iter().collect::<Tuple>(),
//!     [("id", 2i64), ("age", 40)].into_iter().collect::<Tuple>(),
//! ]
//! .into();
//! let pets: Relation = vec![[("owner", 2i64)].into_iter().collect::<Tuple>()].into();
//!
//! let owners = people
//!     .hash_join(&pets, &[Condition::eq("id", "owner")])
//!     .select(value_eq("age", 40i64))
//!     .project(&["id"]);
//! assert_eq!(owners.len(), 1);
//! ```

use rels_core::config::{EngineConfig, JoinStrategy};
use rels_core::error::Result;
use rels_core::{Relation, Scalar, Tuple};

use crate::condition::{Condition, JoinArg};
use crate::{aggregate, distinct, filter, join, map, project, update};

pub trait RelationExt {
    fn nested_loop_join(&self, other: &Relation, conditions: &[Condition]) -> Relation;
    fn hash_join(&self, other: &Relation, conditions: &[Condition]) -> Relation;
    fn join_using(&self, strategy: JoinStrategy, other: &Relation, conditions: &[Condition]) -> Relation;
    fn join_flat(&self, strategy: JoinStrategy, other: &Relation, args: &[JoinArg]) -> Result<Relation>;
    fn join_configured(&self, cfg: &EngineConfig, other: &Relation, conditions: &[Condition]) -> Relation;
    fn natural_join(&self, other: &Relation) -> Relation;

    fn project<K: AsRef<str>>(&self, keys: &[K]) -> Relation;
    fn select<P: Fn(&Tuple) -> bool>(&self, predicate: P) -> Relation;
    fn delete<P: Fn(&Tuple) -> bool>(&self, predicate: P) -> Relation;
    fn update<F, P>(&self, transform: F, predicate: P) -> Relation
    where
        F: Fn(&Tuple) -> Tuple,
        P: Fn(&Tuple) -> bool;
    fn rename<A: AsRef<str>, B: AsRef<str>>(&self, from: &[A], to: &[B]) -> Result<Relation>;
    fn map_tuples<F: Fn(&Tuple) -> Tuple>(&self, f: F) -> Relation;
    fn extend<F: Fn(&Tuple) -> Tuple>(&self, f: F) -> Relation;
    fn distinct(&self) -> Relation;
    fn aggregate<A, F: Fn(A, &Scalar) -> A>(&self, attr: &str, init: A, f: F) -> A;
}

impl RelationExt for Relation {
    fn nested_loop_join(&self, other: &Relation, conditions: &[Condition]) -> Relation {
        join::nested_loop_join(self, other, conditions)
    }

    fn hash_join(&self, other: &Relation, conditions: &[Condition]) -> Relation {
        join::hash_join(self, other, conditions)
    }

    fn join_using(&self, strategy: JoinStrategy, other: &Relation, conditions: &[Condition]) -> Relation {
        join::join(strategy, self, other, conditions)
    }

    fn join_flat(&self, strategy: JoinStrategy, other: &Relation, args: &[JoinArg]) -> Result<Relation> {
        join::algorithm(strategy).join_flat(self, other, args)
    }

    fn join_configured(&self, cfg: &EngineConfig, other: &Relation, conditions: &[Condition]) -> Relation {
        join::join_with_config(cfg, self, other, conditions)
    }

    fn natural_join(&self, other: &Relation) -> Relation {
        join::natural_join(self, other)
    }

    fn project<K: AsRef<str>>(&self, keys: &[K]) -> Relation {
        project::project(self, keys)
    }

    fn select<P: Fn(&Tuple) -> bool>(&self, predicate: P) -> Relation {
        filter::select(self, predicate)
    }

    fn delete<P: Fn(&Tuple) -> bool>(&self, predicate: P) -> Relation {
        filter::delete(self, predicate)
    }

    fn update<F, P>(&self, transform: F, predicate: P) -> Relation
    where
        F: Fn(&Tuple) -> Tuple,
        P: Fn(&Tuple) -> bool,
    {
        update::update(self, transform, predicate)
    }

    fn rename<A: AsRef<str>, B: AsRef<str>>(&self, from: &[A], to: &[B]) -> Result<Relation> {
        map::rename(self, from, to)
    }

    fn map_tuples<F: Fn(&Tuple) -> Tuple>(&self, f: F) -> Relation {
        map::map(self, f)
    }

    fn extend<F: Fn(&Tuple) -> Tuple>(&self, f: F) -> Relation {
        map::extend(self, f)
    }

    fn distinct(&self) -> Relation {
        distinct::distinct(self)
    }

    fn aggregate<A, F: Fn(A, &Scalar) -> A>(&self, attr: &str, init: A, f: F) -> A {
        aggregate::aggregate(self, attr, init, f)
    }
}
