//! Stable content hashing for tuples and relations.
//!
//! Digests are order-sensitive over the tuple sequence and use a type-tagged
//! encoding per value, so `I32(1)` and `I64(1)` never collide by construction.

use blake3::Hasher;

use crate::relation::Relation;
use crate::tuple::Tuple;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub fn to_hex(&self) -> String {
        // blake3 hex(32b) is 64 hex chars
        let mut s = String::with_capacity(64);
        for b in &self.0 {
            use std::fmt::Write as _;
            let _ = write!(&mut s, "{:02x}", b);
        }
        s
    }
}

impl std::fmt::Display for Hash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

pub fn hash_tuple(tuple: &Tuple) -> Hash256 {
    let mut h = Hasher::new();
    tuple.hash_into(&mut h);
    Hash256(h.finalize().into())
}

pub fn hash_relation(relation: &Relation) -> Hash256 {
    let mut h = Hasher::new();
    h.update(&(relation.len() as u64).to_le_bytes());
    for tuple in relation.iter() {
        tuple.hash_into(&mut h);
    }
    Hash256(h.finalize().into())
}
