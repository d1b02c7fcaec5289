//! Merge policy for matched tuples.

use rels_core::Tuple;

/// All attributes of `left` overlaid with all attributes of `right`.
///
/// On a name collision the right value wins. Colliding names are not
/// suffixed or otherwise disambiguated; callers that need both values should
/// `rename` one side first.
pub fn merge(left: &Tuple, right: &Tuple) -> Tuple {
    if right.is_empty() {
        return left.clone();
    }
    if left.is_empty() {
        return right.clone();
    }
    let mut fields = left.as_map().clone();
    for (name, value) in right.iter() {
        fields.insert(name.to_string(), value.clone());
    }
    Tuple::from_map(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rels_core::Scalar;

    #[test]
    fn test_right_side_wins() {
        let l: Tuple = [("a", 1i64), ("b", 2)].into_iter().collect();
        let r: Tuple = [("b", 9i64), ("c", 3)].into_iter().collect();
        let m = merge(&l, &r);
        let expected: Tuple = [("a", 1i64), ("b", 9), ("c", 3)].into_iter().collect();
        assert_eq!(m, expected);
        // inputs untouched
        assert_eq!(l.value("b"), &Scalar::I64(2));
    }

    #[test]
    fn test_disjoint_keeps_both_sides() {
        let l: Tuple = [("a", 1i64)].into_iter().collect();
        let r: Tuple = [("z", "q")].into_iter().collect();
        let m = merge(&l, &r);
        assert_eq!(m.len(), 2);
        assert_eq!(merge(&l, &Tuple::empty()), l);
        assert_eq!(merge(&Tuple::empty(), &r), r);
    }
}
