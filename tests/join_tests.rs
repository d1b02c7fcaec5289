//! Join engine tests: both strategies, their agreement and their divergence.


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rels_core::config::{EngineConfig, JoinStrategy};
use rels_core::{Error, Relation, Scalar};
use rels_operators::join::{algorithm, algorithm_for, hash_join_flat, nested_loop_join_flat};
use rels_operators::{
    hash_join, merge, nested_loop_join, Comparator, Condition, JoinArg, RelationExt, EQ,
};
use test_data_gen::{generate_keyed, people, sorted, tuple, values};

#[test]
fn test_concrete_scenario_both_strategies() {
    let r = people();
    let s = values();
    let conds = [Condition::eq("id", "rid")];

    let expected = Relation::new(vec![tuple(&[
        ("id", 1i64.into()),
        ("name", "a".into()),
        ("rid", 1i64.into()),
        ("val", "x".into()),
    ])]);

    assert_eq!(nested_loop_join(&r, &s, &conds), expected);
    assert_eq!(hash_join(&r, &s, &conds), expected);
}

#[test]
fn test_strategies_agree_without_duplicate_build_keys() {
    let r = generate_keyed(200, 7, "left");
    let s = generate_keyed(300, 11, "right");

    // `id` is unique on the build side.
    let conds = [Condition::eq("id", "id")];
    let nl = nested_loop_join(&r, &s, &conds);
    let hj = hash_join(&r, &s, &conds);
    assert_eq!(nl.len(), 200);
    assert_eq!(sorted(&nl), sorted(&hj));

    // Composite key, still unique on the build side.
    let conds = [Condition::eq("id", "id"), Condition::eq("group", "group")];
    let nl = nested_loop_join(&r, &s, &conds);
    let hj = hash_join(&r, &s, &conds);
    assert_eq!(sorted(&nl), sorted(&hj));
    assert!(!nl.is_empty());
}

#[test]
fn test_duplicate_build_keys_diverge() {
    // Two left rows share key k=1.
    let r = Relation::new(vec![
        tuple(&[("k", 1i64.into()), ("tag", "first".into())]),
        tuple(&[("k", 1i64.into()), ("tag", "second".into())]),
        tuple(&[("k", 2i64.into()), ("tag", "other".into())]),
    ]);
    let s = Relation::new(vec![
        tuple(&[("sk", 1i64.into()), ("sv", "p".into())]),
        tuple(&[("sk", 2i64.into()), ("sv", "q".into())]),
    ]);
    let conds = [Condition::eq("k", "sk")];

    let nl = nested_loop_join(&r, &s, &conds);
    assert_eq!(nl.len(), 3);
    let nl_tags: Vec<&str> = nl.iter().map(|t| t.value("tag").as_str().unwrap()).collect();
    assert_eq!(nl_tags, vec!["first", "second", "other"]);

    let hj = hash_join(&r, &s, &conds);
    assert_eq!(hj.len(), 2);
    let hj_tags: Vec<&str> = hj.iter().map(|t| t.value("tag").as_str().unwrap()).collect();
    // Only the last-indexed build row for k=1 survives.
    assert_eq!(hj_tags, vec!["second", "other"]);
}

#[test]
fn test_cartesian_product_on_empty_conditions() {
    let r = people();
    let s = values();

    for out in [nested_loop_join(&r, &s, &[]), hash_join(&r, &s, &[])] {
        assert_eq!(out.len(), r.len() * s.len());
        let mut i = 0;
        for rt in &r {
            for st in &s {
                assert_eq!(out[i], merge(rt, st));
                i += 1;
            }
        }
    }
}

#[test]
fn test_empty_inputs() {
    let conds = [Condition::eq("id", "rid")];
    assert!(nested_loop_join(&Relation::empty(), &values(), &conds).is_empty());
    assert!(hash_join(&people(), &Relation::empty(), &conds).is_empty());
    assert!(hash_join(&Relation::empty(), &Relation::empty(), &[]).is_empty());
}

#[test]
fn test_invalid_flat_conditions_touch_nothing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = {
        let calls = Arc::clone(&calls);
        Comparator::new("counted", move |l, r| {
            calls.fetch_add(1, Ordering::SeqCst);
            l == r
        })
    };

    let r = people();
    let s = values();
    let (r_before, s_before) = (r.digest(), s.digest());

    // One full triple followed by two trailing arguments.
    let args: Vec<JoinArg> = vec![
        "id".into(),
        "rid".into(),
        counted.into(),
        "name".into(),
        "val".into(),
    ];

    for res in [
        nested_loop_join_flat(&r, &s, &args),
        hash_join_flat(&r, &s, &args),
    ] {
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(r.digest(), r_before);
    assert_eq!(s.digest(), s_before);
}

#[test]
fn test_flat_conditions_match_structured() {
    let r = people();
    let s = values();
    let args: Vec<JoinArg> = vec!["id".into(), "rid".into(), EQ.into()];
    assert_eq!(
        nested_loop_join_flat(&r, &s, &args).unwrap(),
        nested_loop_join(&r, &s, &[Condition::eq("id", "rid")])
    );
}

#[test]
fn test_custom_comparator_nested_loop() {
    // Case-insensitive string match.
    let ci = Comparator::new("ci_eq", |l, r| match (l.as_str(), r.as_str()) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    });
    let r = Relation::new(vec![tuple(&[("code", "ABC".into())])]);
    let s = Relation::new(vec![
        tuple(&[("c", "abc".into()), ("n", 1i64.into())]),
        tuple(&[("c", "xyz".into()), ("n", 2i64.into())]),
    ]);
    let out = nested_loop_join(&r, &s, &[Condition::new("code", "c", ci)]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].value("n"), &Scalar::I64(1));
}

#[test]
fn test_mixed_range_and_equality_conditions() {
    let r = generate_keyed(20, 2, "l");
    let s = generate_keyed(20, 2, "r");
    let conds = [
        Condition::eq("group", "group"),
        Condition::new("id", "id", Comparator::LT),
    ];
    let out = nested_loop_join(&r, &s, &conds);
    // per group of 10 ids: 45 strictly-less pairs
    assert_eq!(out.len(), 90);
}

#[test]
fn test_inputs_are_not_mutated() {
    let r = generate_keyed(50, 5, "l");
    let s = generate_keyed(50, 5, "r");
    let (rd, sd) = (r.digest(), s.digest());

    let conds = [Condition::eq("group", "group")];
    let _ = nested_loop_join(&r, &s, &conds);
    let _ = hash_join(&r, &s, &conds);

    assert_eq!(r.digest(), rd);
    assert_eq!(s.digest(), sd);
}

#[test]
fn test_strategy_dispatch() {
    let r = people();
    let s = values();
    let conds = [Condition::eq("id", "rid")];

    assert_eq!(algorithm(JoinStrategy::NestedLoop).name(), "join_nested_loop");
    assert_eq!(algorithm(JoinStrategy::Hash).name(), "join_hash");

    let cfg = EngineConfig::default().with_join_strategy(JoinStrategy::NestedLoop);
    assert_eq!(algorithm_for(&cfg).name(), "join_nested_loop");
    assert_eq!(r.join_configured(&cfg, &s, &conds).len(), 1);
    assert_eq!(r.join_using(JoinStrategy::Hash, &s, &conds).len(), 1);
    assert_eq!(
        r.join_flat(JoinStrategy::Hash, &s, &["id".into(), "rid".into(), EQ.into()])
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_result_is_reusable_as_input() {
    let r = people();
    let s = values();
    let first = hash_join(&r, &s, &[Condition::eq("id", "rid")]);
    let extra = Relation::new(vec![tuple(&[("v", "x".into()), ("score", 9i64.into())])]);
    let second = nested_loop_join(&first, &extra, &[Condition::eq("val", "v")]);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].value("score"), &Scalar::I64(9));
    assert_eq!(first.len(), 1);
}

#[test]
fn test_join_across_threads() {
    let r = generate_keyed(100, 4, "l");
    let s = generate_keyed(100, 4, "r");
    let expected = hash_join(&r, &s, &[Condition::eq("id", "id")]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let (r, s) = (r.clone(), s.clone());
            std::thread::spawn(move || hash_join(&r, &s, &[Condition::eq("id", "id")]))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
