use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::{BTreeMap, BTreeSet};

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    // A tiny alphabet makes keys collide on prefixes, so most operations
    // split or merge something. 0x00 and 0xff exercise the byte extremes.
    prop::collection::vec(
        prop::sample::select(vec![b'a', b'b', b'c', 0x00, 0xff]),
        0..=8,
    )
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 5)]
    Insert(#[proptest(strategy = "key_strategy()")] Vec<u8>, u16),
    #[proptest(weight = 3)]
    Remove(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    #[proptest(weight = 2)]
    Get(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    #[proptest(weight = 1)]
    Prefix(#[proptest(strategy = "key_strategy()")] Vec<u8>),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(any::<Op>(), 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_map(ops in ops_strategy()) {
        let mut t: RadixMap<u16> = RadixMap::new();
        let mut m: BTreeMap<Vec<u8>, u16> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let old_t = t.insert(&key, value);
                    let old_m = m.insert(key, value);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Remove(key) => {
                    let old_t = t.remove(&key);
                    let old_m = m.remove(&key);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(&key).copied(), m.get(&key).copied());
                    prop_assert_eq!(t.contains_key(&key), m.contains_key(&key));
                }
                Op::Prefix(prefix) => {
                    let got: Vec<(Vec<u8>, u16)> =
                        t.prefix_iter(&prefix).map(|(k, v)| (k, *v)).collect();
                    let expected: Vec<(Vec<u8>, u16)> = m
                        .iter()
                        .filter(|(k, _)| k.starts_with(&prefix))
                        .map(|(k, v)| (k.clone(), *v))
                        .collect();
                    prop_assert_eq!(got, expected);
                }
            }

            prop_assert_eq!(t.len(), m.len());
            prop_assert_eq!(t.check_integrity(), Ok(()));
        }

        let got: Vec<(Vec<u8>, u16)> = t.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u16)> = m.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_equivalence_set(ops in ops_strategy()) {
        let mut t = RadixSet::new();
        let mut m: BTreeSet<Vec<u8>> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key, _) => {
                    let added_t = t.insert(&key);
                    let added_m = m.insert(key);
                    prop_assert_eq!(added_t, added_m);
                }
                Op::Remove(key) => {
                    prop_assert_eq!(t.remove(&key), m.remove(&key));
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.contains(&key), m.contains(&key));
                }
                Op::Prefix(prefix) => {
                    let mut got = Vec::new();
                    t.for_each_with_prefix(&prefix, |k| got.push(k.to_vec()));
                    let expected: Vec<Vec<u8>> =
                        m.iter().filter(|k| k.starts_with(&prefix)).cloned().collect();
                    prop_assert_eq!(got, expected);
                }
            }

            prop_assert_eq!(t.len(), m.len());
            prop_assert_eq!(t.check_integrity(), Ok(()));
        }

        let got: Vec<Vec<u8>> = t.iter().collect();
        let expected: Vec<Vec<u8>> = m.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_insert_then_remove_restores_shape(
        keys in prop::collection::btree_set(key_strategy(), 0..=32),
        extra in key_strategy(),
    ) {
        prop_assume!(!keys.contains(&extra));

        let mut t: RadixSet = keys.iter().collect();
        let shape = t.structure();
        let before = t.clone();

        prop_assert!(t.insert(&extra));
        prop_assert!(t.remove(&extra));

        prop_assert_eq!(t.structure(), shape);
        prop_assert_eq!(t, before);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

fn small_key_set() -> Vec<Vec<u8>> {
    vec![
        b"".to_vec(),
        b"a".to_vec(),
        b"ab".to_vec(),
        b"abc".to_vec(),
        b"abd".to_vec(),
        b"b".to_vec(),
        b"ba".to_vec(),
    ]
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys = small_key_set();

    let mut reference: RadixMap<u64> = RadixMap::new();
    for k in &keys {
        reference.insert(k, 0);
    }
    let shape = reference.structure();

    for_each_permutation(&keys, |perm| {
        let mut t: RadixMap<u64> = RadixMap::new();
        let mut m: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for (i, k) in perm.into_iter().enumerate() {
            let v = i as u64;
            assert_eq!(t.insert(&k, v), m.insert(k, v));
            assert_eq!(t.check_integrity(), Ok(()));
        }

        // The compressed layout depends only on the key set.
        assert_eq!(t.structure(), shape);
        let got: Vec<(Vec<u8>, u64)> = t.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u64)> = m.iter().map(|(k, v)| (k.clone(), *v)).collect();
        assert_eq!(got, expected);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    let keys = small_key_set();

    let mut base_tree: RadixMap<u64> = RadixMap::new();
    let mut base_map: BTreeMap<Vec<u8>, u64> = BTreeMap::new();
    for (i, k) in keys.iter().enumerate() {
        let v = i as u64;
        assert_eq!(base_tree.insert(k, v), base_map.insert(k.clone(), v));
    }

    for_each_permutation(&keys, |perm| {
        let mut t = base_tree.clone();
        let mut m = base_map.clone();

        for k in perm {
            assert_eq!(t.remove(&k), m.remove(&k));
            assert_eq!(t.len(), m.len());
            assert_eq!(t.check_integrity(), Ok(()));
            let got: Vec<Vec<u8>> = t.keys().collect();
            let expected: Vec<Vec<u8>> = m.keys().cloned().collect();
            assert_eq!(got, expected);
        }
        assert!(t.is_empty());
        assert_eq!(t.stats(), TreeStats::default());
    });
}

#[test]
fn randomized_insert_remove_get() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(2);
    let mut t: RadixMap<u64> = RadixMap::new();
    let mut m: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

    for step in 0..50_000 {
        let op = rng.gen_range(0..100);
        let len = rng.gen_range(0..12);
        let key: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'e')).collect();

        match op {
            0..=49 => {
                let v: u64 = rng.gen();
                assert_eq!(t.insert(&key, v), m.insert(key, v));
            }
            50..=74 => {
                assert_eq!(t.remove(&key), m.remove(&key));
            }
            _ => {
                assert_eq!(t.get(&key).copied(), m.get(&key).copied());
            }
        }

        if step % 5_000 == 0 {
            assert_eq!(t.check_integrity(), Ok(()));
        }
    }

    assert_eq!(t.len(), m.len());
    assert_eq!(t.check_integrity(), Ok(()));
    let got: Vec<(Vec<u8>, u64)> = t.iter().map(|(k, v)| (k, *v)).collect();
    let expected: Vec<(Vec<u8>, u64)> = m.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(got, expected);
}

#[test]
fn randomized_url_like_prefix_scans() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let domains = ["example.com", "example.org", "test.org", "demo.net"];
    let paths = ["users", "posts", "comments", "api/v1", "api/v2"];

    let mut rng = StdRng::seed_from_u64(7);
    let mut t = RadixSet::new();
    let mut m: BTreeSet<Vec<u8>> = BTreeSet::new();

    for _ in 0..5_000 {
        let key = format!(
            "https://{}/{}/{}",
            domains[rng.gen_range(0..domains.len())],
            paths[rng.gen_range(0..paths.len())],
            rng.gen_range(0..200)
        )
        .into_bytes();
        assert_eq!(t.insert(&key), m.insert(key));
    }
    assert_eq!(t.check_integrity(), Ok(()));

    for prefix in [
        "https://",
        "https://example.",
        "https://example.com/api/v",
        "https://test.org/posts/1",
        "https://nowhere",
    ] {
        let got: Vec<Vec<u8>> = t.prefix_iter(prefix).collect();
        let expected: Vec<Vec<u8>> = m
            .iter()
            .filter(|k| k.starts_with(prefix.as_bytes()))
            .cloned()
            .collect();
        assert_eq!(got, expected, "prefix {prefix}");
    }
}
