// tests/store_tests.rs

use num_bigint::BigInt;
use picket_lang::{FindError, Store, Value};

fn not_found(name: &str) -> Result<Value, FindError> {
    Err(FindError::NotFound(name.to_string()))
}

fn ambiguous(name: &str) -> Result<Value, FindError> {
    Err(FindError::Ambiguous(name.to_string()))
}

fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let first = rest.remove(i);
        for mut p in permutations(&rest) {
            p.insert(0, first.clone());
            out.push(p);
        }
    }
    out
}

fn build(entries: &[(&str, i64)]) -> Store {
    let mut store = Store::new();
    for (key, value) in entries {
        store.insert(key, *value);
    }
    store
}

// ============================================================================
// Lookup contract
// ============================================================================

#[test]
fn test_lookup_is_insertion_order_independent() {
    let entries = [("apple", 1i64), ("applepie", 2), ("a", 3), ("armor", 4)];

    for order in permutations(&entries) {
        let store = build(&order);

        let checks: Vec<(&str, Result<Value, FindError>)> = vec![
            ("a", Ok(Value::Int(3))),
            ("ap", ambiguous("ap")),
            ("app", ambiguous("app")),
            ("appl", ambiguous("appl")),
            ("apps", not_found("apps")),
            ("apple", Ok(Value::Int(1))),
            ("applep", Ok(Value::Int(2))),
            ("applepi", Ok(Value::Int(2))),
            ("applepie", Ok(Value::Int(2))),
            ("applepies", not_found("applepies")),
            ("applepix", not_found("applepix")),
            ("ar", Ok(Value::Int(4))),
            ("arm", Ok(Value::Int(4))),
            ("armo", Ok(Value::Int(4))),
            ("armor", Ok(Value::Int(4))),
            ("armors", not_found("armors")),
            ("armx", not_found("armx")),
            ("ax", not_found("ax")),
            ("b", not_found("b")),
            ("", ambiguous("")),
        ];

        for (query, expected) in checks {
            assert_eq!(
                store.find(query).cloned(),
                expected,
                "find({:?}) with insertion order {:?}",
                query,
                order
            );
        }
    }
}

#[test]
fn test_edge_split_keeps_both_keys() {
    for order in permutations(&[("abc", 1i64), ("ab", 2)]) {
        let store = build(&order);
        assert_eq!(store.find("a").cloned(), ambiguous("a"));
        assert_eq!(store.find("ab").cloned(), Ok(Value::Int(2)));
        assert_eq!(store.find("abc").cloned(), Ok(Value::Int(1)));
    }
}

#[test]
fn test_large_degree_node() {
    let entries: Vec<(&str, i64)> = vec![
        ("a", 1),
        ("b", 2),
        ("c", 3),
        ("d", 4),
        ("e", 5),
        ("f", 6),
        ("g", 7),
        ("h", 8),
        ("i", 9),
        ("j", 10),
        ("k", 11),
        ("dog", 12),
    ];
    let store = build(&entries);

    for (key, value) in &entries {
        assert_eq!(store.find(key).cloned(), Ok(Value::Int(*value)));
    }
    // "d" is an exact key, so it wins over the reachable "dog"
    assert_eq!(store.find("d").cloned(), Ok(Value::Int(4)));
    assert_eq!(store.find("do").cloned(), Ok(Value::Int(12)));
    assert_eq!(store.find("dox").cloned(), not_found("dox"));
    assert_eq!(store.find("z").cloned(), not_found("z"));
}

#[test]
fn test_empty_query() {
    // empty store: nothing reachable
    let store = Store::new();
    assert_eq!(store.find("").cloned(), not_found(""));

    // a single key is unambiguous even for the empty query
    let mut store = Store::new();
    store.insert("solo", 1i64);
    assert_eq!(store.find("").cloned(), Ok(Value::Int(1)));

    // two keys make it ambiguous
    store.insert("duo", 2i64);
    assert_eq!(store.find("").cloned(), ambiguous(""));
}

#[test]
fn test_round_trip_for_every_inserted_key() {
    let keys = [
        "destination",
        "destiny",
        "dest",
        "traveltime",
        "travel",
        "owner.name",
        "owner.nickname",
    ];
    for order in permutations(&keys) {
        let mut store = Store::new();
        for (i, key) in order.iter().enumerate() {
            store.insert(key, i as i64);
        }
        for (i, key) in order.iter().enumerate() {
            assert_eq!(
                store.find(key).cloned(),
                Ok(Value::Int(i as i64)),
                "round-trip of {:?} with order {:?}",
                key,
                order
            );
        }
    }
}

#[test]
fn test_dotted_paths_share_prefixes() {
    let mut store = Store::new();
    store.insert("owner.name", "Ada");
    store.insert("owner.nickname", "A");

    assert_eq!(store.find("owner.name").cloned(), Ok(Value::String("Ada".to_string())));
    assert_eq!(store.find("owner.nick").cloned(), Ok(Value::String("A".to_string())));
    assert_eq!(store.find("owner.").cloned(), ambiguous("owner."));
    assert_eq!(store.find("owner.x").cloned(), not_found("owner.x"));
}

#[test]
fn test_multibyte_labels_split_cleanly() {
    let mut store = Store::new();
    store.insert("naïve", 1i64);
    store.insert("naïf", 2i64);

    assert_eq!(store.find("naï").cloned(), ambiguous("naï"));
    assert_eq!(store.find("naïv").cloned(), Ok(Value::Int(1)));
    assert_eq!(store.find("naïf").cloned(), Ok(Value::Int(2)));
}

// ============================================================================
// Insertion
// ============================================================================

#[test]
fn test_len_counts_distinct_keys() {
    let mut store = Store::new();
    assert!(store.is_empty());

    store.insert("one", 1i64);
    store.insert("two", 2i64);
    store.insert("one", 3i64);

    assert_eq!(store.len(), 2);
    assert_eq!(store.find("one").cloned(), Ok(Value::Int(3)));
}

#[test]
fn test_insert_many() {
    let mut store = Store::new();
    store.insert_many(vec![
        ("arrived".to_string(), Value::Boolean(false)),
        ("origin".to_string(), Value::String("Mars".to_string())),
    ]);

    assert_eq!(store.find("arrived").cloned(), Ok(Value::Boolean(false)));
    assert_eq!(store.find("origin").cloned(), Ok(Value::String("Mars".to_string())));
}

#[test]
fn test_every_supported_value_kind() {
    let mut store = Store::new();
    store.insert("flag", true);
    store.insert("name", "Ada");
    store.insert("small", -3i8);
    store.insert("wide", u64::MAX);
    store.insert("ratio", 0.5f32);
    store.insert("huge", "98346723452398346723".parse::<BigInt>().unwrap());

    assert_eq!(store.find("flag").cloned(), Ok(Value::Boolean(true)));
    assert_eq!(store.find("name").cloned(), Ok(Value::String("Ada".to_string())));
    assert_eq!(store.find("small").cloned(), Ok(Value::Int(-3)));
    assert_eq!(store.find("wide").cloned(), Ok(Value::Uint(u64::MAX)));
    assert_eq!(store.find("ratio").cloned(), Ok(Value::Float(0.5)));
    assert_eq!(
        store.find("huge").cloned(),
        Ok(Value::BigInt("98346723452398346723".parse::<BigInt>().unwrap()))
    );
}
