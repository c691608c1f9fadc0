// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end navigation over decoded documents.

use dynjson::{Document, Error, ParsedPath, Value, ValueType, path};
use serde_json::json;

fn doc(text: &str) -> Document {
    text.parse().expect("test document should decode")
}

#[test]
fn test_deserialize_and_navigate() {
    let data = doc(r#"{ "foo": "bar", "baz": 3, "bar": { "sub": "val", "int": 4 }}"#);

    assert_eq!(data.at(["foo"]).string(), "bar");
    assert_eq!(data.at(["bar", "sub"]).string(), "val");
    assert_eq!(data.at(["bar"]).at(["sub"]).string(), "val");
    assert_eq!(data.at(["bar", "int"]).number(), 4);
    assert_eq!(data.root().keys_sorted(), ["bar", "baz", "foo"]);

    let data = doc(r#"{ "foo": [1,2,"bar",{ "baz": "fred" }]}"#);

    assert_eq!(data.at(path!["foo", 2]).string(), "bar");
    assert_eq!(data.at(path!["foo", 3, "baz"]).string(), "fred");
    assert_eq!(data.at(path!["foo", 0]).number(), 1);
    assert_eq!(data.at(path!["foo", 1]).number(), 2);

    assert_eq!(data.at(["missing"]).string_or_default(""), "");
}

#[test]
fn test_serialize_round_trip() {
    let text = r#"{"bar":{"int":4,"sub":"val"},"baz":3,"foo":"bar"}"#;
    let data = doc(text);

    assert_eq!(serde_json::to_string(&data).unwrap(), text);

    let reencoded: serde_json::Value = serde_json::from_str(&data.to_json_pretty()).unwrap();
    assert_eq!(&reencoded, data.as_json());
}

#[test]
fn test_objects_and_lists() {
    let data = doc(r#"{ "foo": "bar", "baz": 4 }"#);
    assert_eq!(data.root().map()["foo"].string(), "bar");
    assert_eq!(data.root().map()["baz"].number(), 4);

    let data = doc(r#"["foo", "bar", 1, 2]"#);
    assert_eq!(data.root().list()[1].string(), "bar");
    assert_eq!(data.root().list()[3].number(), 2);
}

#[test]
fn test_types() {
    let expectations = [
        ("{}", ValueType::Object),
        ("12", ValueType::Number),
        (r#""foo""#, ValueType::String),
        ("null", ValueType::Null),
        ("[1,2,3]", ValueType::List),
        ("true", ValueType::Bool),
    ];

    for (text, expected) in expectations {
        let data = doc(text);
        let root = data.root();
        assert_eq!(root.value_type(), expected, "{text}");
        assert_eq!(root.is_object(), expected == ValueType::Object, "{text}");
        assert_eq!(root.is_number(), expected == ValueType::Number, "{text}");
        assert_eq!(root.is_string(), expected == ValueType::String, "{text}");
        assert_eq!(root.is_null(), expected == ValueType::Null, "{text}");
        assert_eq!(root.is_list(), expected == ValueType::List, "{text}");
        assert_eq!(root.is_bool(), expected == ValueType::Bool, "{text}");
    }

    let data = doc("12");
    assert_eq!(data.root().number(), 12);
    assert_eq!(data.root().number_or_default(102), 12);

    let data = doc(r#""foo""#);
    assert_eq!(data.root().string(), "foo");
    assert_eq!(data.root().string_or_default("bar"), "foo");

    let absent = Value::absent();
    assert!(!absent.is_number());
    assert!(!absent.is_object());
    assert!(!absent.is_string());
    assert!(absent.is_null());
    assert!(!absent.is_list());
}

#[test]
fn test_type_mismatch_is_recoverable() {
    let data = doc(r#""foo""#);

    let err = data.root().number_or_error().unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: ValueType::Number,
            found: ValueType::String,
        }
    ));
    assert_eq!(data.root().number_or_default(5), 5);
}

#[test]
#[should_panic(expected = "expected number, found string")]
fn test_type_mismatch_panics_in_strict_tier() {
    let data = doc(r#""foo""#);
    let _ = data.root().number();
}

#[test]
fn test_absent_chains_never_panic() {
    let data = doc(r#"{"foo":[1,2,"bar",{"baz":"fred"}]}"#);

    assert!(data.at(["doesnotexist"]).at(["bar"]).is_absent());
    assert!(data.at([1000]).at([1000, 1000]).is_absent());
    assert!(data.at(path!["foo", 1000, "x", 3]).is_absent());
    assert!(data.at(path!["foo", 0, "not-a-map"]).is_absent());

    assert!(data.at_or_error(["doesnotexist"]).unwrap_err().is_absent());
    assert!(
        data.at_or_error(path!["foo", 0, "x"])
            .unwrap_err()
            .is_type_mismatch()
    );
}

#[test]
fn test_negative_index_is_absent() {
    let data = doc(r#"{"foo":[1,2,"bar",{"baz":"fred"}]}"#);

    assert!(data.at(path!["foo", -1]).is_absent());
    let err = data.at_or_error(path!["foo", -1]).unwrap_err();
    assert!(err.is_absent());
    assert_eq!(err.to_string(), "negative index out of bounds (length=4)");
}

#[test]
fn test_chaining_matches_single_call() {
    let data = doc(r#"{"a":{"b":[{"c":1},{"c":[true,false]}]}}"#);
    let root = data.root();

    let chained = root.at(["a"]).at(["b"]).at([1]).at(["c"]).at([0]);
    let single = root.at(path!["a", "b", 1, "c", 0]);
    assert_eq!(chained, single);
    assert!(single.bool());
}

#[test]
fn test_null_payload_versus_absent() {
    let data = doc(r#"{"present": null}"#);

    let present = data.at(["present"]);
    let missing = data.at(["missing"]);

    assert!(present.is_null());
    assert!(missing.is_null());
    assert!(!present.is_absent());
    assert!(missing.is_absent());

    assert!(data.at_or_error(["present"]).is_ok());
    assert!(present.string_or_error().unwrap_err().is_type_mismatch());
    assert!(missing.string_or_error().unwrap_err().is_absent());
}

#[test]
fn test_textual_paths() {
    let data = doc(r#"{"users": [{"name": "Amy", "tags": ["a", "b"]}, {"name": "Bob"}]}"#);

    let path: ParsedPath = "users[0].tags[1]".parse().unwrap();
    assert_eq!(data.at(&path).string(), "b");

    let path: ParsedPath = ".users[1].name".parse().unwrap();
    assert_eq!(data.at(path.keys()).string(), "Bob");

    let root: ParsedPath = ".".parse().unwrap();
    assert_eq!(data.at(&root), data.root());

    assert!(matches!(
        "users[one]".parse::<ParsedPath>(),
        Err(Error::InvalidPath { position: 6, .. })
    ));
}

#[test]
fn test_shared_across_threads() {
    let data = doc(r#"{"items": [10, 20, 30, 40]}"#);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let data = &data;
                scope.spawn(move || data.at(path!["items", i]).number())
            })
            .collect();

        let values: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(values, [10, 20, 30, 40]);
    });
}

#[test]
fn test_wrapping_existing_tree() {
    let tree = json!({"nested": {"pi": 3.75}});
    let value = Value::from(&tree);

    assert_eq!(value.at(["nested", "pi"]).number(), 3);
    assert!((value.at(["nested", "pi"]).float() - 3.75).abs() < f64::EPSILON);
    assert_eq!(Document::from(tree.clone()).as_json(), &tree);
}
