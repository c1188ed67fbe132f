//! # Canonical Byte and Digest Vectors
//!
//! Pins the exact bytes hashed for metadata values and the digests derived
//! from them. If these vectors change, every filename produced by a
//! metadata-hash policy changes with them.

use ufname_core::{CanonicalBytes, HashAlgorithm};

/// (JSON input, expected canonical bytes).
const TEST_VECTORS: &[(&str, &str)] = &[
    (r#"{"b":2,"a":1,"c":"hello"}"#, r#"{"a":1,"b":2,"c":"hello"}"#),
    (r#"{"z":26,"a":1}"#, r#"{"a":1,"z":26}"#),
    (r#"{}"#, r#"{}"#),
    (r#"[]"#, r#"[]"#),
    (
        r#"{"nested":{"z":1,"a":2},"top":true}"#,
        r#"{"nested":{"a":2,"z":1},"top":true}"#,
    ),
    (r#"{"arr":[3,2,1],"key":"value"}"#, r#"{"arr":[3,2,1],"key":"value"}"#),
    (
        r#"{"n":null,"b":false,"t":true,"i":42,"s":"text"}"#,
        r#"{"b":false,"i":42,"n":null,"s":"text","t":true}"#,
    ),
    (r#"{"big":999999999999}"#, r#"{"big":999999999999}"#),
    (r#"{"neg":-42}"#, r#"{"neg":-42}"#),
    (r#"{"empty":""}"#, r#"{"empty":""}"#),
    (r#"12345"#, r#"12345"#),
    (r#""run-7""#, r#""run-7""#),
];

#[test]
fn canonical_bytes_match_expected_vectors() {
    for (input, expected_canonical) in TEST_VECTORS {
        let value: serde_json::Value = serde_json::from_str(input).unwrap();
        let cb = CanonicalBytes::new(&value).unwrap();
        let actual = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert_eq!(actual, *expected_canonical, "Canonical mismatch for input: {input}");
    }
}

#[test]
fn sha256_of_empty_object() {
    let cb = CanonicalBytes::new(&serde_json::json!({})).unwrap();
    assert_eq!(
        HashAlgorithm::Sha256.hex_digest(&cb),
        "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
    );
}

#[test]
fn sha256_of_integer_metadata() {
    // The canonical form of 12345 is the ASCII text "12345".
    let cb = CanonicalBytes::new(&serde_json::json!(12345)).unwrap();
    assert_eq!(cb.as_bytes(), b"12345");
    assert_eq!(
        HashAlgorithm::Sha256.hex_digest(&cb),
        "5994471abb01112afcc18159f6cc74b4f511b99806da59b3caf5a9c173cacfc5"
    );
}

#[test]
fn key_order_does_not_change_digest() {
    let a: serde_json::Value = serde_json::from_str(r#"{"lr":0.01,"epochs":10}"#).unwrap();
    let b: serde_json::Value = serde_json::from_str(r#"{"epochs":10,"lr":0.01}"#).unwrap();
    for algo in HashAlgorithm::ALL {
        assert_eq!(
            algo.hex_digest(&CanonicalBytes::new(&a).unwrap()),
            algo.hex_digest(&CanonicalBytes::new(&b).unwrap()),
            "{algo}"
        );
    }
}

#[test]
fn every_algorithm_renders_full_length_hex() {
    let cb = CanonicalBytes::new(&serde_json::json!({"k": "v"})).unwrap();
    for algo in HashAlgorithm::ALL {
        let hex = algo.hex_digest(&cb);
        assert_eq!(hex.len(), algo.output_len() * 2, "{algo}");
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}
