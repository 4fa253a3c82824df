#![cfg(feature = "serde")]

mod common;

use common::*;
use typedseq::Value;

#[test]
fn test_serialize_placeholders_as_null() -> Result<(), Box<dyn std::error::Error>> {
    let mut seq = NumberCollection::with_len(1);
    seq.push(Value::from(2))?;

    let json = serde_json::to_string(&seq)?;
    assert_eq!(json, r#"[null,{"Number":2.0}]"#);

    let back: NumberCollection = serde_json::from_str(&json)?;
    assert_eq!(back, seq);
    Ok(())
}

#[test]
fn test_deserialize_runs_the_gate() {
    let json = r#"[{"String":"a"},{"Boolean":true}]"#;

    let err = serde_json::from_str::<StringCollection>(json).unwrap_err();
    assert!(err.to_string().starts_with("Not allowed: (Boolean) true"), "{err}");

    let seq: Collection = serde_json::from_str(json).unwrap();
    assert_eq!(seq, values!["a", true]);
}
