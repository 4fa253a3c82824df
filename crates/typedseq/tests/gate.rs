mod common;

use common::*;
use typedseq::{AllowList, Error, Kind, TypedSeq, Unrestricted, Value};

/// Runs every gated write against `P` and checks acceptance matches `allowed`.
fn run_gate<P>(allowed: &[Value]) -> typedseq::Result<()>
where
    P: AllowList<Item = Value>,
{
    for value in samples() {
        let mut seq = TypedSeq::<P>::new();
        let should_allow = allowed.contains(&value);

        if should_allow {
            assert_eq!(seq.push(value.clone())?, 1);
            assert_eq!(seq.prepend([value.clone()])?, 2);
            assert!(seq.replace_range(0, 0, [value.clone()])?.is_empty());

            let merged = seq.merge([[value.clone()]])?;
            assert_eq!(merged.len(), 4);
            assert_eq!(merged.kind_name(), P::NAME);
            assert_eq!(seq.len(), 3);
        } else {
            for result in [
                seq.push(value.clone()),
                seq.prepend([value.clone()]),
                seq.append([value.clone()]),
            ] {
                let err = result.unwrap_err();
                assert!(err.to_string().starts_with("Not allowed"), "{err}");
            }
            assert!(seq.replace_range(0, 0, [value.clone()]).is_err());
            assert!(seq.merge([[value.clone()]]).is_err());
            assert!(seq.set(0, value.clone()).is_err());
            assert!(seq.is_empty());
        }
    }

    let seq = TypedSeq::<P>::of(allowed.to_vec())?;
    assert_eq!(seq.len(), allowed.len());

    let seq = TypedSeq::<P>::from_provider(allowed.iter().cloned())?;
    assert_eq!(seq, allowed.to_vec());

    let denied: Vec<Value> = samples()
        .into_iter()
        .filter(|v| !allowed.contains(v))
        .collect();
    if !denied.is_empty() {
        assert!(TypedSeq::<P>::of(denied.clone()).is_err());
        assert!(TypedSeq::<P>::from_provider(denied.clone()).is_err());
        assert!(TypedSeq::<P>::try_from(denied).is_err());
    }

    Ok(())
}

#[test]
fn test_unrestricted_accepts_everything() -> typedseq::Result<()> {
    run_gate::<Unrestricted<Value>>(&samples())
}

#[test]
fn test_string_collection() -> typedseq::Result<()> {
    run_gate::<Strings>(&samples()[0..3])
}

#[test]
fn test_number_collection() -> typedseq::Result<()> {
    run_gate::<Numbers>(&samples()[3..6])
}

#[test]
fn test_date_collection() -> typedseq::Result<()> {
    run_gate::<Dates>(&samples()[9..])
}

#[test]
fn test_number_string_collection() -> typedseq::Result<()> {
    run_gate::<NumbersOrStrings>(&samples()[0..6])
}

#[test]
fn test_allowed_kinds() {
    assert!(Unrestricted::<Value>::ALLOWED_KINDS.is_empty());
    assert_eq!(Strings::ALLOWED_KINDS, &[Kind::String]);
    assert_eq!(Numbers::ALLOWED_KINDS, &[Kind::Number]);
    assert_eq!(Dates::ALLOWED_KINDS, &[Kind::Date]);
    assert_eq!(NumbersOrStrings::ALLOWED_KINDS, &[Kind::String, Kind::Number]);
}

#[test]
fn test_error_identifies_value() {
    let mut dates = DateCollection::new();
    assert_eq!(dates.push(date(2018)).unwrap(), 1);

    let err = dates.push(Value::from("foo")).unwrap_err();
    assert_eq!(
        err,
        Error::TypeNotAllowed {
            kind: "String".into(),
            repr: "foo".into()
        }
    );
    assert_eq!(err.to_string(), "Not allowed: (String) foo");

    let err = dates.push(Value::from(f64::INFINITY)).unwrap_err();
    assert_eq!(err.to_string(), "Not allowed: (Number) Infinity");
    assert_eq!(dates.len(), 1);
}

#[test]
fn test_mixed_kinds_when_unrestricted() -> typedseq::Result<()> {
    let mut seq = Collection::new();
    seq.append(values!["a", 1, true])?;
    seq.push(Value::Null)?;
    seq.push(date(2000))?;

    let kinds: Vec<Kind> = seq.values().map(|v| typedseq::Element::kind(v)).collect();
    assert_eq!(
        kinds,
        [Kind::String, Kind::Number, Kind::Boolean, Kind::Null, Kind::Date]
    );
    Ok(())
}

#[test]
fn test_primitive_element_policies() -> typedseq::Result<()> {
    typedseq::allow_list!(OnlyI32: i32 => ["i32"]);

    let mut seq = TypedSeq::<OnlyI32>::of([1, 2, 3])?;
    seq.push(4)?;
    assert_eq!(seq, [1, 2, 3, 4]);

    let unrestricted = TypedSeq::<Unrestricted<String>>::of(["x".to_string()])?;
    assert_eq!(unrestricted.first().map(String::as_str), Some("x"));
    Ok(())
}
