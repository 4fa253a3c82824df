#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use typedseq::{Kind, TypedSeq, Unrestricted, Value, allow_list};

allow_list!(pub Strings: Value => [Kind::String]);
allow_list!(pub Numbers: Value => [Kind::Number]);
allow_list!(pub Dates: Value => [Kind::Date]);
allow_list!(pub NumbersOrStrings: Value => [Kind::String, Kind::Number]);

pub type Collection = TypedSeq<Unrestricted<Value>>;
pub type StringCollection = TypedSeq<Strings>;
pub type NumberCollection = TypedSeq<Numbers>;
pub type DateCollection = TypedSeq<Dates>;
pub type NumberStringCollection = TypedSeq<NumbersOrStrings>;

pub fn date(year: i32) -> Value {
    Value::from(Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap())
}

/// Strings, numbers, booleans, null and dates, in that order.
pub fn samples() -> Vec<Value> {
    vec![
        Value::from("foo"),
        Value::from("bar"),
        Value::from("baz"),
        Value::from(1),
        Value::from(2),
        Value::from(f64::INFINITY),
        Value::from(true),
        Value::from(false),
        Value::Null,
        date(1970),
        date(1990),
        date(2010),
    ]
}

/// Builds a list of values from mixed literals.
#[macro_export]
macro_rules! values {
    ($($v:expr),* $(,)?) => {
        vec![$(typedseq::Value::from($v)),*]
    };
}

pub fn collection_a() -> Collection {
    Collection::from_provider(values!["a", "b", 1, 2, 3, true, false]).unwrap()
}

pub fn collection_b() -> StringCollection {
    StringCollection::from_provider(values!["a", "b", "c"]).unwrap()
}

pub fn collection_c() -> NumberCollection {
    NumberCollection::from_provider(values![0, 1, 2, 3, 4]).unwrap()
}

pub fn collection_d() -> NumberStringCollection {
    NumberStringCollection::from_provider(values!["c", 4, "b", 3, "a", 2, "b", 1]).unwrap()
}
