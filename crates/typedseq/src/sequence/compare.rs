use std::fmt::Display;

use crate::{AllowList, TypedSeq};

/// The default comparator: equal values, or equal textual representations.
///
/// The textual fallback lets sequences of different element kinds be
/// compared, e.g. `Value::from(1)` matches `Value::from("1")`.
pub fn loose_eq<T, U>(a: &T, b: &U) -> bool
where
    T: PartialEq<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    a == b || a.to_string() == b.to_string()
}

impl<P: AllowList> TypedSeq<P> {
    /// Elements of this sequence matched by at least one element of `other`
    /// under [`loose_eq`], in this sequence's order.
    ///
    /// ```
    /// use typedseq::{TypedSeq, Unrestricted, Value};
    ///
    /// type Seq = TypedSeq<Unrestricted<Value>>;
    ///
    /// let one = Seq::of(["a", "b", "c"].map(Value::from)).unwrap();
    /// let two = Seq::of(["c", "d", "e"].map(Value::from)).unwrap();
    /// assert_eq!(one.intersect(&two), [Value::from("c")]);
    /// ```
    pub fn intersect<'a, U, I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = &'a U>,
        U: Display + ?Sized + 'a,
        P::Item: PartialEq<U>,
    {
        self.intersect_by(other, |a, b| loose_eq(a, b))
    }

    /// Elements of this sequence for which `compare(element, candidate)`
    /// holds for at least one candidate from `other`.
    pub fn intersect_by<'a, U, I, F>(&self, other: I, compare: F) -> Self
    where
        I: IntoIterator<Item = &'a U>,
        U: ?Sized + 'a,
        F: FnMut(&P::Item, &U) -> bool,
    {
        self.select(other, compare, true)
    }

    /// Elements of this sequence matched by no element of `other` under
    /// [`loose_eq`], in this sequence's order.
    ///
    /// ```
    /// use typedseq::{TypedSeq, Unrestricted, Value};
    ///
    /// type Seq = TypedSeq<Unrestricted<Value>>;
    ///
    /// let one = Seq::of(["a", "b", "c"].map(Value::from)).unwrap();
    /// let two = Seq::of(["c", "d", "e"].map(Value::from)).unwrap();
    /// assert_eq!(one.diff(&two), [Value::from("a"), Value::from("b")]);
    /// assert_eq!(two.diff(&one), [Value::from("d"), Value::from("e")]);
    /// ```
    pub fn diff<'a, U, I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = &'a U>,
        U: Display + ?Sized + 'a,
        P::Item: PartialEq<U>,
    {
        self.diff_by(other, |a, b| loose_eq(a, b))
    }

    /// Elements of this sequence for which `compare(element, candidate)`
    /// holds for no candidate from `other`.
    pub fn diff_by<'a, U, I, F>(&self, other: I, compare: F) -> Self
    where
        I: IntoIterator<Item = &'a U>,
        U: ?Sized + 'a,
        F: FnMut(&P::Item, &U) -> bool,
    {
        self.select(other, compare, false)
    }

    /// Keeps the populated elements whose "matched anything in `other`"
    /// outcome equals `matched`.
    ///
    /// `other` is collected once and scanned in full for every element;
    /// `compare` may be asymmetric and intransitive.
    fn select<'a, U, I, F>(&self, other: I, mut compare: F, matched: bool) -> Self
    where
        I: IntoIterator<Item = &'a U>,
        U: ?Sized + 'a,
        F: FnMut(&P::Item, &U) -> bool,
    {
        let other: Vec<&U> = other.into_iter().collect();

        let mut slots = Vec::new();
        for item in self.values() {
            let hit = other.iter().any(|candidate| compare(item, *candidate));
            if hit == matched {
                slots.push(Some(item.clone()));
            }
        }

        Self::from_slots(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn loose_eq_falls_back_to_text() {
        assert!(loose_eq(&Value::from(1), &Value::from(1)));
        assert!(loose_eq(&Value::from(1), &Value::from("1")));
        assert!(loose_eq(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(loose_eq(&Value::from(true), &Value::from("true")));
        assert!(!loose_eq(&Value::from(1), &Value::from(2)));
        assert!(!loose_eq(&Value::Null, &Value::from(false)));
    }

    #[test]
    fn loose_eq_on_primitives() {
        assert!(loose_eq("a", "a"));
        assert!(loose_eq(&String::from("a"), "a"));
        assert!(!loose_eq(&1_i32, &2_i32));
    }
}
