use std::{fmt, iter::Flatten, slice, vec};

use log::debug;

use crate::{AllowList, Element, MAX_PRESIZE_LEN, Result};

mod compare;
mod mutate;
#[cfg(feature = "serde")]
mod serialization;

pub use compare::*;

/// Ordered, mutable sequence whose elements must pass the allow-list `P`.
///
/// `TypedSeq` wraps a `Vec` rather than exposing one: every way of getting a
/// value into the sequence goes through [`AllowList::is_allowed`], and a
/// rejected call leaves the sequence exactly as it was.
///
/// A position may hold a placeholder (see [`with_len`](Self::with_len)).
/// Placeholders are never validated, are skipped by [`values`](Self::values)
/// and by the comparison operations, and are kept by
/// [`merge`](Self::merge) and [`replace_range`](Self::replace_range).
///
/// # Construction
///
/// | Constructor | Gate | Result |
/// |-------------|------|--------|
/// | [`new`](Self::new) | - | empty |
/// | [`with_len`](Self::with_len) | no | `n` placeholders |
/// | [`of`](Self::of) | yes | the given values, in order |
/// | [`construct`](Self::construct) | depends | `with_len` for a lone length, `of` otherwise |
/// | [`from_provider`](Self::from_provider) | yes | the provider's values, in order |
pub struct TypedSeq<P: AllowList> {
    slots: Vec<Option<P::Item>>,
}

impl<P: AllowList> TypedSeq<P> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a sequence of `len` placeholders.
    ///
    /// Nothing is validated here; the gate applies to later writes.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`MAX_PRESIZE_LEN`].
    pub fn with_len(len: usize) -> Self {
        assert!(len <= MAX_PRESIZE_LEN, "Presize length too high: {len}");
        debug!("{}: presized to {len}", P::NAME);
        Self {
            slots: vec![None; len],
        }
    }

    /// Creates a sequence holding `values`, in order.
    ///
    /// Fails with the first disallowed value; no sequence is produced then.
    pub fn of<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = P::Item>,
    {
        Ok(Self::from_slots(Self::validated(values)?))
    }

    /// The overloaded constructor: a single argument that is a length
    /// creates that many placeholders, anything else is a value list.
    ///
    /// A lone integer therefore cannot be used to build a one-element
    /// sequence through this form; use [`of`](Self::of) for that.
    ///
    /// ```
    /// use typedseq::{TypedSeq, Unrestricted, Value};
    ///
    /// let presized = TypedSeq::<Unrestricted<Value>>::construct(vec![Value::from(3)]).unwrap();
    /// assert_eq!(presized.len(), 3);
    ///
    /// let one = TypedSeq::<Unrestricted<Value>>::of([Value::from(3)]).unwrap();
    /// assert_eq!(one.len(), 1);
    /// ```
    pub fn construct(args: Vec<P::Item>) -> Result<Self> {
        if let [only] = args.as_slice()
            && let Some(len) = only.as_length()
        {
            return Ok(Self::with_len(len));
        }
        Self::of(args)
    }

    /// Copies a finite provider into a new sequence, validating every item.
    ///
    /// Any disallowed item aborts the whole construction.
    pub fn from_provider<I>(provider: I) -> Result<Self>
    where
        I: IntoIterator<Item = P::Item>,
    {
        let slots = Self::validated(provider)?;
        debug!("{}: built from provider with {} elements", P::NAME, slots.len());
        Ok(Self::from_slots(slots))
    }

    pub(crate) fn from_slots(slots: Vec<Option<P::Item>>) -> Self {
        Self { slots }
    }

    /// Runs the gate over a batch, stopping at the first rejection.
    pub(crate) fn validated<I>(values: I) -> Result<Vec<Option<P::Item>>>
    where
        I: IntoIterator<Item = P::Item>,
    {
        values
            .into_iter()
            .map(|value| P::is_allowed(&value).map(|()| Some(value)))
            .collect()
    }

    /// Name of this sequence's policy.
    #[inline]
    pub fn kind_name(&self) -> &'static str {
        P::NAME
    }

    /// Number of positions, placeholders included.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Element at `index`, or `None` for a placeholder or an out of range index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&P::Item> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns true if `index` is in range and holds a placeholder.
    #[inline]
    pub fn is_placeholder(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    #[inline]
    pub fn first(&self) -> Option<&P::Item> {
        self.get(0)
    }

    #[inline]
    pub fn last(&self) -> Option<&P::Item> {
        self.slots.last().and_then(Option::as_ref)
    }

    /// Every position, with `None` for placeholders.
    #[inline]
    pub fn slots(&self) -> &[Option<P::Item>] {
        &self.slots
    }

    /// Populated elements, in order.
    #[inline]
    pub fn values(&self) -> Values<'_, P::Item> {
        self.slots.iter().flatten()
    }

    /// Clones the populated elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<P::Item> {
        self.values().cloned().collect()
    }
}

/// Iterator over the populated elements of a [`TypedSeq`].
pub type Values<'a, T> = Flatten<slice::Iter<'a, Option<T>>>;

/// Owning iterator over the populated elements of a [`TypedSeq`].
pub type IntoValues<T> = Flatten<vec::IntoIter<Option<T>>>;

impl<P: AllowList> Default for TypedSeq<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: AllowList> Clone for TypedSeq<P> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<P: AllowList> TryFrom<Vec<P::Item>> for TypedSeq<P> {
    type Error = crate::Error;

    fn try_from(values: Vec<P::Item>) -> Result<Self> {
        Self::from_provider(values)
    }
}

impl<P: AllowList> IntoIterator for TypedSeq<P> {
    type Item = P::Item;
    type IntoIter = IntoValues<P::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter().flatten()
    }
}

impl<'a, P: AllowList> IntoIterator for &'a TypedSeq<P> {
    type Item = &'a P::Item;
    type IntoIter = Values<'a, P::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

impl<P, Q> PartialEq<TypedSeq<Q>> for TypedSeq<P>
where
    P: AllowList,
    Q: AllowList,
    P::Item: PartialEq<Q::Item>,
{
    fn eq(&self, other: &TypedSeq<Q>) -> bool {
        self.slots.len() == other.slots.len()
            && self
                .slots
                .iter()
                .zip(&other.slots)
                .all(|pair| match pair {
                    (Some(a), Some(b)) => a == b,
                    (None, None) => true,
                    _ => false,
                })
    }
}

impl<P, U> PartialEq<[U]> for TypedSeq<P>
where
    P: AllowList,
    P::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.slots.len() == other.len()
            && self
                .slots
                .iter()
                .zip(other)
                .all(|(slot, b)| slot.as_ref().is_some_and(|a| a == b))
    }
}

impl<P, U> PartialEq<Vec<U>> for TypedSeq<P>
where
    P: AllowList,
    P::Item: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        *self == other[..]
    }
}

impl<P, U, const N: usize> PartialEq<[U; N]> for TypedSeq<P>
where
    P: AllowList,
    P::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        *self == other[..]
    }
}

struct Placeholder;

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<empty>")
    }
}

impl<P: AllowList> fmt::Debug for TypedSeq<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(P::NAME)?;
        f.debug_list()
            .entries(self.slots.iter().map(|slot| match slot {
                Some(value) => value as &dyn fmt::Debug,
                None => &Placeholder as &dyn fmt::Debug,
            }))
            .finish()
    }
}

/// Comma separated, placeholders render empty: `a,,1`.
impl<P: AllowList> fmt::Display for TypedSeq<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if let Some(value) = slot {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
