use std::marker::PhantomData;

use log::debug;

use crate::{Element, Error, Result};

/// The fixed set of kinds a concrete sequence accepts.
///
/// A policy is a type, not a value: every [`TypedSeq<P>`](crate::TypedSeq)
/// shares `P`'s list, and anything derived from a sequence keeps its policy.
/// An empty list accepts every value.
///
/// Policies are usually declared with [`allow_list!`](crate::allow_list).
pub trait AllowList: 'static {
    type Item: Element;

    /// Name of the concrete sequence kind, used in diagnostics.
    const NAME: &'static str;

    const ALLOWED_KINDS: &'static [<Self::Item as Element>::Kind];

    /// Returns whether `value`'s kind is on the list.
    #[inline]
    fn permits(value: &Self::Item) -> bool {
        Self::ALLOWED_KINDS.is_empty() || Self::ALLOWED_KINDS.contains(&value.kind())
    }

    /// Asserts that `value` may enter the sequence.
    ///
    /// Returns [`Error::TypeNotAllowed`] naming the rejected value's kind and
    /// representation otherwise.
    fn is_allowed(value: &Self::Item) -> Result<()> {
        if Self::permits(value) {
            return Ok(());
        }

        let kind = value.kind();
        debug!("{}: rejected ({kind}) {value}", Self::NAME);
        Err(Error::type_not_allowed(kind, value))
    }
}

/// Accepts any value of `T`.
pub struct Unrestricted<T>(PhantomData<fn() -> T>);

impl<T: Element> AllowList for Unrestricted<T> {
    type Item = T;

    const NAME: &'static str = "Unrestricted";

    const ALLOWED_KINDS: &'static [T::Kind] = &[];
}

/// Declares a zero-sized [`AllowList`] policy.
///
/// ```
/// use typedseq::{Kind, TypedSeq, Value, allow_list};
///
/// allow_list!(
///     /// Numbers and strings.
///     pub NumbersOrStrings: Value => [Kind::Number, Kind::String]
/// );
///
/// let mut seq = TypedSeq::<NumbersOrStrings>::new();
/// assert!(seq.push(Value::from(1)).is_ok());
/// assert!(seq.push(Value::from(true)).is_err());
/// ```
#[macro_export]
macro_rules! allow_list {
    ($(#[$meta:meta])* $vis:vis $name:ident : $item:ty => [$($kind:expr),* $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::AllowList for $name {
            type Item = $item;

            const NAME: &'static str = stringify!($name);

            const ALLOWED_KINDS: &'static [<$item as $crate::Element>::Kind] = &[$($kind),*];
        }
    };
}
