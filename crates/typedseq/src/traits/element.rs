use std::fmt::{Debug, Display};

use crate::short_type_name;

/// Anything a [`TypedSeq`](crate::TypedSeq) can hold.
///
/// An element reports its runtime [`Kind`](Element::Kind), which allow-lists
/// match against, and renders a textual representation through `Display`,
/// which the default comparator and rejection errors use.
pub trait Element
where
    Self: Sized + Clone + Debug + Display + 'static,
{
    /// Runtime classification of a value.
    type Kind: Copy + Eq + Debug + Display + 'static;

    fn kind(&self) -> Self::Kind;

    /// Returns `Some(n)` when this value can stand for a pre-size length.
    ///
    /// Drives [`TypedSeq::construct`](crate::TypedSeq::construct): a lone
    /// argument reporting a length creates `n` placeholders instead of a
    /// one-element sequence.
    #[inline]
    fn as_length(&self) -> Option<usize> {
        None
    }
}

macro_rules! impl_element_integer {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                type Kind = &'static str;

                #[inline]
                fn kind(&self) -> Self::Kind {
                    short_type_name::<$t>()
                }

                #[inline]
                fn as_length(&self) -> Option<usize> {
                    usize::try_from(*self)
                        .ok()
                        .filter(|n| *n <= crate::MAX_PRESIZE_LEN)
                }
            }
        )*
    };
}

macro_rules! impl_element_plain {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                type Kind = &'static str;

                #[inline]
                fn kind(&self) -> Self::Kind {
                    short_type_name::<$t>()
                }
            }
        )*
    };
}

impl_element_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_element_plain!(bool, char, f32, f64, String, &'static str);
