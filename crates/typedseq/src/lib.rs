#![doc = include_str!("../README.md")]

#[cfg(feature = "derive")]
pub use typedseq_derive::Element;

mod error;
mod sequence;
mod traits;
mod value;

pub use error::*;
pub use sequence::*;
pub use traits::*;
pub use value::*;

/// Largest length a sequence may be pre-sized to, or grown to through
/// [`TypedSeq::set`].
pub const MAX_PRESIZE_LEN: usize = u32::MAX as usize;
