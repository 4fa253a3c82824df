mod allow_list;
mod element;
mod printable;

pub use allow_list::*;
pub use element::*;
pub use printable::*;
