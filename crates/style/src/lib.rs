pub mod dimension;
pub mod font;
pub mod text;

pub use dimension::{Margins, PageSize};
pub use font::{BuiltinFont, FacePair, FontWeight};
pub use text::TextAlign;
