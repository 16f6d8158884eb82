//! Style resolution: from the user's layout choices to concrete faces,
//! sizes and colours.

mod resolver;

pub use resolver::{DEFAULT_FONT_SIZE, MIN_FONT_SIZE, Palette, ResolvedStyle, Sizes, resolve_faces};
