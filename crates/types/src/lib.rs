pub mod color;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use geometry::{Point, Rect, Size, mm, pt_to_mm, PT_PER_MM};
pub use ids::ResourceKey;
