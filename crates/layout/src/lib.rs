//! Layout primitives for the dossier engine.
//!
//! The engine lays documents out in two stages. Section renderers describe
//! content as a list of [`Block`]s; a [`ColumnFlow`] then stacks those blocks
//! into a column region, breaking onto new pages of a [`PageSequence`] when the
//! column is full. Free-standing content (header bands, letter fields) is drawn
//! straight onto a [`Page`] at absolute coordinates.
//!
//! Coordinates are in points, with the origin at the top-left corner of the
//! page and `y` growing downwards. The renderer flips them for PDF.

pub mod block;
pub mod elements;
pub mod flow;
pub mod fonts;
pub mod page;
pub mod style;
pub mod text;

pub use block::{
    BadgesBlock, Block, BulletsBlock, DatePlacement, EntryBlock, HeadingBlock, HeadingDecoration,
    ParagraphBlock, PhotoSide, PhotoSlot, ProfileBlock, ProfileLine, RatingBlock, RatingLayout, Row,
    RatingScale, RuleBlock, RATING_MAX,
};
pub use elements::{
    CircleElement, ImageElement, ImageShape, LayoutElement, LineElement, PositionedElement,
    RectElement, Stroke, TextElement,
};
pub use flow::{Column, ColumnFlow};
pub use page::{Page, PageSequence};
pub use style::TextStyle;
pub use text::{text_width, wrap_text};
