use crate::style::TextStyle;
use dossier_types::{Color, Rect, ResourceKey};

/// A simple, geometry-aware data structure representing a single drawable item.
/// This is the final output of the layout process for a given element, containing
/// its absolute position and final styling information. A page is simply a collection
/// of these elements.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn new(rect: Rect, element: LayoutElement) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// An enum representing the different types of drawable elements.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    Line(LineElement),
    Circle(CircleElement),
    Image(ImageElement),
}

impl std::fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content),
            LayoutElement::Rectangle(_) => write!(f, "Rectangle"),
            LayoutElement::Line(_) => write!(f, "Line"),
            LayoutElement::Circle(_) => write!(f, "Circle"),
            LayoutElement::Image(i) => write!(f, "Image(key=\"{}\")", i.key),
        }
    }
}

/// A single line of text. The element box spans the glyph height; the
/// baseline sits at 80% of the font size below its top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A filled and/or outlined rectangle covering the element box.
#[derive(Clone, Debug, PartialEq)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

/// A straight line from the top-left corner of the element box to its
/// bottom-right corner. Horizontal rules have zero height.
#[derive(Clone, Debug, PartialEq)]
pub struct LineElement {
    pub stroke: Stroke,
}

/// A circle (or ellipse) inscribed in the element box.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleElement {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ImageShape {
    #[default]
    Square,
    Circle,
}

/// An image resource scaled into the element box.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageElement {
    pub key: ResourceKey,
    pub shape: ImageShape,
}
