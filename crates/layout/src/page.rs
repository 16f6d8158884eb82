//! Pages and page sequences.

use crate::elements::{
    CircleElement, ImageElement, ImageShape, LayoutElement, LineElement, PositionedElement,
    RectElement, Stroke, TextElement,
};
use crate::style::TextStyle;
use crate::text::{text_width, wrap_text};
use dossier_style::TextAlign;
use dossier_types::{Color, Point, Rect, ResourceKey, Size};

/// A single laid-out page: an ordered display list of positioned elements.
/// Elements are painted in order, so later elements draw on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub size: Size,
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub fn new(size: Size) -> Self {
        Self { size, elements: Vec::new() }
    }

    pub fn push(&mut self, element: PositionedElement) {
        self.elements.push(element);
    }

    /// Inserts elements underneath everything already on the page.
    pub fn underlay(&mut self, elements: impl IntoIterator<Item = PositionedElement>) {
        let mut below: Vec<PositionedElement> = elements.into_iter().collect();
        below.append(&mut self.elements);
        self.elements = below;
    }

    /// Draws one line of text with its glyph box's top edge at `y`.
    /// Returns the width of the drawn text.
    pub fn text(&mut self, x: f32, y: f32, content: &str, style: &TextStyle) -> f32 {
        if content.trim().is_empty() {
            return 0.0;
        }
        let width = text_width(content, style);
        self.push(PositionedElement::new(
            Rect::new(x, y, width, style.font_size),
            LayoutElement::Text(TextElement { content: content.to_string(), style: style.clone() }),
        ));
        width
    }

    /// Draws one line of text aligned within the horizontal span `[x, x + width]`.
    pub fn text_aligned(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        content: &str,
        style: &TextStyle,
        align: TextAlign,
    ) -> f32 {
        let measured = text_width(content, style);
        let start = match align {
            TextAlign::Left => x,
            TextAlign::Center => x + (width - measured) / 2.0,
            TextAlign::Right => x + width - measured,
        };
        self.text(start, y, content, style)
    }

    /// Draws wrapped text starting at line box top `y`. Returns the consumed height.
    pub fn paragraph(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        content: &str,
        style: &TextStyle,
        align: TextAlign,
    ) -> f32 {
        let leading = style.leading();
        let inset = (leading - style.font_size) / 2.0;
        let lines = wrap_text(content, style, width);
        for (i, line) in lines.iter().enumerate() {
            self.text_aligned(x, y + i as f32 * leading + inset, width, line, style, align);
        }
        lines.len() as f32 * leading
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(PositionedElement::new(
            rect,
            LayoutElement::Rectangle(RectElement { fill: Some(color), stroke: None }),
        ));
    }

    pub fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.push(PositionedElement::new(
            rect,
            LayoutElement::Rectangle(RectElement { fill: None, stroke: Some(stroke) }),
        ));
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.push(PositionedElement::new(
            Rect::new(from.x, from.y, to.x - from.x, to.y - from.y),
            LayoutElement::Line(LineElement { stroke }),
        ));
    }

    /// A horizontal rule of length `width` at height `y`.
    pub fn hline(&mut self, x: f32, y: f32, width: f32, stroke: Stroke) {
        self.line(Point::new(x, y), Point::new(x + width, y), stroke);
    }

    pub fn circle(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(PositionedElement::new(
            rect,
            LayoutElement::Circle(CircleElement { fill, stroke }),
        ));
    }

    pub fn image(&mut self, rect: Rect, key: ResourceKey, shape: ImageShape) {
        self.push(PositionedElement::new(
            rect,
            LayoutElement::Image(ImageElement { key, shape }),
        ));
    }

    /// All text elements on the page, in paint order.
    pub fn text_elements(&self) -> impl Iterator<Item = (&PositionedElement, &TextElement)> {
        self.elements.iter().filter_map(|el| match &el.element {
            LayoutElement::Text(t) => Some((el, t)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.text_elements().map(|(_, t)| t.content.as_str())
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    pub fn images(&self) -> impl Iterator<Item = (&PositionedElement, &ImageElement)> {
        self.elements.iter().filter_map(|el| match &el.element {
            LayoutElement::Image(i) => Some((el, i)),
            _ => None,
        })
    }
}

/// A growable run of equally-sized pages shared by several column flows.
#[derive(Debug, Clone)]
pub struct PageSequence {
    size: Size,
    pages: Vec<Page>,
}

impl PageSequence {
    /// Creates a sequence holding a single blank page.
    pub fn new(size: Size) -> Self {
        Self { size, pages: vec![Page::new(size)] }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the page at `index`, appending blank pages as needed.
    pub fn page_mut(&mut self, index: usize) -> &mut Page {
        while self.pages.len() <= index {
            self.pages.push(Page::new(self.size));
        }
        &mut self.pages[index]
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Page> {
        self.pages.iter_mut()
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_style::BuiltinFont;

    fn style() -> TextStyle {
        TextStyle::new(BuiltinFont::Helvetica, 10.0, Color::BLACK)
    }

    #[test]
    fn blank_text_is_not_drawn() {
        let mut page = Page::new(Size::A4);
        assert_eq!(page.text(0.0, 0.0, "  ", &style()), 0.0);
        assert!(page.elements.is_empty());
    }

    #[test]
    fn right_alignment_ends_at_span_edge() {
        let mut page = Page::new(Size::A4);
        let w = page.text_aligned(100.0, 0.0, 200.0, "2024", &style(), TextAlign::Right);
        let (el, _) = page.text_elements().next().unwrap();
        assert!((el.x + w - 300.0).abs() < 1e-3);
    }

    #[test]
    fn underlay_paints_first() {
        let mut page = Page::new(Size::A4);
        page.text(0.0, 0.0, "front", &style());
        page.underlay(vec![PositionedElement::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            LayoutElement::Rectangle(RectElement { fill: Some(Color::WHITE), stroke: None }),
        )]);
        assert!(matches!(page.elements[0].element, LayoutElement::Rectangle(_)));
        assert!(matches!(page.elements[1].element, LayoutElement::Text(_)));
    }

    #[test]
    fn sequence_grows_on_demand() {
        let mut seq = PageSequence::new(Size::A4);
        assert_eq!(seq.len(), 1);
        seq.page_mut(2).text(0.0, 0.0, "third", &style());
        assert_eq!(seq.len(), 3);
        assert!(seq.pages()[2].contains_text("third"));
    }
}
