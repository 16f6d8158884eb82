use dossier_layout::{
    CircleElement, ImageElement, ImageShape, LayoutElement, LineElement, PositionedElement,
    RectElement, Stroke, TextElement,
};
use dossier_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::BTreeMap;

/// Cubic Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Baseline offset from the top of a text element, as a fraction of its font size.
const ASCENT: f32 = 0.8;

/// Maps text onto WinAnsiEncoding (Windows-1252) for the base-14 fonts.
/// Characters outside the code page become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20ac}' => 0x80,
            '\u{201a}' => 0x82,
            '\u{201e}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{2030}' => 0x89,
            '\u{2039}' => 0x8b,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{203a}' => 0x9b,
            '\u{0}'..='\u{7f}' | '\u{a0}'..='\u{ff}' => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Accumulates the content stream of one page.
///
/// Layout coordinates have their origin at the top-left; PDF user space has it
/// at the bottom-left, so every y is flipped against the page height.
pub(crate) struct PageContext<'a> {
    content: Content,
    page_height: f32,
    images: &'a BTreeMap<String, (String, f32)>,
}

impl<'a> PageContext<'a> {
    /// `images` maps resource keys to their XObject name and aspect ratio.
    pub(crate) fn new(page_height: f32, images: &'a BTreeMap<String, (String, f32)>) -> Self {
        Self { content: Content { operations: Vec::new() }, page_height, images }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn flip(&self, y: f32) -> f32 {
        self.page_height - y
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => self.draw_rect(rect, el),
            LayoutElement::Line(line) => self.draw_line(line, el),
            LayoutElement::Circle(circle) => self.draw_circle(circle, el),
            LayoutElement::Image(image) => self.draw_image(image, el),
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        let [r, g, b] = color.components();
        self.op("rg", vec![r.into(), g.into(), b.into()]);
    }

    fn set_stroke(&mut self, stroke: &Stroke) {
        let [r, g, b] = stroke.color.components();
        self.op("RG", vec![r.into(), g.into(), b.into()]);
        self.op("w", vec![stroke.width.into()]);
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        let style = &text.style;
        let baseline = self.flip(el.y + style.font_size * ASCENT);
        self.op("BT", vec![]);
        self.op(
            "Tf",
            vec![Object::Name(style.font.resource_name().as_bytes().to_vec()), style.font_size.into()],
        );
        self.set_fill_color(&style.color);
        // Tc is part of the graphics state and outlives ET, so every run sets it.
        self.op("Tc", vec![style.letter_spacing.into()]);
        self.op("Td", vec![el.x.into(), baseline.into()]);
        self.op("Tj", vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)]);
        self.op("ET", vec![]);
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let y = self.flip(el.y + el.height);
        let operator = match (&rect.fill, &rect.stroke) {
            (Some(_), Some(_)) => "B",
            (Some(_), None) => "f",
            (None, Some(_)) => "S",
            (None, None) => return,
        };
        self.op("q", vec![]);
        if let Some(fill) = &rect.fill {
            self.set_fill_color(fill);
        }
        if let Some(stroke) = &rect.stroke {
            self.set_stroke(stroke);
        }
        self.op("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.op(operator, vec![]);
        self.op("Q", vec![]);
    }

    fn draw_line(&mut self, line: &LineElement, el: &PositionedElement) {
        self.op("q", vec![]);
        self.set_stroke(&line.stroke);
        self.op("m", vec![el.x.into(), self.flip(el.y).into()]);
        self.op("l", vec![(el.x + el.width).into(), self.flip(el.y + el.height).into()]);
        self.op("S", vec![]);
        self.op("Q", vec![]);
    }

    /// Appends an ellipse path inscribed in the element box.
    fn ellipse_path(&mut self, el: &PositionedElement) {
        let rx = el.width / 2.0;
        let ry = el.height / 2.0;
        let cx = el.x + rx;
        let cy = self.flip(el.y + ry);
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        self.op("m", vec![(cx + rx).into(), cy.into()]);
        let quarters = [
            [cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry],
            [cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy],
            [cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry],
            [cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy],
        ];
        for q in quarters {
            self.op("c", q.iter().map(|v| (*v).into()).collect());
        }
        self.op("h", vec![]);
    }

    fn draw_circle(&mut self, circle: &CircleElement, el: &PositionedElement) {
        let operator = match (&circle.fill, &circle.stroke) {
            (Some(_), Some(_)) => "B",
            (Some(_), None) => "f",
            (None, Some(_)) => "S",
            (None, None) => return,
        };
        self.op("q", vec![]);
        if let Some(fill) = &circle.fill {
            self.set_fill_color(fill);
        }
        if let Some(stroke) = &circle.stroke {
            self.set_stroke(stroke);
        }
        self.ellipse_path(el);
        self.op(operator, vec![]);
        self.op("Q", vec![]);
    }

    /// Scales the image to cover the element box, centred, clipped to the box
    /// (or to its inscribed circle).
    fn draw_image(&mut self, image: &ImageElement, el: &PositionedElement) {
        let Some((name, aspect)) = self.images.get(image.key.as_str()).cloned() else {
            log::debug!("Skipping image '{}' with no decoded resource", image.key);
            return;
        };

        let box_aspect = el.width / el.height.max(f32::EPSILON);
        let (w, h) = if aspect > box_aspect {
            (el.height * aspect, el.height)
        } else {
            (el.width, el.width / aspect.max(f32::EPSILON))
        };
        let x = el.x + (el.width - w) / 2.0;
        let top = el.y + (el.height - h) / 2.0;

        self.op("q", vec![]);
        match image.shape {
            ImageShape::Circle => self.ellipse_path(el),
            ImageShape::Square => {
                let y = self.flip(el.y + el.height);
                self.op("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
            }
        }
        self.op("W", vec![]);
        self.op("n", vec![]);
        let y = self.flip(top + h);
        self.op("cm", vec![w.into(), 0.into(), 0.into(), h.into(), x.into(), y.into()]);
        self.op("Do", vec![Object::Name(name.into_bytes())]);
        self.op("Q", vec![]);
    }
}
