//! Fully resolved text styling.

use dossier_style::BuiltinFont;
use dossier_types::Color;

/// A fully resolved text style with no optional values, ready for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: BuiltinFont,
    pub font_size: f32,
    pub color: Color,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    /// Extra space after every glyph, in points.
    pub letter_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: BuiltinFont::Helvetica,
            font_size: 11.0,
            color: Color::BLACK,
            line_height: 1.25,
            letter_spacing: 0.0,
        }
    }
}

impl TextStyle {
    pub fn new(font: BuiltinFont, font_size: f32, color: Color) -> Self {
        Self { font, font_size, color, ..Default::default() }
    }

    pub fn with_font(mut self, font: BuiltinFont) -> Self {
        self.font = font;
        self
    }

    pub fn with_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Distance between consecutive baselines, in points.
    pub fn leading(&self) -> f32 {
        self.font_size * self.line_height
    }
}
