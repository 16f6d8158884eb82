use dossier_layout::{TextStyle, text_width};
use dossier_style::BuiltinFont;
use dossier_types::Color;
use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Text of a single page (1-based)
pub fn extract_page_text(doc: &LopdfDocument, page_num: u32) -> String {
    doc.extract_text(&[page_num]).unwrap_or_default()
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a lopdf::Dictionary> {
    match obj.as_reference() {
        Ok(id) => doc.get_dictionary(id).ok(),
        Err(_) => obj.as_dict().ok(),
    }
}

/// Base font names referenced from any page's resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for page_id in doc.get_pages().values() {
        let Ok(page) = doc.get_dictionary(*page_id) else { continue };
        let Some(resources) = page.get(b"Resources").ok().and_then(|r| resolve_dict(doc, r)) else { continue };
        let Some(font_dict) = resources.get(b"Font").ok().and_then(|f| resolve_dict(doc, f)) else { continue };
        for (_, font) in font_dict.iter() {
            if let Some(name) = resolve_dict(doc, font)
                .and_then(|d| d.get(b"BaseFont").ok())
                .and_then(|b| b.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }
    fonts.into_iter().collect()
}

/// Number of image XObjects in the file
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| match obj {
            Object::Stream(stream) => Some(&stream.dict),
            _ => None,
        })
        .filter(|dict| dict.get(b"Subtype").and_then(Object::as_name).map(|n| n == b"Image").unwrap_or(false))
        .count()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_dictionary(*page_id).ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

/// One `Tj` as the viewer draws it: the text state in force at that point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub font: BuiltinFont,
    pub font_size: f32,
    pub letter_spacing: f32,
}

impl TextRun {
    /// Right edge of the run, counting the spacing added after every glyph.
    pub fn end(&self) -> f32 {
        let style = TextStyle::new(self.font, self.font_size, Color::BLACK).with_letter_spacing(self.letter_spacing);
        self.x + text_width(&self.text, &style)
    }
}

fn from_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| match b {
            0x80 => '\u{20ac}',
            0x85 => '\u{2026}',
            0x95 => '\u{2022}',
            0x96 => '\u{2013}',
            0x97 => '\u{2014}',
            _ => *b as char,
        })
        .collect()
}

fn number(obj: &Object) -> f32 {
    match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r as f32,
        _ => 0.0,
    }
}

/// Decodes a page's content stream (1-based) into text runs.
///
/// Character spacing is graphics state, so it is tracked across text objects
/// exactly like a viewer does.
pub fn text_runs(doc: &LopdfDocument, page_num: u32) -> Vec<TextRun> {
    let Some(page_id) = doc.get_pages().get(&page_num).copied() else { return Vec::new() };
    let Ok(bytes) = doc.get_page_content(page_id) else { return Vec::new() };
    let Ok(content) = Content::decode(&bytes) else { return Vec::new() };

    let mut runs = Vec::new();
    let (mut font, mut font_size, mut spacing, mut x) = (BuiltinFont::Helvetica, 0.0, 0.0, 0.0);
    for op in &content.operations {
        match op.operator.as_str() {
            "Tf" => {
                if let Some(name) = op.operands.first().and_then(|o| o.as_name().ok()) {
                    font = BuiltinFont::ALL
                        .into_iter()
                        .find(|f| f.resource_name().as_bytes() == name)
                        .unwrap_or(BuiltinFont::Helvetica);
                }
                font_size = op.operands.get(1).map(number).unwrap_or(0.0);
            }
            "Tc" => spacing = op.operands.first().map(number).unwrap_or(0.0),
            "Td" => x = op.operands.first().map(number).unwrap_or(0.0),
            "Tj" => {
                if let Some(Object::String(text, _)) = op.operands.first() {
                    runs.push(TextRun {
                        text: from_win_ansi(text),
                        x,
                        font,
                        font_size,
                        letter_spacing: spacing,
                    });
                }
            }
            _ => {}
        }
    }
    runs
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!((w - $width).abs() < 1.0, "Page {} width expected ~{}, got {}", $page, $width, w);
        assert!((h - $height).abs() < 1.0, "Page {} height expected ~{}, got {}", $page, $height, h);
    };
}
