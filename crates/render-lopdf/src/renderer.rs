use crate::error::RenderError;
use crate::images::encode_image;
use crate::painter::PageContext;
use crate::writer::StreamingPdfWriter;
use dossier_layout::{LayoutElement, Page};
use dossier_style::BuiltinFont;
use dossier_types::ResourceKey;
use lopdf::{Dictionary, Object, dictionary};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Cursor;

/// Binary resources referenced by the layout, borrowed from the caller.
pub type ResourceMap<'a> = BTreeMap<ResourceKey, &'a [u8]>;

/// The font resource dictionary shared by every page: one Type1 entry per base-14 face.
static FONT_DICT: Lazy<Dictionary> = Lazy::new(|| {
    let mut fonts = Dictionary::new();
    for font in BuiltinFont::ALL {
        fonts.set(
            font.resource_name(),
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            },
        );
    }
    fonts
});

/// Renders laid-out pages to a complete PDF file in memory.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    version: String,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self { version: "1.7".to_string() }
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Renders `pages` in order. Images whose bytes are missing or cannot be
    /// decoded are left out with a warning; everything else on the page is kept.
    pub fn render(&self, pages: &[Page], resources: &ResourceMap<'_>) -> Result<Vec<u8>, RenderError> {
        let used_keys: BTreeSet<&ResourceKey> = pages
            .iter()
            .flat_map(|p| p.elements.iter())
            .filter_map(|el| match &el.element {
                LayoutElement::Image(image) => Some(&image.key),
                _ => None,
            })
            .collect();

        let mut encoded = Vec::new();
        for key in used_keys {
            let Some(bytes) = resources.get(key) else {
                log::warn!("Image resource '{}' was not provided; omitting it", key);
                continue;
            };
            match encode_image(bytes) {
                Ok(image) => encoded.push((key.clone(), image)),
                Err(e) => log::warn!("Could not decode image '{}': {}; omitting it", key, e),
            }
        }

        let mut xobjects = Dictionary::new();
        let mut image_names = BTreeMap::new();
        let mut image_streams = Vec::new();
        for (i, (key, image)) in encoded.into_iter().enumerate() {
            let name = format!("Im{}", i + 1);
            image_names.insert(key.as_str().to_string(), (name.clone(), image.aspect_ratio()));
            image_streams.push((name, image.stream));
        }

        let mut writer_resources = dictionary! { "Font" => FONT_DICT.clone() };
        let mut writer = StreamingPdfWriter::new(Cursor::new(Vec::new()), &self.version, Dictionary::new())?;
        for (name, stream) in image_streams {
            let id = writer.buffer_object(Object::Stream(stream));
            xobjects.set(name, id);
        }
        if !xobjects.is_empty() {
            writer_resources.set("XObject", xobjects);
        }
        writer.buffer_object_at_id(writer.resources_id, writer_resources.into());

        let mut page_ids = Vec::with_capacity(pages.len());
        for page in pages {
            let mut ctx = PageContext::new(page.size.height, &image_names);
            for el in &page.elements {
                ctx.draw_element(el);
            }
            let content_id = writer.buffer_content_stream(ctx.finish())?;
            let page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => writer.pages_id,
                "MediaBox" => vec![0.0.into(), 0.0.into(), page.size.width.into(), page.size.height.into()],
                "Contents" => content_id,
                "Resources" => writer.resources_id,
            };
            page_ids.push(writer.buffer_object(page_dict.into()));
        }
        writer.set_page_ids(page_ids);

        log::debug!("Rendered {} page(s)", pages.len());
        Ok(writer.finish()?.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_layout::{ImageShape, TextStyle};
    use dossier_types::{Color, Rect, Size};
    use lopdf::Document;

    fn page_with_text(text: &str) -> Page {
        let mut page = Page::new(Size::A4);
        page.text(50.0, 50.0, text, &TextStyle::new(BuiltinFont::Helvetica, 12.0, Color::BLACK));
        page
    }

    #[test]
    fn renders_one_pdf_page_per_layout_page() {
        let pages = vec![page_with_text("One"), page_with_text("Two")];
        let bytes = LopdfRenderer::new().render(&pages, &ResourceMap::new()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        let text = doc.extract_text(&[2]).unwrap();
        assert!(text.contains("Two"));
    }

    #[test]
    fn zero_pages_is_a_valid_document() {
        let bytes = LopdfRenderer::new().render(&[], &ResourceMap::new()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().is_empty());
    }

    #[test]
    fn rendering_is_deterministic() {
        let pages = vec![page_with_text("Same")];
        let a = LopdfRenderer::new().render(&pages, &ResourceMap::new()).unwrap();
        let b = LopdfRenderer::new().render(&pages, &ResourceMap::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn undecodable_photo_is_skipped() {
        let mut page = page_with_text("With photo");
        page.image(Rect::new(10.0, 10.0, 40.0, 40.0), ResourceKey::new("photo"), ImageShape::Circle);
        let mut resources = ResourceMap::new();
        resources.insert(ResourceKey::new("photo"), b"not an image".as_slice());

        let bytes = LopdfRenderer::new().render(&[page], &resources).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        assert!(!doc.objects.values().any(|o| {
            o.as_stream().is_ok_and(|s| s.dict.get(b"Subtype").and_then(|v| v.as_name()).is_ok_and(|n| n == b"Image"))
        }));
    }
}
