//! Rewriting of the document information dictionary.

use crate::error::ComposerError;
use lopdf::{Dictionary, Document, Object, StringFormat};

/// Document-level metadata written into the trailer's `/Info` dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub keywords: Vec<String>,
    pub producer: String,
    /// A PDF date string (`D:YYYYMMDDHHmmSS`), written as both creation and
    /// modification date when present.
    pub creation_date: Option<String>,
}

/// Encodes a PDF text string: plain ASCII stays literal, anything else is
/// written as UTF-16BE with a byte-order mark.
fn text_string(value: &str) -> Object {
    if value.is_ascii() {
        Object::String(value.as_bytes().to_vec(), StringFormat::Literal)
    } else {
        let mut bytes = vec![0xfe, 0xff];
        for unit in value.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes, StringFormat::Hexadecimal)
    }
}

fn decode_text_string(bytes: &[u8]) -> String {
    match bytes {
        [0xfe, 0xff, rest @ ..] => {
            let units: Vec<u16> = rest.chunks_exact(2).map(|c| u16::from_be_bytes([c[0], c[1]])).collect();
            String::from_utf16_lossy(&units)
        }
        _ => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn info_dictionary(doc: &mut Document) -> Result<&mut Dictionary, ComposerError> {
    let existing = doc.trailer.get(b"Info").and_then(Object::as_reference).ok();
    let id = match existing {
        Some(id) if doc.get_dictionary(id).is_ok() => id,
        _ => {
            let id = doc.add_object(Dictionary::new());
            doc.trailer.set("Info", id);
            id
        }
    };
    Ok(doc.get_object_mut(id)?.as_dict_mut()?)
}

/// Rewrites the document information of a serialized PDF.
///
/// Only `/Info` is touched; pages and their content streams pass through
/// unchanged. Applying the same metadata twice yields the same information
/// dictionary.
pub fn apply_metadata(bytes: &[u8], metadata: &DocumentMetadata) -> Result<Vec<u8>, ComposerError> {
    let mut doc = Document::load_mem(bytes)?;
    let info = info_dictionary(&mut doc)?;

    info.set("Title", text_string(&metadata.title));
    info.set("Author", text_string(&metadata.author));
    info.set("Subject", text_string(&metadata.subject));
    info.set("Keywords", text_string(&metadata.keywords.join(", ")));
    info.set("Producer", text_string(&metadata.producer));
    info.set("Creator", text_string(&metadata.producer));
    if let Some(date) = &metadata.creation_date {
        info.set("CreationDate", Object::string_literal(date.as_str()));
        info.set("ModDate", Object::string_literal(date.as_str()));
    }

    let mut out = Vec::with_capacity(bytes.len());
    doc.save_to(&mut out)?;
    log::debug!("Applied document metadata (title: {:?})", metadata.title);
    Ok(out)
}

/// Reads back the document information of a serialized PDF.
pub fn read_metadata(bytes: &[u8]) -> Result<DocumentMetadata, ComposerError> {
    let doc = Document::load_mem(bytes)?;
    let id = doc
        .trailer
        .get(b"Info")
        .and_then(Object::as_reference)
        .map_err(|_| ComposerError::Other("document has no information dictionary".into()))?;
    let info = doc.get_dictionary(id)?;
    let field = |key: &[u8]| {
        info.get(key)
            .and_then(Object::as_str)
            .map(decode_text_string)
            .unwrap_or_default()
    };
    let keywords = field(b"Keywords");

    Ok(DocumentMetadata {
        title: field(b"Title"),
        author: field(b"Author"),
        subject: field(b"Subject"),
        keywords: keywords
            .split(", ")
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        producer: field(b"Producer"),
        creation_date: info.get(b"CreationDate").is_ok().then(|| field(b"CreationDate")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Stream, dictionary};

    /// Creates a simple one-page PDF with "Hello" on it.
    fn create_dummy_pdf() -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal("Hello")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        doc.objects.insert(
            pages_id,
            dictionary! { "Type" => "Pages", "Kids" => vec![page_id.into()], "Count" => 1 }.into(),
        );
        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn metadata() -> DocumentMetadata {
        DocumentMetadata {
            title: "Jürgen Müller \u{2013} Application as Developer".into(),
            author: "Jürgen Müller".into(),
            subject: "Application for the position of Developer at Acme GmbH".into(),
            keywords: vec!["Developer".into(), "Acme GmbH".into(), "Rust".into()],
            producer: "dossier".into(),
            creation_date: Some("D:20240501120000".into()),
        }
    }

    #[test]
    fn writes_and_reads_back_information() {
        let out = apply_metadata(&create_dummy_pdf(), &metadata()).unwrap();
        assert_eq!(read_metadata(&out).unwrap(), metadata());
    }

    #[test]
    fn page_content_is_untouched() {
        let out = apply_metadata(&create_dummy_pdf(), &metadata()).unwrap();
        let doc = Document::load_mem(&out).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        assert!(doc.extract_text(&[1]).unwrap().contains("Hello"));
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let once = apply_metadata(&create_dummy_pdf(), &metadata()).unwrap();
        let twice = apply_metadata(&once, &metadata()).unwrap();
        assert_eq!(read_metadata(&once).unwrap(), read_metadata(&twice).unwrap());
        let doc = Document::load_mem(&twice).unwrap();
        let info_dicts = doc
            .objects
            .values()
            .filter(|o| o.as_dict().is_ok_and(|d| d.has(b"Producer")))
            .count();
        assert_eq!(info_dicts, 1);
    }

    #[test]
    fn non_pdf_input_is_an_error() {
        assert!(apply_metadata(b"PK\x03\x04 not a pdf", &metadata()).is_err());
    }
}
