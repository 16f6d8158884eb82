use flate2::Compression;
use flate2::write::ZlibEncoder;
use crate::error::RenderError;
use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes a PDF file object by object.
///
/// Objects are buffered in id order and flushed by [`StreamingPdfWriter::finish`],
/// which also writes the cross-reference table and trailer. Ids are handed out
/// sequentially, so the same sequence of calls always yields the same bytes.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    offsets: BTreeMap<u32, u64>,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, resources: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%\u{e2}\u{e3}\u{cf}\u{d3}\n", version).as_bytes())?;

        let mut buffered_objects = BTreeMap::new();
        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);
        buffered_objects.insert(resources_id, resources.into());

        Ok(Self {
            writer,
            offsets: BTreeMap::new(),
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_object_at_id(&mut self, id: ObjectId, object: Object) {
        if id.0 > self.max_id {
            self.max_id = id.0;
        }
        self.buffered_objects.insert(id, object);
    }

    /// Buffers a Flate-compressed content stream.
    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let encoded = content.encode()?;
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&encoded)?;
        let stream = Stream::new(dictionary! { "Filter" => "FlateDecode" }, encoder.finish()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffer_object_at_id(self.pages_id, pages_dict.into());
        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffer_object_at_id(self.catalog_id, catalog_dict.into());

        for (id, object) in &self.buffered_objects {
            let offset = self.writer.stream_position()?;
            self.offsets.insert(id.0, offset);
            internal_writer::write_indirect_object(&mut self.writer, *id, object)?;
        }

        let xref_start = self.writer.stream_position()?;
        let size = self.max_id + 1;
        internal_writer::write_xref(&mut self.writer, &self.offsets, size)?;

        let trailer = dictionary! { "Size" => size as i64, "Root" => self.catalog_id };
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

mod internal_writer {
    use super::*;
    use lopdf::StringFormat;

    pub fn write_indirect_object<W: Write>(writer: &mut W, id: ObjectId, object: &Object) -> io::Result<()> {
        writeln!(writer, "{} {} obj", id.0, id.1)?;
        write_object(writer, object)?;
        writeln!(writer, "\nendobj")?;
        Ok(())
    }

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        if byte == b'(' || byte == b')' || byte == b'\\' {
                            writer.write_all(b"\\")?;
                        }
                        writer.write_all(&[byte])?;
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    write!(writer, "<{}>", s.iter().map(|b| format!("{:02X}", b)).collect::<String>())
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, obj)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted_keys: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted_keys {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// Writes a table with one subsection per run of consecutive ids.
    /// Entry 0 always heads the free list.
    pub fn write_xref<W: Write>(writer: &mut W, offsets: &BTreeMap<u32, u64>, size: u32) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 1")?;
        writeln!(writer, "0000000000 65535 f ")?;

        let mut run: Vec<(u32, u64)> = Vec::new();
        let flush = |w: &mut W, run: &mut Vec<(u32, u64)>| -> io::Result<()> {
            if let Some(&(start, _)) = run.first() {
                writeln!(w, "{} {}", start, run.len())?;
                for (_, offset) in run.iter() {
                    writeln!(w, "{:010} 00000 n ", offset)?;
                }
            }
            run.clear();
            Ok(())
        };

        for (&id, &offset) in offsets.range(1..size) {
            if run.last().is_some_and(|&(prev, _)| prev + 1 != id) {
                flush(writer, &mut run)?;
            }
            run.push((id, offset));
        }
        flush(writer, &mut run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_document_is_loadable() {
        let writer = StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", Dictionary::new()).unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.ends_with(b"%%EOF"));
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 0);
    }

    #[test]
    fn object_ids_are_sequential() {
        let mut writer = StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", Dictionary::new()).unwrap();
        assert_eq!(writer.new_object_id(), (4, 0));
        assert_eq!(writer.buffer_object(Object::Null), (5, 0));
    }
}
