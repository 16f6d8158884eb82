#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use chrono::NaiveDate;
use dossier::{ApplicationRecord, DocumentGenerator, DocumentSelection, LayoutConfig, PipelineError};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A generator with a fixed letter date and no timestamp, so output is reproducible.
pub fn fixed_generator() -> DocumentGenerator {
    DocumentGenerator::builder()
        .with_letter_date(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap())
        .with_timestamp(false)
        .build()
}

pub fn generate(
    record: &ApplicationRecord,
    layout: &LayoutConfig,
    selection: &DocumentSelection,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = fixed_generator().generate(record, layout, selection)?;
    GeneratedPdf::from_bytes(bytes)
}

pub fn generate_raw(
    record: &ApplicationRecord,
    layout: &LayoutConfig,
    selection: &DocumentSelection,
) -> Result<Vec<u8>, PipelineError> {
    fixed_generator().generate(record, layout, selection)
}
