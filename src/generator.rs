//! The document assembler: cover page, cover letter and CV, in that order.

use crate::compose::{CoverPageInput, LetterInput, compose_cover_letter, compose_cover_page};
use crate::config::{DocumentSelection, LayoutConfig};
use crate::error::PipelineError;
use crate::locale::Locale;
use crate::metadata::{self, PRODUCER};
use crate::model::{ApplicationRecord, non_empty};
use crate::style::ResolvedStyle;
use crate::templates::{CvInput, TemplateKind};
use chrono::NaiveDate;
use dossier_layout::Page;
use dossier_render_lopdf::{LopdfRenderer, ResourceMap};
use dossier_types::ResourceKey;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resource key under which the applicant photo is registered.
pub const PHOTO_KEY: &str = "photo";

/// One export request as the host serializes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderRequest {
    pub record: ApplicationRecord,
    pub layout: LayoutConfig,
    pub selection: DocumentSelection,
}

impl RenderRequest {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }
}

pub struct GeneratorBuilder {
    locale: Locale,
    letter_date: Option<NaiveDate>,
    producer: String,
    timestamp: bool,
    metadata: bool,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self { locale: Locale::default(), letter_date: None, producer: PRODUCER.to_string(), timestamp: true, metadata: true }
    }
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale used when the layout configuration does not name one.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Fixes the date printed on the cover letter. Defaults to today.
    pub fn with_letter_date(mut self, date: NaiveDate) -> Self {
        self.letter_date = Some(date);
        self
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    /// Whether to stamp the creation date into the document information.
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    /// Whether to run the metadata post-processor at all.
    pub fn with_metadata(mut self, enabled: bool) -> Self {
        self.metadata = enabled;
        self
    }

    pub fn build(self) -> DocumentGenerator {
        DocumentGenerator {
            locale: self.locale,
            letter_date: self.letter_date,
            producer: self.producer,
            timestamp: self.timestamp,
            metadata: self.metadata,
            renderer: LopdfRenderer::new(),
        }
    }
}

/// Turns an application record into a finished PDF.
///
/// The generator holds options only. Every call is an independent render, so
/// one instance may serve concurrent requests.
#[derive(Debug, Clone)]
pub struct DocumentGenerator {
    locale: Locale,
    letter_date: Option<NaiveDate>,
    producer: String,
    timestamp: bool,
    metadata: bool,
    renderer: LopdfRenderer,
}

impl Default for DocumentGenerator {
    fn default() -> Self {
        GeneratorBuilder::default().build()
    }
}

impl DocumentGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    fn photo_key(record: &ApplicationRecord, layout: &LayoutConfig) -> Option<ResourceKey> {
        (layout.show_photo && record.personal_data.photo_bytes().is_some()).then(|| ResourceKey::from(PHOTO_KEY))
    }

    /// Lays out every selected document without rendering bytes.
    ///
    /// The template identifier is checked before any layout work. A cover
    /// letter is composed only when it is selected and the record carries one.
    pub fn layout_document(
        &self,
        record: &ApplicationRecord,
        layout: &LayoutConfig,
        selection: &DocumentSelection,
    ) -> Result<Vec<Page>, PipelineError> {
        let template = TemplateKind::parse(&layout.template)?;
        let locale = layout.locale.unwrap_or(self.locale);
        let style = ResolvedStyle::resolve(layout);
        let photo = Self::photo_key(record, layout);
        let labels = locale.labels();
        let letter = record.cover_letter.as_ref().filter(|_| selection.cover_letter);
        if selection.cover_letter && letter.is_none() {
            log::debug!("Cover letter selected but the record has none; skipping it.");
        }

        let mut pages = Vec::new();
        if selection.cover_page {
            let mut attachments = Vec::new();
            if letter.is_some() {
                attachments.push(labels.cover_letter.to_string());
            }
            if selection.cv {
                attachments.push(labels.curriculum_vitae.to_string());
            }
            attachments.extend(record.certificates.iter().filter_map(|c| non_empty(&c.name)).map(str::to_string));
            let input = CoverPageInput { record, style: &style, locale, photo: photo.clone(), attachments };
            pages.push(compose_cover_page(&input));
            log::info!("Composed cover page.");
        }

        if let Some(letter) = letter {
            let date = self.letter_date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let input = LetterInput { record, letter, style: &style, locale, date };
            pages.push(compose_cover_letter(&input));
            log::info!("Composed cover letter.");
        }

        if selection.cv {
            let input = CvInput {
                record,
                style: &style,
                locale,
                header_style: layout.header_style,
                photo,
                photo_position: layout.photo_position,
            };
            let cv = template.render(&input);
            log::info!("Laid out CV with the '{}' template on {} page(s).", template, cv.len());
            pages.extend(cv);
        }
        Ok(pages)
    }

    /// Lays out, renders and post-processes the selected documents.
    pub fn generate(
        &self,
        record: &ApplicationRecord,
        layout: &LayoutConfig,
        selection: &DocumentSelection,
    ) -> Result<Vec<u8>, PipelineError> {
        let pages = self.layout_document(record, layout, selection)?;

        let mut resources = ResourceMap::new();
        if let (Some(key), Some(bytes)) = (Self::photo_key(record, layout), record.personal_data.photo_bytes()) {
            resources.insert(key, bytes);
        }
        let bytes = self.renderer.render(&pages, &resources)?;
        log::info!("Rendered {} page(s) into {} bytes.", pages.len(), bytes.len());

        if !self.metadata {
            return Ok(bytes);
        }
        let locale = layout.locale.unwrap_or(self.locale);
        let mut info = metadata::document_metadata(record, locale, &self.producer);
        if self.timestamp {
            info.creation_date = Some(chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string());
        }
        Ok(metadata::apply_or_keep(bytes, &info))
    }

    pub fn generate_request(&self, request: &RenderRequest) -> Result<Vec<u8>, PipelineError> {
        self.generate(&request.record, &request.layout, &request.selection)
    }

    pub fn generate_to_file(
        &self,
        record: &ApplicationRecord,
        layout: &LayoutConfig,
        selection: &DocumentSelection,
        path: impl AsRef<Path>,
    ) -> Result<(), PipelineError> {
        let bytes = self.generate(record, layout, selection)?;
        std::fs::write(path.as_ref(), bytes)?;
        log::info!("Wrote {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoverLetter, WorkExperience};

    fn record() -> ApplicationRecord {
        ApplicationRecord {
            work_experience: vec![WorkExperience {
                company: "Acme GmbH".into(),
                job_title: "Developer".into(),
                start_date: "2020-01".into(),
                is_current_job: true,
                ..Default::default()
            }],
            cover_letter: Some(CoverLetter::text("Intro", "Body", "Closing")),
            ..Default::default()
        }
    }

    fn generator() -> DocumentGenerator {
        DocumentGenerator::builder()
            .with_letter_date(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap())
            .with_timestamp(false)
            .build()
    }

    #[test]
    fn documents_follow_the_fixed_order() {
        let pages = generator().layout_document(&record(), &LayoutConfig::default(), &DocumentSelection::all()).unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages[0].contains_text("Application"));
        assert!(pages[1].contains_text("Intro"));
        assert!(pages[2].contains_text("Acme GmbH"));
    }

    #[test]
    fn letter_flag_alone_is_not_enough() {
        let mut record = record();
        record.cover_letter = None;
        let selection = DocumentSelection { cover_page: false, cover_letter: true, cv: false };
        let pages = generator().layout_document(&record, &LayoutConfig::default(), &selection).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn nothing_selected_yields_no_pages() {
        let pages = generator().layout_document(&record(), &LayoutConfig::default(), &DocumentSelection::none()).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn unknown_template_fails_before_layout() {
        let layout = LayoutConfig::default().with_template("glossy");
        let err = generator().layout_document(&record(), &layout, &DocumentSelection::all()).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownTemplate(id) if id == "glossy"));
    }

    #[test]
    fn photo_needs_flag_and_bytes() {
        let mut record = record();
        let layout = LayoutConfig::default();
        assert_eq!(DocumentGenerator::photo_key(&record, &layout), None);
        record.personal_data.photo = Some(crate::model::Photo { data: vec![1, 2, 3], mime_type: None });
        assert!(DocumentGenerator::photo_key(&record, &layout).is_some());
        let hidden = LayoutConfig { show_photo: false, ..LayoutConfig::default() };
        assert_eq!(DocumentGenerator::photo_key(&record, &hidden), None);
    }

    #[test]
    fn request_parses_from_json() {
        let request = RenderRequest::from_json(
            r#"{ "record": { "personalData": { "firstName": "Ada" } }, "layout": { "template": "dense" }, "selection": { "cv": true } }"#,
        )
        .unwrap();
        assert_eq!(request.record.personal_data.first_name, "Ada");
        assert_eq!(request.layout.template.0, "dense");
        assert!(request.selection.cv);
        assert!(!request.selection.cover_page);
    }

    #[test]
    fn request_with_untagged_letter_renders_the_letter() {
        let request = RenderRequest::from_json(
            r#"{ "record": { "coverLetter": { "introduction": "Hi", "body": "Text" } }, "selection": { "coverLetter": true, "cv": true } }"#,
        )
        .unwrap();
        assert_eq!(request.record.cover_letter, Some(CoverLetter::text("Hi", "Text", "")));
        let pages = generator().layout_document(&request.record, &request.layout, &request.selection).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains_text("Hi"));
    }
}
