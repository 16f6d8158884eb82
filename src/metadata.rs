//! Document information derived from the application record.

use crate::locale::Locale;
use crate::model::{ApplicationRecord, non_empty};
use dossier_pdf_composer::{DocumentMetadata, apply_metadata};
use itertools::Itertools;

pub const PRODUCER: &str = "dossier";

fn application_phrase(locale: Locale, job: Option<&str>, company: Option<&str>) -> String {
    let labels = locale.labels();
    let mut phrase = labels.application.to_string();
    if let Some(job) = job {
        phrase.push_str(&format!(" {} {job}", labels.application_as));
    }
    if let Some(company) = company {
        phrase.push_str(&format!(" {} {company}", labels.application_at));
    }
    phrase
}

/// Title, author, subject and keywords for the rendered document.
///
/// The title is "Name – Application as Job" when a job title is known and
/// the bare name otherwise. Keywords are the job title, the company and every
/// skill name, without duplicates.
pub fn document_metadata(record: &ApplicationRecord, locale: Locale, producer: &str) -> DocumentMetadata {
    let name = record.personal_data.full_name();
    let job = record.target_job_title();
    let company = record.target_company();

    let title = match (name.is_empty(), job) {
        (false, Some(_)) => format!("{name} \u{2013} {}", application_phrase(locale, job, None)),
        (false, None) => name.clone(),
        (true, _) => application_phrase(locale, job, None),
    };
    let keywords = job
        .into_iter()
        .chain(company)
        .chain(record.skills.iter().filter_map(|s| non_empty(&s.name)))
        .unique()
        .map(str::to_string)
        .collect();

    DocumentMetadata {
        title,
        author: name,
        subject: application_phrase(locale, job, company),
        keywords,
        producer: producer.to_string(),
        creation_date: None,
    }
}

/// Writes the metadata into rendered PDF bytes. A failure is logged and the
/// original bytes are returned untouched.
pub fn apply_or_keep(bytes: Vec<u8>, metadata: &DocumentMetadata) -> Vec<u8> {
    match apply_metadata(&bytes, metadata) {
        Ok(updated) => updated,
        Err(e) => {
            log::warn!("Could not write document metadata, keeping the document as rendered: {e}");
            bytes
        }
    }
}
