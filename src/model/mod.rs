//! The application record: everything the applicant entered, as plain data.
//!
//! All types deserialize from the camelCase JSON the data-entry wizard keeps
//! in its store. Every collection and optional field defaults to empty, so a
//! sparse snapshot is always accepted. Dates are expected to arrive already
//! normalised (`YYYY-MM` or `YYYY-MM-DD`); they are displayed, never parsed.

mod career;
mod letter;
mod personal;
mod qualifications;

pub use career::{Education, WorkExperience};
pub use letter::{CoverLetter, CoverLetterMeta, JobPosting};
pub use personal::{PersonalData, Photo, PostalAddress};
pub use qualifications::{Certificate, Language, Project, Skill};

use serde::{Deserialize, Serialize};

/// The complete input of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRecord {
    #[serde(alias = "personal")]
    pub personal_data: PersonalData,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub certificates: Vec<Certificate>,
    pub projects: Vec<Project>,
    pub cover_letter: Option<CoverLetter>,
    pub cover_letter_meta: Option<CoverLetterMeta>,
    pub job_posting: Option<JobPosting>,
}

impl ApplicationRecord {
    /// The job title being applied for, if one is known.
    pub fn target_job_title(&self) -> Option<&str> {
        self.job_posting.as_ref().and_then(|p| non_empty(&p.job_title))
    }

    /// The company being applied to, if one is known.
    pub fn target_company(&self) -> Option<&str> {
        self.job_posting.as_ref().and_then(|p| non_empty(&p.company))
    }
}

/// Treats blank strings as absent.
pub fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Same as [`non_empty`] for optional fields.
pub fn non_empty_opt(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_empty)
}

/// Splits a free-form multi-line field into list items. Blank lines are
/// skipped and common bullet prefixes are stripped.
pub fn list_items(value: &str) -> Vec<String> {
    value
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', '\u{2022}']).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
