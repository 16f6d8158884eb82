//! Fixed wording and date display per output language.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

/// Every fixed string printed by the engine.
#[derive(Debug)]
pub struct Labels {
    pub experience: &'static str,
    pub career_history: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub tech_stack: &'static str,
    pub languages: &'static str,
    pub certificates: &'static str,
    pub projects: &'static str,
    pub research_interests: &'static str,
    pub contact: &'static str,
    pub present: &'static str,
    pub page: &'static str,
    pub born: &'static str,
    pub nationality: &'static str,
    pub grade: &'static str,
    pub valid_until: &'static str,
    pub credential: &'static str,
    pub technologies: &'static str,
    pub application: &'static str,
    pub application_as: &'static str,
    pub application_at: &'static str,
    pub attachments: &'static str,
    pub cover_letter: &'static str,
    pub curriculum_vitae: &'static str,
    pub reference: &'static str,
    pub salutation_generic: &'static str,
    pub salutation_named: &'static str,
    pub regards: &'static str,
    pub enclosures: &'static str,
    pub bucket_languages: &'static str,
    pub bucket_frontend: &'static str,
    pub bucket_backend: &'static str,
    pub bucket_infrastructure: &'static str,
    pub bucket_other: &'static str,
}

static EN: Labels = Labels {
    experience: "Experience",
    career_history: "Career History",
    education: "Education",
    skills: "Skills",
    tech_stack: "Tech Stack",
    languages: "Languages",
    certificates: "Certificates",
    projects: "Projects",
    research_interests: "Research Interests",
    contact: "Contact",
    present: "present",
    page: "page",
    born: "Born",
    nationality: "Nationality",
    grade: "Grade",
    valid_until: "valid until",
    credential: "Credential",
    technologies: "Technologies",
    application: "Application",
    application_as: "as",
    application_at: "at",
    attachments: "Attachments",
    cover_letter: "Cover letter",
    curriculum_vitae: "Curriculum vitae",
    reference: "Reference no.",
    salutation_generic: "Dear Sir or Madam,",
    salutation_named: "Dear",
    regards: "Kind regards",
    enclosures: "Enclosures",
    bucket_languages: "Languages & Runtimes",
    bucket_frontend: "Frontend",
    bucket_backend: "Backend",
    bucket_infrastructure: "Infrastructure",
    bucket_other: "Other",
};

static DE: Labels = Labels {
    experience: "Berufserfahrung",
    career_history: "Werdegang",
    education: "Ausbildung",
    skills: "Kenntnisse",
    tech_stack: "Tech-Stack",
    languages: "Sprachen",
    certificates: "Zertifikate",
    projects: "Projekte",
    research_interests: "Forschungsinteressen",
    contact: "Kontakt",
    present: "heute",
    page: "Seite",
    born: "Geboren",
    nationality: "Staatsangehörigkeit",
    grade: "Note",
    valid_until: "gültig bis",
    credential: "Nachweis",
    technologies: "Technologien",
    application: "Bewerbung",
    application_as: "als",
    application_at: "bei",
    attachments: "Anlagen",
    cover_letter: "Anschreiben",
    curriculum_vitae: "Lebenslauf",
    reference: "Kennziffer",
    salutation_generic: "Sehr geehrte Damen und Herren,",
    salutation_named: "Guten Tag",
    regards: "Mit freundlichen Grüßen",
    enclosures: "Anlagen",
    bucket_languages: "Sprachen & Laufzeitumgebungen",
    bucket_frontend: "Frontend",
    bucket_backend: "Backend",
    bucket_infrastructure: "Infrastruktur",
    bucket_other: "Sonstiges",
};

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October",
    "November", "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober",
    "November", "Dezember",
];

fn digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::De => &DE,
        }
    }

    /// Rearranges a normalised date for display. Anything that is not
    /// `YYYY-MM` or `YYYY-MM-DD` is returned trimmed but otherwise verbatim.
    pub fn format_date(&self, raw: &str) -> String {
        let raw = raw.trim();
        let parts: Vec<&str> = raw.split('-').collect();
        match parts.as_slice() {
            [y, m] if digits(y, 4) && digits(m, 2) => format!("{m}/{y}"),
            [y, m, d] if digits(y, 4) && digits(m, 2) && digits(d, 2) => match self {
                Locale::En => format!("{m}/{d}/{y}"),
                Locale::De => format!("{d}.{m}.{y}"),
            },
            _ => raw.to_string(),
        }
    }

    /// A display date range. A current entry always ends in the "present"
    /// token, whatever end date it carries.
    pub fn date_range(&self, start: &str, end: &str, current: bool) -> Option<String> {
        let start = Some(self.format_date(start)).filter(|s| !s.is_empty());
        let end = if current {
            Some(self.labels().present.to_string())
        } else {
            Some(self.format_date(end)).filter(|s| !s.is_empty())
        };
        match (start, end) {
            (Some(s), Some(e)) => Some(format!("{s} \u{2013} {e}")),
            (Some(s), None) => Some(s),
            (None, Some(e)) => Some(e),
            (None, None) => None,
        }
    }

    /// Long-form date for letters: "October 17, 2026" / "17. Oktober 2026".
    pub fn long_date(&self, date: NaiveDate) -> String {
        let month = date.month0() as usize;
        match self {
            Locale::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
            Locale::De => format!("{}. {} {}", date.day(), MONTHS_DE[month], date.year()),
        }
    }

    /// Display name and 1-5 scale position of a language level tag.
    /// Unknown tags are shown as entered and carry no scale position.
    pub fn language_level(&self, tag: &str) -> (String, Option<u8>) {
        let tag = tag.trim();
        let key = tag.to_ascii_lowercase();
        let known = match key.as_str() {
            "native" | "mother tongue" | "muttersprache" => Some(("Native", "Muttersprache", 5)),
            "fluent" | "fließend" => Some(("Fluent", "Fließend", 4)),
            "business" | "business fluent" | "verhandlungssicher" => Some(("Business fluent", "Verhandlungssicher", 4)),
            "advanced" | "fortgeschritten" => Some(("Advanced", "Fortgeschritten", 4)),
            "intermediate" | "gut" => Some(("Intermediate", "Gute Kenntnisse", 3)),
            "basic" | "elementary" | "grundkenntnisse" => Some(("Basic", "Grundkenntnisse", 1)),
            _ => None,
        };
        if let Some((en, de, level)) = known {
            let name = match self {
                Locale::En => en,
                Locale::De => de,
            };
            return (name.to_string(), Some(level));
        }
        let cefr = match key.as_str() {
            "a1" | "a2" => Some(1),
            "b1" => Some(2),
            "b2" => Some(3),
            "c1" => Some(4),
            "c2" => Some(5),
            _ => None,
        };
        match cefr {
            Some(level) => (tag.to_ascii_uppercase(), Some(level)),
            None => (tag.to_string(), None),
        }
    }

    /// Subject line of the cover letter.
    pub fn letter_subject(&self, job_title: Option<&str>, reference: Option<&str>) -> String {
        let labels = self.labels();
        let mut subject = match job_title {
            Some(job) => format!("{} {} {job}", labels.application, labels.application_as),
            None => labels.application.to_string(),
        };
        if let Some(reference) = reference {
            subject.push_str(&format!(", {} {reference}", labels.reference));
        }
        subject
    }

    pub fn salutation(&self, contact_person: Option<&str>) -> String {
        let labels = self.labels();
        match contact_person {
            Some(name) => format!("{} {name},", labels.salutation_named),
            None => labels.salutation_generic.to_string(),
        }
    }

    /// The closing sentence built from the applicant's availability and
    /// salary details. `None` when none of them is known.
    pub fn availability_sentence(
        &self,
        salary: Option<&str>,
        start_date: Option<&str>,
        notice_period: Option<&str>,
    ) -> Option<String> {
        let mut parts = Vec::new();
        match self {
            Locale::En => {
                if let Some(date) = start_date {
                    parts.push(format!("I am available from {}.", self.format_date(date)));
                }
                if let Some(period) = notice_period {
                    parts.push(format!("My notice period is {period}."));
                }
                if let Some(salary) = salary {
                    parts.push(format!("My salary expectation is {salary}."));
                }
            }
            Locale::De => {
                if let Some(date) = start_date {
                    parts.push(format!("Ich stehe Ihnen ab dem {} zur Verfügung.", self.format_date(date)));
                }
                if let Some(period) = notice_period {
                    parts.push(format!("Meine Kündigungsfrist beträgt {period}."));
                }
                if let Some(salary) = salary {
                    parts.push(format!("Meine Gehaltsvorstellung liegt bei {salary}."));
                }
            }
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_rearranged_not_parsed() {
        assert_eq!(Locale::En.format_date("2020-01"), "01/2020");
        assert_eq!(Locale::De.format_date("2020-01-31"), "31.01.2020");
        assert_eq!(Locale::En.format_date("2020-01-31"), "01/31/2020");
        assert_eq!(Locale::En.format_date(" Spring 2020 "), "Spring 2020");
    }

    #[test]
    fn current_entries_end_in_present() {
        assert_eq!(Locale::En.date_range("2020-01", "2023-05", true).as_deref(), Some("01/2020 \u{2013} present"));
        assert_eq!(Locale::De.date_range("2020-01", "", true).as_deref(), Some("01/2020 \u{2013} heute"));
        assert_eq!(Locale::En.date_range("", "2023-05", false).as_deref(), Some("05/2023"));
        assert_eq!(Locale::En.date_range("", "", false), None);
    }

    #[test]
    fn language_levels_map_onto_scale() {
        assert_eq!(Locale::De.language_level("native"), ("Muttersprache".to_string(), Some(5)));
        assert_eq!(Locale::En.language_level("b2"), ("B2".to_string(), Some(3)));
        assert_eq!(Locale::En.language_level("conversational"), ("conversational".to_string(), None));
    }

    #[test]
    fn long_dates_follow_locale() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(Locale::En.long_date(date), "March 5, 2026");
        assert_eq!(Locale::De.long_date(date), "5. März 2026");
    }

    #[test]
    fn subject_and_salutation() {
        assert_eq!(Locale::En.letter_subject(Some("Developer"), Some("R-42")), "Application as Developer, Reference no. R-42");
        assert_eq!(Locale::De.letter_subject(None, None), "Bewerbung");
        assert_eq!(Locale::En.salutation(None), "Dear Sir or Madam,");
        assert_eq!(Locale::En.salutation(Some("Ms. Smith")), "Dear Ms. Smith,");
    }

    #[test]
    fn availability_needs_at_least_one_detail() {
        assert_eq!(Locale::En.availability_sentence(None, None, None), None);
        let sentence = Locale::En.availability_sentence(Some("70k EUR"), Some("2026-01"), None).unwrap();
        assert_eq!(sentence, "I am available from 01/2026. My salary expectation is 70k EUR.");
    }
}
