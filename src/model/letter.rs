use super::PostalAddress;
use serde::{Deserialize, Serialize};

/// The cover letter text, or the parameters of the assisted-writing mode.
///
/// Assisted letters are never generated here; they render as a letter page
/// with an empty body. A letter without a `mode` (or with an unknown one) is
/// read as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase", from = "RawCoverLetter")]
pub enum CoverLetter {
    #[serde(rename_all = "camelCase")]
    Text { introduction: String, body: String, closing: String },
    #[serde(rename_all = "camelCase")]
    Assisted { tone: Option<String>, highlights: Vec<String> },
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
enum LetterMode {
    Text,
    Assisted,
    #[serde(other)]
    Unknown,
}

/// Wire form of [`CoverLetter`]: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawCoverLetter {
    mode: Option<LetterMode>,
    introduction: String,
    body: String,
    closing: String,
    tone: Option<String>,
    highlights: Vec<String>,
}

impl From<RawCoverLetter> for CoverLetter {
    fn from(raw: RawCoverLetter) -> Self {
        match raw.mode {
            Some(LetterMode::Assisted) => CoverLetter::Assisted { tone: raw.tone, highlights: raw.highlights },
            mode => {
                if matches!(mode, Some(LetterMode::Unknown)) {
                    log::warn!("Unknown cover letter mode; reading it as text.");
                }
                CoverLetter::Text { introduction: raw.introduction, body: raw.body, closing: raw.closing }
            }
        }
    }
}

impl CoverLetter {
    pub fn text(introduction: &str, body: &str, closing: &str) -> Self {
        CoverLetter::Text {
            introduction: introduction.to_string(),
            body: body.to_string(),
            closing: closing.to_string(),
        }
    }

    /// The whole letter text, parts separated by blank lines.
    pub fn full_text(&self) -> String {
        match self {
            CoverLetter::Text { introduction, body, closing } => [introduction, body, closing]
                .into_iter()
                .map(|part| part.trim())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n"),
            CoverLetter::Assisted { .. } => String::new(),
        }
    }

    /// Body paragraphs, split on blank lines.
    pub fn paragraphs(&self) -> Vec<String> {
        let text = self.full_text();
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line.trim_end());
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join("\n"));
        }
        paragraphs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterMeta {
    pub earliest_start_date: Option<String>,
    pub salary_expectation: Option<String>,
    pub notice_period: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    pub company: String,
    pub contact_person: Option<String>,
    #[serde(alias = "position")]
    pub job_title: String,
    pub reference_number: Option<String>,
    pub address: Option<PostalAddress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let letter = CoverLetter::text("Dear team,", "First.\nStill first.\n\n  \nSecond.", "");
        assert_eq!(letter.paragraphs(), vec!["Dear team,", "First.\nStill first.", "Second."]);
    }

    #[test]
    fn assisted_letter_has_no_text() {
        let letter: CoverLetter = serde_json::from_str(r#"{ "mode": "assisted", "tone": "formal" }"#).unwrap();
        assert!(letter.full_text().is_empty());
        assert!(letter.paragraphs().is_empty());
    }

    #[test]
    fn letter_without_mode_reads_as_text() {
        let letter: CoverLetter =
            serde_json::from_str(r#"{ "introduction": "Hi", "body": "Text" }"#).unwrap();
        assert_eq!(letter, CoverLetter::text("Hi", "Text", ""));

        let letter: CoverLetter = serde_json::from_str(r#"{ "mode": "ghostwriter", "body": "Text" }"#).unwrap();
        assert_eq!(letter.full_text(), "Text");
    }

    #[test]
    fn text_letter_deserializes() {
        let letter: CoverLetter = serde_json::from_str(r#"{ "mode": "text", "body": "Hello" }"#).unwrap();
        assert_eq!(letter.full_text(), "Hello");
    }
}
