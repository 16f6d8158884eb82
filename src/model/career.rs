use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub company: String,
    #[serde(alias = "position")]
    pub job_title: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    /// Marks the position as ongoing. Any end date is then ignored.
    pub is_current_job: bool,
    /// Free-form tasks and achievements, one per line.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: Option<String>,
    pub description: String,
}

impl Education {
    /// "Degree, Field", or whichever half is present.
    pub fn qualification(&self) -> String {
        match (self.degree.trim(), self.field_of_study.trim()) {
            ("", field) => field.to_string(),
            (degree, "") => degree.to_string(),
            (degree, field) => format!("{degree}, {field}"),
        }
    }
}
