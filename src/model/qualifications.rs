use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub category: String,
    /// Proficiency on a 1-5 scale. Values outside the range are clamped when rendered.
    pub level: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub name: String,
    /// A level tag such as `native`, `fluent` or a CEFR level (`B2`).
    #[serde(alias = "proficiency")]
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: Option<String>,
    #[serde(alias = "credentialUrl")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub technologies: Vec<String>,
    pub url: Option<String>,
}
