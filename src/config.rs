//! Render-pass configuration: the layout choices and the document selection.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw template identifier as stored by the host. Parsed into
/// [`crate::templates::TemplateKind`] when a render starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub String);

impl Default for TemplateId {
    fn default() -> Self {
        TemplateId("plain".to_string())
    }
}

impl From<&str> for TemplateId {
    fn from(value: &str) -> Self {
        TemplateId(value.to_string())
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    #[default]
    Standard,
    Centered,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhotoPosition {
    TopLeft,
    #[default]
    TopRight,
    Sidebar,
}

/// Styling choices for one render pass. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub template: TemplateId,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    /// Base body size in points.
    pub font_size: f32,
    pub header_style: HeaderStyle,
    pub show_photo: bool,
    pub photo_position: PhotoPosition,
    /// Overrides the generator's locale for this render.
    pub locale: Option<Locale>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            template: TemplateId::default(),
            primary_color: "#1f3a5f".to_string(),
            secondary_color: "#5b6b7c".to_string(),
            font_family: "helvetica".to_string(),
            font_size: 11.0,
            header_style: HeaderStyle::default(),
            show_photo: true,
            photo_position: PhotoPosition::default(),
            locale: None,
        }
    }
}

impl LayoutConfig {
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = TemplateId(template.into());
        self
    }
}

/// Which top-level documents a render pass emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentSelection {
    #[serde(alias = "includeCoverPage")]
    pub cover_page: bool,
    #[serde(alias = "includeCoverLetter")]
    pub cover_letter: bool,
    #[serde(alias = "includeCv")]
    pub cv: bool,
}

impl DocumentSelection {
    pub fn all() -> Self {
        Self { cover_page: true, cover_letter: true, cv: true }
    }

    pub fn cv_only() -> Self {
        Self { cv: true, ..Default::default() }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_layout_json_keeps_defaults() {
        let layout: LayoutConfig =
            serde_json::from_str(r##"{ "template": "sidebar", "primaryColor": "#1a1a1a", "photoPosition": "top-left" }"##)
                .unwrap();
        assert_eq!(layout.template, TemplateId::from("sidebar"));
        assert_eq!(layout.primary_color, "#1a1a1a");
        assert_eq!(layout.photo_position, PhotoPosition::TopLeft);
        assert_eq!(layout.font_size, 11.0);
        assert_eq!(layout.header_style, HeaderStyle::Standard);
    }

    #[test]
    fn selection_accepts_include_aliases() {
        let selection: DocumentSelection = serde_json::from_str(r#"{ "includeCv": true, "coverPage": true }"#).unwrap();
        assert_eq!(selection, DocumentSelection { cover_page: true, cover_letter: false, cv: true });
    }
}
