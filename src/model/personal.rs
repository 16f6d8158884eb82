use super::non_empty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    pub street: String,
    #[serde(alias = "zip", alias = "postalCode")]
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

impl PostalAddress {
    /// The address as display lines: street, then "zip city", then country.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(street) = non_empty(&self.street) {
            lines.push(street.to_string());
        }
        let locality = [self.zip_code.trim(), self.city.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !locality.is_empty() {
            lines.push(locality);
        }
        if let Some(country) = non_empty(&self.country) {
            lines.push(country.to_string());
        }
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

/// Raw photo bytes (JPEG or PNG) owned by the caller's record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Photo {
    pub data: Vec<u8>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(flatten)]
    pub address: PostalAddress,
    pub photo: Option<Photo>,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub nationality: Option<String>,
    #[serde(alias = "linkedIn")]
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

impl PersonalData {
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Photo bytes, if any were supplied.
    pub fn photo_bytes(&self) -> Option<&[u8]> {
        self.photo.as_ref().map(|p| p.data.as_slice()).filter(|d| !d.is_empty())
    }

    /// Social profile links in display order.
    pub fn social_links(&self) -> Vec<&str> {
        [&self.linkedin, &self.github, &self.website]
            .into_iter()
            .filter_map(super::non_empty_opt)
            .collect()
    }
}
