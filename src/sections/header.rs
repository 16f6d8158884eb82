//! The applicant header: name, contact details and photo.

use super::{SectionContext, join_present};
use crate::config::HeaderStyle;
use crate::locale::Locale;
use crate::model::{PersonalData, non_empty, non_empty_opt};
use dossier_layout::{Block, PhotoSlot, ProfileBlock, ProfileLine, PhotoSide};
use dossier_style::TextAlign;
use dossier_types::Color;

const SEPARATOR: &str = "  \u{00b7}  ";

/// Per-template header choices.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderOptions {
    pub header_style: HeaderStyle,
    pub photo: Option<PhotoSlot>,
    /// Set when the header sits on a primary-coloured band.
    pub inverted: bool,
    /// Headline under the name, e.g. the target job title.
    pub headline: Option<String>,
    /// Contact and detail lines; off when a sidebar shows them instead.
    pub contact: bool,
    pub space_after: f32,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            header_style: HeaderStyle::Standard,
            photo: None,
            inverted: false,
            headline: None,
            contact: true,
            space_after: 10.0,
        }
    }
}

/// Email, phone and postal address on one line.
pub fn contact_line(personal: &PersonalData) -> Option<String> {
    let address = personal.address.lines().join(", ");
    let line = join_present([personal.email.as_str(), personal.phone.as_str(), address.as_str()], SEPARATOR);
    non_empty(&line).map(str::to_string)
}

/// Birth, nationality and social links; the secondary header line.
pub fn details_line(personal: &PersonalData, locale: Locale) -> Option<String> {
    let labels = locale.labels();
    let birth = match (non_empty_opt(&personal.birth_date), non_empty_opt(&personal.birth_place)) {
        (Some(date), Some(place)) => format!("{} {}, {place}", labels.born, locale.format_date(date)),
        (Some(date), None) => format!("{} {}", labels.born, locale.format_date(date)),
        (None, Some(place)) => format!("{} {place}", labels.born),
        (None, None) => String::new(),
    };
    let nationality = non_empty_opt(&personal.nationality)
        .map(|n| format!("{}: {n}", labels.nationality))
        .unwrap_or_default();
    let mut parts = vec![birth.as_str(), nationality.as_str()];
    parts.extend(personal.social_links());
    let line = join_present(parts, SEPARATOR);
    non_empty(&line).map(str::to_string)
}

/// The header as a single profile block, or nothing when there is no
/// name, contact detail or photo to show.
pub fn header_blocks(personal: &PersonalData, ctx: &SectionContext<'_>, options: &HeaderOptions) -> Vec<Block> {
    let style = ctx.style;
    let minimal = options.header_style == HeaderStyle::Minimal;
    let colorize = |s: dossier_layout::TextStyle, color: &Color| {
        if options.inverted { style.inverted(s) } else { s.with_color(color.clone()) }
    };

    let mut lines = Vec::new();
    let name = personal.full_name();
    if !name.is_empty() {
        let mut name_style = style.name();
        if minimal {
            name_style = name_style.with_size(style.sizes.heading + 4.0);
        }
        lines.push(ProfileLine::new(name, colorize(name_style, &style.palette.primary)));
    }
    if let Some(headline) = options.headline.as_deref().and_then(non_empty) {
        lines.push(ProfileLine::new(headline, colorize(style.body(), &style.palette.secondary)).with_space_before(2.0));
    }
    if let Some(contact) = contact_line(personal).filter(|_| options.contact) {
        lines.push(ProfileLine::new(contact, colorize(style.small(), &style.palette.text)).with_space_before(4.0));
    }
    if !minimal && options.contact {
        if let Some(details) = details_line(personal, ctx.locale) {
            lines.push(ProfileLine::new(details, colorize(style.caption(), &style.palette.muted)).with_space_before(1.0));
        }
    }

    if lines.is_empty() && options.photo.is_none() {
        return Vec::new();
    }

    let centered = options.header_style == HeaderStyle::Centered;
    let photo = options.photo.clone().map(|mut slot| {
        if centered {
            slot.side = PhotoSide::Above;
        }
        slot
    });
    vec![Block::Profile(ProfileBlock {
        lines,
        align: if centered { TextAlign::Center } else { TextAlign::Left },
        photo,
        space_after: options.space_after,
    })]
}
