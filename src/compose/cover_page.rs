//! The application cover page.

use crate::locale::Locale;
use crate::model::{ApplicationRecord, non_empty};
use crate::sections::join_present;
use crate::style::ResolvedStyle;
use dossier_layout::{ImageShape, Page, Stroke, TextStyle, wrap_text};
use dossier_style::{FontWeight, TextAlign};
use dossier_types::{Rect, ResourceKey, Size, mm};

const MARGIN_X_MM: f32 = 25.0;
const TITLE_TOP_MM: f32 = 55.0;
const PHOTO_MM: f32 = 45.0;
const BOTTOM_MM: f32 = 20.0;

/// Inputs of the cover page.
#[derive(Debug, Clone)]
pub struct CoverPageInput<'a> {
    pub record: &'a ApplicationRecord,
    pub style: &'a ResolvedStyle,
    pub locale: Locale,
    /// Set only when the photo is enabled and present.
    pub photo: Option<ResourceKey>,
    /// Names of the documents that follow, for the attachments note.
    pub attachments: Vec<String>,
}

fn content_width() -> f32 {
    Size::A4.width - 2.0 * mm(MARGIN_X_MM)
}

fn centered_line(page: &mut Page, y: &mut f32, line: &str, style: &TextStyle) {
    let leading = style.leading();
    page.text_aligned(mm(MARGIN_X_MM), *y + (leading - style.font_size) / 2.0, content_width(), line, style, TextAlign::Center);
    *y += leading;
}

fn centered_lines(page: &mut Page, y: &mut f32, text: &str, style: &TextStyle) {
    for line in wrap_text(text, style, content_width()) {
        centered_line(page, y, &line, style);
    }
}

/// Attachment lines that fit between `top` and the bottom margin: one per
/// item when the list fits, otherwise the items run together.
fn attachment_lines(items: &[&str], body: &TextStyle, available: f32) -> Vec<String> {
    let width = content_width();
    let listed: Vec<String> = items.iter().flat_map(|item| wrap_text(item, body, width)).collect();
    let fit = (available / body.leading()).floor().max(0.0) as usize;
    if listed.len() <= fit {
        return listed;
    }
    let mut lines = wrap_text(&items.join("  \u{00b7}  "), body, width);
    if lines.len() > fit {
        log::warn!("Attachments note is too long for the cover page; {} line(s) dropped.", lines.len() - fit);
        lines.truncate(fit);
    }
    lines
}

/// Lays out the cover page: title, target position, photo, divider,
/// applicant name and address, and the attachments note. Always one page.
pub fn compose_cover_page(input: &CoverPageInput<'_>) -> Page {
    let style = input.style;
    let palette = &style.palette;
    let labels = input.locale.labels();
    let personal = &input.record.personal_data;
    let mut page = Page::new(Size::A4);

    page.fill_rect(Rect::new(0.0, 0.0, Size::A4.width, mm(6.0)), palette.primary.clone());

    let mut y = mm(TITLE_TOP_MM);
    let title = style.name().with_size(style.sizes.name * 1.3);
    centered_lines(&mut page, &mut y, labels.application, &title);

    let subtitle = style.body().with_size(style.sizes.heading + 3.0).with_color(palette.secondary.clone());
    if let Some(job) = input.record.target_job_title() {
        y += mm(2.0);
        centered_lines(&mut page, &mut y, &format!("{} {job}", labels.application_as), &subtitle);
    }
    if let Some(company) = input.record.target_company() {
        centered_lines(&mut page, &mut y, &format!("{} {company}", labels.application_at), &subtitle);
    }

    y += mm(12.0);
    if let Some(key) = input.photo.clone() {
        let size = mm(PHOTO_MM);
        page.image(Rect::new((Size::A4.width - size) / 2.0, y, size, size), key, ImageShape::Circle);
        y += size + mm(12.0);
    }

    let rule_width = mm(60.0);
    page.hline((Size::A4.width - rule_width) / 2.0, y, rule_width, Stroke::new(palette.rule.clone(), 1.0));
    y += mm(10.0);

    let name = personal.full_name();
    if !name.is_empty() {
        let name_style = style.entry_title().with_size(style.sizes.heading + 4.0);
        centered_lines(&mut page, &mut y, &name, &name_style);
        y += mm(2.0);
    }
    for line in personal.address.lines() {
        centered_lines(&mut page, &mut y, &line, &style.body());
    }
    let contact = join_present([personal.email.as_str(), personal.phone.as_str()], "  \u{00b7}  ");
    if !contact.is_empty() {
        y += mm(2.0);
        centered_lines(&mut page, &mut y, &contact, &style.small().with_color(palette.muted.clone()));
    }

    let attachments: Vec<&str> = input.attachments.iter().filter_map(|a| non_empty(a)).collect();
    if !attachments.is_empty() {
        let body = style.small();
        let heading = body.clone().with_font(style.font(FontWeight::Bold));
        let top = y + mm(10.0);
        let bottom = Size::A4.height - mm(BOTTOM_MM);
        let lines = attachment_lines(&attachments, &body, bottom - top - heading.leading());
        let block_height = heading.leading() + lines.len() as f32 * body.leading();
        let mut y = (bottom - mm(5.0) - block_height).max(top);
        centered_line(&mut page, &mut y, labels.attachments, &heading);
        for line in &lines {
            centered_line(&mut page, &mut y, line, &body);
        }
    }
    page
}
