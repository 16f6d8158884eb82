//! The cover letter as a single DIN 5008 form B page.

use super::din;
use crate::locale::Locale;
use crate::model::{ApplicationRecord, CoverLetter, non_empty, non_empty_opt};
use crate::sections::join_present;
use crate::style::{MIN_FONT_SIZE, ResolvedStyle};
use chrono::NaiveDate;
use dossier_layout::{Page, Stroke, TextStyle, wrap_text};
use dossier_style::{FontWeight, TextAlign};
use dossier_types::{Color, Point, Size, mm};

const SIGNATURE_SPACE_MM: f32 = 15.0;
const MARK_STROKE: f32 = 0.3;

/// Inputs of the cover letter page.
#[derive(Debug, Clone)]
pub struct LetterInput<'a> {
    pub record: &'a ApplicationRecord,
    pub letter: &'a CoverLetter,
    pub style: &'a ResolvedStyle,
    pub locale: Locale,
    pub date: NaiveDate,
}

/// Writes lines downwards inside a fixed horizontal span, dropping any line
/// that would cross `bottom`.
struct LineWriter<'p> {
    page: &'p mut Page,
    x: f32,
    width: f32,
    y: f32,
    bottom: f32,
    dropped: usize,
}

impl<'p> LineWriter<'p> {
    fn new(page: &'p mut Page, x: f32, width: f32, y: f32, bottom: f32) -> Self {
        Self { page, x, width, y, bottom, dropped: 0 }
    }

    fn line(&mut self, text: &str, style: &TextStyle, align: TextAlign) {
        let leading = style.leading();
        if self.y + leading > self.bottom + 0.01 {
            self.dropped += 1;
            return;
        }
        let inset = (leading - style.font_size) / 2.0;
        self.page.text_aligned(self.x, self.y + inset, self.width, text, style, align);
        self.y += leading;
    }

    fn paragraph(&mut self, text: &str, style: &TextStyle) {
        for line in wrap_text(text, style, self.width) {
            self.line(&line, style, TextAlign::Left);
        }
    }

    fn skip(&mut self, height: f32) {
        self.y += height;
    }
}

struct LetterStyles {
    body: TextStyle,
    bold: TextStyle,
    sender: TextStyle,
    sender_name: TextStyle,
    reference: TextStyle,
}

impl LetterStyles {
    fn new(style: &ResolvedStyle) -> Self {
        let text = style.palette.text.clone();
        let body = TextStyle::new(style.font(FontWeight::Regular), style.sizes.body, text.clone())
            .with_line_height(din::LINE_HEIGHT);
        let bold = body.clone().with_font(style.font(FontWeight::Bold));
        let sender = body.clone().with_size(style.sizes.caption).with_line_height(1.3);
        let sender_name = bold.clone().with_size(style.sizes.heading + 1.0).with_color(style.palette.primary.clone());
        let reference = sender
            .clone()
            .with_size((style.sizes.caption - 2.0).max(din::REFERENCE_FONT_SIZE).max(MIN_FONT_SIZE))
            .with_line_height(1.0)
            .with_color(style.palette.muted.clone());
        Self { body, bold, sender, sender_name, reference }
    }
}

fn draw_marks(page: &mut Page) {
    let stroke = Stroke::new(Color::gray(150), MARK_STROKE);
    for y in din::FOLD_MARKS_MM {
        page.line(Point::new(mm(5.0), mm(y)), Point::new(mm(10.0), mm(y)), stroke.clone());
    }
    page.line(
        Point::new(mm(5.0), mm(din::PUNCH_MARK_MM)),
        Point::new(mm(12.0), mm(din::PUNCH_MARK_MM)),
        stroke,
    );
}

/// Enclosures: the CV, then every named certificate.
fn enclosures(input: &LetterInput<'_>) -> Vec<String> {
    let mut items = vec![input.locale.labels().curriculum_vitae.to_string()];
    items.extend(input.record.certificates.iter().filter_map(|c| non_empty(&c.name)).map(str::to_string));
    items
}

/// Lines dropped per letter region because they did not fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Overflow {
    sender: usize,
    address: usize,
    body: usize,
    closing: usize,
}

impl Overflow {
    fn log(&self) {
        if self.sender > 0 {
            log::warn!("Sender block has {} line(s) more than fit above the address field.", self.sender);
        }
        if self.address > 0 {
            log::warn!("Recipient address has {} line(s) more than the address field holds.", self.address);
        }
        if self.body > 0 {
            log::warn!("Cover letter body is too long for one page; {} line(s) dropped.", self.body);
        }
        if self.closing > 0 {
            log::warn!("Closing and enclosures run past the page; {} line(s) dropped.", self.closing);
        }
    }
}

/// Lays out the letter. Always exactly one page; lines that do not fit their
/// region are dropped with a warning.
pub fn compose_cover_letter(input: &LetterInput<'_>) -> Page {
    let (page, overflow) = layout_letter(input);
    overflow.log();
    page
}

fn layout_letter(input: &LetterInput<'_>) -> (Page, Overflow) {
    let styles = LetterStyles::new(input.style);
    let labels = input.locale.labels();
    let personal = &input.record.personal_data;
    let posting = input.record.job_posting.as_ref();

    let mut page = Page::new(Size::A4);
    let mut overflow = Overflow::default();
    draw_marks(&mut page);

    let left = mm(din::MARGIN_LEFT_MM);
    let width = din::content_width();
    let address = din::address_block();

    // Sender block, right-aligned above the address field.
    {
        let mut sender = LineWriter::new(&mut page, left, width, mm(din::MARGIN_TOP_MM), address.y - mm(2.0));
        let name = personal.full_name();
        if !name.is_empty() {
            sender.line(&name, &styles.sender_name, TextAlign::Right);
        }
        let postal = personal.address.lines().join(" \u{00b7} ");
        let reach = join_present([personal.phone.as_str(), personal.email.as_str()], " \u{00b7} ");
        for line in [postal, reach].into_iter().filter(|l| !l.is_empty()) {
            sender.line(&line, &styles.sender, TextAlign::Right);
        }
        overflow.sender = sender.dropped;
    }

    // Address field: sender reference line, then the recipient.
    {
        let name = personal.full_name();
        let locality = join_present([personal.address.zip_code.as_str(), personal.address.city.as_str()], " ");
        let reference = join_present([name.as_str(), personal.address.street.as_str(), locality.as_str()], " \u{00b7} ");
        let mut zone = LineWriter::new(
            &mut page,
            address.x,
            address.width,
            address.y + mm(1.0),
            address.y + mm(din::SENDER_REFERENCE_MM),
        );
        zone.line(&reference, &styles.reference, TextAlign::Left);
        overflow.address = zone.dropped;

        let mut recipient = LineWriter::new(
            &mut page,
            address.x,
            address.width,
            address.y + mm(din::SENDER_REFERENCE_MM) + mm(2.0),
            address.bottom(),
        );
        if let Some(posting) = posting {
            let mut lines: Vec<String> = [Some(posting.company.as_str()), posting.contact_person.as_deref()]
                .into_iter()
                .flatten()
                .filter_map(non_empty)
                .map(str::to_string)
                .collect();
            if let Some(addr) = &posting.address {
                lines.extend(addr.lines());
            }
            for line in lines {
                recipient.line(&line, &styles.body, TextAlign::Left);
            }
        }
        overflow.address += recipient.dropped;
    }

    let bottom = Size::A4.height - mm(din::MARGIN_BOTTOM_MM);
    let mut writer = LineWriter::new(&mut page, left, width, address.bottom() + mm(din::DATE_GAP_MM), bottom);

    let date = input.locale.long_date(input.date);
    let date_line = match non_empty(&personal.address.city) {
        Some(city) => format!("{city}, {date}"),
        None => date,
    };
    writer.line(&date_line, &styles.body, TextAlign::Right);
    writer.skip(styles.body.leading());

    let subject = input.locale.letter_subject(
        posting.and_then(|p| non_empty(&p.job_title)),
        posting.and_then(|p| non_empty_opt(&p.reference_number)),
    );
    for line in wrap_text(&subject, &styles.bold, width) {
        writer.line(&line, &styles.bold, TextAlign::Left);
    }
    writer.skip(styles.body.leading());

    let contact = posting.and_then(|p| non_empty_opt(&p.contact_person));
    writer.line(&input.locale.salutation(contact), &styles.body, TextAlign::Left);
    writer.skip(styles.body.leading() * 0.5);

    // The closing block is reserved first so the signature always fits.
    let enclosures = enclosures(input);
    let leading = styles.body.leading();
    let closing_height = leading * 2.0 + mm(SIGNATURE_SPACE_MM) + leading * (2.0 + enclosures.len() as f32);
    let body_bottom = (bottom - closing_height).max(writer.y);
    writer.bottom = body_bottom;

    let mut paragraphs = input.letter.paragraphs();
    let meta = input.record.cover_letter_meta.as_ref();
    if let Some(sentence) = meta.and_then(|m| {
        input.locale.availability_sentence(
            non_empty_opt(&m.salary_expectation),
            non_empty_opt(&m.earliest_start_date),
            non_empty_opt(&m.notice_period),
        )
    }) {
        paragraphs.push(sentence);
    }
    for paragraph in &paragraphs {
        writer.paragraph(paragraph, &styles.body);
        writer.skip(leading * 0.5);
    }
    overflow.body = writer.dropped;

    writer.bottom = bottom;
    writer.skip(leading * 0.5);
    writer.line(labels.regards, &styles.body, TextAlign::Left);
    writer.skip(mm(SIGNATURE_SPACE_MM));
    let name = personal.full_name();
    if !name.is_empty() {
        writer.line(&name, &styles.body, TextAlign::Left);
    }
    writer.skip(leading);
    writer.line(labels.enclosures, &styles.bold, TextAlign::Left);
    for item in &enclosures {
        writer.line(&format!("\u{2013} {item}"), &styles.body, TextAlign::Left);
    }
    overflow.closing = writer.dropped - overflow.body;
    (page, overflow)
}
