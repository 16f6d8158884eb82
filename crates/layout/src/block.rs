//! The block vocabulary that section renderers emit.
//!
//! A block knows nothing about pages. It lowers itself into [`Row`]s for a
//! given column width, and the column flow decides where each row lands.

use crate::elements::{
    CircleElement, ImageElement, ImageShape, LayoutElement, LineElement, PositionedElement,
    RectElement, Stroke, TextElement,
};
use crate::style::TextStyle;
use crate::text::{text_width, wrap_text};
use dossier_style::TextAlign;
use dossier_types::{Color, Rect, ResourceKey};

/// Upper bound of every proficiency scale.
pub const RATING_MAX: u8 = 5;

const BULLET: &str = "\u{2022}";
const DATE_GAP: f32 = 8.0;
const PHOTO_GAP: f32 = 14.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(HeadingBlock),
    Paragraph(ParagraphBlock),
    Entry(EntryBlock),
    Bullets(BulletsBlock),
    Rating(RatingBlock),
    Badges(BadgesBlock),
    Profile(ProfileBlock),
    Rule(RuleBlock),
    Spacer(f32),
}

/// One unbreakable horizontal slice of a block.
///
/// Element coordinates are relative to the row's top-left corner.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub height: f32,
    pub elements: Vec<PositionedElement>,
    /// Forbids a page break between this row and the next one.
    pub keep_with_next: bool,
    /// Whitespace that is dropped when it would open a page.
    pub discardable: bool,
}

impl Row {
    fn new(height: f32) -> Self {
        Self { height, ..Default::default() }
    }

    fn space(height: f32) -> Self {
        Self { height, discardable: true, ..Default::default() }
    }

    fn kept(mut self) -> Self {
        self.keep_with_next = true;
        self
    }

    fn push(&mut self, rect: Rect, element: LayoutElement) {
        self.elements.push(PositionedElement::new(rect, element));
    }

    /// Places a text fragment vertically centred in a line box of `leading` starting at `top`.
    fn text(&mut self, x: f32, top: f32, leading: f32, content: &str, style: &TextStyle) -> f32 {
        if content.trim().is_empty() {
            return 0.0;
        }
        let width = text_width(content, style);
        self.push(
            Rect::new(x, top + (leading - style.font_size) / 2.0, width, style.font_size),
            LayoutElement::Text(TextElement { content: content.to_string(), style: style.clone() }),
        );
        width
    }

    fn aligned_text(
        &mut self,
        x: f32,
        top: f32,
        width: f32,
        content: &str,
        style: &TextStyle,
        align: TextAlign,
    ) {
        let measured = text_width(content, style);
        let start = match align {
            TextAlign::Left => x,
            TextAlign::Center => x + (width - measured) / 2.0,
            TextAlign::Right => x + width - measured,
        };
        self.text(start, top, style.leading(), content, style);
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn line_rows(content: &str, style: &TextStyle, x: f32, width: f32, align: TextAlign) -> Vec<Row> {
    wrap_text(content, style, width)
        .into_iter()
        .map(|line| {
            let mut row = Row::new(style.leading());
            row.aligned_text(x, 0.0, width, &line, style, align);
            row
        })
        .collect()
}

fn bullet_rows(items: &[String], style: &TextStyle, glyph: &str, x: f32, width: f32) -> Vec<Row> {
    let indent = style.font_size;
    let mut rows = Vec::new();
    for item in items {
        let lines = wrap_text(item, style, width - indent);
        for (i, line) in lines.iter().enumerate() {
            let mut row = Row::new(style.leading());
            if i == 0 {
                row.text(x + indent * 0.2, 0.0, style.leading(), glyph, style);
            }
            row.text(x + indent, 0.0, style.leading(), line, style);
            rows.push(row);
        }
    }
    rows
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HeadingDecoration {
    #[default]
    None,
    /// A full-width rule under the heading text.
    Rule(Stroke),
    /// A rule exactly as wide as the heading text.
    Underline(Stroke),
    /// A filled band behind the heading.
    Background { fill: Color, padding: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingBlock {
    pub text: String,
    pub style: TextStyle,
    pub decoration: HeadingDecoration,
    pub space_before: f32,
    pub space_after: f32,
}

impl HeadingBlock {
    fn rows(&self, width: f32) -> Vec<Row> {
        let mut rows = Vec::new();
        if self.space_before > 0.0 {
            rows.push(Row::space(self.space_before).kept());
        }
        let leading = self.style.leading();

        match &self.decoration {
            HeadingDecoration::Background { fill, padding } => {
                let lines = wrap_text(&self.text, &self.style, width - 2.0 * padding);
                let height = lines.len() as f32 * leading + 2.0 * padding;
                let mut row = Row::new(height);
                row.push(
                    Rect::new(0.0, 0.0, width, height),
                    LayoutElement::Rectangle(RectElement { fill: Some(fill.clone()), stroke: None }),
                );
                for (i, line) in lines.iter().enumerate() {
                    row.text(*padding, padding + i as f32 * leading, leading, line, &self.style);
                }
                rows.push(row.kept());
            }
            HeadingDecoration::None => {
                rows.extend(line_rows(&self.text, &self.style, 0.0, width, TextAlign::Left));
            }
            HeadingDecoration::Rule(stroke) | HeadingDecoration::Underline(stroke) => {
                let lines = wrap_text(&self.text, &self.style, width);
                let last_width = lines.last().map(|l| text_width(l, &self.style)).unwrap_or(0.0);
                rows.extend(line_rows(&self.text, &self.style, 0.0, width, TextAlign::Left));
                let rule_width = match self.decoration {
                    HeadingDecoration::Underline(_) => last_width,
                    _ => width,
                };
                let mut rule = Row::new(2.0 + stroke.width);
                rule.push(
                    Rect::new(0.0, 1.0, rule_width, 0.0),
                    LayoutElement::Line(LineElement { stroke: stroke.clone() }),
                );
                rows.push(rule);
            }
        }

        for row in rows.iter_mut() {
            row.keep_with_next = true;
        }
        if self.space_after > 0.0 {
            rows.push(Row::new(self.space_after).kept());
        }
        rows
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphBlock {
    pub text: String,
    pub style: TextStyle,
    pub align: TextAlign,
    pub space_after: f32,
}

impl ParagraphBlock {
    fn rows(&self, width: f32) -> Vec<Row> {
        let mut rows = line_rows(&self.text, &self.style, 0.0, width, self.align);
        if self.space_after > 0.0 && !rows.is_empty() {
            rows.push(Row::space(self.space_after));
        }
        rows
    }
}

/// Where an entry shows its date range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DatePlacement {
    /// Right-aligned on the title line.
    #[default]
    Right,
    /// On its own line under the subtitle.
    Below,
    /// In a left gutter of the given width; the entry body is indented by it.
    Gutter(f32),
}

/// A dated record: a job, a degree, a certificate, a project.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBlock {
    pub title: String,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub bullets: Vec<String>,
    pub title_style: TextStyle,
    pub subtitle_style: TextStyle,
    pub date_style: TextStyle,
    pub body_style: TextStyle,
    pub date_placement: DatePlacement,
    pub space_after: f32,
}

impl EntryBlock {
    fn rows(&self, width: f32) -> Vec<Row> {
        let date = self.date.as_deref().filter(|d| !d.trim().is_empty());
        let (content_x, title_width) = match (self.date_placement, date) {
            (DatePlacement::Gutter(gutter), _) => (gutter, width - gutter),
            (DatePlacement::Right, Some(d)) => {
                (0.0, width - text_width(d, &self.date_style) - DATE_GAP)
            }
            _ => (0.0, width),
        };
        let content_width = width - content_x;

        let mut header = line_rows(&self.title, &self.title_style, content_x, title_width, TextAlign::Left);
        if header.is_empty() {
            header.push(Row::new(self.title_style.leading()));
        }

        let mut date_height = 0.0;
        if let Some(d) = date {
            match self.date_placement {
                DatePlacement::Right => {
                    let leading = header[0].height;
                    header[0].text(
                        width - text_width(d, &self.date_style),
                        0.0,
                        leading,
                        d,
                        &self.date_style,
                    );
                }
                DatePlacement::Gutter(gutter) => {
                    let leading = self.date_style.leading();
                    let top = (self.title_style.leading() - leading) / 2.0;
                    let lines = wrap_text(d, &self.date_style, gutter - DATE_GAP);
                    for (i, line) in lines.iter().enumerate() {
                        header[0].text(0.0, top + i as f32 * leading, leading, line, &self.date_style);
                    }
                    date_height = top + lines.len() as f32 * leading;
                }
                DatePlacement::Below => {}
            }
        }

        if let Some(subtitle) = self.subtitle.as_deref() {
            header.extend(line_rows(subtitle, &self.subtitle_style, content_x, content_width, TextAlign::Left));
        }
        if let (DatePlacement::Below, Some(d)) = (self.date_placement, date) {
            header.extend(line_rows(d, &self.date_style, content_x, content_width, TextAlign::Left));
        }
        for row in header.iter_mut() {
            row.keep_with_next = true;
        }

        let mut rows = header;
        if let Some(description) = self.description.as_deref() {
            rows.extend(line_rows(description, &self.body_style, content_x, content_width, TextAlign::Left));
        }
        rows.extend(bullet_rows(&self.bullets, &self.body_style, BULLET, content_x, content_width));

        let used: f32 = rows.iter().map(|r| r.height).sum();
        if date_height > used {
            rows.push(Row::new(date_height - used));
        }
        if let Some(last) = rows.last_mut() {
            last.keep_with_next = false;
        }
        if self.space_after > 0.0 {
            rows.push(Row::space(self.space_after));
        }
        rows
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletsBlock {
    pub items: Vec<String>,
    pub style: TextStyle,
    pub space_after: f32,
}

impl BulletsBlock {
    fn rows(&self, width: f32) -> Vec<Row> {
        let mut rows = bullet_rows(&self.items, &self.style, BULLET, 0.0, width);
        if self.space_after > 0.0 && !rows.is_empty() {
            rows.push(Row::space(self.space_after));
        }
        rows
    }
}

/// How a proficiency level is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingScale {
    /// A row of `RATING_MAX` dots, the first `level` of them filled.
    Dots { filled: Color, empty: Color, diameter: f32 },
    /// A track with a proportional fill.
    Bar { fill: Color, track: Color, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RatingLayout {
    /// Label on the left, indicator right-aligned on the same line.
    #[default]
    Inline,
    /// Label on one line, a full-width indicator below it.
    Stacked,
}

/// A labelled proficiency: a skill, or a language with an optional level.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBlock {
    pub label: String,
    pub caption: Option<String>,
    /// Always within `1..=RATING_MAX`; `None` renders the caption only.
    pub level: Option<u8>,
    pub scale: RatingScale,
    pub layout: RatingLayout,
    pub label_style: TextStyle,
    pub caption_style: TextStyle,
    pub space_after: f32,
}

impl RatingBlock {
    /// Clamps an arbitrary level onto the fixed `1..=RATING_MAX` scale.
    pub fn clamp_level(level: i32) -> u8 {
        level.clamp(1, RATING_MAX as i32) as u8
    }

    fn indicator_size(&self, available: f32) -> (f32, f32) {
        match &self.scale {
            RatingScale::Dots { diameter, .. } => {
                let n = RATING_MAX as f32;
                (n * diameter + (n - 1.0) * diameter * 0.5, *diameter)
            }
            RatingScale::Bar { height, .. } => match self.layout {
                RatingLayout::Inline => ((available * 0.4).min(90.0), *height),
                RatingLayout::Stacked => (available, *height),
            },
        }
    }

    fn draw_indicator(&self, row: &mut Row, x: f32, y: f32, width: f32, level: u8) {
        match &self.scale {
            RatingScale::Dots { filled, empty, diameter } => {
                for i in 0..RATING_MAX {
                    let color = if i < level { filled } else { empty };
                    row.push(
                        Rect::new(x + i as f32 * diameter * 1.5, y, *diameter, *diameter),
                        LayoutElement::Circle(CircleElement { fill: Some(color.clone()), stroke: None }),
                    );
                }
            }
            RatingScale::Bar { fill, track, height } => {
                row.push(
                    Rect::new(x, y, width, *height),
                    LayoutElement::Rectangle(RectElement { fill: Some(track.clone()), stroke: None }),
                );
                let ratio = level as f32 / RATING_MAX as f32;
                row.push(
                    Rect::new(x, y, width * ratio, *height),
                    LayoutElement::Rectangle(RectElement { fill: Some(fill.clone()), stroke: None }),
                );
            }
        }
    }

    fn rows(&self, width: f32) -> Vec<Row> {
        let leading = self.label_style.leading();
        let caption = self.caption.as_deref().filter(|c| !c.trim().is_empty());
        let mut rows = Vec::new();

        match (self.layout, self.level) {
            (RatingLayout::Inline, level) => {
                let (ind_w, ind_h) = self.indicator_size(width);
                let height = leading.max(ind_h);
                let mut row = Row::new(height);
                let label_top = (height - leading) / 2.0;
                let label_w = row.text(0.0, label_top, leading, &self.label, &self.label_style);
                match level {
                    Some(level) => {
                        self.draw_indicator(&mut row, width - ind_w, (height - ind_h) / 2.0, ind_w, level);
                        if let Some(c) = caption {
                            let cap_leading = self.caption_style.leading();
                            row.text(label_w + 4.0, (height - cap_leading) / 2.0, cap_leading, c, &self.caption_style);
                        }
                    }
                    None => {
                        if let Some(c) = caption {
                            let cap_w = text_width(c, &self.caption_style);
                            let cap_leading = self.caption_style.leading();
                            row.text(width - cap_w, (height - cap_leading) / 2.0, cap_leading, c, &self.caption_style);
                        }
                    }
                }
                rows.push(row);
            }
            (RatingLayout::Stacked, level) => {
                let mut label = Row::new(leading);
                let label_w = label.text(0.0, 0.0, leading, &self.label, &self.label_style);
                if let Some(c) = caption {
                    let cap_leading = self.caption_style.leading();
                    let cap_w = text_width(c, &self.caption_style);
                    let x = if level.is_some() { width - cap_w } else { label_w + 4.0 };
                    label.text(x, (leading - cap_leading) / 2.0, cap_leading, c, &self.caption_style);
                }
                if let Some(level) = level {
                    rows.push(label.kept());
                    let (ind_w, ind_h) = self.indicator_size(width);
                    let mut indicator = Row::new(ind_h + 2.0);
                    self.draw_indicator(&mut indicator, 0.0, 1.0, ind_w, level);
                    rows.push(indicator);
                } else {
                    rows.push(label);
                }
            }
        }

        if self.space_after > 0.0 {
            rows.push(Row::space(self.space_after));
        }
        rows
    }
}

/// A wrapped run of filled tags.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgesBlock {
    pub items: Vec<String>,
    pub style: TextStyle,
    pub fill: Color,
    pub padding: f32,
    pub gap: f32,
    pub space_after: f32,
}

impl BadgesBlock {
    fn rows(&self, width: f32) -> Vec<Row> {
        let badge_h = self.style.font_size + 2.0 * self.padding;
        let row_h = badge_h + self.gap;
        let mut rows = Vec::new();
        let mut row = Row::new(row_h);
        let mut x = 0.0f32;

        for item in self.items.iter().filter(|i| !i.trim().is_empty()) {
            let badge_w = (text_width(item, &self.style) + 2.0 * self.padding).min(width);
            if x > 0.0 && x + badge_w > width {
                rows.push(std::mem::replace(&mut row, Row::new(row_h)));
                x = 0.0;
            }
            row.push(
                Rect::new(x, 0.0, badge_w, badge_h),
                LayoutElement::Rectangle(RectElement { fill: Some(self.fill.clone()), stroke: None }),
            );
            row.text(x + self.padding, self.padding, self.style.font_size, item, &self.style);
            x += badge_w + self.gap;
        }
        if !row.is_empty() {
            rows.push(row);
        }
        if self.space_after > 0.0 && !rows.is_empty() {
            rows.push(Row::space(self.space_after));
        }
        rows
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoSide {
    Left,
    #[default]
    Right,
    /// Centred above the text lines.
    Above,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoSlot {
    pub key: ResourceKey,
    /// Edge length of the square photo box, in points.
    pub size: f32,
    pub shape: ImageShape,
    pub side: PhotoSide,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLine {
    pub text: String,
    pub style: TextStyle,
    pub space_before: f32,
}

impl ProfileLine {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self { text: text.into(), style, space_before: 0.0 }
    }

    pub fn with_space_before(mut self, space: f32) -> Self {
        self.space_before = space;
        self
    }
}

/// The applicant header: stacked name/contact lines with an optional photo.
/// Laid out as a single unbreakable row.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileBlock {
    pub lines: Vec<ProfileLine>,
    pub align: TextAlign,
    pub photo: Option<PhotoSlot>,
    pub space_after: f32,
}

impl ProfileBlock {
    fn rows(&self, width: f32) -> Vec<Row> {
        let mut row = Row::default();
        let (text_x, text_w, text_top, photo_rect) = match &self.photo {
            None => (0.0, width, 0.0, None),
            Some(photo) => match photo.side {
                PhotoSide::Left => (
                    photo.size + PHOTO_GAP,
                    width - photo.size - PHOTO_GAP,
                    0.0,
                    Some(Rect::new(0.0, 0.0, photo.size, photo.size)),
                ),
                PhotoSide::Right => (
                    0.0,
                    width - photo.size - PHOTO_GAP,
                    0.0,
                    Some(Rect::new(width - photo.size, 0.0, photo.size, photo.size)),
                ),
                PhotoSide::Above => (
                    0.0,
                    width,
                    photo.size + PHOTO_GAP,
                    Some(Rect::new((width - photo.size) / 2.0, 0.0, photo.size, photo.size)),
                ),
            },
        };

        if let (Some(photo), Some(rect)) = (&self.photo, photo_rect) {
            row.push(rect, LayoutElement::Image(ImageElement { key: photo.key.clone(), shape: photo.shape }));
        }

        let mut y = text_top;
        for line in &self.lines {
            let wrapped = wrap_text(&line.text, &line.style, text_w);
            if wrapped.is_empty() {
                continue;
            }
            y += line.space_before;
            for text in wrapped {
                row.aligned_text(text_x, y, text_w, &text, &line.style, self.align);
                y += line.style.leading();
            }
        }

        let photo_bottom = photo_rect.map(|r| r.bottom()).unwrap_or(0.0);
        row.height = y.max(photo_bottom);
        let mut rows = vec![row];
        if self.space_after > 0.0 {
            rows.push(Row::space(self.space_after));
        }
        rows
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleBlock {
    pub stroke: Stroke,
    pub space_before: f32,
    pub space_after: f32,
}

impl Block {
    /// Lowers the block into rows for a column of the given width.
    pub fn rows(&self, width: f32) -> Vec<Row> {
        match self {
            Block::Heading(b) => b.rows(width),
            Block::Paragraph(b) => b.rows(width),
            Block::Entry(b) => b.rows(width),
            Block::Bullets(b) => b.rows(width),
            Block::Rating(b) => b.rows(width),
            Block::Badges(b) => b.rows(width),
            Block::Profile(b) => b.rows(width),
            Block::Rule(b) => {
                let mut row = Row::new(b.space_before + b.stroke.width + b.space_after);
                row.push(
                    Rect::new(0.0, b.space_before, width, 0.0),
                    LayoutElement::Line(LineElement { stroke: b.stroke.clone() }),
                );
                vec![row]
            }
            Block::Spacer(height) => vec![Row::space(*height)],
        }
    }

    /// Total height of the block when laid out without page breaks.
    pub fn height(&self, width: f32) -> f32 {
        self.rows(width).iter().map(|r| r.height).sum()
    }

    /// Visible text in reading order, for inspection.
    pub fn texts(&self, width: f32) -> Vec<String> {
        self.rows(width)
            .into_iter()
            .flat_map(|r| r.elements)
            .filter_map(|el| match el.element {
                LayoutElement::Text(t) => Some(t.content),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_style::BuiltinFont;

    fn style() -> TextStyle {
        TextStyle::new(BuiltinFont::Helvetica, 10.0, Color::BLACK)
    }

    fn entry(placement: DatePlacement) -> EntryBlock {
        EntryBlock {
            title: "Developer".into(),
            subtitle: Some("Acme GmbH".into()),
            date: Some("01/2020 - present".into()),
            description: Some("Built things.".into()),
            bullets: vec!["Shipped it".into()],
            title_style: style().with_font(BuiltinFont::HelveticaBold),
            subtitle_style: style(),
            date_style: style().with_size(8.0),
            body_style: style(),
            date_placement: placement,
            space_after: 6.0,
        }
    }

    #[test]
    fn rating_levels_clamp_to_scale() {
        assert_eq!(RatingBlock::clamp_level(0), 1);
        assert_eq!(RatingBlock::clamp_level(-3), 1);
        assert_eq!(RatingBlock::clamp_level(9), RATING_MAX);
        assert_eq!(RatingBlock::clamp_level(3), 3);
    }

    #[test]
    fn dots_fill_up_to_level() {
        let block = RatingBlock {
            label: "Rust".into(),
            caption: None,
            level: Some(2),
            scale: RatingScale::Dots { filled: Color::BLACK, empty: Color::WHITE, diameter: 5.0 },
            layout: RatingLayout::Inline,
            label_style: style(),
            caption_style: style(),
            space_after: 0.0,
        };
        let rows = block.rows(200.0);
        let fills: Vec<_> = rows[0]
            .elements
            .iter()
            .filter_map(|e| match &e.element {
                LayoutElement::Circle(c) => c.fill.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), RATING_MAX as usize);
        assert_eq!(fills.iter().filter(|c| **c == Color::BLACK).count(), 2);
    }

    #[test]
    fn heading_rows_keep_with_next() {
        let heading = HeadingBlock {
            text: "Experience".into(),
            style: style(),
            decoration: HeadingDecoration::Rule(Stroke::new(Color::BLACK, 0.5)),
            space_before: 10.0,
            space_after: 4.0,
        };
        let rows = heading.rows(300.0);
        assert!(rows.iter().all(|r| r.keep_with_next));
    }

    #[test]
    fn entry_header_stays_with_body() {
        let rows = entry(DatePlacement::Right).rows(300.0);
        assert!(rows[0].keep_with_next);
        let last_content = rows.iter().rposition(|r| !r.discardable).unwrap();
        assert!(!rows[last_content].keep_with_next);
        assert!(rows.last().unwrap().discardable);
    }

    #[test]
    fn right_date_shares_the_title_line() {
        let rows = entry(DatePlacement::Right).rows(300.0);
        let texts: Vec<_> = rows[0]
            .elements
            .iter()
            .filter_map(|e| match &e.element {
                LayoutElement::Text(t) => Some((e.x, t.content.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[1].1, "01/2020 - present");
        assert!(texts[1].0 > texts[0].0);
    }

    #[test]
    fn gutter_indents_the_body() {
        let rows = entry(DatePlacement::Gutter(80.0)).rows(300.0);
        let title = rows[0]
            .elements
            .iter()
            .find(|e| matches!(&e.element, LayoutElement::Text(t) if t.content == "Developer"))
            .unwrap();
        assert!((title.x - 80.0).abs() < 1e-3);
    }

    #[test]
    fn block_texts_in_reading_order() {
        let texts = Block::Entry(entry(DatePlacement::Below)).texts(300.0);
        assert_eq!(texts[0], "Developer");
        assert_eq!(texts[1], "Acme GmbH");
        assert_eq!(texts[2], "01/2020 - present");
        assert!(texts.contains(&"Shipped it".to_string()));
    }

    #[test]
    fn badges_wrap_onto_new_rows() {
        let block = BadgesBlock {
            items: (0..12).map(|i| format!("Skill {i}")).collect(),
            style: style(),
            fill: Color::gray(220),
            padding: 2.0,
            gap: 3.0,
            space_after: 0.0,
        };
        assert!(block.rows(120.0).len() > 1);
    }

    #[test]
    fn profile_reserves_photo_height() {
        let block = ProfileBlock {
            lines: vec![ProfileLine::new("Jane Doe", style())],
            align: TextAlign::Left,
            photo: Some(PhotoSlot {
                key: ResourceKey::new("photo"),
                size: 80.0,
                shape: ImageShape::Circle,
                side: PhotoSide::Right,
            }),
            space_after: 0.0,
        };
        let rows = block.rows(400.0);
        assert!((rows[0].height - 80.0).abs() < 1e-3);
    }
}
