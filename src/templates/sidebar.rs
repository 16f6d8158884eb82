//! Two columns: a full-height coloured sidebar with photo, contact, skill
//! bars and languages beside the main column.

use super::{CvInput, PAGE};
use crate::model::non_empty;
use crate::sections::{
    CertificatesSection, EducationSection, ExperienceSection, HeaderOptions, HeadingTreatment,
    LanguageDisplay, LanguagesSection, ProjectsSection, SectionContext, SectionHints, SectionRenderer,
    SkillDisplay, SkillsSection, header_blocks,
};
use dossier_layout::{
    Block, Column, ColumnFlow, ImageShape, LayoutElement, PageSequence, ParagraphBlock, PhotoSide,
    PhotoSlot, PositionedElement, ProfileBlock, RectElement,
};
use dossier_style::TextAlign;
use dossier_types::{Rect, mm};

const SIDEBAR_WIDTH: f32 = 68.0;
const SIDEBAR_PADDING: f32 = 8.0;
const GUTTER: f32 = 10.0;
const MARGIN: f32 = 16.0;

fn contact_blocks(input: &CvInput<'_>, ctx: &SectionContext<'_>) -> Vec<Block> {
    let personal = &input.record.personal_data;
    let mut lines: Vec<String> = [personal.email.as_str(), personal.phone.as_str()]
        .into_iter()
        .filter_map(non_empty)
        .map(str::to_string)
        .collect();
    lines.extend(personal.address.lines());
    lines.extend(personal.social_links().into_iter().map(str::to_string));
    if lines.is_empty() {
        return Vec::new();
    }
    let mut blocks = vec![ctx.heading(ctx.labels().contact)];
    blocks.extend(lines.into_iter().map(|line| {
        Block::Paragraph(ParagraphBlock { text: line, style: ctx.style.small(), align: TextAlign::Left, space_after: 1.0 })
    }));
    blocks
}

pub(super) fn render(input: &CvInput<'_>) -> PageSequence {
    let style = input.style;
    let side_style = style.on_primary();
    let side_hints = SectionHints {
        heading: HeadingTreatment::Divider,
        uppercase_headings: true,
        heading_tracking: 0.8,
        skills: SkillDisplay::Bars,
        languages: LanguageDisplay::Bars,
        space_before_section: 12.0,
        space_between_entries: 4.0,
        ..Default::default()
    };
    let side_ctx = SectionContext::new(&side_style, input.locale, &side_hints);
    let main_hints = SectionHints { heading: HeadingTreatment::Rule, ..Default::default() };
    let main_ctx = SectionContext::new(style, input.locale, &main_hints);

    let sidebar_width = mm(SIDEBAR_WIDTH);
    let mut pages = PageSequence::new(PAGE);

    let mut side_blocks = Vec::new();
    if let Some(key) = input.photo.clone() {
        let size = sidebar_width - 2.0 * mm(SIDEBAR_PADDING + 4.0);
        side_blocks.push(Block::Profile(ProfileBlock {
            lines: Vec::new(),
            align: TextAlign::Center,
            photo: Some(PhotoSlot { key, size, shape: ImageShape::Circle, side: PhotoSide::Above }),
            space_after: 0.0,
        }));
    }
    side_blocks.extend(contact_blocks(input, &side_ctx));
    side_blocks.extend(SkillsSection.render(&input.record.skills, &side_ctx));
    side_blocks.extend(LanguagesSection.render(&input.record.languages, &side_ctx));
    let side_column = Column::new(
        mm(SIDEBAR_PADDING),
        sidebar_width - 2.0 * mm(SIDEBAR_PADDING),
        mm(MARGIN),
        PAGE.height - mm(MARGIN),
    );
    ColumnFlow::new(side_column).push_all(&mut pages, &side_blocks);

    let main_x = sidebar_width + mm(GUTTER);
    let main_column = Column::new(main_x, PAGE.width - main_x - mm(MARGIN), mm(MARGIN), PAGE.height - mm(20.0));
    let options = HeaderOptions {
        header_style: input.header_style,
        headline: input.headline(),
        contact: false,
        ..Default::default()
    };
    let record = input.record;
    let main_blocks = [
        header_blocks(&record.personal_data, &main_ctx, &options),
        ExperienceSection::default().render(&record.work_experience, &main_ctx),
        EducationSection.render(&record.education, &main_ctx),
        CertificatesSection.render(&record.certificates, &main_ctx),
        ProjectsSection.render(&record.projects, &main_ctx),
    ]
    .concat();
    ColumnFlow::new(main_column).push_all(&mut pages, &main_blocks);

    let fill = style.palette.primary.clone();
    for page in pages.iter_mut() {
        page.underlay([PositionedElement::new(
            Rect::new(0.0, 0.0, sidebar_width, PAGE.height),
            LayoutElement::Rectangle(RectElement { fill: Some(fill.clone()), stroke: None }),
        )]);
    }
    pages
}
