//! Understated: generous whitespace, hairline dividers, tracked uppercase
//! labels and no filled areas.

use super::{CvInput, body_column, single_column, standard_sections};
use crate::sections::{
    HeaderOptions, HeadingTreatment, LanguageDisplay, SectionContext, SectionHints, SkillDisplay, header_blocks,
};
use dossier_layout::{Block, DatePlacement, ImageShape, PageSequence, RuleBlock, Stroke};
use dossier_style::Margins;

pub(super) fn render(input: &CvInput<'_>) -> PageSequence {
    let style = input.style;
    let hints = SectionHints {
        heading: HeadingTreatment::Divider,
        uppercase_headings: true,
        heading_tracking: 1.6,
        date_placement: DatePlacement::Below,
        skills: SkillDisplay::Inline,
        languages: LanguageDisplay::Text,
        space_before_section: 22.0,
        space_after_heading: 9.0,
        space_between_entries: 12.0,
        ..Default::default()
    };
    let ctx = SectionContext::new(style, input.locale, &hints);

    let options = HeaderOptions {
        header_style: input.header_style,
        photo: input.photo_slot(70.0, ImageShape::Square),
        headline: input.headline(),
        space_after: 12.0,
        ..Default::default()
    };
    let mut blocks = header_blocks(&input.record.personal_data, &ctx, &options);
    if !blocks.is_empty() {
        blocks.push(Block::Rule(RuleBlock {
            stroke: Stroke::new(style.palette.muted.tint(0.5), 0.4),
            space_before: 0.0,
            space_after: 0.0,
        }));
    }
    blocks.extend(standard_sections(input.record, &ctx));
    single_column(body_column(Margins::from_mm(28.0, 26.0, 24.0, 26.0)), &blocks)
}
