//! Single column, header closed by a rule, standard section order.

use super::{CvInput, body_column, single_column, standard_sections};
use crate::sections::{HeaderOptions, HeadingTreatment, SectionContext, SectionHints, header_blocks};
use dossier_layout::{Block, ImageShape, PageSequence, RuleBlock, Stroke};
use dossier_style::Margins;

pub(super) fn render(input: &CvInput<'_>) -> PageSequence {
    let hints = SectionHints { heading: HeadingTreatment::Underline, ..Default::default() };
    let ctx = SectionContext::new(input.style, input.locale, &hints);
    let column = body_column(Margins::from_mm(18.0, 20.0, 20.0, 20.0));

    let options = HeaderOptions {
        header_style: input.header_style,
        photo: input.photo_slot(76.0, ImageShape::Square),
        headline: input.headline(),
        space_after: 6.0,
        ..Default::default()
    };
    let mut blocks = header_blocks(&input.record.personal_data, &ctx, &options);
    if !blocks.is_empty() {
        blocks.push(Block::Rule(RuleBlock {
            stroke: Stroke::new(input.style.palette.rule.clone(), 1.5),
            space_before: 0.0,
            space_after: 4.0,
        }));
    }
    blocks.extend(standard_sections(input.record, &ctx));
    single_column(column, &blocks)
}
