//! Dense, research-oriented CV: small type, tight rhythm, dates in a left
//! gutter and a research-interests summary taken from the first project.

use super::{CvInput, body_column, single_column};
use crate::model::{ApplicationRecord, non_empty};
use crate::sections::{
    CertificatesSection, EducationSection, ExperienceSection, HeaderOptions, HeadingTreatment,
    LanguagesSection, ProjectsSection, SectionContext, SectionHints, SectionRenderer, SkillDisplay,
    SkillsSection, header_blocks,
};
use dossier_layout::{Block, DatePlacement, ImageShape, PageSequence, ParagraphBlock};
use dossier_style::{Margins, TextAlign};
use dossier_types::mm;

/// The first project's description, if it has one.
pub(super) fn research_interests(record: &ApplicationRecord) -> Option<&str> {
    record.projects.first().and_then(|p| non_empty(&p.description))
}

pub(super) fn render(input: &CvInput<'_>) -> PageSequence {
    let style = input.style.condensed(-1.5, 1.25);
    let hints = SectionHints {
        heading: HeadingTreatment::Filled,
        date_placement: DatePlacement::Gutter(mm(26.0)),
        skills: SkillDisplay::Inline,
        space_before_section: 8.0,
        space_after_heading: 4.0,
        space_between_entries: 4.0,
        ..Default::default()
    };
    let ctx = SectionContext::new(&style, input.locale, &hints);
    let record = input.record;
    let labels = ctx.labels();

    let options = HeaderOptions {
        header_style: input.header_style,
        photo: input.photo_slot(56.0, ImageShape::Square),
        headline: input.headline(),
        space_after: 2.0,
        ..Default::default()
    };
    let mut blocks = header_blocks(&record.personal_data, &ctx, &options);

    if let Some(summary) = research_interests(record) {
        blocks.push(ctx.heading(labels.research_interests));
        blocks.push(Block::Paragraph(ParagraphBlock {
            text: summary.to_string(),
            style: style.body(),
            align: TextAlign::Left,
            space_after: 2.0,
        }));
    }
    blocks.extend(
        [
            ExperienceSection::titled(labels.career_history).render(&record.work_experience, &ctx),
            EducationSection.render(&record.education, &ctx),
            ProjectsSection.render(&record.projects, &ctx),
            SkillsSection.render(&record.skills, &ctx),
            LanguagesSection.render(&record.languages, &ctx),
            CertificatesSection.render(&record.certificates, &ctx),
        ]
        .concat(),
    );
    single_column(body_column(Margins::from_mm(14.0, 16.0, 18.0, 16.0)), &blocks)
}
