use super::{SectionContext, SectionRenderer, description_parts};
use crate::locale::Labels;
use crate::model::{Education, non_empty, non_empty_opt};
use dossier_layout::{Block, EntryBlock};

#[derive(Debug, Clone, Copy, Default)]
pub struct EducationSection;

impl SectionRenderer for EducationSection {
    type Item = Education;

    fn title(&self, labels: &'static Labels) -> &'static str {
        labels.education
    }

    fn entries(&self, items: &[Education], ctx: &SectionContext<'_>) -> Vec<Block> {
        let style = ctx.style;
        let labels = ctx.labels();
        items
            .iter()
            .filter_map(|item| {
                let qualification = item.qualification();
                let institution = non_empty(&item.institution).map(str::to_string);
                let (title, subtitle) = match (qualification.is_empty(), institution) {
                    (true, Some(inst)) => (inst, None),
                    (_, inst) => (qualification, inst),
                };
                let date = ctx.locale.date_range(&item.start_date, &item.end_date, false);
                let (mut description, bullets) = description_parts(&item.description, ctx.hints);
                if let Some(grade) = non_empty_opt(&item.grade) {
                    let grade_line = format!("{}: {grade}", labels.grade);
                    description = Some(match description {
                        Some(text) => format!("{grade_line}\n{text}"),
                        None => grade_line,
                    });
                }
                if title.is_empty() && date.is_none() && description.is_none() && bullets.is_empty() {
                    return None;
                }
                Some(Block::Entry(EntryBlock {
                    title,
                    subtitle,
                    date,
                    description,
                    bullets,
                    title_style: style.entry_title(),
                    subtitle_style: style.subtitle(),
                    date_style: style.caption(),
                    body_style: style.body(),
                    date_placement: ctx.hints.date_placement,
                    space_after: ctx.hints.space_between_entries,
                }))
            })
            .collect()
    }
}
