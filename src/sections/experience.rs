use super::{SectionContext, SectionRenderer, description_parts, join_present};
use crate::locale::Labels;
use crate::model::WorkExperience;
use dossier_layout::{Block, EntryBlock};

/// Work history, one entry per position in the order given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperienceSection {
    title: Option<&'static str>,
}

impl ExperienceSection {
    /// Renders under a different title, e.g. "Career History".
    pub fn titled(title: &'static str) -> Self {
        Self { title: Some(title) }
    }

    /// Job title and company joined by an em dash, or whichever half is known.
    pub fn headline(item: &WorkExperience) -> String {
        join_present([item.job_title.as_str(), item.company.as_str()], " \u{2014} ")
    }
}

impl SectionRenderer for ExperienceSection {
    type Item = WorkExperience;

    fn title(&self, labels: &'static Labels) -> &'static str {
        self.title.unwrap_or(labels.experience)
    }

    fn entries(&self, items: &[WorkExperience], ctx: &SectionContext<'_>) -> Vec<Block> {
        let style = ctx.style;
        items
            .iter()
            .filter_map(|item| {
                let title = Self::headline(item);
                let date = ctx.locale.date_range(&item.start_date, &item.end_date, item.is_current_job);
                let (description, bullets) = description_parts(&item.description, ctx.hints);
                if title.is_empty() && date.is_none() && description.is_none() && bullets.is_empty() {
                    return None;
                }
                Some(Block::Entry(EntryBlock {
                    title,
                    subtitle: crate::model::non_empty_opt(&item.location).map(str::to_string),
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
