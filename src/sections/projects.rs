use super::{SectionContext, SectionRenderer, description_parts};
use crate::locale::Labels;
use crate::model::{Project, non_empty, non_empty_opt};
use dossier_layout::{BadgesBlock, Block, EntryBlock};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectsSection;

impl ProjectsSection {
    pub fn technologies(project: &Project) -> Vec<String> {
        project
            .technologies
            .iter()
            .filter_map(|t| non_empty(t))
            .map(str::to_string)
            .collect()
    }
}

impl SectionRenderer for ProjectsSection {
    type Item = Project;

    fn title(&self, labels: &'static Labels) -> &'static str {
        labels.projects
    }

    fn entries(&self, items: &[Project], ctx: &SectionContext<'_>) -> Vec<Block> {
        let style = ctx.style;
        let spacing = ctx.hints.space_between_entries;
        let mut blocks = Vec::new();
        for project in items {
            let Some(name) = non_empty(&project.name) else { continue };
            let technologies = Self::technologies(project);
            let (mut description, bullets) = description_parts(&project.description, ctx.hints);
            let badges = ctx.hints.tech_badges && !technologies.is_empty();
            let mut bullets = bullets;
            if !badges && !technologies.is_empty() {
                let line = format!("{}: {}", ctx.labels().technologies, technologies.join(", "));
                if bullets.is_empty() {
                    description = Some(match description {
                        Some(text) => format!("{text}\n{line}"),
                        None => line,
                    });
                } else {
                    bullets.push(line);
                }
            }
            blocks.push(Block::Entry(EntryBlock {
                title: name.to_string(),
                subtitle: non_empty_opt(&project.url).map(str::to_string),
                date: ctx.locale.date_range(&project.start_date, &project.end_date, false),
                description,
                bullets,
                title_style: style.entry_title(),
                subtitle_style: style.subtitle(),
                date_style: style.caption(),
                body_style: style.body(),
                date_placement: ctx.hints.date_placement,
                space_after: if badges { 3.0 } else { spacing },
            }));
            if badges {
                blocks.push(Block::Badges(BadgesBlock {
                    items: technologies,
                    style: style.caption().with_color(style.palette.text.clone()),
                    fill: style.palette.badge.clone(),
                    padding: 2.5,
                    gap: 3.0,
                    space_after: spacing,
                }));
            }
        }
        blocks
    }
}
