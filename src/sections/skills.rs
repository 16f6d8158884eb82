use super::{SectionContext, SectionRenderer};
use crate::locale::Labels;
use crate::model::{Skill, non_empty};
use dossier_layout::{
    BadgesBlock, Block, ParagraphBlock, RatingBlock, RatingLayout, RatingScale, TextStyle,
};
use dossier_style::{FontWeight, TextAlign};
use itertools::Itertools;

/// How skills and their levels are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillDisplay {
    /// Name with a row of five dots.
    #[default]
    Dots,
    /// Name above a proportional bar.
    Bars,
    /// Filled name tags, no level.
    Badges,
    /// One "Category: a, b, c" line per category, no level.
    Inline,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SkillsSection;

impl SkillsSection {
    fn rating(skill: &Skill, scale: RatingScale, layout: RatingLayout, ctx: &SectionContext<'_>) -> Block {
        Block::Rating(RatingBlock {
            label: skill.name.trim().to_string(),
            caption: None,
            level: Some(RatingBlock::clamp_level(skill.level)),
            scale,
            layout,
            label_style: ctx.style.small(),
            caption_style: ctx.style.caption(),
            space_after: 2.0,
        })
    }

    /// Category lines in first-seen category order. Skills without a
    /// category are listed last, without a prefix.
    fn category_lines(skills: &[&Skill]) -> Vec<String> {
        let categories = skills.iter().map(|s| s.category.trim()).unique().collect::<Vec<_>>();
        let mut lines = Vec::new();
        for category in categories.iter().filter(|c| !c.is_empty()).chain(categories.iter().filter(|c| c.is_empty())) {
            let names = skills
                .iter()
                .filter(|s| s.category.trim() == *category)
                .map(|s| s.name.trim())
                .join(", ");
            lines.push(if category.is_empty() { names } else { format!("{category}: {names}") });
        }
        lines
    }
}

impl SectionRenderer for SkillsSection {
    type Item = Skill;

    fn title(&self, labels: &'static Labels) -> &'static str {
        labels.skills
    }

    fn entries(&self, items: &[Skill], ctx: &SectionContext<'_>) -> Vec<Block> {
        let skills: Vec<&Skill> = items.iter().filter(|s| non_empty(&s.name).is_some()).collect();
        if skills.is_empty() {
            return Vec::new();
        }
        let palette = &ctx.style.palette;
        let spacing = ctx.hints.space_between_entries;

        let mut blocks: Vec<Block> = match ctx.hints.skills {
            SkillDisplay::Dots => {
                let scale = RatingScale::Dots {
                    filled: palette.primary.clone(),
                    empty: palette.track.clone(),
                    diameter: (ctx.style.sizes.small * 0.6).max(4.0),
                };
                skills.iter().map(|s| Self::rating(s, scale.clone(), RatingLayout::Inline, ctx)).collect()
            }
            SkillDisplay::Bars => {
                let scale = RatingScale::Bar { fill: palette.primary.clone(), track: palette.track.clone(), height: 3.0 };
                skills.iter().map(|s| Self::rating(s, scale.clone(), RatingLayout::Stacked, ctx)).collect()
            }
            SkillDisplay::Badges => vec![Block::Badges(BadgesBlock {
                items: skills.iter().map(|s| s.name.trim().to_string()).collect(),
                style: ctx.style.small(),
                fill: palette.badge.clone(),
                padding: 3.0,
                gap: 4.0,
                space_after: 0.0,
            })],
            SkillDisplay::Inline => Self::category_lines(&skills)
                .into_iter()
                .map(|line| {
                    Block::Paragraph(ParagraphBlock {
                        text: line,
                        style: ctx.style.body(),
                        align: TextAlign::Left,
                        space_after: 2.0,
                    })
                })
                .collect(),
        };
        blocks.push(Block::Spacer(spacing));
        blocks
    }
}

/// A bold category label for grouped skill lists.
pub(crate) fn group_label(text: &str, ctx: &SectionContext<'_>) -> Block {
    let style: TextStyle = ctx.style.small().with_font(ctx.style.font(FontWeight::Bold));
    Block::Paragraph(ParagraphBlock { text: text.to_string(), style, align: TextAlign::Left, space_after: 2.0 })
}
