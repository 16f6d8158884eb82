use super::{SectionContext, SectionRenderer};
use crate::locale::Labels;
use crate::model::{Language, non_empty};
use dossier_layout::{Block, RatingBlock, RatingLayout, RatingScale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageDisplay {
    /// Name with the level name beside it.
    #[default]
    Text,
    /// Name and level name above a bar; unknown levels show text only.
    Bars,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LanguagesSection;

impl SectionRenderer for LanguagesSection {
    type Item = Language;

    fn title(&self, labels: &'static Labels) -> &'static str {
        labels.languages
    }

    fn entries(&self, items: &[Language], ctx: &SectionContext<'_>) -> Vec<Block> {
        let palette = &ctx.style.palette;
        let mut blocks: Vec<Block> = items
            .iter()
            .filter_map(|lang| {
                let name = non_empty(&lang.name)?;
                let (caption, level) = ctx.locale.language_level(&lang.level);
                let (level, layout) = match ctx.hints.languages {
                    LanguageDisplay::Text => (None, RatingLayout::Inline),
                    LanguageDisplay::Bars => (level, RatingLayout::Stacked),
                };
                Some(Block::Rating(RatingBlock {
                    label: name.to_string(),
                    caption: Some(caption).filter(|c| !c.is_empty()),
                    level,
                    scale: RatingScale::Bar { fill: palette.primary.clone(), track: palette.track.clone(), height: 3.0 },
                    layout,
                    label_style: ctx.style.small(),
                    caption_style: ctx.style.caption(),
                    space_after: 2.0,
                }))
            })
            .collect();
        if !blocks.is_empty() {
            blocks.push(Block::Spacer(ctx.hints.space_between_entries));
        }
        blocks
    }
}
