//! Section renderers: reusable, self-hiding building blocks of a CV.
//!
//! Every renderer turns one slice of the application record into layout
//! [`Block`]s. A section with nothing to show emits no blocks at all, not
//! even its heading, so templates never guard sections themselves.

mod certificates;
mod education;
mod experience;
mod header;
mod languages;
mod projects;
mod skills;

pub use certificates::CertificatesSection;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use header::{HeaderOptions, contact_line, details_line, header_blocks};
pub use languages::{LanguageDisplay, LanguagesSection};
pub use projects::ProjectsSection;
pub use skills::{SkillDisplay, SkillsSection};
pub(crate) use skills::group_label;

use crate::locale::{Labels, Locale};
use crate::style::ResolvedStyle;
use dossier_layout::{Block, DatePlacement, HeadingBlock, HeadingDecoration, Stroke, TextStyle};

/// How section titles are set off from their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingTreatment {
    Plain,
    /// A primary-coloured rule across the column.
    #[default]
    Rule,
    /// A hairline divider in the muted colour.
    Divider,
    /// A short underline beneath the title text.
    Underline,
    /// A tinted band behind the title.
    Filled,
}

/// Presentation choices a template passes to every section renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHints {
    pub heading: HeadingTreatment,
    pub uppercase_headings: bool,
    /// Extra space between heading glyphs, in points.
    pub heading_tracking: f32,
    pub date_placement: DatePlacement,
    /// Multi-line descriptions render as bullet items rather than a paragraph.
    pub task_bullets: bool,
    pub skills: SkillDisplay,
    pub languages: LanguageDisplay,
    /// Project technologies render as badges rather than a text line.
    pub tech_badges: bool,
    pub space_before_section: f32,
    pub space_after_heading: f32,
    pub space_between_entries: f32,
}

impl Default for SectionHints {
    fn default() -> Self {
        Self {
            heading: HeadingTreatment::Rule,
            uppercase_headings: false,
            heading_tracking: 0.0,
            date_placement: DatePlacement::Right,
            task_bullets: true,
            skills: SkillDisplay::Dots,
            languages: LanguageDisplay::Text,
            tech_badges: false,
            space_before_section: 14.0,
            space_after_heading: 6.0,
            space_between_entries: 8.0,
        }
    }
}

/// Read-only inputs shared by every renderer of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub style: &'a ResolvedStyle,
    pub locale: Locale,
    pub hints: &'a SectionHints,
}

impl<'a> SectionContext<'a> {
    pub fn new(style: &'a ResolvedStyle, locale: Locale, hints: &'a SectionHints) -> Self {
        Self { style, locale, hints }
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    pub fn heading_style(&self) -> TextStyle {
        let style = self.style.heading();
        if self.hints.heading_tracking > 0.0 {
            style.with_letter_spacing(self.hints.heading_tracking)
        } else {
            style
        }
    }

    /// A section title block following the template's heading treatment.
    pub fn heading(&self, title: &str) -> Block {
        let palette = &self.style.palette;
        let text = if self.hints.uppercase_headings { title.to_uppercase() } else { title.to_string() };
        let decoration = match self.hints.heading {
            HeadingTreatment::Plain => HeadingDecoration::None,
            HeadingTreatment::Rule => HeadingDecoration::Rule(Stroke::new(palette.rule.clone(), 1.0)),
            HeadingTreatment::Divider => HeadingDecoration::Rule(Stroke::new(palette.muted.tint(0.5), 0.4)),
            HeadingTreatment::Underline => HeadingDecoration::Underline(Stroke::new(palette.primary.clone(), 1.5)),
            HeadingTreatment::Filled => HeadingDecoration::Background { fill: palette.surface.clone(), padding: 3.0 },
        };
        Block::Heading(HeadingBlock {
            text,
            style: self.heading_style(),
            decoration,
            space_before: self.hints.space_before_section,
            space_after: self.hints.space_after_heading,
        })
    }
}

/// A self-hiding CV section over one kind of record item.
pub trait SectionRenderer {
    type Item;

    /// The section title in the given language.
    fn title(&self, labels: &'static Labels) -> &'static str;

    /// One or more blocks per non-empty item, in input order.
    fn entries(&self, items: &[Self::Item], ctx: &SectionContext<'_>) -> Vec<Block>;

    /// The titled section, or nothing when no item has content.
    fn render(&self, items: &[Self::Item], ctx: &SectionContext<'_>) -> Vec<Block> {
        let entries = self.entries(items, ctx);
        if entries.is_empty() {
            return Vec::new();
        }
        let mut blocks = Vec::with_capacity(entries.len() + 1);
        blocks.push(ctx.heading(self.title(ctx.labels())));
        blocks.extend(entries);
        blocks
    }
}

/// Joins the non-blank parts with `separator`.
pub(crate) fn join_present<'s>(parts: impl IntoIterator<Item = &'s str>, separator: &str) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Splits a free-form description into a paragraph or bullet items,
/// following the hints.
pub(crate) fn description_parts(raw: &str, hints: &SectionHints) -> (Option<String>, Vec<String>) {
    let items = crate::model::list_items(raw);
    match items.len() {
        0 => (None, Vec::new()),
        1 => (items.into_iter().next(), Vec::new()),
        _ if hints.task_bullets => (None, items),
        _ => (Some(items.join("\n")), Vec::new()),
    }
}
