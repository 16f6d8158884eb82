//! The CV template variants.
//!
//! A template is chosen once per render from [`TemplateKind`], a closed set
//! dispatched by exhaustive match. Each variant is a pure function from the
//! [`CvInput`] to a run of pages, free to order, omit and restyle sections.

mod banded;
mod dense;
mod plain;
mod sidebar;
mod stack_first;
mod understated;

pub use stack_first::{StackBucket, StackSection, classify_skill};

use crate::config::{HeaderStyle, PhotoPosition, TemplateId};
use crate::error::PipelineError;
use crate::locale::Locale;
use crate::model::ApplicationRecord;
use crate::sections::{
    CertificatesSection, EducationSection, ExperienceSection, LanguagesSection, ProjectsSection,
    SectionContext, SectionRenderer, SkillsSection,
};
use crate::style::ResolvedStyle;
use dossier_layout::{Block, Column, ColumnFlow, ImageShape, Page, PageSequence, PhotoSide, PhotoSlot};
use dossier_style::{Margins, TextAlign};
use dossier_types::{ResourceKey, Size, mm};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Plain,
    Banded,
    Sidebar,
    StackFirst,
    Understated,
    Dense,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::Plain,
        TemplateKind::Banded,
        TemplateKind::Sidebar,
        TemplateKind::StackFirst,
        TemplateKind::Understated,
        TemplateKind::Dense,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TemplateKind::Plain => "plain",
            TemplateKind::Banded => "banded",
            TemplateKind::Sidebar => "sidebar",
            TemplateKind::StackFirst => "stack-first",
            TemplateKind::Understated => "understated",
            TemplateKind::Dense => "dense",
        }
    }

    pub fn parse(id: &TemplateId) -> Result<Self, PipelineError> {
        id.0.parse()
    }

    /// Lays the CV out. Always yields at least one page.
    pub fn render(&self, input: &CvInput<'_>) -> Vec<Page> {
        log::debug!("Rendering CV with the '{}' template.", self.id());
        let mut pages = match self {
            TemplateKind::Plain => plain::render(input),
            TemplateKind::Banded => banded::render(input),
            TemplateKind::Sidebar => sidebar::render(input),
            TemplateKind::StackFirst => stack_first::render(input),
            TemplateKind::Understated => understated::render(input),
            TemplateKind::Dense => dense::render(input),
        };
        add_footers(&mut pages, input);
        pages.into_pages()
    }
}

impl FromStr for TemplateKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(TemplateKind::Plain),
            "banded" => Ok(TemplateKind::Banded),
            "sidebar" => Ok(TemplateKind::Sidebar),
            "stack-first" | "stack_first" | "stackfirst" => Ok(TemplateKind::StackFirst),
            "understated" => Ok(TemplateKind::Understated),
            "dense" => Ok(TemplateKind::Dense),
            _ => Err(PipelineError::UnknownTemplate(s.to_string())),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Everything a template reads during one render.
#[derive(Debug, Clone)]
pub struct CvInput<'a> {
    pub record: &'a ApplicationRecord,
    pub style: &'a ResolvedStyle,
    pub locale: Locale,
    pub header_style: HeaderStyle,
    /// Resource key of the photo, present only when it should be shown.
    pub photo: Option<ResourceKey>,
    pub photo_position: PhotoPosition,
}

impl CvInput<'_> {
    /// A photo slot for a header, placed per the configured position.
    pub fn photo_slot(&self, size: f32, shape: ImageShape) -> Option<PhotoSlot> {
        let side = match self.photo_position {
            PhotoPosition::TopLeft => PhotoSide::Left,
            PhotoPosition::TopRight | PhotoPosition::Sidebar => PhotoSide::Right,
        };
        self.photo.clone().map(|key| PhotoSlot { key, size, shape, side })
    }

    pub fn headline(&self) -> Option<String> {
        self.record.target_job_title().map(str::to_string)
    }
}

pub(crate) const PAGE: Size = Size::A4;

/// Content column inside the given margins.
pub(crate) fn body_column(margins: Margins) -> Column {
    Column::new(margins.left, PAGE.width - margins.left - margins.right, margins.top, PAGE.height - margins.bottom)
}

/// Lays blocks into one column of a fresh page sequence.
pub(crate) fn single_column(column: Column, blocks: &[Block]) -> PageSequence {
    let mut pages = PageSequence::new(PAGE);
    ColumnFlow::new(column).push_all(&mut pages, blocks);
    pages
}

/// Experience, education, skills, languages, certificates, projects.
pub(crate) fn standard_sections(record: &ApplicationRecord, ctx: &SectionContext<'_>) -> Vec<Block> {
    [
        ExperienceSection::default().render(&record.work_experience, ctx),
        EducationSection.render(&record.education, ctx),
        SkillsSection.render(&record.skills, ctx),
        LanguagesSection.render(&record.languages, ctx),
        CertificatesSection.render(&record.certificates, ctx),
        ProjectsSection.render(&record.projects, ctx),
    ]
    .concat()
}

/// Footer "name · page N / M" on every page of a multi-page CV.
fn add_footers(pages: &mut PageSequence, input: &CvInput<'_>) {
    let total = pages.len();
    if total < 2 {
        return;
    }
    let name = input.record.personal_data.full_name();
    let page_label = input.locale.labels().page;
    let style = input.style.caption();
    let x = mm(20.0);
    let width = PAGE.width - 2.0 * x;
    let y = PAGE.height - mm(12.0);
    for (i, page) in pages.iter_mut().enumerate() {
        let counter = format!("{page_label} {} / {total}", i + 1);
        let text = if name.is_empty() { counter } else { format!("{name} \u{00b7} {counter}") };
        page.text_aligned(x, y, width, &text, &style, TextAlign::Center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_parse_with_aliases() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.id().parse::<TemplateKind>().unwrap(), kind);
        }
        assert_eq!("stack_first".parse::<TemplateKind>().unwrap(), TemplateKind::StackFirst);
        assert_eq!(" Sidebar ".parse::<TemplateKind>().unwrap(), TemplateKind::Sidebar);
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = TemplateKind::parse(&TemplateId::from("fancy")).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownTemplate(id) if id == "fancy"));
    }
}
