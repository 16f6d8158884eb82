//! Primary-coloured header band with inverted text and an accent bar down
//! the left page edge.

use super::{CvInput, PAGE, standard_sections};
use crate::sections::{HeaderOptions, HeadingTreatment, SectionContext, SectionHints, header_blocks};
use dossier_layout::{Column, ColumnFlow, ImageShape, PageSequence, PositionedElement, LayoutElement, RectElement};
use dossier_types::{Rect, mm};

const MARGIN_X: f32 = 20.0;
const BAND_PADDING: f32 = 10.0;
const ACCENT_WIDTH: f32 = 4.0;

pub(super) fn render(input: &CvInput<'_>) -> PageSequence {
    let style = input.style;
    let palette = &style.palette;
    let hints = SectionHints { heading: HeadingTreatment::Underline, ..Default::default() };
    let ctx = SectionContext::new(style, input.locale, &hints);

    let x = mm(MARGIN_X);
    let width = PAGE.width - 2.0 * x;
    let mut pages = PageSequence::new(PAGE);

    let options = HeaderOptions {
        header_style: input.header_style,
        photo: input.photo_slot(72.0, ImageShape::Circle),
        inverted: true,
        headline: input.headline(),
        space_after: 0.0,
        ..Default::default()
    };
    let header = header_blocks(&input.record.personal_data, &ctx, &options);
    let mut header_flow = ColumnFlow::new(Column::new(x, width, mm(BAND_PADDING), PAGE.height));
    header_flow.push_all(&mut pages, &header);
    let band_height = header_flow.cursor() + mm(BAND_PADDING);

    pages.page_mut(0).underlay([PositionedElement::new(
        Rect::new(0.0, 0.0, PAGE.width, band_height),
        LayoutElement::Rectangle(RectElement { fill: Some(palette.primary.clone()), stroke: None }),
    )]);

    let body = Column::new(x, width, band_height + mm(6.0), PAGE.height - mm(20.0)).with_continuation_top(mm(18.0));
    ColumnFlow::new(body).push_all(&mut pages, &standard_sections(input.record, &ctx));

    for page in pages.iter_mut() {
        page.fill_rect(Rect::new(0.0, 0.0, mm(ACCENT_WIDTH), PAGE.height), palette.secondary.clone());
    }
    pages
}
