//! DIN 5008 (form B) business-letter geometry, in millimetres.
//!
//! These values position the recipient address behind the window of a DL
//! envelope and must not depend on any layout choice.

use dossier_types::Rect;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

pub const MARGIN_LEFT_MM: f32 = 25.0;
pub const MARGIN_RIGHT_MM: f32 = 20.0;
pub const MARGIN_TOP_MM: f32 = 20.0;
pub const MARGIN_BOTTOM_MM: f32 = 20.0;

pub const ADDRESS_X_MM: f32 = 25.0;
pub const ADDRESS_Y_MM: f32 = 45.0;
pub const ADDRESS_WIDTH_MM: f32 = 85.0;
pub const ADDRESS_HEIGHT_MM: f32 = 40.0;
/// Height of the sender reference zone at the top of the address block.
pub const SENDER_REFERENCE_MM: f32 = 5.0;

/// Vertical gap between the address block and the date line.
pub const DATE_GAP_MM: f32 = 8.0;

pub const LINE_HEIGHT: f32 = 1.4;
pub const BASE_FONT_SIZE: f32 = 11.0;
/// Smallest size for the sender reference line.
pub const REFERENCE_FONT_SIZE: f32 = 7.0;

/// Fold marks for a DL envelope, from the page top.
pub const FOLD_MARKS_MM: [f32; 2] = [105.0, 210.0];
pub const PUNCH_MARK_MM: f32 = 148.5;

/// The address block in points.
pub fn address_block() -> Rect {
    Rect::from_mm(ADDRESS_X_MM, ADDRESS_Y_MM, ADDRESS_WIDTH_MM, ADDRESS_HEIGHT_MM)
}

/// Content width between the left and right margins, in points.
pub fn content_width() -> f32 {
    dossier_types::mm(PAGE_WIDTH_MM - MARGIN_LEFT_MM - MARGIN_RIGHT_MM)
}
