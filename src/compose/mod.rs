//! Full-page composers shared by every CV template: the cover page and the
//! DIN 5008 cover letter. Each produces exactly one page.

mod cover_letter;
mod cover_page;
pub mod din;

pub use cover_letter::{LetterInput, compose_cover_letter};
pub use cover_page::{CoverPageInput, compose_cover_page};
