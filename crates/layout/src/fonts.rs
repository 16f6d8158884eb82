//! Advance-width metrics for the base-14 faces.
//!
//! Widths are in thousandths of an em, as published in the Adobe Font
//! Metrics files. Only the printable ASCII range is tabulated; Latin-1
//! letters borrow the width of their unaccented base letter and a handful of
//! WinAnsi punctuation marks carry their own width. Anything else falls back
//! to an average lowercase width, which is close enough for wrapping.

use dossier_style::BuiltinFont;

const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

const COURIER_ADVANCE: u16 = 600;

/// Unaccented base letter for the Latin-1 supplement letters (U+00C0..U+00FF).
const LATIN1_BASE: &[u8; 64] = b"AAAAAAACEEEEIIIIDNOOOOOxOUUUUYPBaaaaaaaceeeeiiiidnooooo/ouuuuypy";

fn table(font: BuiltinFont) -> Option<&'static [u16; 95]> {
    match font {
        BuiltinFont::Helvetica => Some(&HELVETICA),
        BuiltinFont::HelveticaBold => Some(&HELVETICA_BOLD),
        BuiltinFont::TimesRoman => Some(&TIMES_ROMAN),
        BuiltinFont::TimesBold => Some(&TIMES_BOLD),
        BuiltinFont::Courier | BuiltinFont::CourierBold => None,
    }
}

fn is_serif(font: BuiltinFont) -> bool {
    matches!(font, BuiltinFont::TimesRoman | BuiltinFont::TimesBold)
}

/// Advance width of `c` in thousandths of an em.
pub fn advance(font: BuiltinFont, c: char) -> u16 {
    let Some(widths) = table(font) else {
        return COURIER_ADVANCE;
    };
    let lookup = |b: u8| widths[(b - b' ') as usize];
    match c {
        ' '..='~' => lookup(c as u8),
        '\u{a0}' => lookup(b' '),
        '\u{c0}'..='\u{ff}' => lookup(LATIN1_BASE[(c as u32 - 0xc0) as usize]),
        '\u{2013}' | '\u{20ac}' => {
            if is_serif(font) { 500 } else { 556 }
        }
        '\u{2014}' | '\u{2026}' | '\u{2030}' => 1000,
        '\u{2022}' => 350,
        '\u{b7}' => {
            if is_serif(font) { 250 } else { 278 }
        }
        '\u{2018}' | '\u{2019}' | '\u{201a}' => {
            if is_serif(font) { 333 } else { 222 }
        }
        '\u{201c}' | '\u{201d}' | '\u{201e}' => {
            if is_serif(font) { 444 } else { 333 }
        }
        _ => lookup(b'n'),
    }
}
