//! Text measurement and greedy line breaking.

use crate::fonts::advance;
use crate::style::TextStyle;

/// Width of `text` set in `style`, in points.
pub fn text_width(text: &str, style: &TextStyle) -> f32 {
    let mut units = 0u32;
    let mut glyphs = 0usize;
    for c in text.chars() {
        units += advance(style.font, c) as u32;
        glyphs += 1;
    }
    units as f32 * style.font_size / 1000.0 + glyphs as f32 * style.letter_spacing
}

/// Breaks `text` into lines no wider than `max_width`.
///
/// Explicit newlines always start a new line and blank lines are kept as
/// empty strings. Runs of whitespace collapse to a single space. A word wider
/// than the whole line is split between characters.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    if text.trim().is_empty() {
        return lines;
    }
    let space = text_width(" ", style);

    for raw_line in text.trim_end().lines() {
        let mut current = String::new();
        let mut current_width = 0.0f32;

        for word in raw_line.split_whitespace() {
            let word_width = text_width(word, style);

            if current.is_empty() {
                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    current_width = push_split_word(word, style, max_width, &mut lines, &mut current);
                }
                continue;
            }

            if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    current_width = push_split_word(word, style, max_width, &mut lines, &mut current);
                }
            }
        }

        lines.push(current);
    }

    // Leading blank lines carry no content.
    let first_content = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    lines.drain(..first_content);
    lines
}

/// Splits an overlong word across lines. Full chunks are pushed to `lines`;
/// the trailing chunk is left in `current` and its width returned.
fn push_split_word(
    word: &str,
    style: &TextStyle,
    max_width: f32,
    lines: &mut Vec<String>,
    current: &mut String,
) -> f32 {
    let mut width = 0.0f32;
    for c in word.chars() {
        let w = text_width(c.encode_utf8(&mut [0u8; 4]), style);
        if width + w > max_width && !current.is_empty() {
            lines.push(std::mem::take(current));
            width = 0.0;
        }
        current.push(c);
        width += w;
    }
    width
}
