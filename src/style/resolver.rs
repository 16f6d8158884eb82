use crate::config::LayoutConfig;
use dossier_layout::TextStyle;
use dossier_style::{BuiltinFont, FacePair, FontWeight};
use dossier_types::Color;

/// Smallest size any derived text role may take.
pub const MIN_FONT_SIZE: f32 = 6.0;
pub const DEFAULT_FONT_SIZE: f32 = 11.0;

const DEFAULT_PRIMARY: Color = Color::rgb(0x1f, 0x3a, 0x5f);
const DEFAULT_SECONDARY: Color = Color::rgb(0x5b, 0x6b, 0x7c);
const BODY_TEXT: Color = Color::rgb(0x22, 0x22, 0x22);

/// Point sizes of every text role, derived from the base size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizes {
    pub name: f32,
    pub heading: f32,
    pub entry: f32,
    pub body: f32,
    pub small: f32,
    pub caption: f32,
}

impl Sizes {
    pub fn from_base(base: f32) -> Self {
        let floor = |size: f32| size.max(MIN_FONT_SIZE);
        Self {
            name: floor(base * 2.0),
            heading: floor(base + 1.0),
            entry: floor(base),
            body: floor(base),
            small: floor(base - 1.0),
            caption: floor(base - 2.0),
        }
    }
}

/// The two configured colours spread over every visual role.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub muted: Color,
    /// Text drawn on a primary-coloured fill.
    pub on_primary: Color,
    pub rule: Color,
    pub badge: Color,
    pub track: Color,
    /// Light wash of the primary colour, for large areas.
    pub surface: Color,
}

impl Palette {
    pub fn new(primary: Color, secondary: Color) -> Self {
        let on_primary = if primary.luminance() < 0.6 { Color::WHITE } else { BODY_TEXT };
        Self {
            text: BODY_TEXT,
            muted: secondary.clone(),
            on_primary,
            rule: primary.clone(),
            badge: primary.tint(0.85),
            track: secondary.tint(0.75),
            surface: primary.tint(0.9),
            primary,
            secondary,
        }
    }
}

/// Fonts, sizes and colours of one render pass, computed once from the
/// [`LayoutConfig`] and handed read-only to every renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub faces: FacePair,
    pub base_size: f32,
    pub sizes: Sizes,
    pub palette: Palette,
    /// Body line height factor.
    pub line_height: f32,
}

fn parse_color(raw: &str, fallback: Color, role: &str) -> Color {
    if raw.trim().is_empty() {
        return fallback;
    }
    match Color::from_hex(raw) {
        Ok(color) => color,
        Err(e) => {
            log::warn!("Unusable {role} colour '{raw}' ({e}); using {fallback}.");
            fallback
        }
    }
}

/// Maps a logical family name onto one of the built-in face pairs.
/// Unknown names fall back to the sans pair.
pub fn resolve_faces(family: &str) -> FacePair {
    let key = family.trim().to_ascii_lowercase();
    match key.as_str() {
        "" | "helvetica" | "arial" | "inter" | "roboto" | "open sans" | "lato" | "source sans pro"
        | "sans" | "sans-serif" => FacePair::SANS,
        "times" | "times new roman" | "georgia" | "garamond" | "merriweather" | "cambria" | "serif" => {
            FacePair::SERIF
        }
        "courier" | "courier new" | "fira code" | "jetbrains mono" | "mono" | "monospace" => FacePair::MONO,
        other => {
            log::debug!("Unknown font family '{other}', falling back to sans.");
            FacePair::SANS
        }
    }
}

impl ResolvedStyle {
    pub fn resolve(layout: &LayoutConfig) -> Self {
        let base_size = if layout.font_size.is_finite() && layout.font_size > 0.0 {
            layout.font_size
        } else {
            log::warn!("Invalid base font size {}; using {DEFAULT_FONT_SIZE}pt.", layout.font_size);
            DEFAULT_FONT_SIZE
        };
        let primary = parse_color(&layout.primary_color, DEFAULT_PRIMARY, "primary");
        let secondary = parse_color(&layout.secondary_color, DEFAULT_SECONDARY, "secondary");
        Self {
            faces: resolve_faces(&layout.font_family),
            base_size,
            sizes: Sizes::from_base(base_size),
            palette: Palette::new(primary, secondary),
            line_height: 1.4,
        }
    }

    /// A copy with every size shifted by `delta` points and a new line height.
    pub fn condensed(&self, delta: f32, line_height: f32) -> Self {
        Self {
            base_size: self.base_size + delta,
            sizes: Sizes::from_base(self.base_size + delta),
            line_height,
            ..self.clone()
        }
    }

    /// A copy for content set on a primary-coloured fill: every text role
    /// takes the contrasting colour and indicator tracks darken.
    pub fn on_primary(&self) -> Self {
        let palette = &self.palette;
        let ink = palette.on_primary.clone();
        Self {
            palette: Palette {
                primary: ink.clone(),
                secondary: ink.clone(),
                text: ink.clone(),
                muted: ink.clone(),
                on_primary: palette.primary.clone(),
                rule: ink.clone(),
                badge: palette.primary.tint(0.25),
                track: palette.primary.tint(0.45),
                surface: palette.primary.tint(0.2),
            },
            ..self.clone()
        }
    }

    pub fn font(&self, weight: FontWeight) -> BuiltinFont {
        self.faces.face(weight)
    }

    fn style(&self, weight: FontWeight, size: f32, color: &Color) -> TextStyle {
        TextStyle::new(self.font(weight), size, color.clone()).with_line_height(self.line_height)
    }

    pub fn name(&self) -> TextStyle {
        self.style(FontWeight::Bold, self.sizes.name, &self.palette.primary).with_line_height(1.15)
    }

    pub fn heading(&self) -> TextStyle {
        self.style(FontWeight::Bold, self.sizes.heading, &self.palette.primary).with_line_height(1.3)
    }

    pub fn entry_title(&self) -> TextStyle {
        self.style(FontWeight::Bold, self.sizes.entry, &self.palette.text)
    }

    pub fn subtitle(&self) -> TextStyle {
        self.style(FontWeight::Regular, self.sizes.small, &self.palette.muted)
    }

    pub fn body(&self) -> TextStyle {
        self.style(FontWeight::Regular, self.sizes.body, &self.palette.text)
    }

    pub fn small(&self) -> TextStyle {
        self.style(FontWeight::Regular, self.sizes.small, &self.palette.text)
    }

    pub fn caption(&self) -> TextStyle {
        self.style(FontWeight::Regular, self.sizes.caption, &self.palette.muted)
    }

    /// Text on a primary-coloured fill.
    pub fn inverted(&self, style: TextStyle) -> TextStyle {
        style.with_color(self.palette.on_primary.clone())
    }
}
