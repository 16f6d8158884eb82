use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }

    /// Parse a font weight from a string (e.g., "bold", "400").
    /// Numeric weights of 600 and above map to bold.
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "regular" | "normal" => Ok(FontWeight::Regular),
            "bold" => Ok(FontWeight::Bold),
            _ => s
                .parse::<u16>()
                .map(Self::from_numeric)
                .map_err(|_| format!("Invalid font weight: '{}'", s)),
        }
    }

    fn from_numeric(n: u16) -> Self {
        if n >= 600 { FontWeight::Bold } else { FontWeight::Regular }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::from_numeric(n)),
        }
    }
}

/// The PDF standard (base-14) faces the engine draws with.
///
/// These need no embedding: every conforming reader ships them, and their
/// advance widths are fixed, which keeps layout deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
    Courier,
    CourierBold,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 6] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::TimesRoman,
        BuiltinFont::TimesBold,
        BuiltinFont::Courier,
        BuiltinFont::CourierBold,
    ];

    pub fn postscript_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::TimesRoman => "Times-Roman",
            BuiltinFont::TimesBold => "Times-Bold",
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
        }
    }

    /// Resource name used inside content streams (`/F1` .. `/F6`).
    pub fn resource_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
            BuiltinFont::TimesRoman => "F3",
            BuiltinFont::TimesBold => "F4",
            BuiltinFont::Courier => "F5",
            BuiltinFont::CourierBold => "F6",
        }
    }

    pub fn weight(&self) -> FontWeight {
        match self {
            BuiltinFont::HelveticaBold | BuiltinFont::TimesBold | BuiltinFont::CourierBold => {
                FontWeight::Bold
            }
            _ => FontWeight::Regular,
        }
    }
}

/// A regular/bold pair of concrete faces for one logical family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FacePair {
    pub regular: BuiltinFont,
    pub bold: BuiltinFont,
}

impl FacePair {
    pub const SANS: FacePair = FacePair {
        regular: BuiltinFont::Helvetica,
        bold: BuiltinFont::HelveticaBold,
    };
    pub const SERIF: FacePair = FacePair {
        regular: BuiltinFont::TimesRoman,
        bold: BuiltinFont::TimesBold,
    };
    pub const MONO: FacePair = FacePair {
        regular: BuiltinFont::Courier,
        bold: BuiltinFont::CourierBold,
    };

    pub fn face(&self, weight: FontWeight) -> BuiltinFont {
        match weight {
            FontWeight::Regular => self.regular,
            FontWeight::Bold => self.bold,
        }
    }
}

impl Default for FacePair {
    fn default() -> Self {
        FacePair::SANS
    }
}
