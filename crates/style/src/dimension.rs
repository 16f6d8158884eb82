//! Defines primitives for page size and spacing.
use dossier_types::{Size, mm};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn x(value: f32) -> Self {
        Self {
            top: 0f32,
            right: value,
            bottom: 0f32,
            left: value,
        }
    }

    pub fn y(value: f32) -> Self {
        Self {
            top: value,
            right: 0f32,
            bottom: value,
            left: 0f32,
        }
    }

    /// Builds margins from millimetre values, clockwise from the top.
    pub fn from_mm(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top: mm(top),
            right: mm(right),
            bottom: mm(bottom),
            left: mm(left),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    pub fn size(&self) -> Size {
        match self {
            PageSize::A4 => Size::A4,
            PageSize::Letter => Size::new(612.0, 792.0),
            PageSize::Custom { width, height } => Size::new(*width, *height),
        }
    }
}
