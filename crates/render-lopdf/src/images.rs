//! Photo decoding into PDF image XObjects.

use crate::error::RenderError;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{ColorType, GenericImageView, ImageFormat};
use lopdf::{Stream, dictionary};
use std::io::Write;

/// An image ready to be written as an XObject.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub stream: Stream,
}

impl EncodedImage {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Turns raw photo bytes into an image XObject stream.
///
/// Baseline JPEGs in RGB or grayscale are embedded as-is with `DCTDecode`.
/// Everything else is decoded, flattened onto white and stored as
/// Flate-compressed 8-bit RGB.
pub fn encode_image(bytes: &[u8]) -> Result<EncodedImage, RenderError> {
    let format = image::guess_format(bytes)?;
    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
        return Err(RenderError::UnsupportedImage(format));
    }
    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();

    if format == ImageFormat::Jpeg {
        let color_space = match decoded.color() {
            ColorType::Rgb8 => Some("DeviceRGB"),
            ColorType::L8 => Some("DeviceGray"),
            _ => None,
        };
        if let Some(color_space) = color_space {
            let dict = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => color_space,
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            };
            return Ok(EncodedImage { width, height, stream: Stream::new(dict, bytes.to_vec()) });
        }
    }

    let rgba = decoded.to_rgba8();
    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        for channel in [r, g, b] {
            rgb.push(((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8);
        }
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&rgb)?;
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width as i64,
        "Height" => height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
        "Filter" => "FlateDecode",
    };
    Ok(EncodedImage { width, height, stream: Stream::new(dict, encoder.finish()?) })
}
