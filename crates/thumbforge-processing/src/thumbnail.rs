//! Decode, shrink, and re-encode one image buffer.

use crate::resize::{shrink_to_fit, BoundingBox};
use bytes::Bytes;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use thiserror::Error;

/// Transformation errors. Mislabeled or corrupt inputs surface as `Decode`;
/// they are reportable failures, never panics.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("image encode failed: {0}")]
    Encode(String),
}

/// Map a content type to the output encoding. Unrecognized `image/*`
/// subtypes fall back to JPEG; decoding always sniffs the actual bytes, so
/// the content type only ever picks the output format.
pub fn detect_format(content_type: &str) -> ImageFormat {
    match content_type {
        "image/jpeg" | "image/jpg" => ImageFormat::Jpeg,
        "image/png" => ImageFormat::Png,
        "image/gif" => ImageFormat::Gif,
        "image/webp" => ImageFormat::WebP,
        _ => ImageFormat::Jpeg,
    }
}

/// Produce thumbnail bytes from a source buffer: decode, shrink to fit
/// `bbox` (never enlarging), encode as `format`.
pub fn render_thumbnail(
    data: &[u8],
    bbox: BoundingBox,
    format: ImageFormat,
) -> Result<Bytes, ThumbnailError> {
    let img = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ThumbnailError::Decode(e.to_string()))?
        .decode()
        .map_err(|e| ThumbnailError::Decode(e.to_string()))?;

    let thumb = shrink_to_fit(&img, bbox);

    // JPEG carries no alpha channel; flatten before encoding.
    let thumb = if format == ImageFormat::Jpeg && thumb.color().has_alpha() {
        DynamicImage::ImageRgb8(thumb.to_rgb8())
    } else {
        thumb
    };

    let (width, height) = thumb.dimensions();
    let estimated_size = (width * height * 3) as usize;
    let mut buffer = Vec::with_capacity(estimated_size);
    thumb
        .write_to(&mut Cursor::new(&mut buffer), format)
        .map_err(|e| ThumbnailError::Encode(e.to_string()))?;

    Ok(Bytes::from(buffer))
}
