//! Shrink-only bounding-box resize.

use image::{DynamicImage, GenericImageView};

/// Pixel box a thumbnail must fit within.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// A zero dimension is a misconfiguration; floor it at one pixel so a
    /// bad deployment value degrades the output instead of panicking
    /// mid-invocation.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

/// Compute output dimensions for fitting (`orig_width`, `orig_height`)
/// within `bbox`, preserving aspect ratio and never enlarging.
///
/// Returns `None` when the image already fits and needs no resize.
pub fn fit_within(orig_width: u32, orig_height: u32, bbox: BoundingBox) -> Option<(u32, u32)> {
    if orig_width <= bbox.width && orig_height <= bbox.height {
        return None;
    }

    let scale_w = bbox.width as f32 / orig_width as f32;
    let scale_h = bbox.height as f32 / orig_height as f32;
    let scale = scale_w.min(scale_h);

    // Rounding may land a pixel outside the box; clamp back in. The box may
    // have been built as a literal, so hold its bounds at one pixel here too.
    let width = ((orig_width as f32 * scale).round() as u32).clamp(1, bbox.width.max(1));
    let height = ((orig_height as f32 * scale).round() as u32).clamp(1, bbox.height.max(1));
    Some((width, height))
}

/// Select a resampling filter based on how aggressive the downscale is.
/// Cheaper filters for large ratios, Lanczos3 for near-1:1 quality.
fn select_filter(
    orig_width: u32,
    orig_height: u32,
    new_width: u32,
    new_height: u32,
) -> image::imageops::FilterType {
    let width_ratio = orig_width as f32 / new_width as f32;
    let height_ratio = orig_height as f32 / new_height as f32;
    let max_ratio = width_ratio.max(height_ratio);

    if max_ratio > 2.0 {
        image::imageops::FilterType::Triangle
    } else if max_ratio > 1.5 {
        image::imageops::FilterType::CatmullRom
    } else {
        image::imageops::FilterType::Lanczos3
    }
}

/// Shrink `img` to fit `bbox`. An image already inside the box is returned
/// unchanged; this function never upscales.
pub fn shrink_to_fit(img: &DynamicImage, bbox: BoundingBox) -> DynamicImage {
    let (orig_width, orig_height) = img.dimensions();
    match fit_within(orig_width, orig_height, bbox) {
        None => img.clone(),
        Some((width, height)) => {
            tracing::debug!(orig_width, orig_height, width, height, "shrinking image");
            let filter = select_filter(orig_width, orig_height, width, height);
            img.resize_exact(width, height, filter)
        }
    }
}
