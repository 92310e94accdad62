use std::path::Path;

use crate::driver::blend::pan_translation;
use crate::driver::camera::Camera;
use crate::driver::output::FrameOutput;
use crate::foundation::core::Vec3;
use crate::foundation::error::{EngineError, EngineResult};
use crate::text::raster::GlyphMask;

const BACKGROUND: [u8; 4] = [6, 10, 14, 255];
const FOLIAGE_LOW: [f32; 3] = [0.0, 255.0, 136.0];
const FOLIAGE_HIGH: [f32; 3] = [255.0, 215.0, 0.0];
const LIGHT: [f32; 3] = [255.0, 234.0, 0.0];
const PHOTO: [f32; 3] = [250.0, 250.0, 250.0];

/// Software point splat of one frame, for offline inspection.
///
/// Everything is drawn additively in world space `pan + scene_offset + position`, viewed
/// through `camera` (its aspect ratio is replaced by `width / height`).
pub fn render_preview(
    frame: &FrameOutput,
    camera: &Camera,
    scene_offset: Vec3,
    width: u32,
    height: u32,
) -> EngineResult<image::RgbaImage> {
    if width == 0 || height == 0 {
        return Err(EngineError::raster("preview size must be non-empty"));
    }
    let cam = Camera {
        aspect: width as f32 / height as f32,
        ..*camera
    };
    let view_proj = cam.view_proj();
    let group = pan_translation(frame.pan) + scene_offset;

    let mut img = image::RgbaImage::from_pixel(width, height, image::Rgba(BACKGROUND));
    let mut splat = |world: Vec3, color: [f32; 3], intensity: f32, radius: i64| {
        let ndc = view_proj.project_point3(group + world);
        if !ndc.is_finite() || !(0.0..1.0).contains(&ndc.z) {
            return;
        }
        let px = ((ndc.x + 1.0) * 0.5 * width as f32) as i64;
        let py = ((1.0 - ndc.y) * 0.5 * height as f32) as i64;
        for y in py - radius..=py + radius {
            for x in px - radius..=px + radius {
                if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                    continue;
                }
                let dst = img.get_pixel_mut(x as u32, y as u32);
                for c in 0..3 {
                    let add = color[c] * intensity;
                    dst.0[c] = (f32::from(dst.0[c]) + add).min(255.0) as u8;
                }
            }
        }
    };

    for (p, size) in frame.foliage.iter().zip(&frame.foliage_sizes) {
        let t = ((p.y + 7.5) / 16.0).clamp(0.0, 1.0);
        let color =
            std::array::from_fn(|c| FOLIAGE_LOW[c] + (FOLIAGE_HIGH[c] - FOLIAGE_LOW[c]) * t);
        splat(*p, color, 0.12 * size.min(2.0), 0);
    }
    for light in &frame.lights {
        if light.scale > 0.01 {
            splat(light.position, LIGHT, 0.6, 1);
        }
    }
    for photo in &frame.photos {
        if photo.scale > 0.01 {
            let radius = if photo.selected { 5 } else { 3 };
            splat(photo.position, PHOTO, 0.5 * photo.scale, radius);
        }
    }
    Ok(img)
}

/// Coverage mask as a grayscale image.
pub fn mask_image(mask: &GlyphMask) -> EngineResult<image::GrayImage> {
    image::GrayImage::from_raw(mask.width, mask.height, mask.coverage.clone())
        .ok_or_else(|| EngineError::raster("mask buffer does not match its dimensions"))
}

/// Write an RGBA image as PNG, creating parent directories.
pub fn write_png(path: &Path, img: &image::RgbaImage) -> EngineResult<()> {
    write_buffer(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
    )
}

/// Write a grayscale image as PNG, creating parent directories.
pub fn write_gray_png(path: &Path, img: &image::GrayImage) -> EngineResult<()> {
    write_buffer(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::L8,
    )
}

fn write_buffer(
    path: &Path,
    data: &[u8],
    width: u32,
    height: u32,
    color: image::ColorType,
) -> EngineResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            EngineError::raster(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    image::save_buffer_with_format(path, data, width, height, color, image::ImageFormat::Png)
        .map_err(|e| EngineError::raster(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/preview.rs"]
mod tests;
