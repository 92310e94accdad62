use crate::foundation::core::{Point, Vec3};
use crate::foundation::rng::SeededRng;
use crate::text::raster::GlyphMask;

/// Foreground pixel coordinates collected from a [`GlyphMask`] on a fixed stride.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidatePool {
    /// Source bitmap width in pixels.
    pub width: u32,
    /// Source bitmap height in pixels.
    pub height: u32,
    /// Pixel-space foreground samples, scan order (row-major).
    pub points: Vec<Point>,
}

impl CandidatePool {
    /// Scan every `stride`-th pixel in both axes and keep those brighter than `threshold`.
    pub fn scan(mask: &GlyphMask, stride: u32, threshold: u8) -> Self {
        let stride = stride.max(1) as usize;
        let mut points = Vec::new();
        for y in (0..mask.height).step_by(stride) {
            for x in (0..mask.width).step_by(stride) {
                if mask.at(x, y) > threshold {
                    points.push(Point::new(f64::from(x), f64::from(y)));
                }
            }
        }
        Self {
            width: mask.width,
            height: mask.height,
            points,
        }
    }

    /// `true` when nothing visible was rendered.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of candidate points.
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Pixel-to-world mapping for the silhouette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SilhouetteMapping {
    /// World-space extent the full bitmap maps onto.
    pub radius: f32,
    /// Constant vertical offset added after mapping.
    pub lift: f32,
    /// Total depth jitter range, centered on zero.
    pub depth: f32,
}

impl SilhouetteMapping {
    /// Map one pixel coordinate into world space; Y is flipped so the bitmap's downward axis
    /// becomes world up.
    pub fn to_world(&self, p: Point, width: u32, height: u32, depth_sample: f64) -> Vec3 {
        let u = p.x / f64::from(width.max(1)) - 0.5;
        let v = p.y / f64::from(height.max(1)) - 0.5;
        let radius = f64::from(self.radius);
        Vec3::new(
            (u * radius) as f32,
            (-v * radius + f64::from(self.lift)) as f32,
            ((depth_sample - 0.5) * f64::from(self.depth)) as f32,
        )
    }
}

/// Fill `count` slots by drawing pool entries uniformly at random with replacement.
///
/// Denser glyph regions receive proportionally more particles. An empty pool yields an
/// all-zero array and consumes no random draws.
pub fn sample_silhouette(
    pool: &CandidatePool,
    count: usize,
    mapping: &SilhouetteMapping,
    rng: &mut SeededRng,
) -> Vec<Vec3> {
    if pool.is_empty() {
        return vec![Vec3::ZERO; count];
    }
    (0..count)
        .map(|_| {
            let p = pool.points[rng.next_index(pool.len())];
            let depth = rng.next_f64();
            mapping.to_world(p, pool.width, pool.height, depth)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/sampler.rs"]
mod tests;
