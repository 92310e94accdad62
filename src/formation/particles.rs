use std::f64::consts::TAU;

use crate::foundation::core::Vec3;
use crate::foundation::error::{EngineError, EngineResult};
use crate::foundation::rng::SeededRng;
use crate::scene::config::{FoliageConfig, LightConfig};

/// Fixed-size, index-aligned per-particle targets.
///
/// Index `i` names the same particle in `chaos`, `tree`, `text` and `sizes`. The set is
/// immutable once built; the blend driver only reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSet {
    /// Scattered-cloud positions.
    pub chaos: Vec<Vec3>,
    /// Cone positions.
    pub tree: Vec<Vec3>,
    /// Text-silhouette positions; `None` means every particle falls back to its tree slot.
    pub text: Option<Vec<Vec3>>,
    /// Static per-particle size.
    pub sizes: Vec<f32>,
}

impl ParticleSet {
    /// Number of particles present in every array. Generated sets have equal lengths; a
    /// hand-built set with ragged arrays is treated as its aligned prefix.
    pub fn len(&self) -> usize {
        self.chaos.len().min(self.tree.len()).min(self.sizes.len())
    }

    /// `true` when no particle is present in every array.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text-formation target of particle `i`, or its tree position when no text is attached.
    ///
    /// `None` when `i` is outside the tree array.
    pub fn text_target(&self, i: usize) -> Option<Vec3> {
        self.text
            .as_ref()
            .and_then(|t| t.get(i))
            .or_else(|| self.tree.get(i))
            .copied()
    }

    /// Iterate aligned `(chaos, tree, text target, size)` tuples.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Vec3, Vec3, f32)> + '_ {
        self.chaos
            .iter()
            .zip(&self.tree)
            .zip(&self.sizes)
            .enumerate()
            .map(|(i, ((&chaos, &tree), &size))| {
                let text = self
                    .text
                    .as_ref()
                    .and_then(|t| t.get(i))
                    .copied()
                    .unwrap_or(tree);
                (chaos, tree, text, size)
            })
    }

    /// Attach a text formation. The array must cover exactly this set's index space.
    pub fn attach_text(&mut self, positions: Vec<Vec3>) -> EngineResult<()> {
        if positions.len() != self.len() {
            return Err(EngineError::validation(format!(
                "text formation has {} positions, particle set has {}",
                positions.len(),
                self.len()
            )));
        }
        self.text = Some(positions);
        Ok(())
    }
}

/// Uniform point inside a solid sphere of `radius`.
///
/// `u` and `v` pick the direction, `w` goes through a cube root so density is uniform per
/// unit volume rather than clustered at the center.
pub fn chaos_sphere_point(u: f64, v: f64, w: f64, radius: f32) -> Vec3 {
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).acos();
    let r = w.cbrt() * f64::from(radius);
    Vec3::new(
        (r * phi.sin() * theta.cos()) as f32,
        (r * phi.sin() * theta.sin()) as f32,
        (r * phi.cos()) as f32,
    )
}

fn chaos_from(rng: &mut SeededRng, radius: f32) -> Vec3 {
    let u = rng.next_f64();
    let v = rng.next_f64();
    let w = rng.next_f64();
    chaos_sphere_point(u, v, w, radius)
}

/// Dense foliage: scattered sphere plus a base-heavy spiral cone.
///
/// Draws eight values per particle, in order: sphere direction (2), sphere radius, cone
/// height, cone angle, radial jitter, vertical jitter, size.
pub fn generate_foliage(cfg: &FoliageConfig, rng: &mut SeededRng) -> ParticleSet {
    let n = cfg.count;
    let mut chaos = Vec::with_capacity(n);
    let mut tree = Vec::with_capacity(n);
    let mut sizes = Vec::with_capacity(n);

    let height = f64::from(cfg.height);
    for _ in 0..n {
        chaos.push(chaos_from(rng, cfg.chaos_radius));

        let h = rng.next_f64().powf(f64::from(cfg.height_exponent)) * height;
        let cone_radius = (height - h) * f64::from(cfg.cone_slope);
        let angle = h * f64::from(cfg.spiral) + rng.next_f64() * TAU;
        let jitter_r = rng.next_f64() * f64::from(cfg.radial_jitter);
        let jitter_y = rng.next_f64() * f64::from(cfg.vertical_jitter);
        let r = cone_radius + jitter_r;
        tree.push(Vec3::new(
            (angle.cos() * r) as f32,
            (h + f64::from(cfg.base_y) + jitter_y) as f32,
            (angle.sin() * r) as f32,
        ));

        let s = rng.next_f64();
        sizes.push((s * s * f64::from(cfg.size_scale) + f64::from(cfg.size_min)) as f32);
    }

    ParticleSet {
        chaos,
        tree,
        text: None,
        sizes,
    }
}

/// Point lights: scattered sphere plus a linear cone with uniform angles.
///
/// Draws six values per light: sphere direction (2), sphere radius, cone height, cone
/// angle, size.
pub fn generate_lights(cfg: &LightConfig, rng: &mut SeededRng) -> ParticleSet {
    let n = cfg.count;
    let mut chaos = Vec::with_capacity(n);
    let mut tree = Vec::with_capacity(n);
    let mut sizes = Vec::with_capacity(n);

    let height = f64::from(cfg.height);
    for _ in 0..n {
        chaos.push(chaos_from(rng, cfg.chaos_radius));

        let h = rng.next_f64() * height;
        let cone_radius = (height - h) * f64::from(cfg.cone_slope);
        let angle = rng.next_f64() * TAU;
        tree.push(Vec3::new(
            (angle.cos() * cone_radius) as f32,
            (h + f64::from(cfg.base_y)) as f32,
            (angle.sin() * cone_radius) as f32,
        ));

        sizes.push((rng.next_f64() * f64::from(cfg.size_range) + f64::from(cfg.size_min)) as f32);
    }

    ParticleSet {
        chaos,
        tree,
        text: None,
        sizes,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/formation/particles.rs"]
mod tests;
