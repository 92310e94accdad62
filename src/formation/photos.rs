use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::foundation::core::{Euler, Vec3};
use crate::foundation::error::{EngineError, EngineResult};
use crate::foundation::rng::SeededRng;
use crate::scene::config::PhotoConfig;

/// One decoded manifest line: `YYYY_MM_N.ext`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ManifestEntry {
    /// File name as listed in the manifest.
    pub file: String,
    /// Four-digit year.
    pub year: i32,
    /// Two-digit month, kept as written.
    pub month: String,
    /// Sequence number within the month.
    pub seq: u32,
}

impl ManifestEntry {
    /// Decode a file name of the form `YYYY_MM_N[.ext]`.
    pub fn parse(file: &str) -> EngineResult<Self> {
        let bad = |why: &str| EngineError::validation(format!("photo '{file}': {why}"));

        let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
        let mut parts = stem.split('_');
        let (Some(year), Some(month), Some(seq), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad("expected YYYY_MM_N"));
        };

        if year.len() != 4 {
            return Err(bad("year must have four digits"));
        }
        let year = year
            .parse::<i32>()
            .map_err(|_| bad("year is not a number"))?;
        let month_num = month
            .parse::<u32>()
            .map_err(|_| bad("month is not a number"))?;
        if month.len() != 2 || !(1..=12).contains(&month_num) {
            return Err(bad("month must be 01..12"));
        }
        let seq = seq
            .parse::<u32>()
            .map_err(|_| bad("sequence is not a number"))?;

        Ok(Self {
            file: file.to_owned(),
            year,
            month: month.to_owned(),
            seq,
        })
    }
}

/// Decode and sort a photo manifest. Lexicographic file order is chronological order.
#[tracing::instrument(skip_all, fields(files = files.len()))]
pub fn decode_manifest(files: &[String]) -> EngineResult<Vec<ManifestEntry>> {
    let mut sorted = files.iter().map(String::as_str).collect::<Vec<_>>();
    sorted.sort_unstable();
    sorted.into_iter().map(ManifestEntry::parse).collect()
}

/// A photo billboard with its scattered and spiral targets.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PhotoEntry {
    /// Stable identifier, `photo-<index>`.
    pub id: String,
    /// Year decoded from the file name.
    pub year: i32,
    /// Month decoded from the file name.
    pub month: String,
    /// Position on the squashed golden-angle shell.
    pub chaos_position: Vec3,
    /// Position on the rising spiral.
    pub tree_position: Vec3,
    /// Small random tilt while scattered.
    pub chaos_rotation: Euler,
    /// Outward-facing orientation on the spiral.
    pub tree_rotation: Euler,
    /// Base scale.
    pub scale: f32,
    /// Image reference handed to the renderer.
    pub image_ref: String,
    /// `YYYY-MM` caption, present only on the first photo of each year.
    pub label: Option<String>,
}

/// Lay out every manifest photo.
///
/// Draws five values per photo: shell radius, three tilt components, scale.
pub fn layout_photos(cfg: &PhotoConfig, rng: &mut SeededRng) -> EngineResult<Vec<PhotoEntry>> {
    let manifest = decode_manifest(&cfg.files)?;
    let n = manifest.len();
    let prefix = cfg.image_prefix.trim_end_matches('/');

    let mut photos = Vec::with_capacity(n);
    let mut prev_year = None;
    for (i, entry) in manifest.into_iter().enumerate() {
        let t = if n > 1 {
            i as f64 / (n - 1) as f64
        } else {
            0.0
        };
        let h = t * f64::from(cfg.height) + f64::from(cfg.base_y);
        let radius = f64::from(cfg.radius_base) - f64::from(cfg.radius_slope) * h;
        let angle = t * f64::from(cfg.turns) * TAU;
        let tree_position = Vec3::new(
            (angle.cos() * radius) as f32,
            h as f32,
            (angle.sin() * radius) as f32,
        );

        let k = i as f64 + 0.5;
        let phi = (1.0 - 2.0 * k / n as f64).acos();
        let theta = PI * (1.0 + 5f64.sqrt()) * k;
        let r = f64::from(cfg.chaos_radius) + rng.next_f64() * f64::from(cfg.chaos_spread);
        let chaos_position = Vec3::new(
            (r * phi.sin() * theta.cos()) as f32,
            (r * phi.sin() * theta.sin() * f64::from(cfg.chaos_squash)) as f32,
            (r * phi.cos()) as f32,
        );

        let jitter = cfg.rotation_jitter;
        let rx = (rng.next_f64() - 0.5) * f64::from(jitter.x);
        let ry = (rng.next_f64() - 0.5) * f64::from(jitter.y);
        let rz = (rng.next_f64() - 0.5) * f64::from(jitter.z);
        let scale = f64::from(cfg.scale_min) + rng.next_f64() * f64::from(cfg.scale_range);

        let label =
            (prev_year != Some(entry.year)).then(|| format!("{}-{}", entry.year, entry.month));
        prev_year = Some(entry.year);

        photos.push(PhotoEntry {
            id: format!("photo-{i}"),
            year: entry.year,
            month: entry.month,
            chaos_position,
            tree_position,
            chaos_rotation: Vec3::new(rx as f32, ry as f32, rz as f32),
            tree_rotation: Vec3::new(0.0, (-angle + FRAC_PI_2) as f32, 0.0),
            scale: scale as f32,
            image_ref: format!("{prefix}/{}", entry.file),
            label,
        });
    }

    tracing::debug!(photos = photos.len(), "laid out photo spiral");
    Ok(photos)
}

#[cfg(test)]
#[path = "../../tests/unit/formation/photos.rs"]
mod tests;
