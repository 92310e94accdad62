use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::animation::ease::Ease;
use crate::foundation::core::Vec3;
use crate::foundation::error::{EngineError, EngineResult};
use crate::foundation::rng::{LAYOUT_SEED, RESERVED_SEED};

/// Photo file names shipped with the reference scene, `YYYY_MM_N.jpg`.
pub const DEFAULT_PHOTO_FILES: &[&str] = &[
    "2024_06_1.jpg",
    "2024_07_1.jpg",
    "2024_07_2.jpg",
    "2024_09_1.jpg",
    "2024_09_2.jpg",
    "2024_09_3.jpg",
    "2024_09_4.jpg",
    "2024_09_5.jpg",
    "2024_09_6.jpg",
    "2024_10_1.jpg",
    "2024_11_1.jpg",
    "2024_12_1.jpg",
    "2024_12_2.jpg",
    "2024_12_3.jpg",
    "2025_01_1.jpg",
    "2025_01_2.jpg",
    "2025_01_3.jpg",
    "2025_01_4.jpg",
    "2025_01_5.jpg",
    "2025_01_6.jpg",
    "2025_01_7.jpg",
    "2025_02_1.jpg",
    "2025_05_1.jpg",
    "2025_06_1.jpg",
    "2025_06_2.jpg",
    "2025_06_3.jpg",
    "2025_09_1.jpg",
    "2025_10_1.jpg",
    "2025_10_2.jpg",
    "2025_11_1.jpg",
    "2025_11_2.jpg",
];

/// Complete engine configuration. Every field defaults to the reference look.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for foliage, lights and photos.
    pub layout_seed: i32,
    /// Seed for the text silhouette sampler.
    pub text_seed: i32,
    /// Dense point-cloud group.
    pub foliage: FoliageConfig,
    /// Instanced point-light group.
    pub lights: LightConfig,
    /// Photo billboards.
    pub photos: PhotoConfig,
    /// Text silhouette; `None` disables the text formation (tree fallback).
    pub text: Option<TextConfig>,
    /// Trunk mesh animation.
    pub trunk: TrunkConfig,
    /// Damping rates, easing and spin.
    pub motion: MotionConfig,
    /// Photo hit-testing.
    pub selection: SelectionConfig,
    /// Fixed translation of the whole formation group in the scene.
    pub scene_offset: Vec3,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout_seed: LAYOUT_SEED,
            text_seed: RESERVED_SEED,
            foliage: FoliageConfig::default(),
            lights: LightConfig::default(),
            photos: PhotoConfig::default(),
            text: Some(TextConfig::default()),
            trunk: TrunkConfig::default(),
            motion: MotionConfig::default(),
            selection: SelectionConfig::default(),
            scene_offset: Vec3::new(0.0, -2.0, 0.0),
        }
    }
}

/// Foliage particle layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FoliageConfig {
    /// Particle count.
    pub count: usize,
    /// Maximum radius of the scattered sphere.
    pub chaos_radius: f32,
    /// Cone height.
    pub height: f32,
    /// Power applied to the uniform height sample; > 1 favours the base.
    pub height_exponent: f32,
    /// Cone radius per unit of remaining height.
    pub cone_slope: f32,
    /// Angular turns per unit height (radians).
    pub spiral: f32,
    /// Radial jitter range.
    pub radial_jitter: f32,
    /// Vertical jitter range.
    pub vertical_jitter: f32,
    /// World height of the cone base.
    pub base_y: f32,
    /// Multiplier on the squared size sample.
    pub size_scale: f32,
    /// Smallest particle size.
    pub size_min: f32,
    /// Vortex twist at zero formation (radians).
    pub twist: f32,
    /// Fraction of the shared rotation applied to the scattered layout.
    pub chaos_drift: f32,
}

impl Default for FoliageConfig {
    fn default() -> Self {
        Self {
            count: 8500,
            chaos_radius: 28.0,
            height: 16.0,
            height_exponent: 1.8,
            cone_slope: 0.5,
            spiral: 4.0,
            radial_jitter: 0.4,
            vertical_jitter: 0.4,
            base_y: -7.5,
            size_scale: 3.0,
            size_min: 0.5,
            twist: 15.0,
            chaos_drift: 0.5,
        }
    }
}

/// Instanced light layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Instance count.
    pub count: usize,
    /// Maximum radius of the scattered sphere.
    pub chaos_radius: f32,
    /// Cone height.
    pub height: f32,
    /// Cone radius per unit of remaining height.
    pub cone_slope: f32,
    /// World height of the cone base.
    pub base_y: f32,
    /// Smallest instance scale.
    pub size_min: f32,
    /// Random scale range added to `size_min`.
    pub size_range: f32,
    /// Vortex twist at zero formation (radians).
    pub twist: f32,
    /// Fraction of the shared rotation applied to the scattered layout.
    pub chaos_drift: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            count: 500,
            chaos_radius: 22.0,
            height: 15.0,
            cone_slope: 0.52,
            base_y: -7.0,
            size_min: 0.5,
            size_range: 0.5,
            twist: 12.0,
            chaos_drift: 0.3,
        }
    }
}

/// Photo billboard layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhotoConfig {
    /// Manifest file names (`YYYY_MM_N.ext`), sorted at load.
    pub files: Vec<String>,
    /// Prefix joined with the file name to form the image reference.
    pub image_prefix: String,
    /// Inner radius of the scattered shell.
    pub chaos_radius: f32,
    /// Random radial spread added to `chaos_radius`.
    pub chaos_spread: f32,
    /// Vertical squash of the scattered shell.
    pub chaos_squash: f32,
    /// Random rotation amplitude per axis while scattered.
    pub rotation_jitter: Vec3,
    /// Spiral height.
    pub height: f32,
    /// World height of the first (oldest) photo.
    pub base_y: f32,
    /// Spiral radius at height zero.
    pub radius_base: f32,
    /// Spiral radius decrease per unit height.
    pub radius_slope: f32,
    /// Full turns of the spiral from first to last photo.
    pub turns: f32,
    /// Smallest photo scale.
    pub scale_min: f32,
    /// Random scale range added to `scale_min`.
    pub scale_range: f32,
    /// Floor applied to the live scale.
    pub min_live_scale: f32,
    /// Vortex twist at zero formation (radians).
    pub twist: f32,
    /// Fraction of the shared rotation applied to the scattered layout.
    pub chaos_drift: f32,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            files: DEFAULT_PHOTO_FILES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            image_prefix: "/photos".to_owned(),
            chaos_radius: 12.0,
            chaos_spread: 4.0,
            chaos_squash: 0.6,
            rotation_jitter: Vec3::new(0.2, 0.2, 0.1),
            height: 14.0,
            base_y: -7.0,
            radius_base: 1.5,
            radius_slope: 0.4,
            turns: 5.0,
            scale_min: 0.9,
            scale_range: 0.3,
            min_live_scale: 0.001,
            twist: 10.0,
            chaos_drift: 0.2,
        }
    }
}

/// Text silhouette rasterization and mapping.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// String to render.
    pub text: String,
    /// Preferred font families, tried before the generic sans-serif family.
    pub families: Vec<String>,
    /// Bundled font file; overrides the system lookup.
    pub font_path: Option<PathBuf>,
    /// Font size in pixels.
    pub size_px: f32,
    /// Off-screen surface width.
    pub canvas_width: u32,
    /// Off-screen surface height.
    pub canvas_height: u32,
    /// Pixel stride of the foreground scan.
    pub stride: u32,
    /// Coverage above which a pixel counts as foreground.
    pub threshold: u8,
    /// World-space extent of the full surface.
    pub radius: f32,
    /// Vertical offset of the silhouette.
    pub lift: f32,
    /// Depth jitter range.
    pub depth: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            text: "Merry Christmas!".to_owned(),
            families: vec!["Microsoft YaHei".to_owned(), "SimHei".to_owned()],
            font_path: None,
            size_px: 180.0,
            canvas_width: 1000,
            canvas_height: 1000,
            stride: 4,
            threshold: 128,
            radius: 25.0,
            lift: 5.0,
            depth: 2.0,
        }
    }
}

/// Trunk mesh animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrunkConfig {
    /// Height while scattered (hidden below the scene).
    pub hidden_y: f32,
    /// Height once formed.
    pub formed_y: f32,
    /// Opacity once formed.
    pub opacity: f32,
}

impl Default for TrunkConfig {
    fn default() -> Self {
        Self {
            hidden_y: -10.0,
            formed_y: 0.5,
            opacity: 0.1,
        }
    }
}

/// Transition tuning.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Damping rate of the scattered → formed transition.
    pub formed_rate: f32,
    /// Damping rate of the tree → text transition.
    pub text_rate: f32,
    /// Curve applied to both progress values.
    pub ease: Ease,
    /// Rotation speed while not formed (radians per second).
    pub idle_spin: f32,
    /// Fraction of the pan distance covered each tick.
    pub pan_blend: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            formed_rate: 2.0,
            text_rate: 1.5,
            ease: Ease::Smoothstep,
            idle_spin: 0.05,
            pan_blend: 0.2,
        }
    }
}

/// Photo hit-testing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Maximum pointer distance in normalized device coordinates.
    pub threshold: f32,
    /// Minimum display time before a selection can change (seconds).
    pub cooldown_secs: f32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            threshold: 0.05,
            cooldown_secs: 3.0,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> EngineResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| EngineError::serde(format!("parse engine config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            EngineError::validation(format!("open engine config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check ranges that would otherwise produce degenerate layouts.
    pub fn validate(&self) -> EngineResult<()> {
        fn positive(name: &str, v: f32) -> EngineResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(EngineError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
            Ok(())
        }
        fn non_negative(name: &str, v: f32) -> EngineResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(EngineError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
            Ok(())
        }

        if self.foliage.count == 0 {
            return Err(EngineError::validation("foliage.count must be > 0"));
        }
        if self.lights.count == 0 {
            return Err(EngineError::validation("lights.count must be > 0"));
        }
        positive("foliage.chaos_radius", self.foliage.chaos_radius)?;
        positive("foliage.height", self.foliage.height)?;
        positive("foliage.height_exponent", self.foliage.height_exponent)?;
        positive("lights.chaos_radius", self.lights.chaos_radius)?;
        positive("lights.height", self.lights.height)?;
        positive("photos.chaos_radius", self.photos.chaos_radius)?;
        positive("photos.height", self.photos.height)?;
        positive("photos.scale_min", self.photos.scale_min)?;
        non_negative("photos.chaos_spread", self.photos.chaos_spread)?;
        non_negative("motion.formed_rate", self.motion.formed_rate)?;
        non_negative("motion.text_rate", self.motion.text_rate)?;
        non_negative("motion.idle_spin", self.motion.idle_spin)?;
        if !(0.0..=1.0).contains(&self.motion.pan_blend) {
            return Err(EngineError::validation(
                "motion.pan_blend must be in [0, 1]",
            ));
        }
        positive("selection.threshold", self.selection.threshold)?;
        non_negative("selection.cooldown_secs", self.selection.cooldown_secs)?;
        if !self.scene_offset.is_finite() {
            return Err(EngineError::validation("scene_offset must be finite"));
        }

        if let Some(text) = &self.text {
            positive("text.size_px", text.size_px)?;
            positive("text.radius", text.radius)?;
            non_negative("text.depth", text.depth)?;
            for (name, v) in [
                ("text.canvas_width", text.canvas_width),
                ("text.canvas_height", text.canvas_height),
            ] {
                if v == 0 || v > 8192 {
                    return Err(EngineError::validation(format!(
                        "{name} must be in 1..=8192"
                    )));
                }
            }
            if text.stride == 0 {
                return Err(EngineError::validation("text.stride must be >= 1"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
