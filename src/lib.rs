//! Evergreen is a deterministic particle formation engine.
//!
//! A scene is made of three index-aligned formations (a scattered cloud, a spiral cone and a
//! rasterized text silhouette) plus point lights, photo billboards and a trunk that follow
//! along. The public API is tick-oriented:
//!
//! - Load and validate an [`EngineConfig`]
//! - Build a [`FormationSnapshot`] once at startup
//! - Feed a [`TickInput`] to a [`BlendDriver`] every frame and hand the [`FrameOutput`] to a
//!   renderer
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod driver;
pub(crate) mod formation;
pub(crate) mod scene;
pub(crate) mod text;

pub use crate::foundation::core::{Euler, Fps, Mat4, Point, Vec2, Vec3};
pub use crate::foundation::error::{EngineError, EngineResult};
pub use crate::foundation::math::{Cylindrical, damp, lerp, polar_xz};
pub use crate::foundation::rng::{LAYOUT_SEED, RESERVED_SEED, SeededRng};

pub use crate::animation::ease::Ease;
pub use crate::animation::progress::{DampedProgress, PanSmoother};

pub use crate::text::font::ResolvedFont;
pub use crate::text::layout::{Ink, TextLayoutEngine};
pub use crate::text::raster::{GlyphMask, rasterize_centered};
pub use crate::text::sampler::{CandidatePool, SilhouetteMapping, sample_silhouette};

pub use crate::formation::particles::{
    ParticleSet, chaos_sphere_point, generate_foliage, generate_lights,
};
pub use crate::formation::photos::{ManifestEntry, PhotoEntry, decode_manifest, layout_photos};
pub use crate::formation::snapshot::{
    FormationSnapshot, TextSource, render_mask, silhouette_from_mask,
};

pub use crate::driver::blend::{
    BlendDriver, FrameParams, GroupMotion, VortexPoint, pan_translation, vortex_blend, write_frame,
};
pub use crate::driver::camera::{Camera, ndc_to_pointer, pointer_to_ndc};
pub use crate::driver::input::{FormationState, TickInput};
pub use crate::driver::output::{FrameOutput, LightInstance, PhotoTransform, TrunkTransform};
pub use crate::driver::selection::{PhotoSelector, nearest_in_screen};

pub use crate::scene::config::{
    DEFAULT_PHOTO_FILES, EngineConfig, FoliageConfig, LightConfig, MotionConfig, PhotoConfig,
    SelectionConfig, TextConfig, TrunkConfig,
};
pub use crate::scene::preview::{mask_image, render_preview, write_gray_png, write_png};
