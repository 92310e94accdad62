use crate::foundation::core::{Euler, Vec2, Vec3};

/// Per-instance transform of one point light.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct LightInstance {
    /// Group-local position.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

/// Live transform of one photo billboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct PhotoTransform {
    /// Group-local position.
    pub position: Vec3,
    /// Euler rotation (XYZ).
    pub rotation: Euler,
    /// Uniform scale, never below the configured floor.
    pub scale: f32,
    /// Currently selected by the pointer.
    pub selected: bool,
    /// Opacity of the year caption, if the photo has one.
    pub label_opacity: f32,
    /// Shimmer clock for the photo frame, offset per photo.
    pub shimmer_time: f64,
}

/// Trunk mesh animation values.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct TrunkTransform {
    /// Vertical scale.
    pub scale_y: f32,
    /// Vertical position.
    pub position_y: f32,
    /// Rotation about Y, follows the shared rotation.
    pub rotation_y: f32,
    /// Material opacity.
    pub opacity: f32,
}

/// Everything the renderer reads after a tick.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Foliage positions, one per particle.
    pub foliage: Vec<Vec3>,
    /// Static foliage sizes.
    pub foliage_sizes: Vec<f32>,
    /// Light instances.
    pub lights: Vec<LightInstance>,
    /// Photo billboards in manifest order.
    pub photos: Vec<PhotoTransform>,
    /// Trunk mesh.
    pub trunk: TrunkTransform,
    /// Rigid translation of the whole formation group.
    pub pan: Vec2,
    /// Shared rotation angle used for this frame.
    pub rotation: f32,
    /// Simulated time of this frame, for shimmer and twinkle clocks.
    pub elapsed: f64,
    /// Damped scattered → formed progress.
    pub formed_progress: f32,
    /// Damped tree → text progress.
    pub text_progress: f32,
    /// Eased `formed_progress`.
    pub formed_ease: f32,
    /// Eased `text_progress`.
    pub text_ease: f32,
    /// Whether the polyline through the photo spiral is drawn.
    pub guide_visible: bool,
    /// Image reference of the selected photo.
    pub selected: Option<String>,
}

impl FrameOutput {
    /// Foliage positions as a flat `[x0, y0, z0, x1, ...]` buffer of length `3 × count`.
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.foliage)
    }
}
