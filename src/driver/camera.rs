use crate::foundation::core::{Mat4, Vec2, Vec3};

/// Fixed perspective camera looking at the formation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub eye: Vec3,
    /// Look-at target.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width over height.
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 22.0),
            target: Vec3::ZERO,
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Default camera with the given aspect ratio.
    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            ..Self::default()
        }
    }

    /// World-to-clip matrix.
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        proj * view
    }

    /// Normalized device coordinates of a world point (perspective divide applied).
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_proj().project_point3(world)
    }
}

/// Normalized `[0, 1]²` pointer (origin top-left) to device coordinates.
pub fn pointer_to_ndc(pointer: Vec2) -> Vec2 {
    Vec2::new(pointer.x * 2.0 - 1.0, -(pointer.y * 2.0) + 1.0)
}

/// Device coordinates back to a normalized pointer.
pub fn ndc_to_pointer(ndc: Vec2) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5, (1.0 - ndc.y) * 0.5)
}

#[cfg(test)]
#[path = "../../tests/unit/driver/camera.rs"]
mod tests;
