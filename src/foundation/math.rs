use glam::Vec3;

/// Linear interpolation `a + (b - a) * t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Frame-rate independent exponential approach of `value` toward `target`.
///
/// Equivalent to `lerp(value, target, 1 - e^(-rate * dt))`.
#[inline]
pub fn damp(value: f32, target: f32, rate: f32, dt: f32) -> f32 {
    lerp(value, target, 1.0 - (-rate * dt).exp())
}

/// Position expressed around the vertical (Y) axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylindrical {
    /// Distance from the Y axis.
    pub radius: f32,
    /// Angle in the XZ plane, `atan2(z, x)`.
    pub angle: f32,
    /// Height along Y.
    pub height: f32,
}

impl Cylindrical {
    /// Decompose a Cartesian point.
    #[inline]
    pub fn from_vec3(p: Vec3) -> Self {
        Self {
            radius: (p.x * p.x + p.z * p.z).sqrt(),
            angle: p.z.atan2(p.x),
            height: p.y,
        }
    }

    /// Recompose into Cartesian coordinates.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        polar_xz(self.radius, self.angle, self.height)
    }
}

/// Point at `radius` and `angle` in the XZ plane, at height `y`.
#[inline]
pub fn polar_xz(radius: f32, angle: f32, y: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(radius * c, y, radius * s)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
