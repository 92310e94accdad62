use crate::foundation::error::{EngineError, EngineResult};

pub use glam::{Mat4, Vec2, Vec3};
pub use kurbo::Point;

/// Tick rate represented as a rational `num/den` updates per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (ticks).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated tick rate.
    pub fn new(num: u32, den: u32) -> EngineResult<Self> {
        if den == 0 {
            return Err(EngineError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(EngineError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point ticks per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one tick in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Number of whole ticks covering `secs`, rounded up.
    pub fn ticks_for_secs(self, secs: f64) -> u64 {
        (secs * self.as_f64()).ceil().max(0.0) as u64
    }
}

/// Euler rotation in radians, applied in XYZ order by the renderer.
pub type Euler = Vec3;

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
