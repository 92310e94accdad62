use crate::foundation::core::Vec2;
use crate::foundation::math::damp;

/// Continuous shadow of a discrete on/off target.
///
/// Advanced by exponential damping and clamped to `[0, 1]`; re-targeting mid-transition only
/// changes direction, never the current value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedProgress {
    value: f32,
    rate: f32,
}

impl DampedProgress {
    /// Start at `0` with the given damping rate (per second).
    pub fn new(rate: f32) -> Self {
        Self { value: 0.0, rate }
    }

    /// Current progress in `[0, 1]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advance toward `target` (on = 1, off = 0) by `dt` seconds and return the new value.
    pub fn step(&mut self, on: bool, dt: f32) -> f32 {
        let target = if on { 1.0 } else { 0.0 };
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.value = damp(self.value, target, self.rate, dt).clamp(0.0, 1.0);
        self.value
    }
}

/// Per-tick linear smoothing of the group pan offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSmoother {
    current: Vec2,
    blend: f32,
}

impl PanSmoother {
    /// Start at the origin, moving `blend` of the remaining distance each tick.
    pub fn new(blend: f32) -> Self {
        Self {
            current: Vec2::ZERO,
            blend: blend.clamp(0.0, 1.0),
        }
    }

    /// Current smoothed offset.
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Move toward `target` by one tick.
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        if target.is_finite() {
            self.current = self.current.lerp(target, self.blend);
        }
        self.current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
