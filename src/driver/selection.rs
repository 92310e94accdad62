use crate::driver::camera::pointer_to_ndc;
use crate::foundation::core::{Mat4, Vec2, Vec3};
use crate::scene::config::SelectionConfig;

/// Index of the candidate nearest to `pointer` in device space, within `threshold`.
///
/// Candidates whose projected depth is not `< 1` (beyond the far plane or behind the camera)
/// are skipped. Ties keep the earlier candidate.
pub fn nearest_in_screen(
    pointer: Vec2,
    world: impl IntoIterator<Item = Vec3>,
    view_proj: Mat4,
    threshold: f32,
) -> Option<usize> {
    let target = pointer_to_ndc(pointer);
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in world.into_iter().enumerate() {
        let ndc = view_proj.project_point3(p);
        if !ndc.is_finite() || ndc.z >= 1.0 {
            continue;
        }
        let dist = ndc.truncate().distance(target);
        if dist < threshold && best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

/// Pointer selection of a single photo with a minimum display time.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSelector {
    threshold: f32,
    cooldown: f64,
    selected: Option<String>,
    opened_at: f64,
    last_trigger: u64,
}

impl PhotoSelector {
    /// Nothing selected; the trigger counter starts at zero.
    pub fn new(cfg: &SelectionConfig) -> Self {
        Self {
            threshold: cfg.threshold,
            cooldown: f64::from(cfg.cooldown_secs),
            selected: None,
            opened_at: 0.0,
            last_trigger: 0,
        }
    }

    /// Image reference of the selected photo.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Maximum pointer distance in device space.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Record `trigger` and report whether it differs from the last one seen.
    pub fn observe(&mut self, trigger: u64) -> bool {
        let changed = trigger != self.last_trigger;
        self.last_trigger = trigger;
        changed
    }

    /// `true` while a selection is younger than the cooldown.
    pub fn cooling_down(&self, now: f64) -> bool {
        self.selected.is_some() && now - self.opened_at < self.cooldown
    }

    /// Apply one selection request at time `now` with the hit-test result.
    ///
    /// Returns `true` when the selection changed.
    pub fn apply(&mut self, hit: Option<&str>, now: f64) -> bool {
        if self.cooling_down(now) {
            return false;
        }
        match (hit, self.selected.as_deref()) {
            (Some(hit), Some(current)) if hit == current => {
                self.selected = None;
            }
            (Some(hit), _) => {
                self.selected = Some(hit.to_owned());
                self.opened_at = now;
            }
            (None, Some(_)) => {
                self.selected = None;
            }
            (None, None) => return false,
        }
        tracing::debug!(selected = ?self.selected, now, "photo selection changed");
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/selection.rs"]
mod tests;
