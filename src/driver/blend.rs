use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use crate::animation::ease::Ease;
use crate::animation::progress::{DampedProgress, PanSmoother};
use crate::driver::input::{FormationState, TickInput};
use crate::driver::output::{FrameOutput, LightInstance, PhotoTransform, TrunkTransform};
use crate::driver::selection::{PhotoSelector, nearest_in_screen};
use crate::formation::snapshot::FormationSnapshot;
use crate::foundation::core::{Vec2, Vec3};
use crate::foundation::math::{Cylindrical, lerp, polar_xz};
use crate::scene::config::EngineConfig;

/// Vortex settings of one particle group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupMotion {
    /// Angular offset at zero formation, decaying to zero as the formation completes.
    pub twist: f32,
    /// Fraction of the shared rotation applied to the scattered side.
    pub drift: f32,
}

/// Result of blending one point between its scattered and cone targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VortexPoint {
    /// Blended position.
    pub position: Vec3,
    /// Cone-side angle including twist and rotation.
    pub angle: f32,
}

/// Blend a scattered and a cone target in cylindrical space.
///
/// Height and radius interpolate linearly. The cone side turns by the decaying twist plus
/// `rotation`; the scattered side keeps its own angle and drifts by `rotation × drift`. The
/// two resulting points are mixed with `ease`.
pub fn vortex_blend(
    chaos: Vec3,
    tree: Vec3,
    ease: f32,
    rotation: f32,
    motion: GroupMotion,
) -> VortexPoint {
    let c = Cylindrical::from_vec3(chaos);
    let t = Cylindrical::from_vec3(tree);
    let y = lerp(c.height, t.height, ease);
    let radius = lerp(c.radius, t.radius, ease);
    let angle = t.angle + (1.0 - ease) * motion.twist + rotation;

    let scattered = polar_xz(c.radius, c.angle + rotation * motion.drift, y);
    let formed = polar_xz(radius, angle, y);
    VortexPoint {
        position: scattered.lerp(formed, ease),
        angle,
    }
}

/// Scalars shared by every object in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    /// Eased formed progress.
    pub ease: f32,
    /// Eased text progress.
    pub text_ease: f32,
    /// Shared rotation angle.
    pub rotation: f32,
    /// Discrete state of this frame.
    pub state: FormationState,
    /// Simulated time.
    pub elapsed: f64,
}

/// Write every group's transforms for one frame. Pure in `snapshot`, `cfg` and `params`.
pub fn write_frame(
    snapshot: &FormationSnapshot,
    cfg: &EngineConfig,
    params: FrameParams,
    out: &mut FrameOutput,
) {
    let FrameParams {
        ease,
        text_ease,
        rotation,
        state,
        elapsed,
    } = params;
    let fade = 1.0 - text_ease;

    let foliage = &snapshot.foliage;
    let foliage_motion = GroupMotion {
        twist: cfg.foliage.twist,
        drift: cfg.foliage.chaos_drift,
    };
    out.foliage.resize(foliage.len(), Vec3::ZERO);
    for (slot, (chaos, tree, text, _)) in out.foliage.iter_mut().zip(foliage.iter()) {
        let p = vortex_blend(chaos, tree, ease, rotation, foliage_motion);
        *slot = p.position.lerp(text, text_ease);
    }

    let lights = &snapshot.lights;
    let light_motion = GroupMotion {
        twist: cfg.lights.twist,
        drift: cfg.lights.chaos_drift,
    };
    out.lights.resize(lights.len(), LightInstance::default());
    for (slot, (chaos, tree, _, size)) in out.lights.iter_mut().zip(lights.iter()) {
        let p = vortex_blend(chaos, tree, ease, rotation, light_motion);
        *slot = LightInstance {
            position: p.position,
            scale: size * fade,
        };
    }

    let photo_motion = GroupMotion {
        twist: cfg.photos.twist,
        drift: cfg.photos.chaos_drift,
    };
    let label_opacity = if state.is_formed() { 1.0 } else { 0.9 };
    let selected = out.selected.as_deref();
    out.photos.resize(snapshot.photos.len(), PhotoTransform::default());
    for (i, (slot, photo)) in out.photos.iter_mut().zip(&snapshot.photos).enumerate() {
        let p = vortex_blend(
            photo.chaos_position,
            photo.tree_position,
            ease,
            rotation,
            photo_motion,
        );
        let facing = -p.angle + FRAC_PI_2;
        *slot = PhotoTransform {
            position: p.position,
            rotation: Vec3::new(
                lerp(photo.chaos_rotation.x, photo.tree_rotation.x, ease),
                lerp(photo.chaos_rotation.y, facing, ease),
                lerp(photo.chaos_rotation.z, photo.tree_rotation.z, ease),
            ),
            scale: (photo.scale * fade).max(cfg.photos.min_live_scale),
            selected: selected == Some(photo.image_ref.as_str()),
            label_opacity,
            shimmer_time: elapsed + i as f64,
        };
    }

    out.trunk = TrunkTransform {
        scale_y: Ease::Smoothstep.apply(ease),
        position_y: lerp(cfg.trunk.hidden_y, cfg.trunk.formed_y, ease),
        rotation_y: rotation,
        opacity: lerp(0.0, cfg.trunk.opacity, ease) * fade,
    };
    out.rotation = rotation;
    out.elapsed = elapsed;
    out.guide_visible = state.is_formed();
}

/// Owner of all mutable animation state; advances once per tick.
#[derive(Clone, Debug)]
pub struct BlendDriver {
    snapshot: Arc<FormationSnapshot>,
    cfg: EngineConfig,
    formed: DampedProgress,
    text: DampedProgress,
    rotation: f32,
    pan: PanSmoother,
    selector: PhotoSelector,
    ticks: u64,
    out: FrameOutput,
}

impl BlendDriver {
    /// Start scattered with zero rotation, zero pan and nothing selected.
    pub fn new(snapshot: Arc<FormationSnapshot>, cfg: &EngineConfig) -> Self {
        let foliage = &snapshot.foliage;
        let out = FrameOutput {
            foliage_sizes: foliage.sizes[..foliage.len()].to_vec(),
            ..FrameOutput::default()
        };
        Self {
            formed: DampedProgress::new(cfg.motion.formed_rate),
            text: DampedProgress::new(cfg.motion.text_rate),
            rotation: 0.0,
            pan: PanSmoother::new(cfg.motion.pan_blend),
            selector: PhotoSelector::new(&cfg.selection),
            ticks: 0,
            snapshot,
            cfg: cfg.clone(),
            out,
        }
    }

    /// Shared formation data.
    pub fn snapshot(&self) -> &Arc<FormationSnapshot> {
        &self.snapshot
    }

    /// Most recent frame.
    pub fn output(&self) -> &FrameOutput {
        &self.out
    }

    /// Rotation angle the next frame will use.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Image reference of the selected photo.
    pub fn selected(&self) -> Option<&str> {
        self.selector.selected()
    }

    /// Advance by one tick and return the new frame.
    ///
    /// Order: progress damping, pan smoothing, transforms (using the rotation accumulated so
    /// far), selection against the fresh transforms, then rotation accumulation.
    pub fn tick(&mut self, input: &TickInput) -> &FrameOutput {
        let dt = if input.delta.is_finite() {
            input.delta.max(0.0)
        } else {
            0.0
        };
        let ease_fn = self.cfg.motion.ease;

        let formed = self.formed.step(input.state.is_formed(), dt);
        let text = self.text.step(input.text_mode, dt);
        let params = FrameParams {
            ease: ease_fn.apply(formed),
            text_ease: ease_fn.apply(text),
            rotation: self.rotation,
            state: input.state,
            elapsed: input.elapsed,
        };
        self.out.pan = self.pan.step(input.pan_target);
        self.out.formed_progress = formed;
        self.out.text_progress = text;
        self.out.formed_ease = params.ease;
        self.out.text_ease = params.text_ease;

        write_frame(&self.snapshot, &self.cfg, params, &mut self.out);
        self.update_selection(input);

        let speed = if input.state.is_formed() {
            input.rotation_speed + input.rotation_boost
        } else {
            self.cfg.motion.idle_spin
        };
        if speed.is_finite() {
            self.rotation += speed * dt;
        }
        self.ticks += 1;
        &self.out
    }

    fn update_selection(&mut self, input: &TickInput) {
        let triggered = self.selector.observe(input.selection_trigger);
        if !triggered || input.state.is_formed() {
            return;
        }
        let Some(pointer) = input.pointer else {
            return;
        };
        if self.selector.cooling_down(input.elapsed) {
            return;
        }

        let group = pan_translation(self.out.pan) + self.cfg.scene_offset;
        let hit = nearest_in_screen(
            pointer,
            self.out.photos.iter().map(|p| group + p.position),
            input.view_proj,
            self.selector.threshold(),
        )
        .map(|i| self.snapshot.photos[i].image_ref.as_str());

        if self.selector.apply(hit, input.elapsed) {
            self.out.selected = self.selector.selected().map(str::to_owned);
            let selected = self.out.selected.as_deref();
            for (slot, photo) in self.out.photos.iter_mut().zip(&self.snapshot.photos) {
                slot.selected = selected.is_some_and(|s| s == photo.image_ref);
            }
        }
    }
}

/// Pan offset as a group translation in world space.
pub fn pan_translation(pan: Vec2) -> Vec3 {
    Vec3::new(pan.x, pan.y, 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/driver/blend.rs"]
mod tests;
