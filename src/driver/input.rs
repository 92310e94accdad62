use crate::foundation::core::{Mat4, Vec2};

/// Discrete, externally controlled formation target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormationState {
    /// Scattered cloud; photos are selectable.
    #[default]
    Scattered,
    /// Cone formation; rotation follows the configured speed.
    Formed,
}

impl FormationState {
    /// `true` for [`FormationState::Formed`].
    pub fn is_formed(self) -> bool {
        self == Self::Formed
    }
}

/// Immutable snapshot of external state, read once at the start of a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickInput {
    /// Discrete formation target.
    pub state: FormationState,
    /// Text overlay toggle.
    pub text_mode: bool,
    /// Rotation speed while formed (radians per second).
    pub rotation_speed: f32,
    /// Extra rotation speed added on top of `rotation_speed`.
    pub rotation_boost: f32,
    /// Pan target for the whole formation group.
    pub pan_target: Vec2,
    /// Pointer in normalized `[0, 1]²` screen space, origin top-left.
    pub pointer: Option<Vec2>,
    /// Counter that changes once per selection request.
    pub selection_trigger: u64,
    /// Simulated time since start (seconds).
    pub elapsed: f64,
    /// Time since the previous tick (seconds).
    pub delta: f32,
    /// World-to-clip matrix of the viewing camera, used for selection.
    pub view_proj: Mat4,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            state: FormationState::Scattered,
            text_mode: false,
            rotation_speed: 0.0,
            rotation_boost: 0.0,
            pan_target: Vec2::ZERO,
            pointer: None,
            selection_trigger: 0,
            elapsed: 0.0,
            delta: 0.0,
            view_proj: Mat4::IDENTITY,
        }
    }
}

impl TickInput {
    /// Same inputs advanced by one step of `delta` seconds.
    pub fn advanced(mut self, delta: f32) -> Self {
        self.delta = delta;
        self.elapsed += f64::from(delta);
        self
    }
}
