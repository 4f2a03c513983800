// Angles are degrees. The wheel's own frame puts angle 0 under the pointer
// (top) and grows clockwise; a positive rotation turns the wheel clockwise.

pub const FULL_TURN: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub start: f64,
    /// Alignment correction, always in `(-360, 0]`.
    pub delta: f64,
    pub target: f64,
    pub wedge_center: f64,
}

impl SpinPlan {
    /// Rotation at `progress` (0..=1) along a decelerating curve.
    pub fn rotation_at(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            return self.target;
        }
        let eased = ease_out_quart(progress.max(0.0));
        self.start + (self.target - self.start) * eased
    }
}

pub fn wedge_center(index: usize, span: f64) -> f64 {
    index as f64 * span + span / 2.0
}

/// Wheel-frame angle sitting under the pointer after rotating by `rotation`.
pub fn landing_angle(rotation: f64) -> f64 {
    (-rotation).rem_euclid(FULL_TURN)
}

/// Smallest clockwise-compatible correction that brings `wedge_center`
/// under the pointer from the wheel's current orientation.
pub fn alignment_delta(wedge_center: f64, current_rotation: f64) -> f64 {
    let current_angle = current_rotation.rem_euclid(FULL_TURN);
    let delta = -((wedge_center + current_angle).rem_euclid(FULL_TURN));
    if delta == 0.0 {
        // avoid -0.0
        0.0
    } else {
        delta
    }
}

pub fn plan_spin(index: usize, span: f64, current_rotation: f64, extra_turns: u32) -> SpinPlan {
    let center = wedge_center(index, span);
    let delta = alignment_delta(center, current_rotation);
    SpinPlan {
        start: current_rotation,
        delta,
        target: current_rotation + f64::from(extra_turns) * FULL_TURN + delta,
        wedge_center: center,
    }
}

/// 1 - (1 - t)^4
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Distance between two angles on the circle, in `[0, 180]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(FULL_TURN);
    diff.min(FULL_TURN - diff)
}
