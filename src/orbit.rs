use std::f64::consts::PI;

// -------------------- Shared math --------------------
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Vec2 {
    pub(crate) x: f64,
    pub(crate) y: f64,
}
impl Vec2 {
    pub(crate) const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub(crate) fn add(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x + o.x, y: self.y + o.y }
    }
}

fn deg(x: f64) -> f64 {
    x * PI / 180.0
}

/// Planar offset of a point on a circle of `radius`, `angle_deg` degrees
/// counter-clockwise from +x. Any real angle is accepted.
pub(crate) fn position(radius: f64, angle_deg: f64) -> Vec2 {
    let (s, c) = deg(angle_deg).sin_cos();
    Vec2 { x: radius * c, y: radius * s }
}

/// Angle (degrees) reached after `days` on a circular orbit of `period_days`,
/// starting from `start_deg`. One full turn per period.
pub(crate) fn orbit_angle(start_deg: f64, period_days: f64, days: f64) -> f64 {
    start_deg + days.rem_euclid(period_days) / period_days * 360.0
}
