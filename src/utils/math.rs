//! Additional math helpers layered on top of `glam`.

use glam::DVec2;

/// Signed angle of an offset vector, measured from the +Y axis and
/// increasing toward +X. `(0, r)` maps to 0, `(r, 0)` to pi/2.
pub fn polar_angle(offset: DVec2) -> f64 {
    offset.x.atan2(offset.y)
}

/// Offset covered by a rod of the given length at the given angle.
/// Inverse of [`polar_angle`] for positive radii.
pub fn polar_offset(radius: f64, theta: f64) -> DVec2 {
    DVec2::new(radius * theta.sin(), radius * theta.cos())
}
