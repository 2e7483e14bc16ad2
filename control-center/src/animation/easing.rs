//! Easing curves
//!
//! Named after their timeline-library counterparts: `power1.out` is a
//! quadratic ease-out, `power3.out` quartic, `power4.out` quintic.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Power1Out,
    Power3Out,
    Power4Out,
    /// Overshoots past the target before settling; the value is the overshoot strength
    BackOut(f32),
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Power1Out => 1.0 - (1.0 - t).powi(2),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::Power4Out => 1.0 - (1.0 - t).powi(5),
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}
