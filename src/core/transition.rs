use std::time::Duration;

use super::config::VisualConfig;

/// Two-piece cubic ease-in-out. Continuous at the midpoint: `ease(0.5) == 0.5`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An in-flight tween of one instance's live config toward a resolved target.
///
/// Stepped with the frame loop's `dt`; there is no cancellation — starting a
/// new transition simply captures whatever the live values currently are as
/// its new start point.
#[derive(Clone, Debug)]
pub struct Transition {
    start: VisualConfig,
    target: VisualConfig,
    duration: Duration,
    elapsed: Duration,
}

impl Transition {
    pub fn new(start: VisualConfig, target: VisualConfig, duration: Duration) -> Self {
        Self {
            start,
            target,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance by `dt` and write the interpolated sample into `live`.
    /// Returns true once finished; the final sample snaps exactly to the
    /// target to eliminate floating-point drift.
    pub fn advance(&mut self, dt: Duration, live: &mut VisualConfig) -> bool {
        self.elapsed += dt;
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        if progress >= 1.0 {
            *live = self.target;
            return true;
        }

        let eased = ease_in_out_cubic(progress);
        let mut sample = self.start;
        sample.base_color = self.start.base_color.lerp(self.target.base_color, eased);
        sample.grid_density = lerp(self.start.grid_density, self.target.grid_density, eased);
        sample.morph_factor = lerp(self.start.morph_factor, self.target.morph_factor, eased);
        sample.dimension = lerp(self.start.dimension, self.target.dimension, eased);
        sample.glitch_intensity = lerp(
            self.start.glitch_intensity,
            self.target.glitch_intensity,
            eased,
        );
        sample.rotation_speed = lerp(self.start.rotation_speed, self.target.rotation_speed, eased);
        sample.intensity = lerp(self.start.intensity, self.target.intensity, eased);
        // Discrete fields cannot interpolate; they switch at the midpoint.
        if progress >= 0.5 {
            sample.geometry = self.target.geometry;
            sample.lattice_style = self.target.lattice_style;
        }
        *live = sample;
        false
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
