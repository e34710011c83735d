use std::time::Duration;

use super::config::ScalarParam;
use super::constants::*;

/// One raw pointer sample, as handed over by the input layer.
#[derive(Clone, Copy, Debug)]
pub struct MouseSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollSample {
    pub scroll_top: f32,
    pub timestamp_ms: f64,
}

/// Per-parameter deltas derived from the velocity signals once per tick.
/// Reactions reference these by name via `DeltaSource::MasterDelta`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MasterDeltas {
    pub grid_density: f32,
    pub morph_factor: f32,
    pub glitch_intensity: f32,
    pub rotation_speed: f32,
    pub intensity: f32,
}

impl MasterDeltas {
    pub fn get(&self, param: ScalarParam) -> f32 {
        match param {
            ScalarParam::GridDensity => self.grid_density,
            ScalarParam::MorphFactor => self.morph_factor,
            ScalarParam::GlitchIntensity => self.glitch_intensity,
            ScalarParam::RotationSpeed => self.rotation_speed,
            ScalarParam::Intensity => self.intensity,
            // No master delta is derived for dimension; hold shifts come
            // from the renderer side, not the reactive path.
            ScalarParam::Dimension => 0.0,
        }
    }
}

/// Snapshot of the interaction signals for one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignalFrame {
    pub mouse_velocity: f32,
    pub scroll_velocity: f32,
    pub deltas: MasterDeltas,
}

/// Records process-wide mouse/scroll velocity from raw input samples.
/// Velocities decay multiplicatively once per frame so reactive nudges taper
/// off when input stops.
#[derive(Debug, Default)]
pub struct InteractionTracker {
    mouse_velocity: f32,
    scroll_velocity: f32,
    last_mouse: Option<MouseSample>,
    last_scroll: Option<ScrollSample>,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_mouse_sample(&mut self, sample: MouseSample) {
        if let Some(prev) = self.last_mouse {
            let dt_ms = sample.timestamp_ms - prev.timestamp_ms;
            if dt_ms > 0.0 {
                let dx = sample.x - prev.x;
                let dy = sample.y - prev.y;
                let distance = (dx * dx + dy * dy).sqrt();
                self.mouse_velocity = distance / dt_ms as f32;
            }
        }
        self.last_mouse = Some(sample);
    }

    pub fn on_scroll_sample(&mut self, sample: ScrollSample) {
        if let Some(prev) = self.last_scroll {
            self.scroll_velocity = (sample.scroll_top - prev.scroll_top).abs();
        }
        self.last_scroll = Some(sample);
    }

    /// Frame-rate independent exponential decay of both velocity signals.
    pub fn decay(&mut self, dt: Duration) {
        let dt_sec = dt.as_secs_f32();
        self.mouse_velocity *= (-dt_sec * MOUSE_VELOCITY_DECAY_PER_SEC).exp();
        self.scroll_velocity *= (-dt_sec * SCROLL_VELOCITY_DECAY_PER_SEC).exp();
    }

    pub fn mouse_velocity(&self) -> f32 {
        self.mouse_velocity
    }

    pub fn scroll_velocity(&self) -> f32 {
        self.scroll_velocity
    }

    /// Current signals plus the fixed-formula master deltas.
    pub fn signal_frame(&self) -> SignalFrame {
        let mouse_n = (self.mouse_velocity * MOUSE_VELOCITY_NORM).min(1.0);
        let scroll_n = (self.scroll_velocity * SCROLL_VELOCITY_NORM).min(1.0);
        SignalFrame {
            mouse_velocity: self.mouse_velocity,
            scroll_velocity: self.scroll_velocity,
            deltas: MasterDeltas {
                grid_density: (mouse_n + scroll_n) * GRID_DELTA_SPAN,
                morph_factor: scroll_n * MORPH_DELTA_SPAN,
                glitch_intensity: mouse_n * GLITCH_DELTA_SPAN,
                rotation_speed: scroll_n * ROTATION_DELTA_SPAN,
                intensity: (mouse_n + scroll_n) * INTENSITY_DELTA_SPAN,
            },
        }
    }
}
