// Engine tuning constants shared by the resolver, tracker and reactive path.
//
// These express intended behavior (valid parameter ranges, decay time
// constants, velocity-to-delta mappings) and keep magic numbers out of the
// code.

// Valid ranges for the scalar visual parameters. Resolution and the global
// effects clamp into these; reactive rules carry their own tighter clamps.
pub const GRID_DENSITY_RANGE: (f32, f32) = (4.0, 25.0);
pub const MORPH_FACTOR_RANGE: (f32, f32) = (0.0, 1.0);
pub const DIMENSION_RANGE: (f32, f32) = (3.0, 4.8);
pub const GLITCH_INTENSITY_RANGE: (f32, f32) = (0.0, 1.0);
pub const ROTATION_SPEED_RANGE: (f32, f32) = (0.0, 2.0);
pub const INTENSITY_RANGE: (f32, f32) = (0.0, 1.5);

// Exponential decay rates for the interaction velocity signals, applied once
// per frame as `v *= (-dt * rate).exp()`.
pub const MOUSE_VELOCITY_DECAY_PER_SEC: f32 = 3.0;
pub const SCROLL_VELOCITY_DECAY_PER_SEC: f32 = 2.2;

// Normalisation applied to the raw velocities before they feed the master
// deltas: mouse velocity is px/ms, scroll velocity is px per event.
pub const MOUSE_VELOCITY_NORM: f32 = 0.05;
pub const SCROLL_VELOCITY_NORM: f32 = 0.01;

// Spans of the per-tick master deltas derived from the normalised velocities.
pub const GRID_DELTA_SPAN: f32 = 2.0;
pub const MORPH_DELTA_SPAN: f32 = 0.05;
pub const GLITCH_DELTA_SPAN: f32 = 0.05;
pub const ROTATION_DELTA_SPAN: f32 = 0.1;
pub const INTENSITY_DELTA_SPAN: f32 = 0.1;
