/// Frontend wiring constants: canvas ids, layer stacking and startup state.
// Layer canvas element ids, keyed to the instance ids in `core::layers`.
pub const HEADER_CANVAS_ID: &str = "vib3-header-canvas";
pub const CONTENT_CANVAS_ID: &str = "vib3-content-canvas";
pub const AMBIENT_CANVAS_ID: &str = "vib3-ambient-canvas";
pub const ACCENT_CANVAS_ID: &str = "vib3-accent-canvas";

// Stacking order of the fullscreen layers (ambient sits behind the page).
pub const HEADER_Z_INDEX: i32 = 1;
pub const CONTENT_Z_INDEX: i32 = 0;
pub const AMBIENT_Z_INDEX: i32 = -1;
pub const ACCENT_Z_INDEX: i32 = 4;

// Accent corner panel size (CSS pixels).
pub const ACCENT_WIDTH_PX: u32 = 300;
pub const ACCENT_HEIGHT_PX: u32 = 200;

// Section applied before the first navigation event.
pub const INITIAL_SECTION: &str = "home";
