pub mod config;
pub mod constants;
pub mod director;
pub mod effects;
pub mod instance;
pub mod layers;
pub mod presets;
pub mod resolver;
pub mod rules;
pub mod tracker;
pub mod transition;

pub use config::*;
pub use director::*;
pub use effects::*;
pub use instance::*;
pub use layers::*;
pub use presets::*;
pub use resolver::*;
pub use rules::*;
pub use tracker::*;
pub use transition::*;

// Shader bundled as a string constant
pub static LATTICE_WGSL: &str = include_str!("../../shaders/lattice.wgsl");
