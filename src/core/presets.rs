use fnv::FnvHashMap;
use glam::Vec3;

use super::config::{Geometry, LatticeStyle, VisualConfig};

/// Navigation sections with a master preset, in display order.
pub const SECTION_KEYS: [&str; 5] = ["home", "articles", "videos", "podcasts", "ema"];

/// Master style preset per navigation section. Built once at startup and
/// immutable afterwards; every supported section key maps to a complete
/// config.
pub fn master_presets() -> FnvHashMap<&'static str, VisualConfig> {
    let mut presets = FnvHashMap::default();
    presets.insert(
        "home",
        VisualConfig {
            geometry: Geometry::Hypercube,
            base_color: Vec3::new(1.0, 0.0, 1.0), // magenta
            grid_density: 12.0,
            morph_factor: 0.5,
            dimension: 3.5,
            glitch_intensity: 0.3,
            rotation_speed: 0.5,
            intensity: 0.8,
            lattice_style: LatticeStyle::Hybrid,
        },
    );
    presets.insert(
        "articles",
        VisualConfig {
            geometry: Geometry::Tetrahedron,
            base_color: Vec3::new(0.0, 1.0, 1.0), // cyan
            grid_density: 16.0,
            morph_factor: 0.2,
            dimension: 3.0,
            glitch_intensity: 0.1,
            rotation_speed: 0.3,
            intensity: 0.9,
            lattice_style: LatticeStyle::Wireframe,
        },
    );
    presets.insert(
        "videos",
        VisualConfig {
            geometry: Geometry::Sphere,
            base_color: Vec3::new(1.0, 0.2, 0.4), // pink-red
            grid_density: 15.0,
            morph_factor: 0.7,
            dimension: 3.8,
            glitch_intensity: 0.2,
            rotation_speed: 0.4,
            intensity: 0.7,
            lattice_style: LatticeStyle::Solid,
        },
    );
    presets.insert(
        "podcasts",
        VisualConfig {
            geometry: Geometry::Torus,
            base_color: Vec3::new(1.0, 0.5, 0.0), // orange
            grid_density: 10.0,
            morph_factor: 0.6,
            dimension: 3.3,
            glitch_intensity: 0.4,
            rotation_speed: 0.6,
            intensity: 0.85,
            lattice_style: LatticeStyle::Hybrid,
        },
    );
    presets.insert(
        "ema",
        VisualConfig {
            geometry: Geometry::Fractal,
            base_color: Vec3::new(0.5, 0.0, 1.0), // purple
            grid_density: 20.0,
            morph_factor: 0.9,
            dimension: 3.6,
            glitch_intensity: 0.6,
            rotation_speed: 0.2,
            intensity: 1.0,
            lattice_style: LatticeStyle::Hybrid,
        },
    );
    presets
}
