// Host-side tests for the eased transition engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod engine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod transition {
        include!("../src/core/transition.rs");
    }
}

use std::time::Duration;

use engine::config::{Geometry, LatticeStyle, VisualConfig};
use engine::transition::{ease_in_out_cubic, Transition};
use glam::Vec3;

fn start_config() -> VisualConfig {
    VisualConfig {
        geometry: Geometry::Hypercube,
        base_color: Vec3::new(1.0, 0.0, 1.0),
        grid_density: 10.0,
        morph_factor: 0.2,
        dimension: 3.0,
        glitch_intensity: 0.1,
        rotation_speed: 0.4,
        intensity: 0.5,
        lattice_style: LatticeStyle::Wireframe,
    }
}

fn target_config() -> VisualConfig {
    VisualConfig {
        geometry: Geometry::Sphere,
        base_color: Vec3::new(0.0, 1.0, 1.0),
        grid_density: 20.0,
        morph_factor: 0.8,
        dimension: 3.8,
        glitch_intensity: 0.3,
        rotation_speed: 0.6,
        intensity: 0.9,
        lattice_style: LatticeStyle::Solid,
    }
}

#[test]
fn easing_is_exactly_half_at_midpoint() {
    assert_eq!(ease_in_out_cubic(0.5), 0.5);
}

#[test]
fn easing_hits_both_endpoints() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
}

#[test]
fn easing_is_monotonic() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_in_out_cubic(i as f32 / 100.0);
        assert!(v >= prev, "easing decreased at step {i}");
        prev = v;
    }
}

#[test]
fn reaches_exact_target_at_duration_never_earlier() {
    let mut live = start_config();
    let mut t = Transition::new(live, target_config(), Duration::from_millis(1000));

    for _ in 0..9 {
        assert!(!t.advance(Duration::from_millis(100), &mut live));
        assert_ne!(live, target_config());
    }
    assert!(t.advance(Duration::from_millis(100), &mut live));
    assert_eq!(live, target_config());
}

#[test]
fn completion_snaps_float_fields_exactly() {
    let mut live = start_config();
    let mut t = Transition::new(live, target_config(), Duration::from_millis(700));
    // Uneven step sizes so the lerp would otherwise land off-target.
    while !t.advance(Duration::from_millis(33), &mut live) {}
    assert_eq!(live.grid_density, 20.0);
    assert_eq!(live.base_color, Vec3::new(0.0, 1.0, 1.0));
}

#[test]
fn scalars_interpolate_between_endpoints() {
    let mut live = start_config();
    let mut t = Transition::new(live, target_config(), Duration::from_millis(1000));
    t.advance(Duration::from_millis(500), &mut live);
    // eased(0.5) == 0.5, so the sample sits exactly halfway.
    assert!((live.grid_density - 15.0).abs() < 1e-4);
    assert!((live.intensity - 0.7).abs() < 1e-4);
}

#[test]
fn discrete_fields_switch_at_midpoint() {
    let mut live = start_config();
    let mut t = Transition::new(live, target_config(), Duration::from_millis(1000));

    t.advance(Duration::from_millis(400), &mut live);
    assert_eq!(live.geometry, Geometry::Hypercube);
    assert_eq!(live.lattice_style, LatticeStyle::Wireframe);

    t.advance(Duration::from_millis(200), &mut live);
    assert_eq!(live.geometry, Geometry::Sphere);
    assert_eq!(live.lattice_style, LatticeStyle::Solid);
}

#[test]
fn zero_duration_completes_on_first_step() {
    let mut live = start_config();
    let mut t = Transition::new(live, target_config(), Duration::ZERO);
    assert!(t.advance(Duration::from_millis(1), &mut live));
    assert_eq!(live, target_config());
}

#[test]
fn restart_mid_flight_uses_current_values_as_baseline() {
    let mut live = start_config();
    let mut t = Transition::new(live, target_config(), Duration::from_millis(1000));
    t.advance(Duration::from_millis(300), &mut live);
    let mid = live;

    // New transition back toward the original start, from wherever we are.
    let mut back = Transition::new(live, start_config(), Duration::from_millis(1000));
    back.advance(Duration::from_millis(1), &mut live);
    assert!((live.grid_density - mid.grid_density).abs() < 0.01);
}
