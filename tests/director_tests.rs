// Host-side tests for master style coordination and global effect dispatch.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod engine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod tracker {
        include!("../src/core/tracker.rs");
    }
    pub mod rules {
        include!("../src/core/rules.rs");
    }
    pub mod presets {
        include!("../src/core/presets.rs");
    }
    pub mod resolver {
        include!("../src/core/resolver.rs");
    }
    pub mod transition {
        include!("../src/core/transition.rs");
    }
    pub mod effects {
        include!("../src/core/effects.rs");
    }
    pub mod instance {
        include!("../src/core/instance.rs");
    }
    pub mod director {
        include!("../src/core/director.rs");
    }
    pub mod layers {
        include!("../src/core/layers.rs");
    }
}

use std::time::Duration;

use engine::config::{Geometry, ScalarParam, VisualConfig};
use engine::director::Director;
use engine::effects::GlobalEffect;
use engine::instance::InstanceSpec;
use engine::layers::standard_layers;
use engine::presets::master_presets;
use engine::resolver::resolve_target;
use engine::rules::{AdjustTarget, DerivationRules, ScalarRule};
use glam::Vec3;
use smallvec::smallvec;

const FRAME: Duration = Duration::from_millis(16);

fn simple_instance(id: &'static str, rules: DerivationRules) -> InstanceSpec {
    InstanceSpec {
        id,
        base: VisualConfig {
            grid_density: 20.0,
            ..Default::default()
        },
        rules,
        reactions: Default::default(),
        allowed_adjustments: smallvec![
            AdjustTarget::BaseColor,
            AdjustTarget::Geometry,
            AdjustTarget::Scalar(ScalarParam::GridDensity),
        ],
        transition_duration: Duration::from_millis(160),
    }
}

fn settle(director: &mut Director) {
    for _ in 0..100 {
        director.tick(FRAME);
        if !director.in_transition() {
            return;
        }
    }
    panic!("master transition never settled");
}

#[test]
fn standard_layers_settle_on_resolved_targets() {
    let mut director = Director::new();
    for spec in standard_layers() {
        director.add_instance(spec);
    }
    director.apply_master_style("articles");
    assert!(director.in_transition());

    for _ in 0..200 {
        director.tick(FRAME);
    }
    assert!(!director.in_transition());
    assert_eq!(director.current_style(), "articles");

    let presets = master_presets();
    let master = presets["articles"];
    for spec in standard_layers() {
        let expected = resolve_target(&master, &spec.base, &spec.rules);
        let got = director.instance_config(spec.id).unwrap();
        assert_eq!(got, expected, "layer '{}' off target", spec.id);
    }
}

#[test]
fn master_grid_multiplier_scenario() {
    // master home preset has gridDensity 12.0; a 0.5 multiplier lands on 6.0
    let mut director = Director::new();
    director.add_instance(simple_instance(
        "half",
        DerivationRules {
            grid_density: ScalarRule::Scaled(0.5),
            ..Default::default()
        },
    ));
    director.apply_master_style("home");
    settle(&mut director);
    assert_eq!(director.instance_config("half").unwrap().grid_density, 6.0);
}

#[test]
fn fixed_rule_scenario_ignores_master() {
    let mut director = Director::new();
    director.add_instance(simple_instance(
        "pinned",
        DerivationRules {
            grid_density: ScalarRule::Fixed,
            ..Default::default()
        },
    ));
    director.apply_master_style("home");
    settle(&mut director);
    assert_eq!(director.instance_config("pinned").unwrap().grid_density, 20.0);
}

#[test]
fn reapplying_active_style_is_a_noop() {
    let mut director = Director::new();
    director.add_instance(simple_instance("a", Default::default()));
    director.apply_master_style("home");
    settle(&mut director);

    director.apply_master_style("home");
    assert!(!director.in_transition());
    assert!(!director.instance("a").unwrap().in_transition());
}

#[test]
fn style_change_is_ignored_while_one_is_in_flight() {
    let mut director = Director::new();
    director.add_instance(simple_instance("a", Default::default()));

    director.apply_master_style("home");
    director.tick(FRAME);
    assert!(director.in_transition());

    director.apply_master_style("ema");
    settle(&mut director);
    assert_eq!(director.current_style(), "home");
    let home = master_presets()["home"];
    assert_eq!(director.instance_config("a").unwrap(), home);
}

#[test]
fn unknown_section_key_is_ignored() {
    let mut director = Director::new();
    director.add_instance(simple_instance("a", Default::default()));
    director.apply_master_style("home");
    settle(&mut director);

    director.apply_master_style("atlantis");
    assert!(!director.in_transition());
    assert_eq!(director.current_style(), "home");
}

#[test]
fn transition_finishes_no_later_than_duration_plus_one_frame() {
    let mut director = Director::new();
    director.add_instance(simple_instance("a", Default::default()));
    director.apply_master_style("videos");

    director.tick(Duration::from_millis(159));
    assert!(director.in_transition());
    director.tick(FRAME);
    assert!(!director.in_transition());
    assert_eq!(
        director.instance_config("a").unwrap(),
        master_presets()["videos"]
    );
}

#[test]
fn invert_colors_respects_allow_list() {
    let mut director = Director::new();
    director.add_instance(simple_instance("open", Default::default()));
    let mut locked = simple_instance("locked", Default::default());
    locked.allowed_adjustments = smallvec![];
    director.add_instance(locked);

    director.apply_master_style("home");
    settle(&mut director);
    let before = director.instance_config("locked").unwrap();

    director.dispatch_effect(&GlobalEffect::InvertColors);
    let open = director.instance_config("open").unwrap();
    let home = master_presets()["home"];
    assert_eq!(open.base_color, Vec3::ONE - home.base_color);
    assert_eq!(director.instance_config("locked").unwrap(), before);
}

#[test]
fn grid_multiply_effect_clamps_to_range() {
    let mut director = Director::new();
    director.add_instance(simple_instance("a", Default::default()));
    director.apply_master_style("ema");
    settle(&mut director);

    director.dispatch_effect(&GlobalEffect::MultiplyGridDensity { factor: 10.0 });
    let (_, max) = ScalarParam::GridDensity.range();
    assert_eq!(director.instance_config("a").unwrap().grid_density, max);
}

#[test]
fn cycle_geometry_advances_and_wraps() {
    let mut director = Director::new();
    director.add_instance(simple_instance("a", Default::default()));
    director.apply_master_style("ema");
    settle(&mut director);
    assert_eq!(director.instance_config("a").unwrap().geometry, Geometry::Fractal);

    director.dispatch_effect(&GlobalEffect::CycleGeometry);
    assert_eq!(
        director.instance_config("a").unwrap().geometry,
        Geometry::Hypercube
    );
}

#[test]
fn swap_exchanges_configs_and_rules() {
    let mut director = Director::new();
    director.add_instance(simple_instance(
        "a",
        DerivationRules {
            grid_density: ScalarRule::Scaled(0.5),
            ..Default::default()
        },
    ));
    director.add_instance(simple_instance(
        "b",
        DerivationRules {
            grid_density: ScalarRule::Fixed,
            ..Default::default()
        },
    ));
    director.apply_master_style("home");
    settle(&mut director);

    let a_before = director.instance_config("a").unwrap();
    let b_before = director.instance_config("b").unwrap();
    director.dispatch_effect(&GlobalEffect::SwapInstanceConfigs {
        first: "a".to_owned(),
        second: "b".to_owned(),
    });
    assert_eq!(director.instance_config("a").unwrap(), b_before);
    assert_eq!(director.instance_config("b").unwrap(), a_before);

    // The exchanged rules follow the next master change.
    director.apply_master_style("articles");
    settle(&mut director);
    let articles = master_presets()["articles"];
    // "a" now carries the fixed rule, "b" the 0.5 multiplier.
    assert_eq!(director.instance_config("a").unwrap().grid_density, 20.0);
    assert_eq!(
        director.instance_config("b").unwrap().grid_density,
        articles.grid_density * 0.5
    );
}

#[test]
fn swap_with_unknown_instance_is_ignored() {
    let mut director = Director::new();
    director.add_instance(simple_instance("a", Default::default()));
    director.apply_master_style("home");
    settle(&mut director);
    let before = director.instance_config("a").unwrap();

    director.dispatch_effect(&GlobalEffect::SwapInstanceConfigs {
        first: "a".to_owned(),
        second: "ghost".to_owned(),
    });
    assert_eq!(director.instance_config("a").unwrap(), before);
}
