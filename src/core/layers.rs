use std::time::Duration;

use glam::Vec3;
use smallvec::smallvec;

use super::config::{Geometry, LatticeStyle, ScalarParam, VisualConfig};
use super::instance::InstanceSpec;
use super::rules::{
    AdjustTarget, ColorRule, DeltaSource, DerivationRules, Direction, EventReactions,
    ParamReaction, ReactionRule, ScalarRule, SelectRule,
};

/// The standard four-layer stack: header strip, content wash, ambient
/// background and the accent corner. Ids double as the canvas lookup keys on
/// the web side.
pub fn standard_layers() -> Vec<InstanceSpec> {
    vec![header_layer(), content_layer(), ambient_layer(), accent_layer()]
}

/// Most prominent layer; tracks the master closely and reacts to both scroll
/// and pointer movement. Also the only layer that permits the color and
/// geometry effect commands.
fn header_layer() -> InstanceSpec {
    InstanceSpec {
        id: "header",
        base: VisualConfig {
            geometry: Geometry::Hypercube,
            base_color: Vec3::new(1.0, 0.0, 1.0),
            grid_density: 15.0,
            morph_factor: 0.1,
            dimension: 3.2,
            glitch_intensity: 0.1,
            rotation_speed: 0.3,
            intensity: 0.3,
            lattice_style: LatticeStyle::Hybrid,
        },
        rules: DerivationRules {
            intensity: ScalarRule::Scaled(0.8),
            grid_density: ScalarRule::Scaled(1.2),
            morph_factor: ScalarRule::Fixed,
            ..Default::default()
        },
        reactions: EventReactions {
            scroll: smallvec![
                ParamReaction {
                    param: ScalarParam::GridDensity,
                    rule: ReactionRule {
                        source: DeltaSource::MasterDelta(ScalarParam::GridDensity),
                        multiplier: 2.0,
                        direction: Direction::Direct,
                        min: Some(10.0),
                        max: Some(25.0),
                    },
                },
                ParamReaction {
                    param: ScalarParam::RotationSpeed,
                    rule: ReactionRule {
                        source: DeltaSource::MasterDelta(ScalarParam::RotationSpeed),
                        multiplier: 1.5,
                        direction: Direction::Direct,
                        min: Some(0.1),
                        max: Some(1.0),
                    },
                },
            ],
            mouse_move: smallvec![ParamReaction {
                param: ScalarParam::GlitchIntensity,
                rule: ReactionRule {
                    source: DeltaSource::MasterDelta(ScalarParam::GlitchIntensity),
                    multiplier: 0.8,
                    direction: Direction::Direct,
                    min: Some(0.0),
                    max: Some(0.5),
                },
            }],
        },
        allowed_adjustments: smallvec![
            AdjustTarget::BaseColor,
            AdjustTarget::Geometry,
            AdjustTarget::Scalar(ScalarParam::Intensity),
            AdjustTarget::Scalar(ScalarParam::GridDensity),
            AdjustTarget::Scalar(ScalarParam::RotationSpeed),
            AdjustTarget::Scalar(ScalarParam::GlitchIntensity),
        ],
        transition_duration: Duration::from_millis(1200),
    }
}

/// Mid-intensity wash behind the content column; keeps its own cyan color.
fn content_layer() -> InstanceSpec {
    InstanceSpec {
        id: "content",
        base: VisualConfig {
            geometry: Geometry::Tetrahedron,
            base_color: Vec3::new(0.0, 1.0, 1.0),
            grid_density: 12.0,
            morph_factor: 0.3,
            dimension: 3.0,
            glitch_intensity: 0.05,
            rotation_speed: 0.2,
            intensity: 0.15,
            lattice_style: LatticeStyle::Wireframe,
        },
        rules: DerivationRules {
            intensity: ScalarRule::Scaled(0.4),
            grid_density: ScalarRule::Scaled(0.8),
            base_color: ColorRule::Fixed,
            ..Default::default()
        },
        reactions: EventReactions {
            scroll: smallvec![ParamReaction {
                param: ScalarParam::GridDensity,
                rule: ReactionRule {
                    source: DeltaSource::MasterDelta(ScalarParam::GridDensity),
                    multiplier: 1.0,
                    direction: Direction::Direct,
                    min: Some(8.0),
                    max: Some(20.0),
                },
            }],
            mouse_move: smallvec![ParamReaction {
                param: ScalarParam::MorphFactor,
                rule: ReactionRule {
                    source: DeltaSource::MasterDelta(ScalarParam::MorphFactor),
                    multiplier: 0.5,
                    direction: Direction::Direct,
                    min: Some(0.1),
                    max: Some(0.7),
                },
            }],
        },
        allowed_adjustments: smallvec![
            AdjustTarget::Scalar(ScalarParam::Intensity),
            AdjustTarget::Scalar(ScalarParam::GridDensity),
            AdjustTarget::Scalar(ScalarParam::MorphFactor),
        ],
        transition_duration: Duration::from_millis(1000),
    }
}

/// Subtle full-screen background. Grid stays fixed; fast scrolling calms the
/// morphing down instead of exciting it.
fn ambient_layer() -> InstanceSpec {
    InstanceSpec {
        id: "ambient",
        base: VisualConfig {
            geometry: Geometry::Sphere,
            base_color: Vec3::new(0.8, 0.8, 1.0),
            grid_density: 8.0,
            morph_factor: 0.8,
            dimension: 3.1,
            glitch_intensity: 0.02,
            rotation_speed: 0.1,
            intensity: 0.05,
            lattice_style: LatticeStyle::Solid,
        },
        rules: DerivationRules {
            intensity: ScalarRule::Scaled(0.2),
            grid_density: ScalarRule::Fixed,
            morph_factor: ScalarRule::Scaled(1.5),
            ..Default::default()
        },
        reactions: EventReactions {
            scroll: smallvec![ParamReaction {
                param: ScalarParam::MorphFactor,
                rule: ReactionRule {
                    source: DeltaSource::ScrollVelocity,
                    multiplier: 0.01,
                    direction: Direction::Inverse,
                    min: Some(0.5),
                    max: Some(1.0),
                },
            }],
            mouse_move: smallvec![],
        },
        allowed_adjustments: smallvec![
            AdjustTarget::Scalar(ScalarParam::Intensity),
            AdjustTarget::Scalar(ScalarParam::MorphFactor),
        ],
        transition_duration: Duration::from_millis(1500),
    }
}

/// Corner accent: always a dense fractal in its own purple, just denser and
/// faster when the master is.
fn accent_layer() -> InstanceSpec {
    InstanceSpec {
        id: "accent",
        base: VisualConfig {
            geometry: Geometry::Fractal,
            base_color: Vec3::new(0.5, 0.0, 1.0),
            grid_density: 20.0,
            morph_factor: 0.6,
            dimension: 3.7,
            glitch_intensity: 0.6,
            rotation_speed: 0.8,
            intensity: 0.9,
            lattice_style: LatticeStyle::Hybrid,
        },
        rules: DerivationRules {
            geometry: SelectRule::Fixed,
            base_color: ColorRule::Fixed,
            grid_density: ScalarRule::Scaled(1.5),
            rotation_speed: ScalarRule::Scaled(1.2),
            intensity: ScalarRule::Scaled(1.1),
            lattice_style: SelectRule::Fixed,
            ..Default::default()
        },
        reactions: EventReactions::default(),
        allowed_adjustments: smallvec![
            AdjustTarget::Scalar(ScalarParam::Intensity),
            AdjustTarget::Scalar(ScalarParam::GridDensity),
            AdjustTarget::Scalar(ScalarParam::RotationSpeed),
        ],
        transition_duration: Duration::from_millis(600),
    }
}
