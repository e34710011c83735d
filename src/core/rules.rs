use smallvec::SmallVec;

use super::config::ScalarParam;
use super::tracker::SignalFrame;

/// How an instance's scalar parameter tracks the master preset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScalarRule {
    /// Take the master value unchanged.
    #[default]
    Inherit,
    /// Keep the instance's own base value, ignoring the master.
    Fixed,
    /// Master value times a per-instance multiplier.
    Scaled(f32),
}

/// Color variant of [`ScalarRule`]: either master passthrough or the
/// instance's fixed override vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorRule {
    #[default]
    Inherit,
    Fixed,
}

/// Rule for the discrete fields (geometry, lattice style).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectRule {
    #[default]
    Inherit,
    Fixed,
}

/// One rule per config field. Every field is present, so resolution is a
/// total per-field match with no fallthrough chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivationRules {
    pub geometry: SelectRule,
    pub base_color: ColorRule,
    pub grid_density: ScalarRule,
    pub morph_factor: ScalarRule,
    pub dimension: ScalarRule,
    pub glitch_intensity: ScalarRule,
    pub rotation_speed: ScalarRule,
    pub intensity: ScalarRule,
    pub lattice_style: SelectRule,
}

impl DerivationRules {
    pub fn scalar(&self, param: ScalarParam) -> ScalarRule {
        match param {
            ScalarParam::GridDensity => self.grid_density,
            ScalarParam::MorphFactor => self.morph_factor,
            ScalarParam::Dimension => self.dimension,
            ScalarParam::GlitchIntensity => self.glitch_intensity,
            ScalarParam::RotationSpeed => self.rotation_speed,
            ScalarParam::Intensity => self.intensity,
        }
    }
}

/// Interaction tick categories that reactions can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    ScrollTick,
    MouseMoveTick,
}

/// Where a reaction reads its input scalar from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeltaSource {
    /// Raw decayed mouse velocity (px/ms).
    MouseVelocity,
    /// Raw decayed scroll velocity (px per event).
    ScrollVelocity,
    /// The named per-parameter delta derived from the velocities each tick.
    MasterDelta(ScalarParam),
}

impl DeltaSource {
    pub fn read(self, frame: &SignalFrame) -> f32 {
        match self {
            DeltaSource::MouseVelocity => frame.mouse_velocity,
            DeltaSource::ScrollVelocity => frame.scroll_velocity,
            DeltaSource::MasterDelta(param) => frame.deltas.get(param),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Direct,
    Inverse,
}

/// An un-eased, additive nudge applied to one live parameter on every
/// matching interaction tick.
#[derive(Clone, Copy, Debug)]
pub struct ReactionRule {
    pub source: DeltaSource,
    pub multiplier: f32,
    pub direction: Direction,
    pub min: Option<f32>,
    pub max: Option<f32>,
}

#[derive(Clone, Copy, Debug)]
pub struct ParamReaction {
    pub param: ScalarParam,
    pub rule: ReactionRule,
}

/// Per-event reaction lists for one instance.
#[derive(Clone, Debug, Default)]
pub struct EventReactions {
    pub scroll: SmallVec<[ParamReaction; 4]>,
    pub mouse_move: SmallVec<[ParamReaction; 4]>,
}

impl EventReactions {
    pub fn for_event(&self, kind: EventKind) -> &[ParamReaction] {
        match kind {
            EventKind::ScrollTick => &self.scroll,
            EventKind::MouseMoveTick => &self.mouse_move,
        }
    }
}

/// Mutation targets an instance may permit for global effect commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdjustTarget {
    BaseColor,
    Geometry,
    Scalar(ScalarParam),
}

pub type AllowedAdjustments = SmallVec<[AdjustTarget; 8]>;
