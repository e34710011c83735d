use std::time::Duration;

use glam::Vec3;
use log::warn;

use super::config::{ScalarParam, VisualConfig};
use super::effects::GlobalEffect;
use super::rules::{
    AdjustTarget, AllowedAdjustments, DerivationRules, Direction, EventKind, EventReactions,
};
use super::tracker::SignalFrame;
use super::transition::Transition;

/// Static description of one rendering instance: its own defaults plus the
/// rules describing how it tracks the master preset and the interaction
/// signals.
#[derive(Clone, Debug)]
pub struct InstanceSpec {
    pub id: &'static str,
    pub base: VisualConfig,
    pub rules: DerivationRules,
    pub reactions: EventReactions,
    pub allowed_adjustments: AllowedAdjustments,
    pub transition_duration: Duration,
}

/// A registered instance with its live, mutated-in-place config. Instances
/// are never destroyed mid-session; disposal just stops their render loop.
#[derive(Debug)]
pub struct ManagedInstance {
    pub id: &'static str,
    pub base: VisualConfig,
    pub rules: DerivationRules,
    pub reactions: EventReactions,
    pub allowed_adjustments: AllowedAdjustments,
    pub transition_duration: Duration,
    pub current: VisualConfig,
    transition: Option<Transition>,
}

impl ManagedInstance {
    pub fn new(spec: InstanceSpec) -> Self {
        Self {
            id: spec.id,
            current: spec.base,
            base: spec.base,
            rules: spec.rules,
            reactions: spec.reactions,
            allowed_adjustments: spec.allowed_adjustments,
            transition_duration: spec.transition_duration,
            transition: None,
        }
    }

    pub fn allows(&self, target: AdjustTarget) -> bool {
        self.allowed_adjustments.contains(&target)
    }

    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Start tweening the live config toward `target` over this instance's
    /// configured duration. A transition started mid-flight captures the
    /// current (possibly partial) values as its new baseline.
    pub fn begin_transition(&mut self, target: VisualConfig) {
        self.transition = Some(Transition::new(
            self.current,
            target,
            self.transition_duration,
        ));
    }

    /// Cancel any in-flight transition, leaving the live config as is.
    pub fn clear_transition(&mut self) {
        self.transition = None;
    }

    /// Advance the in-flight transition, if any. Returns true while one is
    /// still running afterwards.
    pub fn step(&mut self, dt: Duration) -> bool {
        if let Some(t) = &mut self.transition {
            if t.advance(dt, &mut self.current) {
                self.transition = None;
            }
        }
        self.transition.is_some()
    }

    /// Apply this instance's declared reactions for one interaction tick:
    /// immediate, un-eased nudges layered on top of whatever the transition
    /// engine has currently interpolated to.
    pub fn apply_reactive_update(&mut self, event: EventKind, frame: &SignalFrame) {
        for reaction in self.reactions.for_event(event) {
            let mut delta = reaction.rule.source.read(frame) * reaction.rule.multiplier;
            if reaction.rule.direction == Direction::Inverse {
                delta = -delta;
            }
            let value = self.current.scalar_mut(reaction.param);
            *value += delta;
            if let Some(min) = reaction.rule.min {
                *value = value.max(min);
            }
            if let Some(max) = reaction.rule.max {
                *value = value.min(max);
            }
        }
    }

    /// Apply a per-instance global effect. Swaps are handled by the
    /// director, which owns both instances.
    pub fn apply_global_effect(&mut self, effect: &GlobalEffect) {
        match effect {
            GlobalEffect::InvertColors => {
                if self.allows(AdjustTarget::BaseColor) {
                    self.current.base_color = Vec3::ONE - self.current.base_color;
                } else {
                    warn!("[{}] invert-colors not permitted, ignoring", self.id);
                }
            }
            GlobalEffect::MultiplyGridDensity { factor } => {
                if self.allows(AdjustTarget::Scalar(ScalarParam::GridDensity)) {
                    let (lo, hi) = ScalarParam::GridDensity.range();
                    self.current.grid_density = (self.current.grid_density * factor).clamp(lo, hi);
                } else {
                    warn!("[{}] grid-density adjustment not permitted, ignoring", self.id);
                }
            }
            GlobalEffect::CycleGeometry => {
                if self.allows(AdjustTarget::Geometry) {
                    self.current.geometry = self.current.geometry.cycled();
                } else {
                    warn!("[{}] geometry cycling not permitted, ignoring", self.id);
                }
            }
            GlobalEffect::SwapInstanceConfigs { .. } => {}
        }
    }
}
