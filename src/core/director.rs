use std::mem;
use std::time::Duration;

use fnv::FnvHashMap;
use log::{debug, info, warn};

use super::config::VisualConfig;
use super::effects::GlobalEffect;
use super::instance::{InstanceSpec, ManagedInstance};
use super::presets::master_presets;
use super::resolver::resolve_target;
use super::rules::EventKind;
use super::tracker::SignalFrame;

/// Coordinates every rendering instance: section-level master style changes,
/// per-frame transition stepping, reactive delta fan-out and global effect
/// dispatch.
///
/// Unknown section keys and missing instances are logged and ignored — the
/// backdrop always keeps rendering something plausible.
pub struct Director {
    presets: FnvHashMap<&'static str, VisualConfig>,
    instances: Vec<ManagedInstance>,
    current_style: String,
    pending_style: Option<String>,
    master_in_flight: bool,
}

impl Director {
    pub fn new() -> Self {
        Self {
            presets: master_presets(),
            instances: Vec::new(),
            current_style: String::new(),
            pending_style: None,
            master_in_flight: false,
        }
    }

    pub fn add_instance(&mut self, spec: InstanceSpec) {
        if let Some(i) = self.index_of(spec.id) {
            warn!("instance '{}' already exists, replacing", spec.id);
            self.instances[i] = ManagedInstance::new(spec);
            return;
        }
        self.instances.push(ManagedInstance::new(spec));
    }

    pub fn instance(&self, id: &str) -> Option<&ManagedInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Live config for one instance, as consumed by the renderer each frame.
    pub fn instance_config(&self, id: &str) -> Option<VisualConfig> {
        self.instance(id).map(|i| i.current)
    }

    pub fn current_style(&self) -> &str {
        &self.current_style
    }

    pub fn in_transition(&self) -> bool {
        self.master_in_flight
    }

    /// Switch every instance toward the named section preset. A request for
    /// the already-active style is a no-op, and requests made while a master
    /// change is still in flight are ignored.
    pub fn apply_master_style(&mut self, style_key: &str) {
        if self.master_in_flight {
            warn!("master style change to '{style_key}' ignored: transition in flight");
            return;
        }
        if self.current_style == style_key {
            debug!("master style '{style_key}' already active");
            return;
        }
        let Some(master) = self.presets.get(style_key).copied() else {
            warn!("unknown section key '{style_key}', keeping current style");
            return;
        };

        info!("master style: '{}' -> '{style_key}'", self.current_style);
        for instance in &mut self.instances {
            let target = resolve_target(&master, &instance.base, &instance.rules);
            instance.begin_transition(target);
        }
        self.pending_style = Some(style_key.to_owned());
        self.master_in_flight = !self.instances.is_empty();
        if !self.master_in_flight {
            // Nothing registered yet; adopt the style immediately.
            self.current_style = self.pending_style.take().unwrap_or_default();
        }
    }

    /// Advance all in-flight transitions by one frame. Clears the master
    /// in-flight flag once the last instance has settled.
    pub fn tick(&mut self, dt: Duration) {
        let mut any_running = false;
        for instance in &mut self.instances {
            any_running |= instance.step(dt);
        }
        if self.master_in_flight && !any_running {
            self.master_in_flight = false;
            if let Some(style) = self.pending_style.take() {
                info!("master style '{style}' applied to all instances");
                self.current_style = style;
            }
        }
    }

    /// Fan one interaction tick out to every instance's declared reactions.
    pub fn apply_reactive(&mut self, event: EventKind, frame: &SignalFrame) {
        for instance in &mut self.instances {
            instance.apply_reactive_update(event, frame);
        }
    }

    /// Dispatch a one-shot effect. Swap is resolved here since it spans two
    /// instances; everything else is applied per instance against its
    /// allow-list.
    pub fn dispatch_effect(&mut self, effect: &GlobalEffect) {
        if let GlobalEffect::SwapInstanceConfigs { first, second } = effect {
            self.swap_instance_configs(first, second);
            return;
        }
        for instance in &mut self.instances {
            instance.apply_global_effect(effect);
        }
    }

    fn swap_instance_configs(&mut self, first: &str, second: &str) {
        let (Some(a), Some(b)) = (self.index_of(first), self.index_of(second)) else {
            warn!("swap ignored: unknown instance '{first}' or '{second}'");
            return;
        };
        if a == b {
            warn!("swap ignored: '{first}' named twice");
            return;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.instances.split_at_mut(hi);
        let x = &mut head[lo];
        let y = &mut tail[0];
        mem::swap(&mut x.current, &mut y.current);
        mem::swap(&mut x.base, &mut y.base);
        mem::swap(&mut x.rules, &mut y.rules);
        mem::swap(&mut x.reactions, &mut y.reactions);
        mem::swap(&mut x.allowed_adjustments, &mut y.allowed_adjustments);
        // A half-finished tween toward the pre-swap target would look wrong.
        x.clear_transition();
        y.clear_transition();
        info!("swapped configurations of '{first}' and '{second}'");
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.instances.iter().position(|i| i.id == id)
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}
