use super::config::{ScalarParam, VisualConfig};
use super::rules::{ColorRule, DerivationRules, ScalarRule, SelectRule};

/// Combine a master preset with an instance's base config and derivation
/// rules into the fully resolved target for that instance.
///
/// Pure: identical inputs yield identical output. Scalars are clamped into
/// their declared ranges so a multiplier can never push a target out of
/// bounds.
pub fn resolve_target(
    master: &VisualConfig,
    base: &VisualConfig,
    rules: &DerivationRules,
) -> VisualConfig {
    let mut target = *master;

    target.geometry = match rules.geometry {
        SelectRule::Inherit => master.geometry,
        SelectRule::Fixed => base.geometry,
    };
    target.lattice_style = match rules.lattice_style {
        SelectRule::Inherit => master.lattice_style,
        SelectRule::Fixed => base.lattice_style,
    };
    target.base_color = match rules.base_color {
        ColorRule::Inherit => master.base_color,
        ColorRule::Fixed => base.base_color,
    };

    for param in ScalarParam::ALL {
        let value = match rules.scalar(param) {
            ScalarRule::Inherit => master.scalar(param),
            ScalarRule::Fixed => base.scalar(param),
            ScalarRule::Scaled(k) => master.scalar(param) * k,
        };
        let (lo, hi) = param.range();
        *target.scalar_mut(param) = value.clamp(lo, hi);
    }

    target
}
