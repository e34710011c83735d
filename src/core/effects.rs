/// One-shot, un-tweened mutation commands applied across instances.
///
/// Each command is checked against the target instance's allow-list;
/// unpermitted commands are logged and ignored rather than failing.
#[derive(Clone, Debug, PartialEq)]
pub enum GlobalEffect {
    /// Complement the live base color componentwise.
    InvertColors,
    /// Scale the live grid density, clamped to its valid range.
    MultiplyGridDensity { factor: f32 },
    /// Advance the live geometry to the next variant.
    CycleGeometry,
    /// Exchange two instances' entire configuration and rule set.
    SwapInstanceConfigs { first: String, second: String },
}
