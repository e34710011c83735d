use glam::Vec3;

use super::constants::*;

/// Lattice geometry rendered by the fragment shader. The shader selects the
/// generator by a float id, so the discriminants here are part of the
/// uniform contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Geometry {
    Hypercube,
    Tetrahedron,
    Sphere,
    Torus,
    Fractal,
}

impl Geometry {
    pub const ALL: [Geometry; 5] = [
        Geometry::Hypercube,
        Geometry::Tetrahedron,
        Geometry::Sphere,
        Geometry::Torus,
        Geometry::Fractal,
    ];

    /// Float id understood by the shader's geometry dispatch.
    pub fn shader_id(self) -> f32 {
        match self {
            Geometry::Hypercube => 0.0,
            Geometry::Tetrahedron => 1.0,
            Geometry::Sphere => 2.0,
            Geometry::Torus => 3.0,
            Geometry::Fractal => 4.0,
        }
    }

    /// Next geometry in display order, wrapping at the end.
    pub fn cycled(self) -> Geometry {
        let i = Geometry::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Geometry::ALL[(i + 1) % Geometry::ALL.len()]
    }
}

/// Discrete rendering-density mode for the lattice pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeStyle {
    Wireframe,
    Solid,
    Hybrid,
}

impl LatticeStyle {
    pub fn shader_id(self) -> f32 {
        match self {
            LatticeStyle::Wireframe => 0.0,
            LatticeStyle::Solid => 1.0,
            LatticeStyle::Hybrid => 2.0,
        }
    }
}

/// Names for the scalar fields of [`VisualConfig`], used by derivation and
/// reaction rules so that rule application stays total over the config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarParam {
    GridDensity,
    MorphFactor,
    Dimension,
    GlitchIntensity,
    RotationSpeed,
    Intensity,
}

impl ScalarParam {
    pub const ALL: [ScalarParam; 6] = [
        ScalarParam::GridDensity,
        ScalarParam::MorphFactor,
        ScalarParam::Dimension,
        ScalarParam::GlitchIntensity,
        ScalarParam::RotationSpeed,
        ScalarParam::Intensity,
    ];

    /// Declared valid range for the parameter.
    pub fn range(self) -> (f32, f32) {
        match self {
            ScalarParam::GridDensity => GRID_DENSITY_RANGE,
            ScalarParam::MorphFactor => MORPH_FACTOR_RANGE,
            ScalarParam::Dimension => DIMENSION_RANGE,
            ScalarParam::GlitchIntensity => GLITCH_INTENSITY_RANGE,
            ScalarParam::RotationSpeed => ROTATION_SPEED_RANGE,
            ScalarParam::Intensity => INTENSITY_RANGE,
        }
    }
}

/// The resolved parameter set for one rendering instance at a point in time.
/// Mutated in place by transitions and reactive deltas; read once per frame
/// by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualConfig {
    pub geometry: Geometry,
    pub base_color: Vec3,
    pub grid_density: f32,
    pub morph_factor: f32,
    pub dimension: f32,
    pub glitch_intensity: f32,
    pub rotation_speed: f32,
    pub intensity: f32,
    pub lattice_style: LatticeStyle,
}

impl VisualConfig {
    pub fn scalar(&self, param: ScalarParam) -> f32 {
        match param {
            ScalarParam::GridDensity => self.grid_density,
            ScalarParam::MorphFactor => self.morph_factor,
            ScalarParam::Dimension => self.dimension,
            ScalarParam::GlitchIntensity => self.glitch_intensity,
            ScalarParam::RotationSpeed => self.rotation_speed,
            ScalarParam::Intensity => self.intensity,
        }
    }

    pub fn scalar_mut(&mut self, param: ScalarParam) -> &mut f32 {
        match param {
            ScalarParam::GridDensity => &mut self.grid_density,
            ScalarParam::MorphFactor => &mut self.morph_factor,
            ScalarParam::Dimension => &mut self.dimension,
            ScalarParam::GlitchIntensity => &mut self.glitch_intensity,
            ScalarParam::RotationSpeed => &mut self.rotation_speed,
            ScalarParam::Intensity => &mut self.intensity,
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::Hypercube,
            base_color: Vec3::new(1.0, 0.0, 1.0),
            grid_density: 12.0,
            morph_factor: 0.5,
            dimension: 3.5,
            glitch_intensity: 0.3,
            rotation_speed: 0.5,
            intensity: 0.8,
            lattice_style: LatticeStyle::Hybrid,
        }
    }
}
