//! Construction parameters for a soft body.

use crate::error::{ensure_finite, PhysicsError};
use crate::float::Float;
use crate::gas::{GAS_CONSTANT, TEMPERATURE};
use crate::vec::Vec2;

/// Everything needed to build a [`SoftBody`](crate::SoftBody).
///
/// Geometry and material fields are fixed once the body exists; the rest
/// seed the driver-tunable parameters.
///
/// # Builder Pattern
/// ```
/// use squish::config::BodyConfig;
/// use squish::vec::Vec2;
///
/// let config: BodyConfig<f32> = BodyConfig::new()
///     .with_center(Vec2::new(300.0, 100.0))
///     .with_radius(50.0)
///     .with_vertex_count(30)
///     .with_gravity(Vec2::new(0.0, 9.81 * 18.0))
///     .with_floor_y(370.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConfig<F: Float> {
    /// Center of the initial circle. Default: (300, 100).
    pub center: Vec2<F>,
    /// Radius of the initial circle. Default: 50.
    pub radius: F,
    /// Number of ring vertexes, at least 3. Default: 30.
    pub vertex_count: usize,
    /// Mass of every vertex. Default: 10.
    pub vertex_mass: F,
    /// Spring stiffness. Default: 2e4.
    pub stiffness: F,
    /// Velocity damping (friction) coefficient. Default: 10.
    pub damping: F,
    /// Gravity acceleration, screen space. Default: zero.
    pub gravity: Vec2<F>,
    /// Floor height. Default: 370.
    pub floor_y: F,
    /// Moles of gas inside the body. Default: 0.
    pub mole_amount: F,
    /// Default: 8.31.
    pub gas_constant: F,
    /// Default: 300.
    pub temperature: F,
    /// Outside pressure subtracted from the gas pressure. Default: 0.
    pub ambient_pressure: F,
}

impl<F: Float> BodyConfig<F> {
    pub fn new() -> Self {
        BodyConfig {
            center: Vec2::new(F::from_f32(300.0), F::from_f32(100.0)),
            radius: F::from_f32(50.0),
            vertex_count: 30,
            vertex_mass: F::from_f32(10.0),
            stiffness: F::from_f32(2.0e4),
            damping: F::from_f32(10.0),
            gravity: Vec2::zero(),
            floor_y: F::from_f32(370.0),
            mole_amount: F::zero(),
            gas_constant: F::from_f64(GAS_CONSTANT),
            temperature: F::from_f64(TEMPERATURE),
            ambient_pressure: F::zero(),
        }
    }

    pub fn with_center(mut self, center: Vec2<F>) -> Self {
        self.center = center;
        self
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    pub fn with_vertex_mass(mut self, mass: F) -> Self {
        self.vertex_mass = mass;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_floor_y(mut self, floor_y: F) -> Self {
        self.floor_y = floor_y;
        self
    }

    pub fn with_mole_amount(mut self, moles: F) -> Self {
        self.mole_amount = moles;
        self
    }

    /// Override the gas constant and temperature together.
    pub fn with_gas(mut self, gas_constant: F, temperature: F) -> Self {
        self.gas_constant = gas_constant;
        self.temperature = temperature;
        self
    }

    pub fn with_ambient_pressure(mut self, p0: F) -> Self {
        self.ambient_pressure = p0;
        self
    }

    /// Check every field without building anything.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.vertex_count < 3 {
            return Err(PhysicsError::InsufficientVertexes { count: self.vertex_count });
        }
        if !self.radius.is_finite() || self.radius <= F::zero() {
            return Err(PhysicsError::InvalidRadius);
        }
        if !self.vertex_mass.is_finite() || self.vertex_mass <= F::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        if !self.stiffness.is_finite() || self.stiffness < F::zero() {
            return Err(PhysicsError::InvalidStiffness);
        }
        validate_damping(self.damping)?;
        if !self.center.is_finite() || !self.gravity.is_finite() {
            return Err(PhysicsError::NonFiniteParameter);
        }
        ensure_finite(self.floor_y)?;
        ensure_finite(self.mole_amount)?;
        ensure_finite(self.gas_constant)?;
        ensure_finite(self.temperature)?;
        ensure_finite(self.ambient_pressure)?;
        Ok(())
    }
}

impl<F: Float> Default for BodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_damping<F: Float>(damping: F) -> Result<F, PhysicsError> {
    if damping.is_finite() && damping >= F::zero() {
        Ok(damping)
    } else {
        Err(PhysicsError::InvalidDamping)
    }
}
