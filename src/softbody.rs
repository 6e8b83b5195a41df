//! 2D pressure-inflated soft body.

use crate::collision::Floor;
use crate::config::{validate_damping, BodyConfig};
use crate::error::{ensure_finite, PhysicsError};
use crate::float::Float;
use crate::gas::GasModel;
use crate::geometry;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point_mass::PointMass;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A closed ring of point masses joined by springs and inflated by gas.
///
/// Spring `i` joins vertex `i` (endpoint A) to vertex `i - 1 mod n`
/// (endpoint B). The ring is laid out clockwise on screen and never changes
/// size or order.
#[derive(Clone, Debug)]
pub struct SoftBody<F: Float> {
    vertexes: AllocVec<PointMass<F>>,
    springs: AllocVec<Spring<F>>,
    centroid: Vec2<F>,
    area: F,
    pressure: F,
    gas: GasModel<F>,
    gravity: Vec2<F>,
    damping: F,
    floor: Floor<F>,
}

impl<F: Float> SoftBody<F> {
    /// Build a body from a validated config.
    pub fn new(config: &BodyConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;

        let n = config.vertex_count;
        let step = F::two() * F::pi() / F::from_usize(n);
        let mut vertexes = AllocVec::with_capacity(n);
        for i in 0..n {
            let angle = -(step * F::from_usize(i));
            let position = config.center + Vec2::from_angle(angle).scale(config.radius);
            vertexes.push(PointMass::new(position, config.vertex_mass));
        }

        let mut springs = AllocVec::with_capacity(n);
        for i in 0..n {
            let spring = Spring::new(i, (i + n - 1) % n, &vertexes, config.stiffness);
            if !(spring.rest_length > F::zero()) {
                return Err(PhysicsError::DegenerateSpring { index: i });
            }
            springs.push(spring);
        }

        let gas = GasModel::new(
            config.mole_amount,
            config.gas_constant,
            config.temperature,
            config.ambient_pressure,
        )?;

        let mut body = SoftBody {
            vertexes,
            springs,
            centroid: config.center,
            area: F::zero(),
            pressure: F::zero(),
            gas,
            gravity: config.gravity,
            damping: config.damping,
            floor: Floor::new(config.floor_y),
        };
        body.refresh_geometry();

        log::debug!(
            "soft body: {} vertexes, radius {}, area {}",
            n,
            config.radius,
            body.area
        );
        Ok(body)
    }

    /// Create a circular body with default environment parameters.
    pub fn circle(
        center: Vec2<F>,
        radius: F,
        vertex_count: usize,
        mass: F,
        stiffness: F,
    ) -> Result<Self, PhysicsError> {
        let config = BodyConfig::new()
            .with_center(center)
            .with_radius(radius)
            .with_vertex_count(vertex_count)
            .with_vertex_mass(mass)
            .with_stiffness(stiffness);
        Self::new(&config)
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Negative or non-finite `dt` is clamped to zero.
    pub fn advance(&mut self, dt: F) {
        self.advance_observed(dt, &mut NoOpStepObserver);
    }

    pub fn advance_observed<O: StepObserver<F>>(&mut self, dt: F, observer: &mut O) {
        let dt = if dt.is_finite() && dt > F::zero() {
            dt
        } else {
            if dt != F::zero() {
                log::warn!("clamping time step {} to zero", dt);
            }
            F::zero()
        };

        // 1. Clear accumulators
        for v in self.vertexes.iter_mut() {
            v.clear_force();
        }

        // 2-4. Centroid, enclosed area, pressure
        self.refresh_geometry();
        observer.on_geometry(self.centroid, self.area);
        observer.on_pressure(self.pressure);

        // 5. Floor
        for (i, v) in self.vertexes.iter_mut().enumerate() {
            if self.floor.resolve(v) {
                observer.on_floor_contact(i);
            }
        }

        // 6-7. Elastic and pressure forces
        for (i, s) in self.springs.iter().enumerate() {
            if !s.apply_forces(&mut self.vertexes, self.centroid, self.pressure) {
                log::warn!("spring {} has coincident endpoints, skipping", i);
                observer.on_degenerate_spring(i);
            }
        }

        // 8. Integrate
        for v in self.vertexes.iter_mut() {
            v.integrate(dt, self.damping, self.gravity);
        }
        observer.on_integrate();

        log::trace!(
            "advanced {}: area {}, pressure {}",
            dt,
            self.area,
            self.pressure
        );
        observer.on_step_complete();
    }

    fn refresh_geometry(&mut self) {
        self.centroid = geometry::centroid(&self.vertexes);
        self.area = geometry::enclosed_area(&self.vertexes, self.centroid);
        self.pressure = match self.gas.pressure(self.area) {
            Some(p) => p,
            None => {
                log::warn!("enclosed area {} too small for gas pressure", self.area);
                F::zero()
            }
        };
    }

    /// Vertex positions in ring order, for drawing as a closed polyline.
    pub fn vertex_positions(&self) -> AllocVec<Vec2<F>> {
        self.vertexes.iter().map(|v| v.position).collect()
    }

    /// Enclosed area as of the last refresh (construction or the start of
    /// the last step).
    pub fn volume(&self) -> F {
        self.area
    }

    /// Mass-weighted center as of the last refresh.
    pub fn centroid(&self) -> Vec2<F> {
        self.centroid
    }

    /// Pressure scalar used by the last step.
    pub fn pressure(&self) -> F {
        self.pressure
    }

    pub fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    pub fn vertexes(&self) -> &[PointMass<F>] {
        &self.vertexes
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    /// Mutable access to a single vertex, e.g. to nudge it from the driver.
    pub fn vertex_mut(&mut self, index: usize) -> Result<&mut PointMass<F>, PhysicsError> {
        let count = self.vertexes.len();
        self.vertexes
            .get_mut(index)
            .ok_or(PhysicsError::VertexOutOfBounds { index, count })
    }

    /// Current length of every spring, in spring order.
    pub fn spring_lengths(&self) -> AllocVec<F> {
        self.springs.iter().map(|s| s.current_length(&self.vertexes)).collect()
    }

    /// Largest current-to-rest length ratio over all springs.
    pub fn max_strain(&self) -> F {
        self.springs
            .iter()
            .map(|s| s.strain(&self.vertexes))
            .fold(F::zero(), |acc, s| acc.max(s))
    }

    pub fn kinetic_energy(&self) -> F {
        self.vertexes
            .iter()
            .fold(F::zero(), |acc, v| acc + v.kinetic_energy())
    }

    pub fn gravity(&self) -> Vec2<F> {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) -> Result<(), PhysicsError> {
        if !gravity.is_finite() {
            return Err(PhysicsError::NonFiniteParameter);
        }
        self.gravity = gravity;
        Ok(())
    }

    pub fn damping(&self) -> F {
        self.damping
    }

    pub fn set_damping(&mut self, damping: F) -> Result<(), PhysicsError> {
        self.damping = validate_damping(damping)?;
        Ok(())
    }

    pub fn floor_y(&self) -> F {
        self.floor.y
    }

    pub fn set_floor_y(&mut self, floor_y: F) -> Result<(), PhysicsError> {
        self.floor.y = ensure_finite(floor_y)?;
        Ok(())
    }

    pub fn gas(&self) -> &GasModel<F> {
        &self.gas
    }

    pub fn mole_amount(&self) -> F {
        self.gas.mole_amount()
    }

    pub fn set_mole_amount(&mut self, moles: F) -> Result<(), PhysicsError> {
        self.gas.set_mole_amount(moles)
    }

    pub fn adjust_mole_amount(&mut self, delta: F) -> Result<(), PhysicsError> {
        self.gas.adjust_mole_amount(delta)
    }

    pub fn ambient_pressure(&self) -> F {
        self.gas.ambient_pressure()
    }

    pub fn set_ambient_pressure(&mut self, p0: F) -> Result<(), PhysicsError> {
        self.gas.set_ambient_pressure(p0)
    }
}
