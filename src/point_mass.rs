//! Point masses integrated with semi-implicit Euler.

use crate::float::Float;
use crate::vec::Vec2;

/// A single vertex of the body: explicit velocity plus a force accumulator.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    /// Summed by every force contribution during a step, consumed by `integrate`.
    pub force: Vec2<F>,
    pub mass: F,
}

impl<F: Float> PointMass<F> {
    /// A resting point mass. Callers validate `mass > 0`.
    pub fn new(position: Vec2<F>, mass: F) -> Self {
        PointMass {
            position,
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            mass,
        }
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::zero();
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.force += force;
    }

    /// Velocity first from the accumulated force, damping and gravity, then
    /// position from the updated velocity.
    pub fn integrate(&mut self, dt: F, damping: F, gravity: Vec2<F>) {
        let net = self.force - self.velocity.scale(damping) + gravity.scale(self.mass);
        self.velocity += net.scale(dt / self.mass);
        self.position += self.velocity.scale(dt);
    }

    pub fn kinetic_energy(&self) -> F {
        F::half() * self.mass * self.velocity.length_sq()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_fall_uses_updated_velocity() {
        let mut p = PointMass::new(Vec2::new(0.0f64, 0.0), 2.0);
        p.integrate(0.5, 0.0, Vec2::new(0.0, 10.0));
        // v = 10 * 0.5 = 5, x = 5 * 0.5 = 2.5 (explicit Euler would give 0)
        assert!((p.velocity.y - 5.0).abs() < 1e-12);
        assert!((p.position.y - 2.5).abs() < 1e-12);
    }

    #[test]
    fn force_divided_by_mass() {
        let mut p = PointMass::new(Vec2::new(0.0f64, 0.0), 4.0);
        p.apply_force(Vec2::new(8.0, 0.0));
        p.integrate(1.0, 0.0, Vec2::zero());
        assert!((p.velocity.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn damping_opposes_velocity() {
        let mut p = PointMass::new(Vec2::new(0.0f64, 0.0), 1.0);
        p.velocity = Vec2::new(10.0, 0.0);
        p.integrate(0.1, 1.0, Vec2::zero());
        assert!((p.velocity.x - 9.0).abs() < 1e-12);
    }

    #[test]
    fn zero_dt_no_change() {
        let mut p = PointMass::new(Vec2::new(1.0f32, 2.0), 1.0);
        p.velocity = Vec2::new(3.0, 4.0);
        p.apply_force(Vec2::new(100.0, 100.0));
        let before = p.clone();
        p.integrate(0.0, 10.0, Vec2::new(0.0, 9.81));
        assert_eq!(p.position, before.position);
        assert_eq!(p.velocity, before.velocity);
    }

    #[test]
    fn clear_force_resets_accumulator() {
        let mut p = PointMass::new(Vec2::new(0.0f32, 0.0), 1.0);
        p.apply_force(Vec2::new(1.0, 1.0));
        p.apply_force(Vec2::new(1.0, 1.0));
        assert_eq!(p.force, Vec2::new(2.0, 2.0));
        p.clear_force();
        assert_eq!(p.force, Vec2::zero());
    }
}
