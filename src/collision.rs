//! Flat floor collision.

use crate::float::Float;
use crate::point_mass::PointMass;

/// Horizontal floor at `y`. Screen space, so "below the floor" is `y > floor`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Floor<F: Float> {
    pub y: F,
}

impl<F: Float> Floor<F> {
    pub fn new(y: F) -> Self {
        Floor { y }
    }

    /// Clamp a penetrating vertex onto the floor and invert its vertical
    /// velocity. No friction, no energy loss. Returns whether it collided.
    pub fn resolve(&self, vertex: &mut PointMass<F>) -> bool {
        if vertex.position.y > self.y {
            vertex.position.y = self.y;
            vertex.velocity.y = -vertex.velocity.y;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn penetrating_vertex_is_clamped_and_bounced() {
        let floor = Floor::new(370.0f64);
        let mut v = PointMass::new(Vec2::new(12.0, 375.0), 10.0);
        v.velocity = Vec2::new(3.0, 40.0);
        assert!(floor.resolve(&mut v));
        assert_eq!(v.position, Vec2::new(12.0, 370.0));
        assert_eq!(v.velocity, Vec2::new(3.0, -40.0));
    }

    #[test]
    fn vertex_on_the_floor_is_untouched() {
        let floor = Floor::new(370.0f64);
        let mut v = PointMass::new(Vec2::new(0.0, 370.0), 10.0);
        v.velocity = Vec2::new(0.0, 5.0);
        assert!(!floor.resolve(&mut v));
        assert_eq!(v.velocity.y, 5.0);
    }

    #[test]
    fn upward_motion_below_floor_flips_down() {
        let floor = Floor::new(0.0f32);
        let mut v = PointMass::new(Vec2::new(0.0, 1.0), 1.0);
        v.velocity = Vec2::new(0.0, -2.0);
        assert!(floor.resolve(&mut v));
        assert_eq!(v.velocity.y, 2.0);
    }
}
