//! Elastic ring edges and the gas pressure they transmit.

use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec2;

/// An elastic edge between two vertexes of the same body.
///
/// Endpoints are indices into the owning body's vertex ring, which is never
/// reordered or resized after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
}

impl<F: Float> Spring<F> {
    /// Connect `a` to `b`, resting at their current distance.
    pub fn new(a: usize, b: usize, vertexes: &[PointMass<F>], stiffness: F) -> Self {
        let rest_length = vertexes[a].position.distance(vertexes[b].position);
        Spring { a, b, rest_length, stiffness }
    }

    /// Vector from endpoint A to endpoint B.
    pub fn direction(&self, vertexes: &[PointMass<F>]) -> Vec2<F> {
        vertexes[self.b].position - vertexes[self.a].position
    }

    pub fn current_length(&self, vertexes: &[PointMass<F>]) -> F {
        self.direction(vertexes).length()
    }

    /// Current length over rest length.
    pub fn strain(&self, vertexes: &[PointMass<F>]) -> F {
        self.current_length(vertexes) / self.rest_length
    }

    /// Accumulate the elastic and pressure contributions of this edge.
    ///
    /// The elastic force pulls A toward B (and B toward A) in proportion to
    /// the stretch. The pressure force `normal * pressure * length` is added
    /// in full to both endpoints. Returns `false` and leaves the
    /// accumulators untouched when the endpoints coincide.
    pub fn apply_forces(&self, vertexes: &mut [PointMass<F>], centroid: Vec2<F>, pressure: F) -> bool {
        let dir = self.direction(vertexes);
        let dist = dir.length();
        if dist == F::zero() {
            return false;
        }

        let elastic = dir.scale(self.stiffness * (dist - self.rest_length) / dist);
        vertexes[self.a].apply_force(elastic);
        vertexes[self.b].apply_force(-elastic);

        let midpoint = vertexes[self.a].position + dir.scale(F::half());
        let push = outward_normal(dir, midpoint, centroid).scale(pressure * dist);
        vertexes[self.a].apply_force(push);
        vertexes[self.b].apply_force(push);
        true
    }
}

/// Unit normal to `dir`, oriented away from `centroid` as seen from `midpoint`.
///
/// A horizontal edge yields `(0, 1)` before orientation.
pub fn outward_normal<F: Float>(dir: Vec2<F>, midpoint: Vec2<F>, centroid: Vec2<F>) -> Vec2<F> {
    let normal = if dir.y != F::zero() {
        Vec2::new(F::one(), -dir.x / dir.y).normalize()
    } else {
        Vec2::new(F::zero(), F::one())
    };
    if normal.dot(midpoint - centroid) < F::zero() {
        -normal
    } else {
        normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(ax: f64, ay: f64, bx: f64, by: f64) -> [PointMass<f64>; 2] {
        [
            PointMass::new(Vec2::new(ax, ay), 1.0),
            PointMass::new(Vec2::new(bx, by), 1.0),
        ]
    }

    #[test]
    fn rest_length_is_initial_distance() {
        let v = pair(0.0, 0.0, 3.0, 4.0);
        let s = Spring::new(0, 1, &v, 10.0);
        assert_eq!(s.rest_length, 5.0);
        assert_eq!(s.strain(&v), 1.0);
    }

    #[test]
    fn normal_points_away_from_centroid() {
        // Vertical edge right of the centroid.
        let n = outward_normal(Vec2::new(0.0f64, 2.0), Vec2::new(1.0, 0.0), Vec2::zero());
        assert!((n.x - 1.0).abs() < 1e-12);
        assert!(n.y.abs() < 1e-12);

        // Same edge left of the centroid flips.
        let n = outward_normal(Vec2::new(0.0f64, 2.0), Vec2::new(-1.0, 0.0), Vec2::zero());
        assert!((n.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn horizontal_edge_uses_vertical_normal() {
        let below = outward_normal(Vec2::new(2.0f64, 0.0), Vec2::new(0.0, 1.0), Vec2::zero());
        assert_eq!(below, Vec2::new(0.0, 1.0));
        let above = outward_normal(Vec2::new(2.0f64, 0.0), Vec2::new(0.0, -1.0), Vec2::zero());
        assert_eq!(above, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn stretched_spring_pulls_endpoints_together() {
        let mut v = pair(0.0, 0.0, 1.0, 0.0);
        let s = Spring::new(0, 1, &v, 10.0);
        v[1].position = Vec2::new(3.0, 0.0);
        assert!(s.apply_forces(&mut v, Vec2::new(1.5, 5.0), 0.0));
        assert!((v[0].force.x - 20.0).abs() < 1e-12);
        assert!((v[1].force.x + 20.0).abs() < 1e-12);
    }

    #[test]
    fn pressure_added_in_full_to_both_endpoints() {
        let mut v = pair(0.0, 0.0, 2.0, 0.0);
        let s = Spring::new(0, 1, &v, 10.0);
        // Centroid above the edge, so the normal points down (+y).
        assert!(s.apply_forces(&mut v, Vec2::new(1.0, -1.0), 3.0));
        assert_eq!(v[0].force, Vec2::new(0.0, 6.0));
        assert_eq!(v[1].force, Vec2::new(0.0, 6.0));
    }

    #[test]
    fn coincident_endpoints_are_skipped() {
        let mut v = pair(0.0, 0.0, 1.0, 0.0);
        let s = Spring::new(0, 1, &v, 10.0);
        v[1].position = Vec2::zero();
        assert!(!s.apply_forces(&mut v, Vec2::new(0.0, -1.0), 5.0));
        assert_eq!(v[0].force, Vec2::zero());
        assert_eq!(v[1].force, Vec2::zero());
    }
}
