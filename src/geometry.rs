//! Centroid and enclosed-area computations over a vertex ring.

use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec2;

/// Mass-weighted average of the vertex positions.
///
/// Returns the zero vector for an empty slice.
pub fn centroid<F: Float>(vertexes: &[PointMass<F>]) -> Vec2<F> {
    let mut weighted = Vec2::zero();
    let mut total_mass = F::zero();
    for v in vertexes {
        weighted += v.position.scale(v.mass);
        total_mass = total_mass + v.mass;
    }
    if total_mass == F::zero() {
        return Vec2::zero();
    }
    weighted.scale(F::one() / total_mass)
}

/// Heron's formula on three side lengths.
///
/// Rounding can push the radicand of a sliver triangle slightly negative;
/// that is treated as zero area.
pub fn heron_area<F: Float>(a: F, b: F, c: F) -> F {
    let p = (a + b + c) * F::half();
    let radicand = p * (p - a) * (p - b) * (p - c);
    radicand.max(F::zero()).sqrt()
}

/// Area enclosed by the ring, summed as triangles fanned about `center`.
///
/// Each ring edge `(i - 1, i)` closes a triangle with `center`. Exact for
/// star-shaped rings around `center`.
pub fn enclosed_area<F: Float>(vertexes: &[PointMass<F>], center: Vec2<F>) -> F {
    let n = vertexes.len();
    if n < 3 {
        return F::zero();
    }
    let mut area = F::zero();
    for i in 0..n {
        let prev = vertexes[(i + n - 1) % n].position;
        let cur = vertexes[i].position;
        let a = prev.distance(cur);
        let b = prev.distance(center);
        let c = cur.distance(center);
        area = area + heron_area(a, b, c);
    }
    area
}

/// Analytic area of a regular polygon with `n` vertexes on a circle of `radius`.
pub fn regular_polygon_area<F: Float>(n: usize, radius: F) -> F {
    let n_f = F::from_usize(n);
    n_f * radius * radius * (F::two() * F::pi() / n_f).sin() * F::half()
}
