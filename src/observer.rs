//! Step observer trait for monitoring the soft body update.

use crate::float::Float;
use crate::vec::Vec2;

/// Hooks into each phase of `SoftBody::advance_observed`.
///
/// Implement this to trace a simulation (debug overlays, profiling, tests).
/// All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after the centroid and enclosed area have been refreshed.
    fn on_geometry(&mut self, _centroid: Vec2<F>, _area: F) {}

    /// Called with the pressure scalar used for this step.
    fn on_pressure(&mut self, _pressure: F) {}

    /// Called for each vertex clamped by the floor.
    fn on_floor_contact(&mut self, _vertex: usize) {}

    /// Called for each spring skipped because its endpoints coincide.
    fn on_degenerate_spring(&mut self, _spring: usize) {}

    /// Called after all vertexes have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
