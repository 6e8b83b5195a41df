//! Frame-loop glue: owns one body, turns host timestamps into time steps
//! and host input into parameter changes.

use core::fmt;

use crate::config::BodyConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::softbody::SoftBody;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Gravity applied by [`Command::ToggleGravity`]: 9.81 scaled by 18 px/m.
pub const GRAVITY_ON: f64 = 9.81 * 18.0;
/// Moles added or removed per mole command.
pub const MOLE_STEP: f64 = 10.0;

/// Turns sampled host time (seconds) into per-frame deltas.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameClock<F: Float> {
    last: Option<F>,
}

impl<F: Float> FrameClock<F> {
    pub fn new() -> Self {
        FrameClock { last: None }
    }

    /// Seconds since the previous tick. The first tick, a non-finite
    /// timestamp and a clock running backwards all yield zero.
    pub fn tick(&mut self, now: F) -> F {
        if !now.is_finite() {
            return F::zero();
        }
        let dt = match self.last {
            Some(last) if now > last => now - last,
            _ => F::zero(),
        };
        self.last = Some(now);
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Host input mapped onto body parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Switch gravity between zero and [`GRAVITY_ON`] pointing down.
    ToggleGravity,
    IncreaseMoles,
    DecreaseMoles,
}

/// Numbers shown on screen next to the body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hud<F: Float> {
    pub mole_amount: F,
    pub volume: F,
}

impl<F: Float> fmt::Display for Hud<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n: {}", self.mole_amount)?;
        write!(f, "volume: {}", self.volume.trunc())
    }
}

/// One body plus the clock that drives it.
pub struct Simulation<F: Float> {
    body: SoftBody<F>,
    clock: FrameClock<F>,
}

impl<F: Float> Simulation<F> {
    pub fn new(config: &BodyConfig<F>) -> Result<Self, PhysicsError> {
        Ok(Simulation {
            body: SoftBody::new(config)?,
            clock: FrameClock::new(),
        })
    }

    pub fn handle(&mut self, command: Command) -> Result<(), PhysicsError> {
        log::debug!("command {:?}", command);
        match command {
            Command::ToggleGravity => {
                let gravity = if self.body.gravity() == Vec2::zero() {
                    Vec2::new(F::zero(), F::from_f64(GRAVITY_ON))
                } else {
                    Vec2::zero()
                };
                self.body.set_gravity(gravity)
            }
            Command::IncreaseMoles => self.body.adjust_mole_amount(F::from_f64(MOLE_STEP)),
            Command::DecreaseMoles => self.body.adjust_mole_amount(-F::from_f64(MOLE_STEP)),
        }
    }

    /// Advance by the time elapsed since the previous frame. Returns the
    /// step that was taken.
    pub fn frame(&mut self, now: F) -> F {
        let dt = self.clock.tick(now);
        self.body.advance(dt);
        dt
    }

    pub fn hud(&self) -> Hud<F> {
        Hud {
            mole_amount: self.body.mole_amount(),
            volume: self.body.volume(),
        }
    }

    /// Closed outline as line segments, each vertex joined to the previous.
    pub fn outline(&self) -> AllocVec<(Vec2<F>, Vec2<F>)> {
        let positions = self.body.vertex_positions();
        let n = positions.len();
        (0..n)
            .map(|i| (positions[(i + n - 1) % n], positions[i]))
            .collect()
    }

    /// The floor line across a viewport of `width`.
    pub fn floor_segment(&self, width: F) -> (Vec2<F>, Vec2<F>) {
        let y = self.body.floor_y();
        (Vec2::new(F::zero(), y), Vec2::new(width, y))
    }

    pub fn body(&self) -> &SoftBody<F> {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut SoftBody<F> {
        &mut self.body
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock<F> {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::<f64>::new();
        assert_eq!(clock.tick(12.5), 0.0);
        assert!((clock.tick(12.75) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn backwards_time_is_zero() {
        let mut clock = FrameClock::<f64>::new();
        clock.tick(5.0);
        assert_eq!(clock.tick(4.0), 0.0);
        assert!((clock.tick(4.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn non_finite_time_ignored() {
        let mut clock = FrameClock::<f32>::new();
        clock.tick(1.0);
        assert_eq!(clock.tick(f32::NAN), 0.0);
        assert!((clock.tick(1.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn hud_text() {
        let hud = Hud { mole_amount: 20.0f64, volume: 7853.98 };
        assert_eq!(hud.to_string(), "n: 20\nvolume: 7853");
    }
}
