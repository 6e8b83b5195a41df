//! Ideal-gas pressure inside the body.

use crate::error::{ensure_finite, PhysicsError};
use crate::float::Float;

/// Gas constant used unless configured otherwise.
pub const GAS_CONSTANT: f64 = 8.31;
/// Gas temperature used unless configured otherwise.
pub const TEMPERATURE: f64 = 300.0;

/// Gas filling the body: `p = nRT / A - p0`.
///
/// The mole-energy product `nRT` is cached and refreshed whenever the mole
/// amount changes.
#[derive(Clone, Debug, PartialEq)]
pub struct GasModel<F: Float> {
    mole_amount: F,
    gas_constant: F,
    temperature: F,
    ambient_pressure: F,
    mole_energy: F,
}

impl<F: Float> GasModel<F> {
    pub fn new(mole_amount: F, gas_constant: F, temperature: F, ambient_pressure: F) -> Result<Self, PhysicsError> {
        let mut gas = GasModel {
            mole_amount: ensure_finite(mole_amount)?,
            gas_constant: ensure_finite(gas_constant)?,
            temperature: ensure_finite(temperature)?,
            ambient_pressure: ensure_finite(ambient_pressure)?,
            mole_energy: F::zero(),
        };
        gas.refresh();
        Ok(gas)
    }

    fn refresh(&mut self) {
        self.mole_energy = self.mole_amount * self.gas_constant * self.temperature;
    }

    /// Pressure against an enclosed `area`, or `None` when the area is too
    /// small for the gas term to be meaningful.
    pub fn pressure(&self, area: F) -> Option<F> {
        if area.is_near_zero(F::from_f32(1e-9)) {
            return None;
        }
        Some(self.mole_energy / area - self.ambient_pressure)
    }

    /// Ambient pressure that balances the gas exactly at `area`.
    pub fn equilibrium_ambient(&self, area: F) -> F {
        self.mole_energy / area
    }

    pub fn set_mole_amount(&mut self, moles: F) -> Result<(), PhysicsError> {
        self.mole_amount = ensure_finite(moles)?;
        self.refresh();
        Ok(())
    }

    pub fn adjust_mole_amount(&mut self, delta: F) -> Result<(), PhysicsError> {
        self.set_mole_amount(self.mole_amount + delta)
    }

    pub fn set_ambient_pressure(&mut self, p0: F) -> Result<(), PhysicsError> {
        self.ambient_pressure = ensure_finite(p0)?;
        Ok(())
    }

    pub fn mole_amount(&self) -> F { self.mole_amount }
    pub fn gas_constant(&self) -> F { self.gas_constant }
    pub fn temperature(&self) -> F { self.temperature }
    pub fn ambient_pressure(&self) -> F { self.ambient_pressure }
    pub fn mole_energy(&self) -> F { self.mole_energy }
}

impl<F: Float> Default for GasModel<F> {
    fn default() -> Self {
        GasModel {
            mole_amount: F::zero(),
            gas_constant: F::from_f64(GAS_CONSTANT),
            temperature: F::from_f64(TEMPERATURE),
            ambient_pressure: F::zero(),
            mole_energy: F::zero(),
        }
    }
}
