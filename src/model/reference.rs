use serde::Serialize;

use crate::model::InvalidInputError;

/// Bench reference readings taken once per run: the unattenuated source and
/// the ambient-light floor, both in mW.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePower {
    pub raw_power: f64,
    pub ambient_power: f64,
}

impl ReferencePower {
    pub fn new(raw_power: f64, ambient_power: f64) -> Result<Self, InvalidInputError> {
        if !raw_power.is_finite() || !ambient_power.is_finite() {
            return Err(InvalidInputError::NonFiniteReference {
                raw_power,
                ambient_power,
            });
        }
        if raw_power == ambient_power {
            return Err(InvalidInputError::DegenerateReference {
                raw_power,
                ambient_power,
            });
        }
        if raw_power < ambient_power {
            tracing::warn!(
                raw_power,
                ambient_power,
                "raw power is below ambient power; transmissions will be negative"
            );
        }
        Ok(Self {
            raw_power,
            ambient_power,
        })
    }

    pub fn span(&self) -> f64 {
        self.raw_power - self.ambient_power
    }

    /// Transmission [%] of a single reading `value` [mW].
    pub fn transmission(&self, value: f64) -> f64 {
        ((value - self.ambient_power) / self.span()) * 100.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/reference.rs"]
mod tests;
