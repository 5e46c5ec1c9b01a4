use crate::{vehicle::Vehicle, Weight};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A sensor with no positive weight has nothing to sample from.
    #[error("all vehicle weights are zero, nothing to sample")]
    ZeroWeights,
    #[error("vehicle weights overflow the pool size")]
    WeightOverflow,
}

/// Weighted multiset of vehicle labels used as the sampling domain.
///
/// Stored as running totals over the label order, so a draw is one
/// uniform index into the expanded multiset plus a search, without ever
/// materializing the repeated-label list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPool {
    cumulative: Vec<(Vehicle, Weight)>,
    total: Weight,
}

impl CategoryPool {
    pub fn new(car: Weight, motorcycle: Weight, bus: Weight) -> Result<Self, ConfigError> {
        let mut cumulative = Vec::with_capacity(3);
        let mut total: Weight = 0;
        for (vehicle, weight) in Vehicle::ALL.into_iter().zip([car, motorcycle, bus]) {
            if weight == 0 {
                continue;
            }
            total = total
                .checked_add(weight)
                .ok_or(ConfigError::WeightOverflow)?;
            cumulative.push((vehicle, total));
        }
        if total == 0 {
            return Err(ConfigError::ZeroWeights);
        }
        Ok(Self { cumulative, total })
    }

    /// Size of the expanded multiset (sum of all weights).
    pub fn total_weight(&self) -> Weight {
        self.total
    }

    /// Multiplicity of `vehicle` in the pool.
    pub fn weight_of(&self, vehicle: Vehicle) -> Weight {
        let mut previous = 0;
        for &(v, upto) in &self.cumulative {
            if v == vehicle {
                return upto - previous;
            }
            previous = upto;
        }
        0
    }

    /// Draws one label, uniform over the expanded multiset.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vehicle {
        let index = rng.gen_range(0..self.total);
        let slot = self.cumulative.partition_point(|&(_, upto)| upto <= index);
        self.cumulative[slot].0
    }

    /// Draws `size` labels independently, with replacement.
    pub fn sample_batch<R: Rng>(&self, rng: &mut R, size: usize) -> Vec<Vehicle> {
        (0..size).map(|_| self.sample(rng)).collect()
    }
}
