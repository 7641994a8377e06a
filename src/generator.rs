//! Measurement generator
//!
//! Produces plausible randomized weather values, one per successful
//! request. Each measurement type maps a uniform draw in [0,1) into its
//! own contractual range; clients may rely on values falling inside them.
//!
//! | Type        | Range            |
//! |-------------|------------------|
//! | Temperature | [-10.0, 40.0) °C |
//! | Humidity    | [20.0, 100.0) %  |
//! | WindSpeed   | [0.0, 100.0) km/h|
//! | Pressure    | [950.0, 1050.0) hPa |

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::protocol::MeasurementType;

/// Randomized weather-value source
///
/// Owns its RNG; the server seeds one instance at startup and lends it to
/// each session in turn.
pub struct MeasurementGenerator {
    rng: StdRng,
}

impl MeasurementGenerator {
    /// Create a generator seeded from the system clock
    ///
    /// Low-quality, collision-tolerant seeding: good enough for plausible
    /// weather, not for anything cryptographic.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::with_seed(seed)
    }

    /// Create a generator with a fixed seed, for deterministic tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a value for the given measurement type
    pub fn generate(&mut self, ty: MeasurementType) -> f32 {
        let draw: f32 = self.rng.gen();
        match ty {
            MeasurementType::Temperature => draw * 50.0 - 10.0,
            MeasurementType::Humidity => draw * 80.0 + 20.0,
            MeasurementType::WindSpeed => draw * 100.0,
            MeasurementType::Pressure => draw * 100.0 + 950.0,
        }
    }
}

impl Default for MeasurementGenerator {
    fn default() -> Self {
        Self::new()
    }
}
