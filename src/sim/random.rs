//! Random spawn parameters for traffic
//!
//! Everything here draws from an injected RNG so tests can seed it.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::obstacle::Variant;
use crate::consts::*;
use crate::lane_y;

/// Seeded generator used by the game
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Car speed in px/s, a whole number in [MIN_SPEED, MAX_SPEED)
pub fn random_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(MIN_SPEED..MAX_SPEED) as f32
}

/// One of the lane y coordinates
pub fn random_lane_y<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    lane_y(rng.random_range(0..LANE_COUNT))
}

/// Car paint job
pub fn random_variant<R: Rng + ?Sized>(rng: &mut R) -> Variant {
    match rng.random_range(0..3u8) {
        0 => Variant::A,
        1 => Variant::B,
        _ => Variant::C,
    }
}
