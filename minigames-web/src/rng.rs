//! Randomness for grid generation.
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Seed material for a fresh grid. Browsers lack OS entropy under
/// `wasm32-unknown-unknown`, so the clock and `Math.random` are mixed instead.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn entropy_seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits().rotate_left(32)
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

#[must_use]
pub fn grid_rng() -> SmallRng {
    SmallRng::seed_from_u64(entropy_seed())
}
