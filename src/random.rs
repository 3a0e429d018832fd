//! Random-number generator construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator owned by a single run.
///
/// A given seed always yields the same stream. Without one, the seed is
/// drawn from the thread-local generator.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
