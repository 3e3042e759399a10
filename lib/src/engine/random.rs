// lib/src/engine/random.rs
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random source shared by all requests.
///
/// `Entropy` uses the thread-local generator, so concurrent requests never
/// contend. `Seeded` serialises draws through one generator, which makes a
/// single-threaded sequence of calls reproducible.
#[derive(Debug, Default)]
pub enum RandomSource {
    #[default]
    Entropy,
    Seeded(Mutex<StdRng>),
}

impl RandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RandomSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => RandomSource::Entropy,
        }
    }

    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            RandomSource::Entropy => f(&mut rand::thread_rng()),
            RandomSource::Seeded(rng) => {
                // draws cannot leave the generator in a bad state, so a poisoned lock is still usable
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
        }
    }
}
