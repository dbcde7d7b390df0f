use std::sync::{Mutex, OnceLock, PoisonError};

use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::clock::{Clock, SystemClock};

/// Source of raw pseudo-random output consumed by the shuffle
#[cfg_attr(test, mockall::automock)]
pub trait Random {
    fn next_u64(&self) -> u64;
}

/// Pseudo-random generator seeded from a [Clock] exactly once, on first use.
///
/// Seeding is guarded by [OnceLock], so the source can be shared between threads and concurrent first calls still
/// seed it a single time.
#[derive(Debug)]
pub struct SeededRandom<C = SystemClock> {
    clock: C,
    state: OnceLock<Seeded>,
}

#[derive(Debug)]
struct Seeded {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl Seeded {
    fn new(seed: u64) -> Self {
        Seeded {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl<C> SeededRandom<C> {
    /// Creates an unseeded source. The clock is not read until the first draw.
    pub const fn new(clock: C) -> Self {
        SeededRandom {
            clock,
            state: OnceLock::new(),
        }
    }

    /// Seed in use, or `None` when nothing has been drawn yet
    pub fn seed(&self) -> Option<u64> {
        self.state.get().map(|seeded| seeded.seed)
    }
}

impl<C: Clock> SeededRandom<C> {
    /// Seeds the generator from the clock if this is the first call and returns the seed. Later calls return the
    /// same seed without touching the clock.
    pub fn ensure_seeded(&self) -> u64 {
        self.seeded().seed
    }

    fn seeded(&self) -> &Seeded {
        self.state.get_or_init(|| {
            let seed = self.clock.unix_seconds();
            log::debug!("Seeding random source with {seed}");
            Seeded::new(seed)
        })
    }
}

impl SeededRandom<SystemClock> {
    /// Creates a source that is already seeded, producing the same stream for the same `seed`
    pub fn with_seed(seed: u64) -> Self {
        SeededRandom {
            clock: SystemClock,
            state: OnceLock::from(Seeded::new(seed)),
        }
    }
}

impl Default for SeededRandom<SystemClock> {
    fn default() -> Self {
        SeededRandom::new(SystemClock)
    }
}

impl<C: Clock> Random for SeededRandom<C> {
    fn next_u64(&self) -> u64 {
        /* A panic while holding the lock cannot leave StdRng in an invalid state */
        self.seeded()
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_u64()
    }
}
