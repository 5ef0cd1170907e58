use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// Недетерминированный RNG: тасовка от `thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раунды при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// RNG раунда: с seed'ом – воспроизводимый, без него – системный.
#[derive(Clone, Debug)]
pub enum RoundRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl RoundRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RoundRng::Seeded(DeterministicRng::from_seed(seed)),
            None => RoundRng::System(SystemRng),
        }
    }
}

impl RandomSource for RoundRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            RoundRng::System(rng) => rng.shuffle(slice),
            RoundRng::Seeded(rng) => rng.shuffle(slice),
        }
    }
}
