use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by one game session, so random play can be replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let first: Vec<usize> = (0..16).map(|_| a.random_index(9)).collect();
        let second: Vec<usize> = (0..16).map(|_| b.random_index(9)).collect();
        assert_eq!(first, second);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_random_index_stays_in_range() {
        let mut rng = SessionRng::from_random();
        for len in 1..=9 {
            assert!(rng.random_index(len) < len);
        }
    }
}
