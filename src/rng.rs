use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random source used when dealing cards
#[derive(Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new GameRng, drawing a fresh seed when none is given
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        GameRng {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was built from, so a deal can be replayed
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in [0, len), or None for an empty range
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_picks_same_indices() {
        let mut rng1 = GameRng::new(Some(12345));
        let mut rng2 = GameRng::new(Some(12345));

        for len in 1..100 {
            assert_eq!(
                rng1.pick_index(len),
                rng2.pick_index(len),
                "Same seed should pick the same indices"
            );
        }
    }

    #[test]
    fn test_pick_index_in_bounds() {
        let mut rng = GameRng::new(Some(123));
        for _ in 0..1000 {
            let idx = rng.pick_index(10).unwrap();
            assert!(idx < 10, "pick_index should be in [0, len)");
        }
    }

    #[test]
    fn test_pick_index_empty() {
        let mut rng = GameRng::new(Some(7));
        assert_eq!(rng.pick_index(0), None);
    }

    #[test]
    fn test_seed_getter() {
        let rng = GameRng::new(Some(999));
        assert_eq!(rng.seed(), 999);
    }
}
