//! Contains the Pseudo-random number generator. Used for generating random
//! `Position`s and `BitBoard`s.

/// Object for generating pseudo-random numbers.
pub struct PRNG {
    seed: u64,
}

impl PRNG {
    /// Creates PRNG from a seed.
    ///
    /// A seed of zero degenerates to an all-zero stream; seed with a nonzero
    /// value.
    #[inline(always)]
    pub fn init(s: u64) -> PRNG {
        PRNG { seed: s }
    }

    /// Returns a pseudo-random number.
    pub fn rand(&mut self) -> u64 {
        self.rand_change()
    }

    /// Randomizes the current seed and returns a random value.
    fn rand_change(&mut self) -> u64 {
        self.seed ^= self.seed >> 12;
        self.seed ^= self.seed << 25;
        self.seed ^= self.seed >> 27;
        self.seed.wrapping_mul(2685_8216_5773_6338_717)
    }
}

#[cfg(test)]
mod test {
    use super::PRNG;

    #[test]
    fn determinism() {
        let mut a = PRNG::init(10300014);
        let mut b = PRNG::init(10300014);
        for _ in 0..64 {
            assert_eq!(a.rand(), b.rand());
        }
        let mut c = PRNG::init(999);
        assert_ne!(a.rand(), c.rand());
    }

    #[test]
    fn zero_seed_is_degenerate() {
        let mut prng = PRNG::init(0);
        for _ in 0..8 {
            assert_eq!(prng.rand(), 0);
        }
    }
}
