//! Randomness source shared by every renderer.
//!
//! A [`RandomSource`] is either bound to a seed, in which case every draw is
//! reproducible for the same call sequence, or backed by an OS-seeded
//! cryptographically secure generator. The variant is chosen once at start-up
//! and threaded explicitly through each generation call.

use std::fmt;

use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::SourceError;

/// Supplier of bytes, integers, and choices for the format catalog.
///
/// # Example
///
/// ```
/// use decoy_creds::RandomSource;
///
/// let mut first = RandomSource::seeded(42);
/// let mut second = RandomSource::seeded(42);
///
/// assert_eq!(first.bytes(8), second.bytes(8));
/// assert_eq!(first.int_range(1, 6), second.int_range(1, 6));
/// ```
pub enum RandomSource {
    /// Reproducible stream bound to a seed.
    Seeded {
        /// Seed the stream was created from.
        seed: u64,
        /// Underlying generator.
        rng: ChaCha8Rng,
    },
    /// Non-reproducible stream seeded from the operating system.
    Secure(StdRng),
}

impl RandomSource {
    /// Creates a deterministic source bound to `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from the operating system entropy pool.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Entropy`] if the OS cannot supply entropy.
    pub fn secure() -> Result<Self, SourceError> {
        StdRng::try_from_os_rng()
            .map(Self::Secure)
            .map_err(|err| SourceError::Entropy {
                message: err.to_string(),
            })
    }

    /// Creates a seeded source when `seed` is present, else a secure one.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Entropy`] if a secure source is needed and the
    /// OS cannot supply entropy.
    pub fn from_seed(seed: Option<u64>) -> Result<Self, SourceError> {
        seed.map_or_else(Self::secure, |value| Ok(Self::seeded(value)))
    }

    /// Returns the seed for deterministic sources.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        match self {
            Self::Seeded { seed, .. } => Some(*seed),
            Self::Secure(_) => None,
        }
    }

    /// Draws `n` random bytes.
    pub fn bytes(&mut self, n: usize) -> Vec<u8> {
        let mut buf = vec![0_u8; n];
        self.fill_bytes(&mut buf);
        buf
    }

    /// Draws an integer from the inclusive range `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidRange`] when `low > high`.
    pub fn int_range<T>(&mut self, low: T, high: T) -> Result<T, SourceError>
    where
        T: SampleUniform + PartialOrd + fmt::Display,
    {
        if low > high {
            return Err(SourceError::InvalidRange {
                low: low.to_string(),
                high: high.to_string(),
            });
        }
        Ok(self.random_range(low..=high))
    }

    /// Draws an index in `0..len` via [`Self::int_range`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyCollection`] when `len` is zero.
    pub fn index(&mut self, len: usize) -> Result<usize, SourceError> {
        let last = len.checked_sub(1).ok_or(SourceError::EmptyCollection)?;
        self.int_range(0, last)
    }

    /// Picks one element uniformly from `items`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyCollection`] when `items` is empty.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, SourceError> {
        items.choose(self).ok_or(SourceError::EmptyCollection)
    }

    /// Returns `true` with probability `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidRange`] when the ratio is not a valid
    /// probability.
    pub fn chance(&mut self, numerator: u32, denominator: u32) -> Result<bool, SourceError> {
        if denominator == 0 || numerator > denominator {
            return Err(SourceError::InvalidRange {
                low: numerator.to_string(),
                high: denominator.to_string(),
            });
        }
        Ok(self.random_ratio(numerator, denominator))
    }

    /// Builds a string of `n` characters drawn with replacement from the
    /// ASCII `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyCollection`] when `alphabet` is empty.
    pub fn string(&mut self, alphabet: &str, n: usize) -> Result<String, SourceError> {
        let symbols = alphabet.as_bytes();
        if symbols.is_empty() {
            return Err(SourceError::EmptyCollection);
        }
        (0..n)
            .map(|_| self.choice(symbols).map(|symbol| char::from(*symbol)))
            .collect()
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Seeded { rng, .. } => rng.next_u32(),
            Self::Secure(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Seeded { rng, .. } => rng.next_u64(),
            Self::Secure(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            Self::Seeded { rng, .. } => rng.fill_bytes(dst),
            Self::Secure(rng) => rng.fill_bytes(dst),
        }
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seeded { seed, .. } => f.debug_struct("Seeded").field("seed", seed).finish(),
            Self::Secure(_) => f.write_str("Secure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const ALPHABET: &str = "abc";

    #[test]
    fn seeded_sources_repeat_the_same_sequence() {
        let mut first = RandomSource::seeded(7);
        let mut second = RandomSource::seeded(7);

        for _ in 0..20 {
            assert_eq!(first.bytes(5), second.bytes(5));
            assert_eq!(first.int_range(0_u32, 1_000), second.int_range(0_u32, 1_000));
            assert_eq!(first.string(ALPHABET, 4), second.string(ALPHABET, 4));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut first = RandomSource::seeded(1);
        let mut second = RandomSource::seeded(2);

        assert_ne!(first.bytes(32), second.bytes(32));
    }

    #[test]
    fn secure_sources_do_not_repeat() {
        let mut first = RandomSource::secure().expect("entropy available");
        let mut second = RandomSource::secure().expect("entropy available");

        assert_ne!(first.bytes(32), second.bytes(32));
        assert_eq!(first.seed(), None);
    }

    #[rstest]
    #[case(Some(5), Some(5))]
    #[case(None, None)]
    fn from_seed_selects_variant(#[case] seed: Option<u64>, #[case] expected: Option<u64>) {
        let source = RandomSource::from_seed(seed).expect("source");
        assert_eq!(source.seed(), expected);
    }

    #[test]
    fn int_range_is_inclusive() {
        let mut source = RandomSource::seeded(3);
        let mut seen_low = false;
        let mut seen_high = false;

        for _ in 0..500 {
            let value = source.int_range(1_u32, 3).expect("valid range");
            assert!((1..=3).contains(&value));
            seen_low |= value == 1;
            seen_high |= value == 3;
        }

        assert!(seen_low && seen_high);
    }

    #[test]
    fn int_range_accepts_single_value() {
        let mut source = RandomSource::seeded(3);
        assert_eq!(source.int_range(4_u32, 4), Ok(4));
    }

    #[test]
    fn int_range_rejects_inverted_bounds() {
        let mut source = RandomSource::seeded(3);
        assert_eq!(
            source.int_range(9_u32, 3),
            Err(SourceError::InvalidRange {
                low: "9".to_owned(),
                high: "3".to_owned(),
            })
        );
    }

    #[test]
    fn choice_rejects_empty_collection() {
        let mut source = RandomSource::seeded(3);
        let items: [u8; 0] = [];
        assert_eq!(source.choice(&items), Err(SourceError::EmptyCollection));
    }

    #[test]
    fn index_rejects_zero_length() {
        let mut source = RandomSource::seeded(3);
        assert_eq!(source.index(0), Err(SourceError::EmptyCollection));
    }

    #[test]
    fn string_draws_from_alphabet() {
        let mut source = RandomSource::seeded(11);
        let value = source.string(ALPHABET, 64).expect("non-empty alphabet");

        assert_eq!(value.len(), 64);
        assert!(value.chars().all(|c| ALPHABET.contains(c)));
    }

    #[test]
    fn string_rejects_empty_alphabet() {
        let mut source = RandomSource::seeded(11);
        assert_eq!(source.string("", 3), Err(SourceError::EmptyCollection));
    }

    #[rstest]
    #[case(1, 0)]
    #[case(5, 4)]
    fn chance_rejects_invalid_ratios(#[case] numerator: u32, #[case] denominator: u32) {
        let mut source = RandomSource::seeded(11);
        assert!(source.chance(numerator, denominator).is_err());
    }

    #[test]
    fn chance_extremes_are_certain() {
        let mut source = RandomSource::seeded(11);
        assert_eq!(source.chance(0, 100), Ok(false));
        assert_eq!(source.chance(100, 100), Ok(true));
    }

    #[test]
    fn debug_hides_secure_state() {
        let source = RandomSource::secure().expect("entropy available");
        assert_eq!(format!("{source:?}"), "Secure");
        assert_eq!(format!("{:?}", RandomSource::seeded(9)), "Seeded { seed: 9 }");
    }
}
