//! Randomness providers.
//!
//! Every random decision the engine makes goes through the [`Dice`] trait,
//! so callers choose between an entropy-seeded generator, a reproducible
//! generator derived from a text seed, or the [`FirstChoice`] fixture that
//! always takes the first listed alternative.

use hkdf::Hkdf;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

/// HKDF salt for text seeds.
pub const SALT_SEED: &[u8] = b"AOLER-DICE-V1";

/// Source of the engine's random decisions.
pub trait Dice {
    /// Returns true with probability `percent / 100`.
    fn chance(&mut self, percent: u8) -> bool;

    /// Picks an index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Picks a value in `low..=high`.
    fn between(&mut self, low: usize, high: usize) -> usize;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn chance(&mut self, percent: u8) -> bool {
        (**self).chance(percent)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }

    fn between(&mut self, low: usize, high: usize) -> usize {
        (**self).between(low, high)
    }
}

/// Picks one element of a non-empty slice.
pub fn choose<'a, T, D: Dice + ?Sized>(dice: &mut D, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(dice.pick(items.len()))
}

/// [`Dice`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: RngCore> RngDice<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> Dice for RngDice<R> {
    fn chance(&mut self, percent: u8) -> bool {
        self.rng.gen_range(0..100u8) < percent
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn between(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}

/// ChaCha20-backed dice, the default for the CLI and the convenience API.
pub type SeededDice = RngDice<ChaCha20Rng>;

impl SeededDice {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }

    /// Derives a reproducible generator from a text seed.
    ///
    /// The same seed always yields the same sequence of decisions.
    pub fn from_text_seed(seed: &str) -> Self {
        Self::new(ChaCha20Rng::from_seed(derive_seed(seed.as_bytes())))
    }
}

/// Dice that always takes the first alternative.
///
/// `chance` is always false, `pick` is always 0 and `between` returns the
/// lower bound. Every embellishment is therefore switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl Dice for FirstChoice {
    fn chance(&mut self, _percent: u8) -> bool {
        false
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }

    fn between(&mut self, low: usize, _high: usize) -> usize {
        low
    }
}

/// Derives a 32-byte seed using HKDF-SHA256.
fn derive_seed(input: &[u8]) -> [u8; 32] {
    let hk = Hkdf::<Sha256>::new(Some(SALT_SEED), input);
    let mut output = [0u8; 32];
    hk.expand(b"dice-seed", &mut output)
        .expect("HKDF expand should not fail");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_seed_deterministic() {
        let mut a = SeededDice::from_text_seed("lol");
        let mut b = SeededDice::from_text_seed("lol");

        let rolls_a: Vec<usize> = (0..32).map(|_| a.pick(1000)).collect();
        let rolls_b: Vec<usize> = (0..32).map(|_| b.pick(1000)).collect();

        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_text_seed_different_seeds() {
        let mut a = SeededDice::from_text_seed("lol");
        let mut b = SeededDice::from_text_seed("rofl");

        let rolls_a: Vec<usize> = (0..32).map(|_| a.pick(1000)).collect();
        let rolls_b: Vec<usize> = (0..32).map(|_| b.pick(1000)).collect();

        assert_ne!(rolls_a, rolls_b);
    }

    #[test]
    fn test_chance_bounds() {
        let mut dice = SeededDice::from_text_seed("bounds");

        for _ in 0..200 {
            assert!(!dice.chance(0));
            assert!(dice.chance(100));
        }
    }

    #[test]
    fn test_between_inclusive() {
        let mut dice = SeededDice::from_text_seed("range");
        let mut seen = std::collections::HashSet::new();

        for _ in 0..2000 {
            let v = dice.between(3, 12);
            assert!((3..=12).contains(&v));
            seen.insert(v);
        }

        // Both ends are reachable
        assert!(seen.contains(&3));
        assert!(seen.contains(&12));
    }

    #[test]
    fn test_first_choice() {
        let mut dice = FirstChoice;

        assert!(!dice.chance(100));
        assert_eq!(dice.pick(5), 0);
        assert_eq!(dice.between(3, 12), 3);
        assert_eq!(choose(&mut dice, &["a", "b"]), Some(&"a"));
    }

    #[test]
    fn test_choose_empty() {
        let mut dice = FirstChoice;
        let empty: [&str; 0] = [];
        assert_eq!(choose(&mut dice, &empty), None);
    }
}
