//! The randomness seam used by password generation.

use rand::{rngs::OsRng, seq::SliceRandom};

/// The two random operations generation needs: uniform selection from an
/// alphabet and a uniform permutation of a buffer. Injected into the
/// generator so tests can substitute a deterministic source; production
/// callers use [`SecureRandom`].
pub trait RandomSource {
    /// Picks one element of `alphabet`, each with equal probability.
    /// Returns `None` if `alphabet` is empty.
    fn choose(&mut self, alphabet: &[char]) -> Option<char>;

    /// Reorders `chars` so that every permutation is equally likely.
    fn shuffle(&mut self, chars: &mut [char]);
}

/// [`RandomSource`] backed by the operating system's cryptographically
/// secure random number generator. Safe to use from multiple threads, the
/// OS generator handles the coordination.
pub struct SecureRandom;

impl RandomSource for SecureRandom {
    fn choose(&mut self, alphabet: &[char]) -> Option<char> {
        alphabet.choose(&mut OsRng).copied()
    }

    fn shuffle(&mut self, chars: &mut [char]) {
        chars.shuffle(&mut OsRng);
    }
}
