//! Scramble generation
//!
//! Shuffles a word's characters until the result differs from the word. The number of
//! shuffles is bounded; when every attempt lands back on the original, the characters are
//! rotated left by one instead.

use super::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// Default number of shuffles tried before falling back to rotation
pub const DEFAULT_SCRAMBLE_ATTEMPTS: u32 = 64;

/// Produce a scramble of `word`
///
/// The result is always a permutation of the word's characters and never equal to the
/// word under case-sensitive comparison.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use unscramble::core::{Word, scramble};
///
/// let word = Word::new("puzzle").unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let scrambled = scramble(&word, &mut rng, 64);
///
/// assert!(word.is_scrambled_by(&scrambled));
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &Word, rng: &mut R, max_attempts: u32) -> String {
    let original: Vec<char> = word.text().chars().collect();
    let mut letters = original.clone();

    for _ in 0..max_attempts {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }

    // Word has at least two distinct characters, so a one-step rotation never matches it
    rotate(&original)
}

fn rotate(letters: &[char]) -> String {
    let mut rotated = letters.to_vec();
    rotated.rotate_left(1);
    rotated.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scramble_is_non_identity_permutation() {
        let mut rng = StdRng::seed_from_u64(42);

        for text in ["cat", "animal", "yoyo", "x-ray", "Kangaroo", "ab"] {
            let word = Word::new(text).unwrap();
            for _ in 0..50 {
                let scrambled = scramble(&word, &mut rng, DEFAULT_SCRAMBLE_ATTEMPTS);
                assert!(
                    word.is_scrambled_by(&scrambled),
                    "'{scrambled}' is not a scramble of '{text}'"
                );
            }
        }
    }

    #[test]
    fn two_letter_word_always_swaps() {
        let mut rng = StdRng::seed_from_u64(1);
        let word = Word::new("ab").unwrap();

        for _ in 0..20 {
            assert_eq!(scramble(&word, &mut rng, DEFAULT_SCRAMBLE_ATTEMPTS), "ba");
        }
    }

    #[test]
    fn zero_attempts_falls_back_to_rotation() {
        let mut rng = StdRng::seed_from_u64(3);
        let word = Word::new("abab").unwrap();

        assert_eq!(scramble(&word, &mut rng, 0), "baba");
    }

    #[test]
    fn rotation_of_repeated_letters_differs() {
        let word = Word::new("aab").unwrap();
        let rotated = rotate(&word.text().chars().collect::<Vec<_>>());

        assert_eq!(rotated, "aba");
        assert!(word.is_scrambled_by(&rotated));
    }

    #[test]
    fn scramble_keeps_multibyte_characters() {
        let mut rng = StdRng::seed_from_u64(9);
        let word = Word::new("crème").unwrap();
        let scrambled = scramble(&word, &mut rng, DEFAULT_SCRAMBLE_ATTEMPTS);

        assert_eq!(scrambled.chars().count(), 5);
        assert!(scrambled.contains('è'));
        assert!(word.is_scrambled_by(&scrambled));
    }
}
