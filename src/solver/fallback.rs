//! Word synthesis when no dictionary word fits
//!
//! The generated text is not required to be a dictionary word. It only has to
//! be the right length and respect the known greens.

use super::constraints::ConstraintDescriptor;

/// Letters from most to least common in English text
pub const LETTER_FREQUENCY_ORDER: &str = "EARIOTNSLCUDPMHGBFYWKVXZJQ";

/// Builds a guess from a constraint descriptor alone
///
/// Implementations are total: they always return `word_length` letters.
pub trait FallbackGenerator: Send + Sync {
    fn generate(&self, descriptor: &ConstraintDescriptor, word_length: usize) -> String;
}

/// Fills a word slot by slot from the known constraints
///
/// 1. Greens go in their positions
/// 2. Each yellow letter goes in the first free slot where it has not been
///    seen yellow, then letters short of their minimum count are repeated,
///    in any free slot if no allowed one is left
/// 3. Remaining slots take the most frequent letter not known to be grey,
///    preferring letters not already used
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintFallback;

impl ConstraintFallback {
    fn excluded_at(descriptor: &ConstraintDescriptor, position: usize, letter: char) -> bool {
        descriptor
            .yellow
            .get(&position)
            .is_some_and(|letters| letters.contains(&letter))
    }

    fn is_absent(descriptor: &ConstraintDescriptor, letter: char) -> bool {
        descriptor.grey.contains(&letter)
            && !descriptor.green.values().any(|&l| l == letter)
            && !descriptor.yellow.values().any(|letters| letters.contains(&letter))
    }

    fn place(slots: &mut [Option<char>], descriptor: &ConstraintDescriptor, letter: char) -> bool {
        let free = slots.iter().enumerate().position(|(position, slot)| {
            slot.is_none() && !Self::excluded_at(descriptor, position, letter)
        });
        match free {
            Some(position) => {
                slots[position] = Some(letter);
                true
            }
            None => false,
        }
    }

    fn place_anywhere(slots: &mut [Option<char>], letter: char) -> bool {
        match slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(letter);
                true
            }
            None => false,
        }
    }

    fn filler(descriptor: &ConstraintDescriptor, slots: &[Option<char>], position: usize) -> char {
        let allowed = |letter: &char| {
            !Self::is_absent(descriptor, *letter) && !Self::excluded_at(descriptor, position, *letter)
        };

        LETTER_FREQUENCY_ORDER
            .chars()
            .filter(allowed)
            .find(|letter| !slots.contains(&Some(*letter)))
            .or_else(|| LETTER_FREQUENCY_ORDER.chars().find(allowed))
            .unwrap_or('E')
    }
}

impl FallbackGenerator for ConstraintFallback {
    fn generate(&self, descriptor: &ConstraintDescriptor, word_length: usize) -> String {
        let mut slots: Vec<Option<char>> = vec![None; word_length];

        for (&position, &letter) in &descriptor.green {
            if let Some(slot) = slots.get_mut(position) {
                *slot = Some(letter);
            }
        }

        for letters in descriptor.yellow.values() {
            for &letter in letters {
                if !slots.contains(&Some(letter)) {
                    Self::place(&mut slots, descriptor, letter);
                }
            }
        }

        for (&letter, &min) in &descriptor.min_letter_counts {
            let mut placed = slots.iter().filter(|slot| **slot == Some(letter)).count();
            while placed < min
                && (Self::place(&mut slots, descriptor, letter)
                    || Self::place_anywhere(&mut slots, letter))
            {
                placed += 1;
            }
        }

        for position in 0..word_length {
            if slots[position].is_none() {
                let letter = Self::filler(descriptor, &slots, position);
                slots[position] = Some(letter);
            }
        }

        slots.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word, evaluate};
    use crate::solver::ConstraintSet;

    fn descriptor_after(rounds: &[(&str, &str)]) -> ConstraintDescriptor {
        let mut constraints = ConstraintSet::new();
        for (guess, secret) in rounds {
            let feedback =
                evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap()).unwrap();
            constraints.update(&feedback);
        }
        constraints.descriptor()
    }

    #[test]
    fn empty_descriptor_uses_frequency_order() {
        let word = ConstraintFallback.generate(&ConstraintDescriptor::default(), 5);
        assert_eq!(word, "EARIO");
    }

    #[test]
    fn greens_are_kept_in_place() {
        let descriptor = descriptor_after(&[("crane", "charm")]);
        let word = ConstraintFallback.generate(&descriptor, 5);

        assert_eq!(word.len(), 5);
        assert_eq!(word.chars().next(), Some('C'));
        assert_eq!(word.chars().nth(2), Some('A'));
    }

    #[test]
    fn yellows_move_out_of_excluded_positions() {
        let descriptor = descriptor_after(&[("crane", "charm")]);
        let word = ConstraintFallback.generate(&descriptor, 5);

        // R was yellow at position 1, so it must appear elsewhere
        assert!(word.contains('R'));
        assert_ne!(word.chars().nth(1), Some('R'));
    }

    #[test]
    fn grey_letters_are_skipped() {
        let descriptor = descriptor_after(&[("eaten", "brick")]);
        let word = ConstraintFallback.generate(&descriptor, 5);

        for letter in ['E', 'A', 'T', 'N'] {
            assert!(!word.contains(letter), "{word} contains grey {letter}");
        }
    }

    #[test]
    fn min_counts_place_repeated_letters() {
        let descriptor = descriptor_after(&[("loyal", "alloy")]);
        let word = ConstraintFallback.generate(&descriptor, 5);
        assert_eq!(word.chars().filter(|&c| c == 'L').count(), 2);
    }

    #[test]
    fn always_returns_requested_length() {
        let guess = Word::new("abcdefghijklmnopqrstuvwxyz").unwrap();
        let all_grey = Feedback::from_pattern(&guess, &"-".repeat(26)).unwrap();
        let mut constraints = ConstraintSet::new();
        constraints.update(&all_grey);

        for length in [1, 5, 8] {
            let word = ConstraintFallback.generate(&constraints.descriptor(), length);
            assert_eq!(word.len(), length);
        }
        assert_eq!(ConstraintFallback.generate(&constraints.descriptor(), 3), "EEE");
    }

    #[test]
    fn out_of_range_greens_are_ignored() {
        let descriptor = descriptor_after(&[("slate", "slate")]);
        let word = ConstraintFallback.generate(&descriptor, 3);
        assert_eq!(word, "SLA");
    }
}
