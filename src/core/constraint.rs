//! Reduction constraints derived from round feedback
//!
//! Each constraint is a pure pass/fail test over a [`Word`], derived from one
//! feedback signal of one round. Constraints never carry cross-round
//! knowledge; accumulated state lives in `solver::GameState`.

use super::{Feedback, Word};
use std::fmt;

/// A single-letter constraint on candidate words
///
/// The closed set of variants keeps `pass` and `priority` exhaustive matches,
/// so adding a feedback kind is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The letter appears nowhere in the word
    Excluded { letter: u8 },
    /// The word has exactly this letter at this position
    CorrectAt { position: usize, letter: u8 },
    /// The word contains the letter somewhere other than this position
    PresentNotAt { position: usize, letter: u8 },
}

impl Constraint {
    /// Build the constraint implied by one positional feedback code
    #[must_use]
    pub const fn for_feedback(code: Feedback, position: usize, letter: u8) -> Self {
        match code {
            Feedback::Absent => Self::Excluded { letter },
            Feedback::Correct => Self::CorrectAt { position, letter },
            Feedback::PresentWrongPosition => Self::PresentNotAt { position, letter },
        }
    }

    /// The letter this constraint tests
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        match self {
            Self::Excluded { letter }
            | Self::CorrectAt { letter, .. }
            | Self::PresentNotAt { letter, .. } => *letter,
        }
    }

    /// Tie-break ordering used when assembling a round's constraint list
    ///
    /// Lower sorts first: `CorrectAt` = 1, `PresentNotAt` = 2, `Excluded` = 3.
    /// Priority never affects whether a word passes, only the order
    /// duplicate elimination walks the list in.
    #[inline]
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::CorrectAt { .. } => 1,
            Self::PresentNotAt { .. } => 2,
            Self::Excluded { .. } => 3,
        }
    }

    /// Whether `word` is still a viable candidate under this constraint
    #[must_use]
    pub fn pass(&self, word: &Word) -> bool {
        match self {
            Self::Excluded { letter } => !word.contains(*letter),
            Self::CorrectAt { position, letter } => word.contains_at(*letter, *position),
            Self::PresentNotAt { position, letter } => {
                word.contains(*letter) && !word.contains_at(*letter, *position)
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Excluded { .. } => 'X',
            Self::CorrectAt { .. } => 'C',
            Self::PresentNotAt { .. } => 'I',
        };
        write!(f, "[{}] - {code}", self.letter() as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn excluded_passes_words_without_letter() {
        let constraint = Constraint::Excluded { letter: b'A' };
        assert!(constraint.pass(&word("crone")));
        assert!(!constraint.pass(&word("crane")));
        assert!(!constraint.pass(&word("aorta")));
    }

    #[test]
    fn correct_at_requires_exact_position() {
        let constraint = Constraint::CorrectAt {
            position: 0,
            letter: b'C',
        };
        assert!(constraint.pass(&word("crane")));
        assert!(constraint.pass(&word("crone")));
        assert!(!constraint.pass(&word("trace"))); // C present, wrong spot
        assert!(!constraint.pass(&word("slate")));
    }

    #[test]
    fn present_not_at_requires_letter_elsewhere() {
        let constraint = Constraint::PresentNotAt {
            position: 0,
            letter: b'C',
        };
        assert!(constraint.pass(&word("trace"))); // C at position 3
        assert!(!constraint.pass(&word("crane"))); // C at the banned position
        assert!(!constraint.pass(&word("slate"))); // No C at all
    }

    #[test]
    fn priorities_order_correct_before_present_before_excluded() {
        let correct = Constraint::CorrectAt {
            position: 0,
            letter: b'A',
        };
        let present = Constraint::PresentNotAt {
            position: 1,
            letter: b'B',
        };
        let excluded = Constraint::Excluded { letter: b'C' };

        assert!(correct.priority() < present.priority());
        assert!(present.priority() < excluded.priority());
    }

    #[test]
    fn for_feedback_maps_codes_to_variants() {
        assert_eq!(
            Constraint::for_feedback(Feedback::Absent, 2, b'Q'),
            Constraint::Excluded { letter: b'Q' }
        );
        assert_eq!(
            Constraint::for_feedback(Feedback::Correct, 2, b'Q'),
            Constraint::CorrectAt {
                position: 2,
                letter: b'Q'
            }
        );
        assert_eq!(
            Constraint::for_feedback(Feedback::PresentWrongPosition, 2, b'Q'),
            Constraint::PresentNotAt {
                position: 2,
                letter: b'Q'
            }
        );
    }

    #[test]
    fn display_matches_feedback_codes() {
        assert_eq!(Constraint::Excluded { letter: b'A' }.to_string(), "[A] - X");
        assert_eq!(
            Constraint::CorrectAt {
                position: 1,
                letter: b'B'
            }
            .to_string(),
            "[B] - C"
        );
        assert_eq!(
            Constraint::PresentNotAt {
                position: 1,
                letter: b'B'
            }
            .to_string(),
            "[B] - I"
        );
    }
}
