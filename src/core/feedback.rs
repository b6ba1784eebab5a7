//! Per-letter feedback codes and whole-round feedback rows
//!
//! A round of the game yields one code per position:
//! - `X` = the letter does not appear in the answer
//! - `C` = the letter is at the correct position
//! - `I` = the letter appears, but at a different position
//!
//! A [`FeedbackRow`] aligns five codes with the five letters of the guess.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Number of distinct feedback rows (3^5)
pub const ROW_COUNT: usize = 243;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not appear in the answer
    Absent,
    /// Letter is at the correct position
    Correct,
    /// Letter appears in the answer, but not at this position
    PresentWrongPosition,
}

impl Feedback {
    /// Single-letter code used in terminal input and output
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => 'X',
            Self::Correct => 'C',
            Self::PresentWrongPosition => 'I',
        }
    }

    /// Parse a single code character, case-insensitively
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Self::Absent),
            'C' | 'c' => Some(Self::Correct),
            'I' | 'i' => Some(Self::PresentWrongPosition),
            _ => None,
        }
    }
}

/// Feedback for a whole round, one code per guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow {
    codes: [Feedback; WORD_LENGTH],
}

impl FeedbackRow {
    /// Create a row from explicit per-position codes
    #[inline]
    #[must_use]
    pub const fn new(codes: [Feedback; WORD_LENGTH]) -> Self {
        Self { codes }
    }

    /// All five codes, aligned with the guess positions
    #[inline]
    #[must_use]
    pub const fn codes(&self) -> &[Feedback; WORD_LENGTH] {
        &self.codes
    }

    /// The code for one position
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn code_at(&self, position: usize) -> Feedback {
        self.codes[position]
    }

    /// True iff every position is [`Feedback::Correct`]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.codes.iter().all(|&code| code == Feedback::Correct)
    }

    /// Parse a row from a string like `"XCIXX"`
    ///
    /// Accepts `X`/`C`/`I` in either case, one per position.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, FeedbackRow};
    ///
    /// let row = FeedbackRow::parse("ccxci").unwrap();
    /// assert_eq!(row.code_at(0), Feedback::Correct);
    /// assert_eq!(row.code_at(2), Feedback::Absent);
    /// assert!(FeedbackRow::parse("ccx").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut codes = [Feedback::Absent; WORD_LENGTH];
        let mut count = 0;

        for (i, ch) in s.chars().enumerate() {
            if i >= WORD_LENGTH {
                return None;
            }
            codes[i] = Feedback::from_code(ch)?;
            count += 1;
        }

        if count == WORD_LENGTH {
            Some(Self { codes })
        } else {
            None
        }
    }

    /// The feedback a game would give for `guess` when the answer is `answer`
    ///
    /// Uses containment semantics: an exact match is `C`, a letter contained
    /// anywhere else in the answer is `I`, and everything else is `X`. These
    /// are the same letter-containment tests the reduction constraints apply,
    /// so generated feedback never contradicts its own compiled constraints.
    #[must_use]
    pub fn judge(guess: &Word, answer: &Word) -> Self {
        let mut codes = [Feedback::Absent; WORD_LENGTH];

        for (i, code) in codes.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if answer.contains_at(letter, i) {
                *code = Feedback::Correct;
            } else if answer.contains(letter) {
                *code = Feedback::PresentWrongPosition;
            }
        }

        Self { codes }
    }

    /// Iterate over every possible feedback row
    ///
    /// Enumerates all 3^5 = 243 combinations of the three codes across the
    /// five positions, in base-3 order with position 0 as the least
    /// significant digit.
    pub fn enumerate() -> impl Iterator<Item = Self> {
        (0..ROW_COUNT as u16).map(Self::from_index)
    }

    /// Decode a base-3 row index into per-position codes
    fn from_index(mut value: u16) -> Self {
        let mut codes = [Feedback::Absent; WORD_LENGTH];

        for code in &mut codes {
            *code = match value % 3 {
                0 => Feedback::Absent,
                1 => Feedback::PresentWrongPosition,
                _ => Feedback::Correct,
            };
            value /= 3;
        }

        Self { codes }
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.codes {
            write!(f, "{}", code.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_row() {
        let row = FeedbackRow::parse("XCIXC").unwrap();
        assert_eq!(row.code_at(0), Feedback::Absent);
        assert_eq!(row.code_at(1), Feedback::Correct);
        assert_eq!(row.code_at(2), Feedback::PresentWrongPosition);
        assert_eq!(row.code_at(4), Feedback::Correct);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            FeedbackRow::parse("xcixc").unwrap(),
            FeedbackRow::parse("XCIXC").unwrap()
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(FeedbackRow::parse("XC").is_none()); // Too short
        assert!(FeedbackRow::parse("XCIXCX").is_none()); // Too long
        assert!(FeedbackRow::parse("XCZXC").is_none()); // Invalid code
        assert!(FeedbackRow::parse("").is_none());
    }

    #[test]
    fn win_detection() {
        assert!(FeedbackRow::parse("CCCCC").unwrap().is_win());
        assert!(!FeedbackRow::parse("CCCCI").unwrap().is_win());
        assert!(!FeedbackRow::parse("XXXXX").unwrap().is_win());
    }

    #[test]
    fn display_round_trips_codes() {
        let row = FeedbackRow::parse("XCIXC").unwrap();
        assert_eq!(row.to_string(), "XCIXC");
    }

    #[test]
    fn judge_exact_match_is_all_correct() {
        let word = Word::new("crane").unwrap();
        assert!(FeedbackRow::judge(&word, &word).is_win());
    }

    #[test]
    fn judge_disjoint_words_is_all_absent() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("musty").unwrap();
        // MUSTY shares no letters with CRANE
        assert_eq!(
            FeedbackRow::judge(&guess, &answer),
            FeedbackRow::parse("XXXXX").unwrap()
        );
    }

    #[test]
    fn judge_mixed_feedback() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("crone").unwrap();
        // C, R, N, E match positions; A is absent from CRONE
        assert_eq!(
            FeedbackRow::judge(&guess, &answer),
            FeedbackRow::parse("CCXCC").unwrap()
        );
    }

    #[test]
    fn judge_wrong_position_letter() {
        let guess = Word::new("slate").unwrap();
        let answer = Word::new("crane").unwrap();
        // S(absent) L(absent) A(correct) T(absent) E(correct)
        assert_eq!(
            FeedbackRow::judge(&guess, &answer),
            FeedbackRow::parse("XXCXC").unwrap()
        );

        let guess = Word::new("nacre").unwrap();
        // N, A, C, R all present in CRANE but misplaced; E correct
        assert_eq!(
            FeedbackRow::judge(&guess, &answer),
            FeedbackRow::parse("IIIIC").unwrap()
        );
    }

    #[test]
    fn enumerate_yields_all_distinct_rows() {
        let rows: Vec<FeedbackRow> = FeedbackRow::enumerate().collect();
        assert_eq!(rows.len(), ROW_COUNT);

        let distinct: std::collections::HashSet<FeedbackRow> = rows.iter().copied().collect();
        assert_eq!(distinct.len(), ROW_COUNT);
    }

    #[test]
    fn enumerate_includes_extremes() {
        let rows: Vec<FeedbackRow> = FeedbackRow::enumerate().collect();
        assert!(rows.contains(&FeedbackRow::parse("XXXXX").unwrap()));
        assert!(rows.contains(&FeedbackRow::parse("CCCCC").unwrap()));
        assert!(rows.contains(&FeedbackRow::parse("IIIII").unwrap()));
    }
}
