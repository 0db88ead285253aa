use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("a score needs at least one question")]
    EmptyTotal,

    #[error("correct count ({correct}) exceeds total ({total})")]
    CorrectExceedsTotal { correct: usize, total: usize },
}

/// Round `part / whole * 100` half up, without floating point.
/// Widened so any `usize` counts fit.
fn rounded_percent(part: usize, whole: usize) -> u32 {
    let (part, whole) = (part as u128, whole as u128);
    let scaled = (part * 200 + whole) / (whole * 2);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Final tally of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    /// # Errors
    ///
    /// Returns `ScoreError::EmptyTotal` when `total` is zero and
    /// `ScoreError::CorrectExceedsTotal` when `correct > total`.
    pub fn new(correct: usize, total: usize) -> Result<Self, ScoreError> {
        if total == 0 {
            return Err(ScoreError::EmptyTotal);
        }
        if correct > total {
            return Err(ScoreError::CorrectExceedsTotal { correct, total });
        }
        Ok(Self { correct, total })
    }

    /// Tally produced by a session, which guarantees `0 < total` and `correct <= total`.
    pub(crate) fn tally(correct: usize, total: usize) -> Self {
        debug_assert!(total > 0 && correct <= total);
        Self { correct, total }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn wrong(&self) -> usize {
        self.total - self.correct
    }

    /// Whole-number percentage, rounded half up.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        rounded_percent(self.correct, self.total)
    }

    #[must_use]
    pub fn performance(&self) -> Performance {
        Performance::from_percentage(self.percentage())
    }
}

//
// ─── PERFORMANCE ──────────────────────────────────────────────────────────────
//

/// Qualitative band shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Outstanding,
    Excellent,
    Great,
    Good,
    KeepTrying,
}

impl Performance {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Outstanding,
            80..=89 => Self::Excellent,
            70..=79 => Self::Great,
            60..=69 => Self::Good,
            _ => Self::KeepTrying,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding!",
            Self::Excellent => "Excellent!",
            Self::Great => "Great Job!",
            Self::Good => "Good Work!",
            Self::KeepTrying => "Keep Trying!",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Outstanding => "🏆",
            Self::Excellent => "🎉",
            Self::Great => "⭐",
            Self::Good => "👍",
            Self::KeepTrying => "💪",
        }
    }

    /// Encouragement text. Coarser than the tiers: two bands above 60%.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Outstanding | Self::Excellent => {
                "You've demonstrated excellent knowledge! Keep up the great work!"
            }
            Self::Great | Self::Good => "Nice progress! Review the questions to improve even more.",
            Self::KeepTrying => "Every attempt is a learning opportunity. Keep practicing!",
        }
    }
}

//
// ─── PROGRESS ─────────────────────────────────────────────────────────────────
//

/// Position of the cursor within the quiz, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub position: usize,
    pub total: usize,
    pub percent: u32,
}

impl QuizProgress {
    #[must_use]
    pub fn at(cursor: usize, total: usize) -> Self {
        let position = cursor + 1;
        Self {
            position,
            total,
            percent: if total == 0 {
                0
            } else {
                rounded_percent(position, total)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rejects_impossible_counts() {
        assert_eq!(Score::new(0, 0).unwrap_err(), ScoreError::EmptyTotal);
        assert_eq!(
            Score::new(3, 2).unwrap_err(),
            ScoreError::CorrectExceedsTotal {
                correct: 3,
                total: 2
            }
        );
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(Score::new(1, 2).unwrap().percentage(), 50);
        assert_eq!(Score::new(2, 3).unwrap().percentage(), 67);
        assert_eq!(Score::new(1, 3).unwrap().percentage(), 33);
        assert_eq!(Score::new(1, 8).unwrap().percentage(), 13);
        assert_eq!(Score::new(13, 13).unwrap().percentage(), 100);
        assert_eq!(Score::new(0, 13).unwrap().percentage(), 0);
    }

    #[test]
    fn wrong_is_total_minus_correct() {
        let score = Score::new(9, 13).unwrap();
        assert_eq!(score.wrong(), 4);
    }

    #[test]
    fn tiers_switch_at_boundaries() {
        assert_eq!(Performance::from_percentage(100), Performance::Outstanding);
        assert_eq!(Performance::from_percentage(90), Performance::Outstanding);
        assert_eq!(Performance::from_percentage(89), Performance::Excellent);
        assert_eq!(Performance::from_percentage(80), Performance::Excellent);
        assert_eq!(Performance::from_percentage(79), Performance::Great);
        assert_eq!(Performance::from_percentage(70), Performance::Great);
        assert_eq!(Performance::from_percentage(69), Performance::Good);
        assert_eq!(Performance::from_percentage(60), Performance::Good);
        assert_eq!(Performance::from_percentage(59), Performance::KeepTrying);
        assert_eq!(Performance::from_percentage(0), Performance::KeepTrying);
    }

    #[test]
    fn message_bands_follow_percentage() {
        assert!(Performance::Excellent.message().starts_with("You've demonstrated"));
        assert!(Performance::Good.message().starts_with("Nice progress"));
        assert!(Performance::KeepTrying.message().starts_with("Every attempt"));
    }

    #[test]
    fn percentage_handles_huge_counts() {
        let full = Score::new(usize::MAX / 100, usize::MAX / 100).unwrap();
        assert_eq!(full.percentage(), 100);

        let max = Score::new(usize::MAX, usize::MAX).unwrap();
        assert_eq!(max.percentage(), 100);

        let half = Score::new(usize::MAX / 2, usize::MAX).unwrap();
        assert_eq!(half.percentage(), 50);
        assert_eq!(Score::new(0, usize::MAX).unwrap().percentage(), 0);
    }

    #[test]
    fn score_picks_performance_from_rounded_percentage() {
        // 8/9 = 88.9% rounds to 89
        let score = Score::new(8, 9).unwrap();
        assert_eq!(score.performance(), Performance::Excellent);
        assert_eq!(score.performance().emoji(), "🎉");
    }

    #[test]
    fn progress_is_one_based() {
        let progress = QuizProgress::at(0, 13);
        assert_eq!(progress.position, 1);
        assert_eq!(progress.percent, 8);

        let last = QuizProgress::at(12, 13);
        assert_eq!(last.position, 13);
        assert_eq!(last.percent, 100);
    }
}
