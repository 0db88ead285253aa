use quiz_core::model::Score;

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub percentage_label: String,
    pub emoji: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub correct: usize,
    pub wrong: usize,
    pub total: usize,
}

impl From<Score> for ResultsVm {
    fn from(score: Score) -> Self {
        let performance = score.performance();
        Self {
            percentage_label: format!("{}%", score.percentage()),
            emoji: performance.emoji(),
            title: performance.title(),
            message: performance.message(),
            correct: score.correct(),
            wrong: score.wrong(),
            total: score.total(),
        }
    }
}

/// Build the results screen from route parameters.
///
/// # Errors
///
/// Returns `ViewError::InvalidScore` when the counts cannot form a score.
pub fn map_results(correct: usize, total: usize) -> Result<ResultsVm, ViewError> {
    Score::new(correct, total)
        .map(ResultsVm::from)
        .map_err(|_| ViewError::InvalidScore)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_show_percentage_and_tier() {
        let vm = map_results(9, 13).unwrap();
        assert_eq!(vm.percentage_label, "69%");
        assert_eq!(vm.title, "Good Work!");
        assert_eq!(vm.emoji, "👍");
        assert_eq!((vm.correct, vm.wrong, vm.total), (9, 4, 13));
        assert!(vm.message.starts_with("Nice progress"));
    }

    #[test]
    fn perfect_score_is_outstanding() {
        let vm = map_results(13, 13).unwrap();
        assert_eq!(vm.percentage_label, "100%");
        assert_eq!(vm.title, "Outstanding!");
    }

    #[test]
    fn huge_route_counts_still_render() {
        let vm = map_results(usize::MAX / 100, usize::MAX / 100).unwrap();
        assert_eq!(vm.percentage_label, "100%");
        assert_eq!(vm.wrong, 0);
    }

    #[test]
    fn impossible_counts_are_rejected() {
        assert_eq!(map_results(3, 2).unwrap_err(), ViewError::InvalidScore);
        assert_eq!(map_results(0, 0).unwrap_err(), ViewError::InvalidScore);
    }
}
