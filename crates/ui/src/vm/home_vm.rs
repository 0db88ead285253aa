#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub question_count: usize,
    pub question_label: &'static str,
    pub features: Vec<&'static str>,
    pub start_label: &'static str,
    pub footer: &'static str,
}

#[must_use]
pub fn map_home(question_count: usize) -> HomeVm {
    HomeVm {
        title: "Code Quiz",
        subtitle: "Test Your Programming Knowledge",
        question_count,
        question_label: if question_count == 1 {
            "Question"
        } else {
            "Questions"
        },
        features: vec![
            "Multiple choice questions",
            "Instant results",
            "Score tracking",
        ],
        start_label: "Start Quiz",
        footer: "Ready to challenge yourself?",
    }
}
