/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question with a single correct option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    id: u32,
    prompt: &'static str,
    options: [&'static str; OPTION_COUNT],
    correct_answer: usize,
    explanation: &'static str,
}

impl Question {
    #[must_use]
    pub const fn new(
        id: u32,
        prompt: &'static str,
        options: [&'static str; OPTION_COUNT],
        correct_answer: usize,
        explanation: &'static str,
    ) -> Self {
        assert!(correct_answer < OPTION_COUNT, "correct answer out of range");
        Self {
            id,
            prompt,
            options,
            correct_answer,
            explanation,
        }
    }

    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        self.prompt
    }

    #[must_use]
    pub const fn options(&self) -> &[&'static str; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub const fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub const fn explanation(&self) -> &'static str {
        self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, answer: Option<usize>) -> bool {
        answer == Some(self.correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_is_never_correct() {
        let q = Question::new(1, "2 + 2?", ["3", "4", "5", "6"], 1, "2 + 2 = 4");
        assert!(q.is_correct(Some(1)));
        assert!(!q.is_correct(Some(0)));
        assert!(!q.is_correct(None));
    }
}
