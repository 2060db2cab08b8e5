use apex_core::Locale;
use apex_core::quiz::{QuizOutcome, QuizSession};

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub letter: char,
    pub text: &'static str,
    pub selected: bool,
}

/// One question as the quiz screen shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub title: String,
    pub position_label: String,
    pub progress_percent: u32,
    pub prompt: &'static str,
    pub options: Vec<QuizOptionVm>,
    pub can_go_back: bool,
    pub can_advance: bool,
    pub advance_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub heading: &'static str,
    pub subject_name: &'static str,
    pub percentage: u32,
    pub summary: String,
    pub correct: u32,
    pub incorrect: u32,
    pub passed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Question(QuizQuestionVm),
    Result(QuizResultVm),
}

#[must_use]
pub fn map_quiz(session: &QuizSession, locale: Locale) -> QuizVm {
    match session.outcome() {
        Some(outcome) => QuizVm::Result(map_result(session, &outcome, locale)),
        None => QuizVm::Question(map_question(session, locale)),
    }
}

fn map_question(session: &QuizSession, locale: Locale) -> QuizQuestionVm {
    let question = session.current_question();
    let answer = session.current_answer();
    let options = question
        .options()
        .iter()
        .zip(OPTION_LETTERS)
        .enumerate()
        .map(|(index, (text, letter))| QuizOptionVm {
            index,
            letter,
            text: *text,
            selected: answer == Some(index),
        })
        .collect();

    QuizQuestionVm {
        title: format!("{} Quiz", session.subject().localized_name(locale)),
        position_label: format!("{} / {}", session.current_index() + 1, session.total()),
        progress_percent: session.progress_percent(),
        prompt: question.prompt(),
        options,
        can_go_back: !session.is_first(),
        can_advance: session.can_advance(),
        advance_label: if session.is_last() { "Finish Quiz" } else { "Next" },
    }
}

fn map_result(session: &QuizSession, outcome: &QuizOutcome, locale: Locale) -> QuizResultVm {
    QuizResultVm {
        heading: if outcome.passed {
            "Quiz Completed!"
        } else {
            "Quiz Complete"
        },
        subject_name: session.subject().localized_name(locale),
        percentage: outcome.percentage,
        summary: format!("{} out of {} correct", outcome.score, outcome.total),
        correct: outcome.score,
        incorrect: outcome.incorrect(),
        passed: outcome.passed,
    }
}
