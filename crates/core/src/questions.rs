//! Fixed question sets keyed by subject id.

use crate::model::{Question, SubjectId};

/// Subject whose set is served when a subject has none of its own.
pub const DEFAULT_SUBJECT: SubjectId = SubjectId::new("mathematics");

const MATHEMATICS: &[Question] = &[
    Question::new(1, "What is 15 + 27?", ["40", "42", "44", "46"], 1, "15 + 27 = 42"),
    Question::new(
        2,
        "What is the square root of 64?",
        ["6", "7", "8", "9"],
        2,
        "8 × 8 = 64, so √64 = 8",
    ),
    Question::new(3, "What is 12 × 8?", ["94", "96", "98", "100"], 1, "12 × 8 = 96"),
    Question::new(4, "What is 144 ÷ 12?", ["10", "11", "12", "13"], 2, "144 ÷ 12 = 12"),
    Question::new(
        5,
        "What is the value of π (pi) approximately?",
        ["3.14", "3.41", "4.13", "1.34"],
        0,
        "π ≈ 3.14159...",
    ),
];

const PHYSICS: &[Question] = &[
    Question::new(
        1,
        "What is the speed of light in vacuum?",
        ["3 × 10⁸ m/s", "3 × 10⁶ m/s", "3 × 10⁷ m/s", "3 × 10⁹ m/s"],
        0,
        "Speed of light in vacuum is approximately 3 × 10⁸ m/s",
    ),
    Question::new(
        2,
        "What is the unit of force?",
        ["Joule", "Newton", "Watt", "Pascal"],
        1,
        "Newton (N) is the SI unit of force",
    ),
    Question::new(
        3,
        "What is the acceleration due to gravity on Earth?",
        ["9.8 m/s²", "10.8 m/s²", "8.9 m/s²", "11.2 m/s²"],
        0,
        "Standard acceleration due to gravity is 9.8 m/s²",
    ),
    Question::new(
        4,
        "Which law states \"For every action, there is an equal and opposite reaction\"?",
        ["First Law", "Second Law", "Third Law", "Law of Gravitation"],
        2,
        "This is Newton's Third Law of Motion",
    ),
    Question::new(
        5,
        "What is the formula for kinetic energy?",
        ["mgh", "mv", "½mv²", "F = ma"],
        2,
        "Kinetic energy = ½mv² where m is mass and v is velocity",
    ),
];

/// Registered set for `subject`, if any.
#[must_use]
pub fn registered(subject: SubjectId) -> Option<&'static [Question]> {
    match subject.as_str() {
        "mathematics" => Some(MATHEMATICS),
        "physics" => Some(PHYSICS),
        _ => None,
    }
}

/// Questions for `subject`, falling back to the mathematics set.
#[must_use]
pub fn questions_for(subject: SubjectId) -> &'static [Question] {
    registered(subject).unwrap_or(MATHEMATICS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_subject_gets_mathematics() {
        let questions = questions_for(SubjectId::new("philosophy"));
        assert_eq!(questions, questions_for(DEFAULT_SUBJECT));
        assert!(registered(SubjectId::new("philosophy")).is_none());
    }

    #[test]
    fn sets_are_stable_and_non_empty() {
        for id in ["mathematics", "physics", "history"] {
            let first = questions_for(SubjectId::new(id));
            let second = questions_for(SubjectId::new(id));
            assert_eq!(first.len(), 5);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn only_the_force_question_answers_b_in_physics() {
        let b_answers: Vec<u32> = PHYSICS
            .iter()
            .filter(|q| q.correct_answer() == 1)
            .map(Question::id)
            .collect();
        assert_eq!(b_answers, vec![2]);
    }
}
