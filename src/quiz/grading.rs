//! Answer comparison and score tiers.
//!
//! The same rule grades advisory feedback and the final scoring pass: a
//! selection is correct only when it equals the answer key exactly.

use crate::bank::{AnswerKey, OptionId, Question};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Please select at least one option before proceeding.")]
    EmptySelection,
    #[error("The quiz is not in progress.")]
    NotInProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect {
        /// Labels of the correct options, comma separated.
        correct_options: String,
        multiple: bool,
    },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => f.write_str("Correct!"),
            Verdict::Incorrect {
                correct_options,
                multiple: true,
            } => write!(f, "Wrong! The correct answers are: {}", correct_options),
            Verdict::Incorrect {
                correct_options,
                multiple: false,
            } => write!(f, "Wrong! The correct answer is: {}", correct_options),
        }
    }
}

/// Exact-match comparison. A single-answer key needs exactly that one option;
/// a multi-answer key needs the full set and nothing else.
pub fn is_correct(key: &AnswerKey, selection: &BTreeSet<OptionId>) -> bool {
    match key {
        AnswerKey::Single(id) => selection.len() == 1 && selection.contains(id),
        AnswerKey::Multiple(ids) => selection == ids,
    }
}

/// Labels of the correct options in the order the question lists them.
pub fn correct_option_text(question: &Question) -> String {
    question
        .options
        .iter()
        .filter(|o| question.answer.contains(&o.id))
        .map(|o| o.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn grade(question: &Question, selection: &BTreeSet<OptionId>) -> Result<Verdict, FeedbackError> {
    if selection.is_empty() {
        return Err(FeedbackError::EmptySelection);
    }
    if is_correct(&question.answer, selection) {
        Ok(Verdict::Correct)
    } else {
        Ok(Verdict::Incorrect {
            correct_options: correct_option_text(question),
            multiple: question.is_multi_answer(),
        })
    }
}

/// Qualitative band for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreTier {
    Excellent,
    GoodJob,
    KeepStudying,
}

impl ScoreTier {
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            ScoreTier::Excellent
        } else if score >= total / 2 {
            ScoreTier::GoodJob
        } else {
            ScoreTier::KeepStudying
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent! You have a strong grasp of the material.",
            ScoreTier::GoodJob => "Good job! You might want to review a few concepts.",
            ScoreTier::KeepStudying => "Keep studying! Revisit the material for better understanding.",
        }
    }
}
