//! Read-only views of a session, produced after every mutating operation.
//!
//! The UI renders only from these; it never reaches into the session.

use super::grading::{FeedbackError, ScoreTier, Verdict};
use super::session::Phase;
use crate::bank::OptionId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub title: String,
    pub phase: Phase,
    pub question: Option<QuestionView>,
    /// False on the first question.
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub feedback: Option<FeedbackView>,
    /// `MM:SS`
    pub elapsed: String,
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    /// 1-based.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<OptionView>,
    pub multi_answer: bool,
    pub is_last: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionView {
    pub id: OptionId,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackTone {
    Correct,
    Incorrect,
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackView {
    pub text: String,
    pub tone: FeedbackTone,
}

impl FeedbackView {
    pub fn from_result(result: &Result<Verdict, FeedbackError>) -> Self {
        match result {
            Ok(verdict) => Self {
                text: verdict.to_string(),
                tone: if verdict.is_correct() {
                    FeedbackTone::Correct
                } else {
                    FeedbackTone::Incorrect
                },
            },
            Err(err) => Self {
                text: err.to_string(),
                tone: FeedbackTone::Prompt,
            },
        }
    }
}

/// Final results, present once the quiz is complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub elapsed: String,
    pub tier: ScoreTier,
}

impl Summary {
    pub fn new(score: usize, total: usize, elapsed_seconds: u64) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64 * 100.0
        };
        Self {
            score,
            total,
            percentage,
            elapsed: format_elapsed(elapsed_seconds),
            tier: ScoreTier::for_score(score, total),
        }
    }

    /// `"You scored 7 out of 10 (70.00%)"`
    pub fn score_line(&self) -> String {
        format!(
            "You scored {} out of {} ({:.2}%)",
            self.score, self.total, self.percentage
        )
    }

    pub fn time_line(&self) -> String {
        format!("Time Taken: {}", self.elapsed)
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

/// Format seconds as `MM:SS`. Minutes keep counting past 59.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(59), "00:59");
        assert_eq!(format_elapsed(61), "01:01");
        assert_eq!(format_elapsed(3600), "60:00");
    }

    #[test]
    fn test_summary_lines() {
        let summary = Summary::new(2, 3, 125);
        assert_eq!(summary.score_line(), "You scored 2 out of 3 (66.67%)");
        assert_eq!(summary.time_line(), "Time Taken: 02:05");
        assert_eq!(summary.tier, ScoreTier::GoodJob);

        let perfect = Summary::new(2, 2, 0);
        assert_eq!(perfect.score_line(), "You scored 2 out of 2 (100.00%)");
        assert_eq!(perfect.message(), ScoreTier::Excellent.message());
    }

    #[test]
    fn test_feedback_view_tones() {
        let prompt = FeedbackView::from_result(&Err(FeedbackError::EmptySelection));
        assert_eq!(prompt.tone, FeedbackTone::Prompt);

        let ok = FeedbackView::from_result(&Ok(Verdict::Correct));
        assert_eq!(ok.tone, FeedbackTone::Correct);
        assert_eq!(ok.text, "Correct!");
    }
}
