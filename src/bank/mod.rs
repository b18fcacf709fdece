//! Question bank loading and validation.
//!
//! A bank is an ordered, read-only list of questions. It is validated once at
//! load time so that grading can never meet an answer id that no option
//! carries.

pub mod model;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use model::{AnswerKey, OptionId, Question, QuizOption};
use model::{parse_option_id, RawAnswer, RawBank, RawQuestion};

const BUILTIN_BANK: &str = include_str!("../../data/questions.toml");
const DEFAULT_TITLE: &str = "Quiz";

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("question bank contains no questions")]
    Empty,
    #[error("question {question} has no options")]
    NoOptions { question: usize },
    #[error("question {question}: option \"{label}\" has no identifier prefix like \"A)\"")]
    MissingPrefix { question: usize, label: String },
    #[error("question {question}: option id {id} appears more than once")]
    DuplicateOption { question: usize, id: OptionId },
    #[error("question {question}: answer {id} does not match any option")]
    UnknownAnswer { question: usize, id: OptionId },
    #[error("question {question}: answer list is empty")]
    EmptyAnswer { question: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    title: String,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already-validated questions.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self {
            title: title.into(),
            questions,
        })
    }

    /// The bundled question set.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_toml_str(BUILTIN_BANK)
    }

    pub fn load(path: &Path) -> Result<Self, BankError> {
        let contents = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), questions = bank.len(), "loaded question bank");
        Ok(bank)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, BankError> {
        let raw: RawBank = toml::from_str(contents)?;
        let questions = raw
            .questions
            .into_iter()
            .enumerate()
            .map(|(idx, q)| validate_question(idx + 1, q))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()), questions)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

/// `number` is 1-based, for error messages.
fn validate_question(number: usize, raw: RawQuestion) -> Result<Question, BankError> {
    if raw.options.is_empty() {
        return Err(BankError::NoOptions { question: number });
    }

    let mut seen = BTreeSet::new();
    let mut options = Vec::with_capacity(raw.options.len());
    for label in raw.options {
        let id = parse_option_id(&label).ok_or_else(|| BankError::MissingPrefix {
            question: number,
            label: label.clone(),
        })?;
        if !seen.insert(id.clone()) {
            return Err(BankError::DuplicateOption { question: number, id });
        }
        options.push(QuizOption { id, label });
    }

    let check = |id: OptionId| {
        if seen.contains(&id) {
            Ok(id)
        } else {
            Err(BankError::UnknownAnswer { question: number, id })
        }
    };

    let answer = match raw.answer {
        RawAnswer::Single(id) => AnswerKey::Single(check(OptionId::new(&id))?),
        RawAnswer::Multiple(ids) => {
            if ids.is_empty() {
                return Err(BankError::EmptyAnswer { question: number });
            }
            let ids = ids
                .iter()
                .map(|id| check(OptionId::new(id)))
                .collect::<Result<BTreeSet<_>, _>>()?;
            AnswerKey::Multiple(ids)
        }
    };

    Ok(Question {
        text: raw.text,
        options,
        answer,
    })
}
