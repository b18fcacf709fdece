//! Question bank data model.
//!
//! `RawBank`/`RawQuestion` mirror the TOML file; they are validated into
//! [`Question`] values before a session ever sees them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Short identifier of an option, e.g. `A` for `"A) Linear regression"`.
///
/// Always stored upper-cased so `a` and `A` name the same option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(id: &str) -> Self {
        Self(id.trim().to_uppercase())
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<char> for OptionId {
    fn from(id: char) -> Self {
        Self(id.to_uppercase().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub id: OptionId,
    /// Full display text including the prefix (`"A) Linear regression"`).
    pub label: String,
}

/// The correct answer(s) for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    Single(OptionId),
    Multiple(BTreeSet<OptionId>),
}

impl AnswerKey {
    pub fn contains(&self, id: &OptionId) -> bool {
        match self {
            AnswerKey::Single(key) => key == id,
            AnswerKey::Multiple(ids) => ids.contains(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<QuizOption>,
    pub answer: AnswerKey,
}

impl Question {
    pub fn has_option(&self, id: &OptionId) -> bool {
        self.options.iter().any(|o| &o.id == id)
    }

    pub fn is_multi_answer(&self) -> bool {
        matches!(self.answer, AnswerKey::Multiple(_))
    }
}

/// On-disk bank layout.
#[derive(Debug, Deserialize)]
pub(super) struct RawBank {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawQuestion {
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: RawAnswer,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawAnswer {
    Single(String),
    Multiple(Vec<String>),
}

/// Extract the identifier prefix of an option label: the text before the
/// first `)`. Returns `None` when there is no prefix.
pub(super) fn parse_option_id(label: &str) -> Option<OptionId> {
    let (prefix, _) = label.split_once(')')?;
    let prefix = prefix.trim();
    if prefix.is_empty() || prefix.contains(char::is_whitespace) {
        return None;
    }
    Some(OptionId::new(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option_id() {
        assert_eq!(parse_option_id("A) Linear"), Some(OptionId::new("A")));
        assert_eq!(parse_option_id("  b) lower case"), Some(OptionId::new("B")));
        assert_eq!(parse_option_id("10) Ten"), Some(OptionId::new("10")));
        assert_eq!(parse_option_id("No prefix here"), None);
        assert_eq!(parse_option_id(") Empty prefix"), None);
        assert_eq!(parse_option_id("two words) nope"), None);
    }

    #[test]
    fn test_option_id_is_case_insensitive() {
        assert_eq!(OptionId::from('c'), OptionId::new("C"));
        assert_eq!(OptionId::new(" d "), OptionId::new("D"));
        assert_eq!(OptionId::new("d").to_string(), "D");
    }

    #[test]
    fn test_answer_key_contains() {
        let single = AnswerKey::Single(OptionId::new("B"));
        assert!(single.contains(&OptionId::new("B")));
        assert!(!single.contains(&OptionId::new("A")));

        let multi = AnswerKey::Multiple(BTreeSet::from([OptionId::new("A"), OptionId::new("C")]));
        assert!(multi.contains(&OptionId::new("C")));
        assert!(!multi.contains(&OptionId::new("B")));
    }
}
