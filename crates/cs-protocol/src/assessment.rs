use serde::{Deserialize, Serialize};

/// Thematic grouping a question belongs to (mirrors the question store's
/// `category` tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    SelfAwareness,
    Personality,
    AcademicPreferences,
    LearningStyle,
    Extracurricular,
    CurrentSkills,
    WorkEnvironment,
    TeamDynamics,
    ProblemSolving,
    CareerImpact,
    IndustryInterest,
    Adaptability,
    RiskTolerance,
    LongTermGoals,
    WorkLifeBalance,
}

/// Dominant personality trait a question probes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitTag {
    Empathy,
    Extraversion,
    Analytical,
    Creative,
    Leadership,
    Adaptability,
    Innovative,
    Strategic,
}

/// A single multi-select assessment question.
///
/// Owned and created by the external question store; immutable once loaded.
/// `id` is an opaque store-assigned identifier (stable and unique).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    /// Ordered answer options, each unique within the question.
    pub options: Vec<String>,
    pub category: QuestionCategory,
    /// `trait` on the wire; renamed because `trait` is reserved in Rust.
    #[serde(rename = "trait")]
    pub trait_tag: TraitTag,
}

/// One answered question: the source question plus the options the candidate
/// has toggled on.
///
/// Selections are kept private so the invariant "every selection is one of
/// the question's options" cannot be broken from outside; all mutation goes
/// through [`Response::toggle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub question: Question,
    selections: Vec<String>,
}

impl Response {
    /// An unanswered response for `question` (no selections yet).
    pub fn new(question: Question) -> Self {
        Self {
            question,
            selections: Vec::new(),
        }
    }

    /// Current selections, in the order they were toggled on.
    pub fn selections(&self) -> &[String] {
        &self.selections
    }

    /// Flip membership of `option` in the selection set.
    ///
    /// Returns `true` if the option is now selected, `false` if it was
    /// deselected. Options not offered by the question are ignored and leave
    /// the response unchanged (also returning `false`).
    pub fn toggle(&mut self, option: &str) -> bool {
        if !self.question.options.iter().any(|o| o == option) {
            return false;
        }
        if let Some(pos) = self.selections.iter().position(|s| s == option) {
            self.selections.remove(pos);
            false
        } else {
            self.selections.push(option.to_string());
            true
        }
    }
}

/// Canonical (question text, selections) projection of a [`Response`].
///
/// This is the shape both classifiers consume and the shape embedded in the
/// remote prompt; wire names `question`/`answers` match the prompt format.
/// Derived, immutable, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResponse {
    #[serde(rename = "question")]
    pub question_text: String,
    #[serde(rename = "answers")]
    pub selections: Vec<String>,
}
