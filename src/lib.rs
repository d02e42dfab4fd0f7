use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

mod bulk;
mod error;
mod profile;
pub mod recommendation;
mod session;
mod style;
mod team;

pub use bulk::read_bulk;
pub use error::Error;
pub use profile::{calculate_profile, LearningType, Profile, ScoreTally};
pub use recommendation::{RecommendationSet, Strategies};
pub use session::{Session, SessionStore};
pub use style::LearningStyle;
pub use team::{MemberProfile, StyleDistribution, TeamSummary};

pub static QUESTIONS: Lazy<QuestionBank> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/vark.json"))
        .expect("bundled question bank is valid JSON")
});

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub text: String,
    pub style: LearningStyle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<Choice>,
}

impl Question {
    /// Resolves a 1-based option number, as typed by the user, to its style.
    pub fn option(&self, number: usize) -> Result<LearningStyle, Error> {
        number
            .checked_sub(1)
            .and_then(|index| self.options.get(index))
            .map(|choice| choice.style)
            .ok_or_else(|| Error::IllegalAnswer(number.to_string()))
    }
}

/// The 16-question VARK questionnaire.
#[derive(Debug, Deserialize)]
pub struct QuestionBank {
    pub title: String,
    /// Shown once before the first question.
    pub instruction: String,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Looks up a question by its number.
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One answer slot. `style` is `None` for a skipped or not yet answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: u32,
    pub style: Option<LearningStyle>,
}

impl Response {
    pub fn new(question_id: u32, style: Option<LearningStyle>) -> Self {
        Self { question_id, style }
    }

    /// One unanswered slot per question of the bank, in order.
    pub fn blank_sheet() -> Vec<Response> {
        QUESTIONS
            .questions()
            .iter()
            .map(|question| Response::new(question.id, None))
            .collect()
    }
}
