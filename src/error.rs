use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Not one of the 16 questions
    #[error("question {0} is not part of the questionnaire")]
    IllegalQuestion(u32),
    /// Input that does not name a learning style or an option number
    #[error("illegal answer: {0:?}")]
    IllegalAnswer(String),
    /// Session or user identifier that cannot be used as a storage key
    #[error("illegal session key: {0:?}")]
    IllegalKey(String),
    /// Bulk record without one cell per question
    #[error("record {id} has {found} answers, expected {expected}")]
    IllegalRecord {
        id: String,
        found: usize,
        expected: usize,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Respondent id of a rejected bulk record, when the record got far enough to carry one.
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Error::IllegalRecord { id, .. } => Some(id.as_str()),
            _ => None,
        }
    }
}
