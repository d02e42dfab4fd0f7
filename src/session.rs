use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{calculate_profile, Error, LearningStyle, Profile, Question, Response, QUESTIONS};

/// An assessment in progress for one user.
///
/// Holds one response slot per question, all unanswered at the start, and
/// the position of the question to ask next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    session_id: String,
    user_id: String,
    cursor: usize,
    responses: Vec<Response>,
}

impl Session {
    pub fn new(session_id: &str, user_id: &str) -> Result<Self, Error> {
        check_key(session_id)?;
        check_key(user_id)?;
        Ok(Self {
            session_id: session_id.to_string(),
            user_id: user_id.to_string(),
            cursor: 0,
            responses: Response::blank_sheet(),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The question to ask next, `None` once every question has been visited.
    pub fn current(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.cursor)
    }

    /// Records an answer, or a skip when `style` is `None`, and moves past the question.
    pub fn answer(&mut self, question_id: u32, style: Option<LearningStyle>) -> Result<(), Error> {
        let position = self
            .responses
            .iter()
            .position(|response| response.question_id == question_id)
            .ok_or(Error::IllegalQuestion(question_id))?;
        self.responses[position].style = style;
        self.cursor = position + 1;
        Ok(())
    }

    pub fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.responses.len()
    }

    pub fn answered(&self) -> usize {
        self.responses
            .iter()
            .filter(|response| response.style.is_some())
            .count()
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }
}

fn check_key(key: &str) -> Result<(), Error> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::IllegalKey(key.to_string()))
    }
}

/// Directory of in-progress sessions, laid out as `{dir}/{session}/{user}.json`.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, session_id: &str, user_id: &str) -> Result<PathBuf, Error> {
        check_key(session_id)?;
        check_key(user_id)?;
        Ok(self
            .dir
            .join(session_id)
            .join(format!("{}.json", user_id)))
    }

    /// Resumes the stored session for this key, or starts a blank one.
    pub fn load_or_start(&self, session_id: &str, user_id: &str) -> Result<Session, Error> {
        let path = self.path(session_id, user_id)?;
        match fs::read_to_string(&path) {
            Ok(json) => {
                let session: Session = serde_json::from_str(&json)?;
                if session.session_id != session_id || session.user_id != user_id {
                    return Err(Error::IllegalKey(format!(
                        "{} holds {}/{}",
                        path.display(),
                        session.session_id,
                        session.user_id
                    )));
                }
                info!(
                    path = %path.display(),
                    cursor = session.cursor,
                    answered = session.answered(),
                    "resuming assessment"
                );
                Ok(session)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "starting new assessment");
                Session::new(session_id, user_id)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), Error> {
        let path = self.path(&session.session_id, &session.user_id)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(session)?)?;
        debug!(path = %path.display(), cursor = session.cursor, "saved assessment");
        Ok(())
    }

    /// Removes the stored session. A missing file is not an error.
    pub fn clear(&self, session_id: &str, user_id: &str) -> Result<(), Error> {
        let path = self.path(session_id, user_id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Scores the session, then drops its stored progress.
    pub fn complete(&self, session: &Session) -> Result<Profile, Error> {
        let profile = calculate_profile(session.responses());
        self.clear(&session.session_id, &session.user_id)?;
        info!(
            session = %session.session_id,
            user = %session.user_id,
            learning_type = %profile.learning_type,
            "assessment completed"
        );
        Ok(profile)
    }
}
