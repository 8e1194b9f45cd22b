use serde::{Deserialize, Serialize};

use super::Question;

/// A respondent's submission against one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub text: String,
    pub submitted: bool,
    pub correct: bool,
}

impl Answer {
    /// Unsubmitted, empty answer for `question`.
    pub fn for_question(question: &Question) -> Self {
        Self {
            question_id: question.id,
            text: String::new(),
            submitted: false,
            correct: false,
        }
    }
}
