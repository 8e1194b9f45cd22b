use serde::{Deserialize, Serialize};

const SHORT_FORM_NAME_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoiceQuestion,
    ShortAnswerQuestion,
}

impl QuestionType {
    /// The other variant. Used by the question panel to flip a question's type.
    pub fn toggled(self) -> Self {
        match self {
            Self::MultipleChoiceQuestion => Self::ShortAnswerQuestion,
            Self::ShortAnswerQuestion => Self::MultipleChoiceQuestion,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleChoiceQuestion => "multiple choice",
            Self::ShortAnswerQuestion => "short answer",
        }
    }
}

/// One quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub expected: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default)]
    pub published: bool,
}

fn default_points() -> u32 {
    1
}

impl Question {
    /// A fresh, unpublished question worth one point with no content.
    pub fn blank(id: u32, name: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id,
            name: name.into(),
            question_type,
            body: String::new(),
            expected: String::new(),
            options: Vec::new(),
            points: default_points(),
            published: false,
        }
    }

    /// Whether `answer` matches the expected answer, ignoring surrounding
    /// whitespace and case.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.expected.trim().to_lowercase()
    }

    /// Short answers are always valid. Multiple choice answers must be one of
    /// the options.
    pub fn is_valid(&self, answer: &str) -> bool {
        match self.question_type {
            QuestionType::ShortAnswerQuestion => true,
            QuestionType::MultipleChoiceQuestion => self.options.iter().any(|o| o == answer),
        }
    }

    pub fn to_short_form(&self) -> String {
        let name: String = self.name.chars().take(SHORT_FORM_NAME_LENGTH).collect();
        format!("{}: {}", self.id, name)
    }

    pub fn to_markdown(&self) -> String {
        let mut markdown = format!("# {}\n{}", self.name, self.body);
        if self.question_type == QuestionType::MultipleChoiceQuestion {
            for option in &self.options {
                markdown.push_str("\n- ");
                markdown.push_str(option);
            }
        }
        markdown
    }

    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn published_toggled(&self) -> Self {
        Self {
            published: !self.published,
            ..self.clone()
        }
    }

    /// An unpublished copy under a new id, named "Copy of <name>".
    pub fn duplicated(&self, id: u32) -> Self {
        Self {
            id,
            name: format!("Copy of {}", self.name),
            published: false,
            ..self.clone()
        }
    }

    pub fn with_option(&self, option: impl Into<String>) -> Self {
        let mut options = self.options.clone();
        options.push(option.into());
        Self {
            options,
            ..self.clone()
        }
    }

    /// Combine the content of one question with the points of another.
    pub fn merged(id: u32, name: impl Into<String>, content: &Question, points: &Question) -> Self {
        Self {
            id,
            name: name.into(),
            published: false,
            points: points.points,
            ..content.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.expected.is_empty() && self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Question {
        Question {
            id: 7,
            name: "Favorite Colors".to_string(),
            question_type: QuestionType::MultipleChoiceQuestion,
            body: "Which is a primary color?".to_string(),
            expected: "Red".to_string(),
            options: vec!["Red".into(), "Green".into(), "Purple".into()],
            points: 3,
            published: true,
        }
    }

    #[test]
    fn test_blank_question() {
        let q = Question::blank(1, "Empty", QuestionType::ShortAnswerQuestion);
        assert!(q.is_empty());
        assert_eq!(q.points, 1);
        assert!(!q.published);
    }

    #[test]
    fn test_is_correct_ignores_case_and_whitespace() {
        let q = colors();
        assert!(q.is_correct("  red "));
        assert!(q.is_correct("RED"));
        assert!(!q.is_correct("Green"));
    }

    #[test]
    fn test_is_valid() {
        let q = colors();
        assert!(q.is_valid("Purple"));
        assert!(!q.is_valid("Blue"));

        let short = Question::blank(2, "Free", QuestionType::ShortAnswerQuestion);
        assert!(short.is_valid("anything"));
    }

    #[test]
    fn test_short_form_and_markdown() {
        let q = colors();
        assert_eq!(q.to_short_form(), "7: Favorite C");
        assert_eq!(
            q.to_markdown(),
            "# Favorite Colors\nWhich is a primary color?\n- Red\n- Green\n- Purple"
        );

        let mut short = q.clone();
        short.question_type = QuestionType::ShortAnswerQuestion;
        assert_eq!(short.to_markdown(), "# Favorite Colors\nWhich is a primary color?");
    }

    #[test]
    fn test_duplicated() {
        let q = colors();
        let copy = q.duplicated(99);
        assert_eq!(copy.id, 99);
        assert_eq!(copy.name, "Copy of Favorite Colors");
        assert!(!copy.published);
        assert_eq!(copy.options, q.options);
    }

    #[test]
    fn test_merged() {
        let content = colors();
        let mut scorer = Question::blank(3, "Scorer", QuestionType::ShortAnswerQuestion);
        scorer.points = 10;

        let merged = Question::merged(40, "Merged", &content, &scorer);
        assert_eq!(merged.id, 40);
        assert_eq!(merged.name, "Merged");
        assert_eq!(merged.points, 10);
        assert_eq!(merged.body, content.body);
        assert_eq!(merged.question_type, content.question_type);
        assert!(!merged.published);
    }

    #[test]
    fn test_deserialize_uses_type_field() {
        let json = r#"{"id":1,"name":"Addition","type":"short_answer_question","body":"1+1?","expected":"2","points":1,"published":true}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.question_type, QuestionType::ShortAnswerQuestion);
        assert!(q.options.is_empty());
    }
}
