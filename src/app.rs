use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::data::save_questions_to_json;
use crate::models::Question;
use crate::questions::{self, QuestionError};
use crate::widgets::{CycleHoliday, ShoveBox, TwoDice};

/// Which panel the workbench is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    #[default]
    Dice,
    Holiday,
    ShoveBox,
    Questions,
}

const PANELS: [Panel; 4] = [Panel::Dice, Panel::Holiday, Panel::ShoveBox, Panel::Questions];

impl Panel {
    pub fn title(self) -> &'static str {
        match self {
            Panel::Dice => "Dice",
            Panel::Holiday => "Holidays",
            Panel::ShoveBox => "Shove Box",
            Panel::Questions => "Questions",
        }
    }

    pub fn all() -> &'static [Panel] {
        &PANELS
    }

    fn index(self) -> usize {
        PANELS.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Panel {
        PANELS[(self.index() + 1) % PANELS.len()]
    }

    pub fn previous(self) -> Panel {
        PANELS[(self.index() + PANELS.len() - 1) % PANELS.len()]
    }
}

pub struct App {
    pub panel: Panel,
    pub dice: TwoDice,
    pub holiday: CycleHoliday,
    pub shove_box: ShoveBox,
    questions: Vec<Question>,
    questions_path: Option<PathBuf>,
    selected_question: usize,
    status: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            panel: config.start_panel,
            dice: TwoDice::new(),
            holiday: CycleHoliday::new(),
            shove_box: ShoveBox::new(config.shove_box),
            questions: Vec::new(),
            questions_path: None,
            selected_question: 0,
            status: None,
        }
    }

    /// Attach a question bank and the file it came from.
    pub fn with_questions(mut self, questions: Vec<Question>, path: Option<PathBuf>) -> Self {
        self.questions = questions;
        self.questions_path = path;
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn selected_question(&self) -> usize {
        self.selected_question
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn next_panel(&mut self) {
        self.panel = self.panel.next();
        self.status = None;
    }

    pub fn previous_panel(&mut self) {
        self.panel = self.panel.previous();
        self.status = None;
    }

    pub fn select_next_question(&mut self) {
        if !self.questions.is_empty() {
            self.selected_question = (self.selected_question + 1) % self.questions.len();
        }
    }

    pub fn select_previous_question(&mut self) {
        if !self.questions.is_empty() {
            let len = self.questions.len();
            self.selected_question = (self.selected_question + len - 1) % len;
        }
    }

    fn selected_id(&self) -> Option<u32> {
        self.questions.get(self.selected_question).map(|q| q.id)
    }

    fn apply(&mut self, result: Result<Vec<Question>, QuestionError>, done: String) {
        match result {
            Ok(updated) => {
                self.questions = updated;
                self.clamp_selection();
                tracing::debug!("{}", done);
                self.status = Some(done);
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, error: QuestionError) {
        tracing::warn!("{}", error);
        self.status = Some(error.to_string());
    }

    fn clamp_selection(&mut self) {
        self.selected_question = self
            .selected_question
            .min(self.questions.len().saturating_sub(1));
    }

    pub fn publish_all(&mut self) {
        self.questions = questions::publish_all(&self.questions);
        self.status = Some(format!("Published {} questions", self.questions.len()));
    }

    pub fn duplicate_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let new_id = match questions::next_id(&self.questions) {
            Ok(new_id) => new_id,
            Err(e) => return self.report(e),
        };
        let result = questions::duplicate_question_in_array(&self.questions, id, new_id);
        self.apply(result, format!("Duplicated {} as {}", id, new_id));
    }

    pub fn toggle_selected_type(&mut self) {
        let Some(question) = self.questions.get(self.selected_question) else {
            return;
        };
        let (id, new_type) = (question.id, question.question_type.toggled());
        let result = questions::change_question_type_by_id(&self.questions, id, new_type);
        self.apply(result, format!("Question {} is now {}", id, new_type.label()));
    }

    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.questions = questions::remove_question(&self.questions, id);
        self.clamp_selection();
        self.status = Some(format!("Removed {}", id));
    }

    pub fn add_question(&mut self) {
        let id = match questions::next_id(&self.questions) {
            Ok(id) => id,
            Err(e) => return self.report(e),
        };
        self.questions = questions::add_new_question(
            &self.questions,
            id,
            "New Question",
            crate::models::QuestionType::ShortAnswerQuestion,
        );
        self.selected_question = self.questions.len() - 1;
        self.status = Some(format!("Added {}", id));
    }

    /// Write the bank back to the file it was loaded from.
    pub fn save_questions(&mut self) {
        let Some(path) = &self.questions_path else {
            self.status = Some("No question file to save to".to_string());
            return;
        };
        self.status = Some(match save_questions_to_json(path, &self.questions) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                tracing::error!("{}", e);
                e.to_string()
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;

    fn app_with_bank() -> App {
        let mut choice = Question::blank(4, "Letters", QuestionType::MultipleChoiceQuestion);
        choice.options = vec!["a".into(), "b".into()];
        App::default().with_questions(
            vec![
                Question::blank(1, "Addition", QuestionType::ShortAnswerQuestion),
                choice,
            ],
            None,
        )
    }

    #[test]
    fn test_panels_cycle() {
        let mut app = App::default();
        assert_eq!(app.panel, Panel::Dice);
        for _ in 0..Panel::all().len() {
            app.next_panel();
        }
        assert_eq!(app.panel, Panel::Dice);
        app.previous_panel();
        assert_eq!(app.panel, Panel::Questions);
    }

    #[test]
    fn test_start_panel_from_config() {
        let config = AppConfig {
            start_panel: Panel::ShoveBox,
            ..AppConfig::default()
        };
        assert_eq!(App::new(&config).panel, Panel::ShoveBox);
    }

    #[test]
    fn test_duplicate_selected_uses_next_id() {
        let mut app = app_with_bank();
        app.duplicate_selected();
        let ids: Vec<u32> = app.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 5, 4]);
        assert_eq!(app.status(), Some("Duplicated 1 as 5"));
    }

    #[test]
    fn test_new_ids_exhausted_reports_status() {
        let top = Question::blank(u32::MAX, "Top", QuestionType::ShortAnswerQuestion);
        let mut app = App::default().with_questions(vec![top], None);

        app.duplicate_selected();
        assert_eq!(app.questions().len(), 1);
        assert_eq!(app.status(), Some("no free question id after 4294967295"));

        app.add_question();
        assert_eq!(app.questions().len(), 1);
        assert_eq!(app.selected_question(), 0);
        assert_eq!(app.status(), Some("no free question id after 4294967295"));
    }

    #[test]
    fn test_toggle_selected_type_clears_options() {
        let mut app = app_with_bank();
        app.select_next_question();
        app.toggle_selected_type();
        assert_eq!(app.questions()[1].question_type, QuestionType::ShortAnswerQuestion);
        assert!(app.questions()[1].options.is_empty());
    }

    #[test]
    fn test_remove_last_selected_clamps_selection() {
        let mut app = app_with_bank();
        app.select_previous_question();
        assert_eq!(app.selected_question(), 1);
        app.remove_selected();
        assert_eq!(app.selected_question(), 0);
        app.remove_selected();
        assert!(app.questions().is_empty());

        app.remove_selected();
        app.select_next_question();
        assert_eq!(app.selected_question(), 0);
    }

    #[test]
    fn test_add_question_selects_it() {
        let mut app = app_with_bank();
        app.add_question();
        assert_eq!(app.selected_question(), 2);
        assert_eq!(app.questions()[2].id, 5);
    }

    #[test]
    fn test_save_without_path_reports_status() {
        let mut app = app_with_bank();
        app.save_questions();
        assert_eq!(app.status(), Some("No question file to save to"));
    }
}
