//! # quizbench
//!
//! A terminal workbench for quiz question banks, with a few small widgets
//! on the side.
//!
//! The [`questions`] module holds pure transformations over `&[Question]`;
//! the [`widgets`] module holds the dice, holiday and shove-box state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizbench::{AppConfig, Workbench, WorkbenchError};
//!
//! fn main() -> Result<(), WorkbenchError> {
//!     let config = AppConfig::load();
//!     let workbench = Workbench::from_json(&config, "questions.json")?;
//!     workbench.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod data;
mod models;
pub mod questions;
pub mod terminal;
mod ui;
pub mod widgets;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{App, Panel};
pub use config::{AppConfig, ConfigError};
pub use data::{
    load_questions_from_json, save_questions_to_json, LoadError, DEFAULT_QUESTIONS_PATH,
};
pub use models::{Answer, Question, QuestionType};
pub use questions::QuestionError;

/// Error type for workbench operations.
#[derive(Debug, Error)]
pub enum WorkbenchError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// The interactive workbench.
pub struct Workbench {
    app: App,
}

impl Workbench {
    pub fn new(config: &AppConfig, questions: Vec<Question>) -> Self {
        Self {
            app: App::new(config).with_questions(questions, None),
        }
    }

    /// Open a workbench on a JSON question bank. Saving from the question
    /// panel writes back to the same file.
    pub fn from_json<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<Self, WorkbenchError> {
        let path = path.as_ref();
        let questions = load_questions_from_json(path)?;
        Ok(Self {
            app: App::new(config).with_questions(questions, Some(path.to_path_buf())),
        })
    }

    /// Take over the terminal until the user quits.
    pub fn run(mut self) -> Result<(), WorkbenchError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }
}

fn run_event_loop(
    terminal: &mut terminal::WorkbenchTerminal,
    app: &mut App,
) -> Result<(), WorkbenchError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::Right => {
            app.next_panel();
            return false;
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.previous_panel();
            return false;
        }
        _ => {}
    }

    match app.panel {
        Panel::Dice => handle_dice_input(app, key),
        Panel::Holiday => handle_holiday_input(app, key),
        Panel::ShoveBox => handle_shove_box_input(app, key),
        Panel::Questions => handle_questions_input(app, key),
    }
    false
}

fn handle_dice_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('l') | KeyCode::Char('L') => app.dice.roll_left(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.dice.roll_right(),
        _ => {}
    }
}

fn handle_holiday_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('a') | KeyCode::Char('A') => app.holiday.advance_by_alphabet(),
        KeyCode::Char('y') | KeyCode::Char('Y') => app.holiday.advance_by_year(),
        _ => {}
    }
}

fn handle_shove_box_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter) {
        app.shove_box.shove();
    }
}

fn handle_questions_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_question(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_question(),
        KeyCode::Char('n') => app.add_question(),
        KeyCode::Char('d') => app.duplicate_selected(),
        KeyCode::Char('t') => app.toggle_selected_type(),
        KeyCode::Char('x') => app.remove_selected(),
        KeyCode::Char('p') => app.publish_all(),
        KeyCode::Char('w') => app.save_questions(),
        _ => {}
    }
}
