use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use quizbench::questions::{self, OptionSlot};
use quizbench::{
    load_questions_from_json, save_questions_to_json, AppConfig, QuestionType, Workbench,
    DEFAULT_QUESTIONS_PATH,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, global = true)]
    questions: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive workbench (default)
    Tui,
    /// Print the question bank as CSV
    Csv {
        /// Only include published questions
        #[arg(long)]
        published: bool,
    },
    /// Print counts and point totals
    Summary,
    /// Rename a question
    Rename { id: u32, name: String },
    /// Change a question's type
    Retype { id: u32, kind: Kind },
    /// Replace an option, or append one with index -1
    EditOption {
        id: u32,
        #[arg(allow_hyphen_values = true)]
        index: i64,
        text: String,
    },
    /// Insert a copy of a question right after it
    Duplicate {
        id: u32,
        /// Id for the copy (defaults to the next free id)
        #[arg(long)]
        new_id: Option<u32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    MultipleChoice,
    ShortAnswer,
}

impl From<Kind> for QuestionType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::MultipleChoice => QuestionType::MultipleChoiceQuestion,
            Kind::ShortAnswer => QuestionType::ShortAnswerQuestion,
        }
    }
}

/// Log to stderr, except while the workbench owns the terminal: then log to
/// a file so nothing is written over the frame.
fn init_logging(interactive: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if !interactive {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        return;
    }

    let log_file = AppConfig::log_path().ok().and_then(|path| {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });
    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .init(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(matches!(args.command, None | Some(Command::Tui)));

    let config = AppConfig::load();
    let path = args
        .questions
        .or_else(|| config.questions_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_QUESTIONS_PATH));

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let workbench = if path.exists() {
                Workbench::from_json(&config, &path)?
            } else {
                tracing::info!(path = %path.display(), "no question bank, starting empty");
                Workbench::new(&config, Vec::new())
            };
            workbench.run()?;
        }
        Command::Csv { published } => {
            let bank = load_questions_from_json(&path)?;
            let bank = if published {
                questions::published_questions(&bank)
            } else {
                bank
            };
            println!("{}", questions::to_csv(&bank));
        }
        Command::Summary => {
            let bank = load_questions_from_json(&path)?;
            println!("questions:        {}", bank.len());
            println!("published:        {}", questions::published_questions(&bank).len());
            println!("non-empty:        {}", questions::non_empty_questions(&bank).len());
            println!("points:           {}", questions::sum_points(&bank));
            println!("published points: {}", questions::sum_published_points(&bank));
            println!("single type:      {}", questions::same_type(&bank));
        }
        Command::Rename { id, name } => {
            let bank = load_questions_from_json(&path)?;
            let updated = questions::rename_question_by_id(&bank, id, &name)?;
            save_questions_to_json(&path, &updated)?;
        }
        Command::Retype { id, kind } => {
            let bank = load_questions_from_json(&path)?;
            let updated = questions::change_question_type_by_id(&bank, id, kind.into())?;
            save_questions_to_json(&path, &updated)?;
        }
        Command::EditOption { id, index, text } => {
            let Some(slot) = OptionSlot::from_index(index) else {
                bail!("option index must be -1 or a non-negative index, got {}", index);
            };
            let bank = load_questions_from_json(&path)?;
            let updated = questions::edit_option(&bank, id, slot, &text)?;
            save_questions_to_json(&path, &updated)?;
        }
        Command::Duplicate { id, new_id } => {
            let bank = load_questions_from_json(&path)?;
            let new_id = match new_id {
                Some(new_id) => new_id,
                None => questions::next_id(&bank)?,
            };
            let updated = questions::duplicate_question_in_array(&bank, id, new_id)
                .with_context(|| format!("could not duplicate question {}", id))?;
            save_questions_to_json(&path, &updated)?;
            println!("{}", new_id);
        }
    }

    Ok(())
}
