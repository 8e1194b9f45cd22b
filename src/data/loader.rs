use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Question;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), count = questions.len(), "loaded question bank");
    Ok(questions)
}

pub fn save_questions_to_json<P: AsRef<Path>>(
    path: P,
    questions: &[Question],
) -> Result<(), LoadError> {
    let path = path.as_ref();

    let json_content = serde_json::to_string_pretty(questions).map_err(|source| LoadError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json_content).map_err(|source| LoadError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = questions.len(), "saved question bank");
    Ok(())
}
