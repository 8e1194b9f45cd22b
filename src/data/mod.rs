mod loader;

pub use loader::{
    load_questions_from_json, save_questions_to_json, LoadError, DEFAULT_QUESTIONS_PATH,
};
