mod answer;
mod question;

pub use answer::Answer;
pub use question::{Question, QuestionType};
