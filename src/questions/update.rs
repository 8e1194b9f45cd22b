//! Id-targeted updates.
//!
//! Each update locates the first question whose id matches, rebuilds the bank
//! with only that question replaced, and fails with
//! [`QuestionError::NotFound`] when no question matches.

use crate::models::{Question, QuestionType};

use super::QuestionError;

/// Where [`edit_option`] writes the new option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSlot {
    /// Push onto the end of the options list.
    Append,
    /// Replace the option at this index.
    At(usize),
}

impl OptionSlot {
    /// Decode the integer form used by question editors, where `-1` means
    /// append. Any other negative index has no slot.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            -1 => Some(Self::Append),
            i if i >= 0 => usize::try_from(i).ok().map(Self::At),
            _ => None,
        }
    }
}

fn position_of(questions: &[Question], target_id: u32) -> Result<usize, QuestionError> {
    questions
        .iter()
        .position(|q| q.id == target_id)
        .ok_or(QuestionError::NotFound { id: target_id })
}

fn replace_at(questions: &[Question], index: usize, replacement: Question) -> Vec<Question> {
    let mut updated = Vec::with_capacity(questions.len());
    updated.extend_from_slice(&questions[..index]);
    updated.push(replacement);
    updated.extend_from_slice(&questions[index + 1..]);
    updated
}

pub fn rename_question_by_id(
    questions: &[Question],
    target_id: u32,
    new_name: &str,
) -> Result<Vec<Question>, QuestionError> {
    let index = position_of(questions, target_id)?;
    let renamed = questions[index].renamed(new_name);
    Ok(replace_at(questions, index, renamed))
}

/// Change a question's type. Leaving multiple choice drops the options, since
/// no other type uses them.
pub fn change_question_type_by_id(
    questions: &[Question],
    target_id: u32,
    new_type: QuestionType,
) -> Result<Vec<Question>, QuestionError> {
    let index = position_of(questions, target_id)?;
    let current = &questions[index];
    let options = if new_type == QuestionType::MultipleChoiceQuestion {
        current.options.clone()
    } else {
        Vec::new()
    };

    let changed = Question {
        question_type: new_type,
        options,
        ..current.clone()
    };
    Ok(replace_at(questions, index, changed))
}

pub fn edit_option(
    questions: &[Question],
    target_id: u32,
    slot: OptionSlot,
    new_option: &str,
) -> Result<Vec<Question>, QuestionError> {
    let index = position_of(questions, target_id)?;
    let current = &questions[index];

    let edited = match slot {
        OptionSlot::Append => current.with_option(new_option),
        OptionSlot::At(option_index) => {
            if option_index >= current.options.len() {
                return Err(QuestionError::OptionOutOfRange {
                    id: target_id,
                    index: option_index,
                    len: current.options.len(),
                });
            }
            let mut options = current.options.clone();
            options[option_index] = new_option.to_string();
            Question {
                options,
                ..current.clone()
            }
        }
    };
    Ok(replace_at(questions, index, edited))
}

/// Insert a copy of the target right after it, under `new_id`. The copy is
/// identical to the original apart from the id.
pub fn duplicate_question_in_array(
    questions: &[Question],
    target_id: u32,
    new_id: u32,
) -> Result<Vec<Question>, QuestionError> {
    let index = position_of(questions, target_id)?;
    let duplicate = Question {
        id: new_id,
        ..questions[index].clone()
    };

    let mut updated = Vec::with_capacity(questions.len() + 1);
    updated.extend_from_slice(&questions[..=index]);
    updated.push(duplicate);
    updated.extend_from_slice(&questions[index + 1..]);
    Ok(updated)
}
