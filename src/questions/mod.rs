//! Pure transformations over question banks.
//!
//! Every function borrows its input slice and returns fresh values; nothing
//! here mutates the caller's questions. Returned vectors keep input order.

mod csv;
mod update;

use thiserror::Error;

use crate::models::{Answer, Question, QuestionType};

pub use csv::{to_csv, CSV_HEADER};
pub use update::{
    change_question_type_by_id, duplicate_question_in_array, edit_option, rename_question_by_id,
    OptionSlot,
};

/// Errors from question bank updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("no question with id {id}")]
    NotFound { id: u32 },
    #[error("question {id} has {len} options, index {index} is out of range")]
    OptionOutOfRange { id: u32, index: usize, len: usize },
    #[error("no free question id after {max}")]
    IdsExhausted { max: u32 },
}

/// Questions with `published` set.
pub fn published_questions(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| q.published).cloned().collect()
}

/// Questions that have at least one of a body, an expected answer or options.
pub fn non_empty_questions(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| !q.is_empty()).cloned().collect()
}

pub fn find_question(questions: &[Question], id: u32) -> Option<&Question> {
    questions.iter().find(|q| q.id == id)
}

/// Every question whose id is not `id`.
pub fn remove_question(questions: &[Question], id: u32) -> Vec<Question> {
    questions.iter().filter(|q| q.id != id).cloned().collect()
}

pub fn names(questions: &[Question]) -> Vec<String> {
    questions.iter().map(|q| q.name.clone()).collect()
}

/// Total points, widened so large banks cannot overflow.
pub fn sum_points(questions: &[Question]) -> u64 {
    questions.iter().map(|q| u64::from(q.points)).sum()
}

pub fn sum_published_points(questions: &[Question]) -> u64 {
    questions
        .iter()
        .filter(|q| q.published)
        .map(|q| u64::from(q.points))
        .sum()
}

pub fn make_answers(questions: &[Question]) -> Vec<Answer> {
    questions.iter().map(Answer::for_question).collect()
}

pub fn publish_all(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|q| Question {
            published: true,
            ..q.clone()
        })
        .collect()
}

/// True when every question has the same type. Empty banks count as uniform.
pub fn same_type(questions: &[Question]) -> bool {
    match questions.split_first() {
        Some((first, rest)) => rest.iter().all(|q| q.question_type == first.question_type),
        None => true,
    }
}

/// Append a blank question to the end of the bank.
pub fn add_new_question(
    questions: &[Question],
    id: u32,
    name: &str,
    question_type: QuestionType,
) -> Vec<Question> {
    let mut updated = questions.to_vec();
    updated.push(Question::blank(id, name, question_type));
    updated
}

/// One more than the largest id in the bank, or 1 for an empty bank.
pub fn next_id(questions: &[Question]) -> Result<u32, QuestionError> {
    match questions.iter().map(|q| q.id).max() {
        Some(max) => max.checked_add(1).ok_or(QuestionError::IdsExhausted { max }),
        None => Ok(1),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{bank, question};
    use super::*;

    #[test]
    fn test_published_questions() {
        let published = published_questions(&bank());
        let ids: Vec<u32> = published.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 9]);
    }

    #[test]
    fn test_non_empty_questions() {
        let mut questions = bank();
        questions.push(Question::blank(12, "Blank", QuestionType::ShortAnswerQuestion));

        let non_empty = non_empty_questions(&questions);
        assert_eq!(non_empty.len(), 4);
        assert!(non_empty.iter().all(|q| q.id != 12));
    }

    #[test]
    fn test_find_question() {
        let questions = bank();
        assert_eq!(find_question(&questions, 5).map(|q| q.name.as_str()), Some("Shapes"));
        assert!(find_question(&questions, 6).is_none());
        assert!(find_question(&[], 1).is_none());
    }

    #[test]
    fn test_remove_then_reinsert_restores_bank() {
        let questions = bank();
        for (position, original) in questions.iter().enumerate() {
            let mut rebuilt = remove_question(&questions, original.id);
            assert_eq!(rebuilt.len(), questions.len() - 1);
            rebuilt.insert(position, original.clone());
            assert_eq!(rebuilt, questions);
        }
    }

    #[test]
    fn test_remove_missing_id_keeps_everything() {
        let questions = bank();
        assert_eq!(remove_question(&questions, 404), questions);
    }

    #[test]
    fn test_names_preserve_order() {
        assert_eq!(names(&bank()), vec!["Addition", "Letters", "Shapes", "Colors"]);
        assert!(names(&[]).is_empty());
    }

    #[test]
    fn test_point_sums() {
        let questions = bank();
        assert_eq!(sum_points(&questions), 10);
        assert_eq!(sum_published_points(&questions), 5);
        assert!(sum_published_points(&questions) <= sum_points(&questions));

        let all = publish_all(&questions);
        assert_eq!(sum_published_points(&all), sum_points(&all));
        assert_eq!(sum_points(&[]), 0);
    }

    #[test]
    fn test_point_sums_past_u32_max() {
        let questions = vec![
            question(1, "Huge", u32::MAX, true),
            question(2, "Small", 1, true),
        ];
        assert_eq!(sum_points(&questions), u64::from(u32::MAX) + 1);
        assert_eq!(sum_published_points(&questions), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_make_answers() {
        let answers = make_answers(&bank());
        assert_eq!(answers.len(), 4);
        assert_eq!(answers[2].question_id, 5);
        assert!(answers.iter().all(|a| a.text.is_empty() && !a.submitted && !a.correct));
    }

    #[test]
    fn test_publish_all_leaves_input_untouched() {
        let questions = bank();
        let published = publish_all(&questions);
        assert!(published.iter().all(|q| q.published));
        assert!(!questions[1].published);
        assert_eq!(names(&published), names(&questions));
    }

    #[test]
    fn test_same_type() {
        assert!(same_type(&[]));
        assert!(same_type(&bank()[1..2]));
        assert!(!same_type(&bank()));
        assert!(same_type(&[question(1, "a", 1, true), question(2, "b", 1, false)]));
    }

    #[test]
    fn test_add_new_question() {
        let questions = bank();
        let updated = add_new_question(&questions, 10, "Fresh", QuestionType::MultipleChoiceQuestion);
        assert_eq!(updated.len(), questions.len() + 1);
        assert_eq!(&updated[..questions.len()], &questions[..]);

        let last = updated.last().unwrap();
        assert_eq!(last.id, 10);
        assert!(last.is_empty());
        assert!(!last.published);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&bank()), Ok(10));
        assert_eq!(next_id(&[]), Ok(1));
    }

    #[test]
    fn test_next_id_at_u32_max() {
        let questions = vec![question(3, "a", 1, true), question(u32::MAX, "b", 1, true)];
        assert_eq!(
            next_id(&questions),
            Err(QuestionError::IdsExhausted { max: u32::MAX })
        );
    }
}
