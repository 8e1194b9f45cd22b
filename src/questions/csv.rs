use crate::models::Question;

pub const CSV_HEADER: &str = "id,name,options,points,published";

/// Render a question bank as CSV. The options column holds the option count.
///
/// Lines are joined with `\n` and there is no trailing newline, so an empty
/// bank renders as the header alone.
pub fn to_csv(questions: &[Question]) -> String {
    let mut lines = Vec::with_capacity(questions.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(questions.iter().map(|q| {
        format!(
            "{},{},{},{},{}",
            q.id,
            q.name,
            q.options.len(),
            q.points,
            q.published
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;
    use crate::questions::fixtures::bank;

    #[test]
    fn test_empty_bank_is_header_only() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_single_question() {
        let mut addition = Question::blank(1, "Addition", QuestionType::ShortAnswerQuestion);
        addition.published = true;
        assert_eq!(
            to_csv(&[addition]),
            "id,name,options,points,published\n1,Addition,0,1,true"
        );
    }

    #[test]
    fn test_rows_follow_input_order() {
        let csv = to_csv(&bank());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                CSV_HEADER,
                "1,Addition,0,1,true",
                "2,Letters,3,2,false",
                "5,Shapes,0,3,false",
                "9,Colors,0,4,true",
            ]
        );
    }
}
