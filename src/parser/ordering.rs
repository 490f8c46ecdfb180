use super::patterns::{strip_header, ANSWER_LINE};
use crate::error::ParseFailure;
use crate::models::{Ordering, ORDERING_PROMPT};

/// 解析排序题 (Q14)
///
/// 标题之后的每一行都是一个条目，给出的顺序即正确顺序。
/// 偶尔出现的 "Answer:" 行会被丢弃。
pub fn parse_ordering(lines: &[&str]) -> Result<Ordering, ParseFailure> {
    let correct_sequence: Vec<String> = strip_header(lines)
        .iter()
        .filter(|line| !ANSWER_LINE.is_match(line))
        .map(|line| line.to_string())
        .collect();

    if correct_sequence.len() < 2 {
        return Err(ParseFailure::TooFewOrderingItems {
            found: correct_sequence.len(),
        });
    }

    Ok(Ordering {
        prompt: ORDERING_PROMPT.to_string(),
        correct_sequence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ordering() {
        let lines = ["Question 14:", "Walking", "Running", "Cycling"];
        let order = parse_ordering(&lines).unwrap();
        assert_eq!(order.prompt, ORDERING_PROMPT);
        assert_eq!(order.correct_sequence, vec!["Walking", "Running", "Cycling"]);
    }

    #[test]
    fn test_answer_lines_are_discarded() {
        let lines = ["Question 14:", "First", "Answer: whatever", "Second"];
        let order = parse_ordering(&lines).unwrap();
        assert_eq!(order.correct_sequence, vec!["First", "Second"]);
    }

    #[test]
    fn test_single_item_fails() {
        let lines = ["Question 14:", "Only"];
        assert_eq!(
            parse_ordering(&lines),
            Err(ParseFailure::TooFewOrderingItems { found: 1 })
        );
    }
}
