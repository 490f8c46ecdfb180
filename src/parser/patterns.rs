//! 题目文本的正则规则
//!
//! 所有规则都不区分大小写，作用于单行文本。

use regex::Regex;
use std::sync::LazyLock;

/// 题目标题行，如 "Question 1:"、"question 16)"、"Question 3 -"
pub static QUESTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Question\s*\d+\s*[.:)\-/]").expect("题目标题正则无效"));

/// 答案行，如 "Answer: B"（行内任意位置）
pub static ANSWER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Answer\s*:\s*(.+)").expect("答案正则无效"));

/// 选项行，允许 "A."、"A ."、"A)" 三种写法
pub static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*([A-D])\s*[.)]\s*(.+)").expect("选项正则无效"));

/// 说话人行，如 "He wants to buy a car - man"
pub static SPEAKER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+)-\s*(woman|man|both)\s*$").expect("说话人正则无效")
});

pub fn is_question_header(line: &str) -> bool {
    QUESTION_HEADER.is_match(line)
}

/// 把题目块拆成去掉首尾空白的非空行
pub fn block_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// 去掉开头的标题行（如果有）
pub fn strip_header<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    match lines.first() {
        Some(first) if is_question_header(first) => &lines[1..],
        _ => lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_header_variants() {
        assert!(is_question_header("Question 1:"));
        assert!(is_question_header("  question 16)"));
        assert!(is_question_header("QUESTION 3 - Read"));
        assert!(is_question_header("Question12/"));
        assert!(is_question_header("Question 5."));
        assert!(!is_question_header("Question five:"));
        assert!(!is_question_header("Question 5"));
        assert!(!is_question_header("The Question 5:"));
    }

    #[test]
    fn test_option_line_accepts_three_styles() {
        for line in ["A. one", "A . one", "a) one"] {
            let caps = OPTION_LINE.captures(line).unwrap();
            assert_eq!(caps[1].to_uppercase(), "A");
            assert_eq!(caps[2].trim(), "one");
        }
        assert!(OPTION_LINE.captures("A man walks in").is_none());
        assert!(OPTION_LINE.captures("E. out of range").is_none());
    }

    #[test]
    fn test_strip_header_only_removes_first_line() {
        let lines = vec!["Question 1:", "Stem", "Question 2:"];
        assert_eq!(strip_header(&lines), &["Stem", "Question 2:"]);

        let lines = vec!["Stem"];
        assert_eq!(strip_header(&lines), &["Stem"]);
    }
}
