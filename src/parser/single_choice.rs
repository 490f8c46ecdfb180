//! 单选题解析
//!
//! 既用于 Q1–13，也用于 Q16–17 中的每个小题。

use std::collections::BTreeMap;

use super::patterns::{ANSWER_LINE, OPTION_LINE};
use crate::error::ParseFailure;
use crate::models::SingleChoice;

/// 解析单选题
///
/// - "Answer: X" 行：取冒号后第一个非空白字符并转大写，多次出现以最后一次为准
/// - "A. ..." / "B) ..." 行：记录选项，同一标签多次出现以最后一次为准
/// - 其余行按顺序拼成题干
pub fn parse_single_choice(lines: &[&str]) -> Result<SingleChoice, ParseFailure> {
    let mut stem_lines: Vec<&str> = Vec::new();
    let mut options: BTreeMap<char, String> = BTreeMap::new();
    let mut answer: Option<char> = None;

    for &line in lines {
        if let Some(caps) = ANSWER_LINE.captures(line) {
            if let Some(first) = caps[1].trim().chars().next() {
                answer = first.to_uppercase().next();
            }
            continue;
        }

        if let Some(caps) = OPTION_LINE.captures(line) {
            if let Some(label) = caps[1].chars().next() {
                options.insert(label.to_ascii_uppercase(), caps[2].trim().to_string());
            }
            continue;
        }

        stem_lines.push(line);
    }

    let answer = answer.ok_or(ParseFailure::MissingAnswer)?;
    if options.is_empty() {
        return Err(ParseFailure::MissingOptions);
    }
    if !options.contains_key(&answer) {
        return Err(ParseFailure::AnswerNotInOptions {
            answer,
            labels: options.keys().collect(),
        });
    }

    Ok(SingleChoice {
        stem: stem_lines.join("\n").trim().to_string(),
        options,
        answer,
    })
}
