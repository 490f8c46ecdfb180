//! 多小题选择题解析 (Q16–17)
//!
//! 题目格式：
//!
//! ```text
//! Question 16:
//! [intro...]
//! Câu 1: ...
//! A. ...
//! Answer: X
//! Câu 2: ...
//! A. ...
//! Answer: Y
//! ```

use super::patterns::strip_header;
use super::single_choice::parse_single_choice;
use crate::error::ParseFailure;
use crate::models::{MultiPartChoice, SingleChoice};

/// 多小题块的解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiPartOutcome {
    /// 解析出至少 2 个小题
    Multi(MultiPartChoice),
    /// 没有小题标记，或只有 1 个小题解析成功，按单选题处理（intro 丢弃）
    Single(SingleChoice),
    /// 一个小题都没解析出来
    Failed(ParseFailure),
}

/// 解析多小题块
///
/// # 参数
/// - `lines`: 题目块的各行（可以包含标题行）
/// - `marker`: 小题起始标记，按前缀匹配且不区分大小写，如 "Câu "
pub fn parse_multi_part(lines: &[&str], marker: &str) -> MultiPartOutcome {
    let lines = strip_header(lines);
    if lines.is_empty() {
        return MultiPartOutcome::Failed(ParseFailure::EmptyBlock);
    }

    let marker = marker.to_lowercase();
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_marker_line(line, &marker))
        .map(|(i, _)| i)
        .collect();

    // 没有小题标记，整个块当作一道单选题
    let Some(&body_start) = starts.first() else {
        return match parse_single_choice(lines) {
            Ok(item) => MultiPartOutcome::Single(item),
            Err(reason) => MultiPartOutcome::Failed(reason),
        };
    };

    let intro = lines[..body_start].join("\n").trim().to_string();

    let mut sub_items: Vec<SingleChoice> = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(lines.len());
        match parse_single_choice(&lines[start..end]) {
            Ok(item) => sub_items.push(item),
            Err(reason) => {
                tracing::debug!("小题 {} 解析失败: {}", i + 1, reason);
            }
        }
    }

    match sub_items.len() {
        0 => MultiPartOutcome::Failed(ParseFailure::NoSubItems),
        1 => MultiPartOutcome::Single(sub_items.remove(0)),
        _ => MultiPartOutcome::Multi(MultiPartChoice {
            intro: (!intro.is_empty()).then_some(intro),
            sub_items,
        }),
    }
}

fn is_marker_line(line: &str, lowercase_marker: &str) -> bool {
    line.trim_start().to_lowercase().starts_with(lowercase_marker)
}
