//! 题目块切分
//!
//! 每遇到一行 "Question N:" 就开始一个新块。第一个标题之前的内容
//! （试卷名称、说明等）并入第一个块，放在标题行之后，因此会成为
//! Question 1 题干的一部分。

use super::patterns::is_question_header;

/// 把按顺序排列的段落切分成题目块
///
/// # 参数
/// - `lines`: 已去掉首尾空白的非空段落
///
/// # 返回
/// 按出现顺序排列的题目块，块内各行以换行连接
pub fn segment_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();
    let mut preamble: Vec<&str> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut seen_header = false;

    for line in lines.iter().map(AsRef::as_ref) {
        if is_question_header(line) {
            flush_block(&mut blocks, &mut current);
            current.push(line);
            if !seen_header {
                seen_header = true;
                current.append(&mut preamble);
            }
        } else if seen_header {
            current.push(line);
        } else {
            preamble.push(line);
        }
    }

    // 整份文档都没有标题行时，全部内容作为一个块
    if !seen_header {
        current = preamble;
    }
    flush_block(&mut blocks, &mut current);

    blocks
}

fn flush_block(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }
    let block = current.join("\n").trim().to_string();
    current.clear();
    if !block.is_empty() {
        blocks.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_by_headers() {
        let lines = [
            "Question 1:",
            "Stem one",
            "A. x",
            "Answer: A",
            "Question 2.",
            "Stem two",
        ];
        let blocks = segment_blocks(&lines);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "Question 1:\nStem one\nA. x\nAnswer: A");
        assert_eq!(blocks[1], "Question 2.\nStem two");
    }

    #[test]
    fn test_preamble_is_folded_into_first_block() {
        let lines = ["ENGLISH TEST 3", "Question 1:", "Stem", "Question 2:"];
        let blocks = segment_blocks(&lines);
        assert_eq!(blocks, vec!["Question 1:\nENGLISH TEST 3\nStem", "Question 2:"]);
    }

    #[test]
    fn test_no_header_yields_single_block() {
        let lines = ["just", "text"];
        assert_eq!(segment_blocks(&lines), vec!["just\ntext"]);
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        let lines: [&str; 0] = [];
        assert!(segment_blocks(&lines).is_empty());
    }

    #[test]
    fn test_every_line_lands_in_exactly_one_block() {
        let lines: Vec<String> = (1..=20)
            .flat_map(|i| vec![format!("Question {}:", i), format!("line {}", i)])
            .collect();
        let blocks = segment_blocks(&lines);
        assert_eq!(blocks.len(), 20);
        let total_lines: usize = blocks.iter().map(|b| b.lines().count()).sum();
        assert_eq!(total_lines, lines.len());
    }
}
