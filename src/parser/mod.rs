//! 试卷解析层
//!
//! ## 处理流程
//!
//! ```text
//! 段落列表
//!     ↓ segmenter    按 "Question N:" 切块
//! 题目块 (1, 2, 3, ...)
//!     ↓ classifier   按位置确定分组
//! (分组, 题目块)
//!     ↓ single_choice / ordering / gender / multi_part
//! QuestionRecord
//! ```
//!
//! 解析失败的块会被跳过并记录原因，不影响其余题目。

pub mod classifier;
pub mod gender;
pub mod multi_part;
pub mod ordering;
pub mod patterns;
pub mod segmenter;
pub mod single_choice;

pub use classifier::{classify, MAX_SOURCE_POSITION};
pub use gender::parse_gender_attribution;
pub use multi_part::{parse_multi_part, MultiPartOutcome};
pub use ordering::parse_ordering;
pub use segmenter::segment_blocks;
pub use single_choice::parse_single_choice;

use crate::error::ParseFailure;
use crate::models::{Category, DocumentId, QuestionBody, QuestionRecord};
use patterns::{block_lines, strip_header};
use tracing::debug;

/// 默认的小题起始标记
pub const DEFAULT_SUB_QUESTION_MARKER: &str = "Câu ";

/// 被跳过的题目块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    pub position: usize,
    pub category: Category,
    pub reason: ParseFailure,
}

/// 一份试卷的解析结果
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// 切分出的题目块总数
    pub block_count: usize,
    pub records: Vec<QuestionRecord>,
    pub skipped: Vec<SkippedBlock>,
    /// 超出第 17 题、未处理的块数
    pub ignored: usize,
}

/// 试卷解析器
#[derive(Debug, Clone)]
pub struct DocumentParser {
    sub_question_marker: String,
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new(DEFAULT_SUB_QUESTION_MARKER)
    }
}

impl DocumentParser {
    pub fn new(sub_question_marker: impl Into<String>) -> Self {
        Self {
            sub_question_marker: sub_question_marker.into(),
        }
    }

    /// 解析整份试卷
    ///
    /// # 参数
    /// - `document_id`: 试卷编号
    /// - `paragraphs`: 按顺序排列的非空段落
    pub fn parse_document<S: AsRef<str>>(
        &self,
        document_id: DocumentId,
        paragraphs: &[S],
    ) -> ParsedDocument {
        let blocks = segment_blocks(paragraphs);
        let mut parsed = ParsedDocument {
            block_count: blocks.len(),
            ..Default::default()
        };

        for (index, block) in blocks.iter().enumerate() {
            let position = index + 1;
            let Some(category) = classify(position) else {
                parsed.ignored += 1;
                continue;
            };

            match self.parse_block(category, block) {
                Ok(body) => {
                    debug!(
                        "[试卷 {}] Question {} → {} ({})",
                        document_id,
                        position,
                        category,
                        body.kind()
                    );
                    parsed
                        .records
                        .push(QuestionRecord::new(category, document_id, position, body));
                }
                Err(reason) => parsed.skipped.push(SkippedBlock {
                    position,
                    category,
                    reason,
                }),
            }
        }

        parsed
    }

    /// 按分组的语法解析单个题目块
    pub fn parse_block(&self, category: Category, block: &str) -> Result<QuestionBody, ParseFailure> {
        let lines = block_lines(block);

        match category {
            Category::Choice => {
                let lines = strip_header(&lines);
                if lines.is_empty() {
                    return Err(ParseFailure::EmptyBlock);
                }
                parse_single_choice(lines).map(QuestionBody::SingleChoice)
            }
            Category::Ordering => parse_ordering(&lines).map(QuestionBody::Ordering),
            Category::Speaker => {
                parse_gender_attribution(&lines).map(QuestionBody::GenderAttribution)
            }
            Category::MultiPart => match parse_multi_part(&lines, &self.sub_question_marker) {
                MultiPartOutcome::Multi(multi) => Ok(QuestionBody::MultiPartChoice(multi)),
                MultiPartOutcome::Single(item) => Ok(QuestionBody::SingleChoice(item)),
                MultiPartOutcome::Failed(reason) => Err(reason),
            },
        }
    }
}
