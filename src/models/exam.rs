use serde::{Deserialize, Serialize};

use crate::models::category::Category;
use crate::models::question::{QuestionBody, QuestionRecord};

/// 练习卷固定题数
pub const EXAM_LENGTH: usize = 17;

/// 练习卷中的一题
///
/// `record` 是题库记录的只读拷贝；排序题额外带有本次考试专用的展示顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamEntry {
    /// 在练习卷中的题号 (1..=17)
    pub exam_position: usize,
    pub record: QuestionRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation_order: Option<Vec<String>>,
}

impl ExamEntry {
    /// 用于展示的条目顺序，只对排序题有意义
    pub fn display_items(&self) -> Option<&[String]> {
        match (&self.presentation_order, &self.record.body) {
            (Some(order), _) => Some(order.as_slice()),
            (None, QuestionBody::Ordering(order)) => Some(order.correct_sequence.as_slice()),
            _ => None,
        }
    }
}

/// 一份组好的练习卷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamInstance {
    pub entries: Vec<ExamEntry>,
    pub created_at: String,
}

impl ExamInstance {
    pub fn new(entries: Vec<ExamEntry>) -> Self {
        Self {
            entries,
            created_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按题号 (从 1 开始) 获取
    pub fn entry(&self, exam_position: usize) -> Option<&ExamEntry> {
        exam_position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
    }

    /// 每一题的分组，按题号顺序
    pub fn category_layout(&self) -> Vec<Category> {
        self.entries.iter().map(|e| e.record.category).collect()
    }

    /// 导出为 JSON，供展示层使用
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for ExamEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "### Câu {} (试卷 {} – Question {} – {})",
            self.exam_position, self.record.document_id, self.record.position, self.record.category
        )?;
        match (&self.record.body, &self.presentation_order) {
            (QuestionBody::Ordering(order), Some(shuffled)) => {
                write!(f, "{}", order.prompt)?;
                for (i, item) in shuffled.iter().enumerate() {
                    write!(f, "\n{}. {}", i + 1, item)?;
                }
                Ok(())
            }
            (body, _) => write!(f, "{}", body),
        }
    }
}
