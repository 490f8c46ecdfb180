use serde::{Deserialize, Serialize};

use crate::models::question::DocumentId;

/// 一份待上传的原始试卷
///
/// 段落已经去掉首尾空白，且不含空段落。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub document_id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl SourceDocument {
    pub fn new(document_id: DocumentId, paragraphs: Vec<String>) -> Self {
        Self {
            document_id,
            name: None,
            paragraphs: normalize_paragraphs(paragraphs),
            file_path: None,
        }
    }

    /// 从纯文本构建，每个非空行视为一个段落
    pub fn from_text(document_id: DocumentId, text: &str) -> Self {
        Self::new(document_id, text.lines().map(str::to_string).collect())
    }

    /// 用于日志显示的名称
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Test {}", self.document_id))
    }

    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}

/// 去掉首尾空白并丢弃空段落
pub fn normalize_paragraphs(paragraphs: Vec<String>) -> Vec<String> {
    paragraphs
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
