//! 试卷上传服务
//!
//! 负责"上传一份试卷"和"删除一份试卷"，整份试卷为单位操作题库。

use crate::config::Config;
use crate::error::UploadError;
use crate::models::DocumentId;
use crate::parser::{DocumentParser, SkippedBlock};
use crate::services::question_bank::QuestionBank;
use tracing::{info, warn};

/// 允许的最大试卷编号
pub const MAX_DOCUMENT_ID: DocumentId = 50;

/// 上传结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub document_id: DocumentId,
    /// 切分出的题目块数
    pub block_count: usize,
    /// 成功加入题库的题目数
    pub added: usize,
    /// 解析失败被跳过的块
    pub skipped: Vec<SkippedBlock>,
    /// 第 17 题之后被忽略的块数
    pub ignored: usize,
}

/// 试卷上传服务
#[derive(Debug, Clone, Default)]
pub struct UploadService {
    parser: DocumentParser,
}

impl UploadService {
    pub fn new(config: &Config) -> Self {
        Self {
            parser: DocumentParser::new(config.sub_question_marker.clone()),
        }
    }

    pub fn with_parser(parser: DocumentParser) -> Self {
        Self { parser }
    }

    /// 解析一份试卷并加入题库
    ///
    /// # 参数
    /// - `bank`: 题库
    /// - `document_id`: 试卷编号 (1..=50)
    /// - `paragraphs`: 按顺序排列的非空段落
    ///
    /// # 返回
    /// 上传结果；试卷编号无效、已存在或没有任何题目时返回错误，题库保持不变
    pub fn upload_document<S: AsRef<str>>(
        &self,
        bank: &mut QuestionBank,
        document_id: DocumentId,
        paragraphs: &[S],
    ) -> Result<UploadReport, UploadError> {
        if !(1..=MAX_DOCUMENT_ID).contains(&document_id) {
            return Err(UploadError::InvalidDocumentId {
                document_id,
                max: MAX_DOCUMENT_ID,
            });
        }

        if bank.contains_document(document_id) {
            warn!("🚫 试卷 {} 已存在于题库中，拒绝重复上传", document_id);
            return Err(UploadError::DuplicateDocument { document_id });
        }

        let parsed = self.parser.parse_document(document_id, paragraphs);
        if parsed.block_count == 0 {
            warn!("⚠️ 试卷 {} 中没有识别到任何 Question", document_id);
            return Err(UploadError::EmptyDocument { document_id });
        }

        for skipped in &parsed.skipped {
            warn!(
                "[试卷 {}] ⚠️ Question {} ({}) 解析失败，已跳过: {}",
                document_id, skipped.position, skipped.category, skipped.reason
            );
        }
        if parsed.ignored > 0 {
            info!(
                "[试卷 {}] 第 {} 题之后还有 {} 个块，已忽略",
                document_id,
                crate::parser::MAX_SOURCE_POSITION,
                parsed.ignored
            );
        }

        let added = parsed.records.len();
        for record in parsed.records {
            bank.insert(record);
        }

        info!(
            "✅ 已从试卷 {} 加入 {} 道题 (共 {} 个块，跳过 {})",
            document_id,
            added,
            parsed.block_count,
            parsed.skipped.len()
        );

        Ok(UploadReport {
            document_id,
            block_count: parsed.block_count,
            added,
            skipped: parsed.skipped,
            ignored: parsed.ignored,
        })
    }

    /// 删除一份试卷的全部题目，重复调用无副作用
    pub fn delete_document(&self, bank: &mut QuestionBank, document_id: DocumentId) -> usize {
        let removed = bank.remove_by_document(document_id);
        if removed == 0 {
            info!("试卷 {} 不在题库中，无需删除", document_id);
        }
        removed
    }
}
