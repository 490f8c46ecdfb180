//! 题库
//!
//! 按分组保存解析好的题目，只存在于进程内存中。
//! 题库本身不检查 (试卷编号, 题号) 是否重复，由上传服务在整份试卷层面保证。

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Category, CategoryCounts, DocumentId, QuestionRecord};
use tracing::{debug, info};

/// 分组题库
#[derive(Debug, Clone)]
pub struct QuestionBank {
    groups: BTreeMap<Category, Vec<QuestionRecord>>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionBank {
    /// 创建空题库，四个分组都存在
    pub fn new() -> Self {
        Self {
            groups: Category::ALL.iter().map(|&c| (c, Vec::new())).collect(),
        }
    }

    /// 追加一道题到对应分组末尾
    pub fn insert(&mut self, record: QuestionRecord) {
        debug!(
            "题库新增: 试卷 {} Question {} → {}",
            record.document_id, record.position, record.category
        );
        self.groups.entry(record.category).or_default().push(record);
    }

    /// 删除某份试卷的全部题目（所有分组）
    ///
    /// # 返回
    /// 删除的题目数量；试卷不存在时返回 0
    pub fn remove_by_document(&mut self, document_id: DocumentId) -> usize {
        let mut removed = 0;
        for records in self.groups.values_mut() {
            let before = records.len();
            records.retain(|r| r.document_id != document_id);
            removed += before - records.len();
        }
        if removed > 0 {
            info!("🗑️ 已从题库删除试卷 {} 的 {} 道题", document_id, removed);
        }
        removed
    }

    /// 四个分组的题目数量
    pub fn counts_by_category(&self) -> CategoryCounts {
        CategoryCounts {
            choice: self.records(Category::Choice).len(),
            ordering: self.records(Category::Ordering).len(),
            speaker: self.records(Category::Speaker).len(),
            multi_part: self.records(Category::MultiPart).len(),
        }
    }

    /// 某份试卷的全部题目，按原题号排序
    pub fn list_by_document(&self, document_id: DocumentId) -> Vec<&QuestionRecord> {
        let mut records: Vec<&QuestionRecord> = self
            .groups
            .values()
            .flatten()
            .filter(|r| r.document_id == document_id)
            .collect();
        records.sort_by_key(|r| r.position);
        records
    }

    pub fn contains_document(&self, document_id: DocumentId) -> bool {
        self.groups
            .values()
            .flatten()
            .any(|r| r.document_id == document_id)
    }

    /// 题库中出现过的全部试卷编号，升序
    pub fn document_ids(&self) -> Vec<DocumentId> {
        self.groups
            .values()
            .flatten()
            .map(|r| r.document_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 单份试卷在各分组中的题目数量
    pub fn document_overview(&self, document_id: DocumentId) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for record in self.list_by_document(document_id) {
            counts.increment(record.category);
        }
        counts
    }

    /// 某个分组的全部题目，按加入顺序
    pub fn records(&self, category: Category) -> &[QuestionRecord] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 某个分组的前 `limit` 道题，用于预览
    pub fn sample_by_category(&self, category: Category, limit: usize) -> &[QuestionRecord] {
        let records = self.records(category);
        &records[..limit.min(records.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// 清空题库
    pub fn clear(&mut self) {
        for records in self.groups.values_mut() {
            records.clear();
        }
        info!("题库已清空");
    }
}
