use thiserror::Error;

use crate::models::{Category, CategoryCounts};

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 上传错误
    #[error("上传错误: {0}")]
    Upload(#[from] UploadError),
    /// 组卷/判分错误
    #[error("组卷错误: {0}")]
    Exam(#[from] ExamError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 试卷上传错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// 试卷编号不在 1..=50 范围内
    #[error("试卷编号 {document_id} 超出范围 [1, {max}]")]
    InvalidDocumentId { document_id: u32, max: u32 },
    /// 试卷编号已存在于题库，需要先删除
    #[error("试卷 {document_id} 已存在于题库中，请先删除后再上传")]
    DuplicateDocument { document_id: u32 },
    /// 没有切分出任何题目块
    #[error("试卷 {document_id} 中没有识别到任何 Question")]
    EmptyDocument { document_id: u32 },
}

/// 单个题目块解析失败的原因
///
/// 解析失败不是致命错误：该块被跳过，上传继续。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// 去掉标题后没有内容
    #[error("题目块为空")]
    EmptyBlock,
    /// 没有找到 Answer 行
    #[error("缺少 Answer 行")]
    MissingAnswer,
    /// 没有找到 A-D 选项
    #[error("缺少选项")]
    MissingOptions,
    /// 答案不在选项中
    #[error("答案 {answer} 不在选项 {labels} 中")]
    AnswerNotInOptions { answer: char, labels: String },
    /// 排序题条目少于 2 个
    #[error("排序题只有 {found} 个条目，至少需要 2 个")]
    TooFewOrderingItems { found: usize },
    /// 没有任何 "... - woman/man/both" 行
    #[error("没有识别到 woman/man/both 行")]
    NoSpeakerLines,
    /// 多小题块中一个小题都没解析出来
    #[error("没有解析出任何小题")]
    NoSubItems,
}

/// 组卷与判分错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExamError {
    /// 题库题目不足以组成 17 题
    #[error("题库题目不足，无法组卷 (当前: {counts}，需要: 13/1/1/2)")]
    InsufficientBank { counts: CategoryCounts },
    /// 考试位置超出范围
    #[error("考试位置 {position} 超出范围 [1, {max}]")]
    PositionOutOfRange { position: usize, max: usize },
    /// 提交的答案类型与题型不匹配
    #[error("第 {position} 题是{category}，提交的答案类型不匹配")]
    AnswerKindMismatch { position: usize, category: Category },
    /// 当前没有已生成的考试
    #[error("当前没有已生成的考试")]
    NoActiveExam,
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 文件名中无法得到试卷编号
    #[error("无法从文件名推断试卷编号: {path}")]
    MissingDocumentId { path: String },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
