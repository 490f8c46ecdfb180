use crate::error::FileError;
use crate::models::document::{normalize_paragraphs, SourceDocument};
use crate::models::question::DocumentId;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tokio::fs;

/// 读取单个试卷文件
///
/// 支持两种格式：
/// - `.toml`：包含 `document_id`、可选 `name` 和 `paragraphs` 列表
/// - `.txt`：每个非空行是一个段落，试卷编号取自文件名中唯一的一段数字（如 `test_12.txt`）
pub async fn load_document(path: &Path) -> Result<SourceDocument> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

    let document = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => parse_toml_document(&content, path)?,
        _ => {
            let document_id = document_id_from_file_name(path)?;
            SourceDocument::from_text(document_id, &content)
        }
    };

    Ok(document.with_file_path(path.to_string_lossy().to_string()))
}

/// 读取文件夹下所有 `.toml` / `.txt` 试卷，按文件名排序
///
/// 单个文件读取失败只记录警告，不影响其他文件。
pub async fn load_all_documents(folder_path: &str) -> Result<Vec<SourceDocument>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("toml") | Some("txt")
        ) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_document(&path).await {
            Ok(document) => {
                tracing::info!(
                    "成功加载 {} (试卷 {}, {} 个段落)",
                    document.display_name(),
                    document.document_id,
                    document.paragraphs.len()
                );
                documents.push(document);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}

fn parse_toml_document(content: &str, path: &Path) -> Result<SourceDocument> {
    let mut document: SourceDocument =
        toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
    document.paragraphs = normalize_paragraphs(document.paragraphs);
    Ok(document)
}

/// 文件名中的连续数字
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("invalid digit run pattern"));

/// 从文件名取试卷编号
///
/// 文件名中必须恰好有一段连续数字（`test_12.txt`）；没有数字或有多段数字
/// （`test_1_v2.txt`）时无法确定编号，返回错误。
fn document_id_from_file_name(path: &Path) -> Result<DocumentId> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let missing = || FileError::MissingDocumentId {
        path: path.display().to_string(),
    };

    let mut runs = DIGIT_RUN.find_iter(&stem);
    let (Some(run), None) = (runs.next(), runs.next()) else {
        return Err(missing().into());
    };

    run.as_str()
        .parse::<DocumentId>()
        .map_err(|_| missing().into())
}
