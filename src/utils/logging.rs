//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::{Category, CategoryCounts};

/// 初始化 tracing 输出
///
/// 优先使用 `RUST_LOG`，否则默认 `info`（`verbose` 时为 `debug`）。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题库练习日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 追加一行到日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
/// - `line`: 要写入的内容
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `documents_folder`: 试卷目录
/// - `seed`: 随机数种子
pub fn log_startup(documents_folder: &str, seed: Option<u64>) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库练习模式 (17 题固定结构)");
    info!("📁 试卷目录: {}", documents_folder);
    match seed {
        Some(seed) => info!("🎲 随机数种子: {}", seed),
        None => info!("🎲 随机数种子: 系统熵"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录题库各分组数量
pub fn log_bank_counts(counts: &CategoryCounts) {
    info!("\n{}", "─".repeat(60));
    info!("📊 题库统计");
    for category in Category::ALL {
        let range = category.source_positions();
        info!(
            "- 分组 {} (Q{}–{}, {}): {} 道",
            category.code(),
            range.start(),
            range.end(),
            category,
            counts.get(category)
        );
    }
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `uploaded`: 成功上传的试卷数
/// - `rejected`: 被拒绝的试卷数
/// - `added`: 加入题库的题目数
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(uploaded: usize, rejected: usize, added: usize, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 上传成功: {} 份试卷，共 {} 道题", uploaded, added);
    info!("❌ 被拒绝: {} 份", rejected);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("Sắp xếp các mục", 3), "Sắp...");
    }

    #[test]
    fn test_log_file_keeps_header_and_appended_lines() {
        let path = std::env::temp_dir().join(format!("exam_drill_log_{}.txt", std::process::id()));
        let path = path.to_str().unwrap();

        init_log_file(path).unwrap();
        append_log_line(path, "[试卷 1] 加入 16 道题").unwrap();
        append_log_line(path, "[试卷 1] Question 15 解析失败").unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with(&"=".repeat(60)));
        assert!(content.ends_with("[试卷 1] 加入 16 道题\n[试卷 1] Question 15 解析失败\n"));
        let _ = fs::remove_file(path);
    }
}
