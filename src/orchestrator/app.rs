//! 应用 - 编排层
//!
//! ## 职责
//!
//! `App` 持有整个进程的可变状态：题库、随机源和当前练习会话。
//! 所有操作都通过 `&mut App` 依次执行，不支持并发访问。
//!
//! ## 核心功能
//!
//! 1. **上传 / 删除试卷**：委托 `UploadService`
//! 2. **题库查询**：各分组数量、按试卷查看
//! 3. **组卷**：委托 `exam_assembler`，新卷替换旧会话
//! 4. **判分**：委托当前 `ExamSession`
//! 5. **批量运行**：`run()` 扫描试卷目录，上传后尝试组卷并导出

use crate::config::Config;
use crate::error::{AppError, ExamError, FileError, UploadError};
use crate::models::{
    load_all_documents, Category, CategoryCounts, DocumentId, ExamInstance, QuestionRecord,
    SourceDocument,
};
use crate::services::{assemble_exam, QuestionBank, SubmittedAnswer, UploadReport, UploadService};
use crate::utils::logging;
use crate::workflow::{ExamSession, GradeReport};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    bank: QuestionBank,
    upload_service: UploadService,
    rng: StdRng,
    session: Option<ExamSession>,
}

impl App {
    /// 创建应用，题库为空
    pub fn new(config: Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// 使用指定随机源创建应用
    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            upload_service: UploadService::new(&config),
            config,
            bank: QuestionBank::new(),
            rng,
            session: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// 上传一份试卷
    pub fn upload_document<S: AsRef<str>>(
        &mut self,
        document_id: DocumentId,
        paragraphs: &[S],
    ) -> Result<UploadReport, UploadError> {
        self.upload_service
            .upload_document(&mut self.bank, document_id, paragraphs)
    }

    /// 删除一份试卷，重复调用无副作用
    ///
    /// 已生成的练习卷持有题目拷贝，不受影响。
    pub fn delete_document(&mut self, document_id: DocumentId) -> usize {
        self.upload_service
            .delete_document(&mut self.bank, document_id)
    }

    /// 四个分组的题目数量
    pub fn get_counts(&self) -> CategoryCounts {
        self.bank.counts_by_category()
    }

    /// 某份试卷的全部题目，按原题号排序
    pub fn list_document(&self, document_id: DocumentId) -> Vec<&QuestionRecord> {
        self.bank.list_by_document(document_id)
    }

    /// 组一份新的练习卷，替换当前会话
    ///
    /// 题库不足时返回错误，当前会话保持不变。
    pub fn assemble_exam(&mut self) -> Result<&ExamInstance, ExamError> {
        let instance = assemble_exam(&self.bank, &mut self.rng)?;
        let session = self.session.insert(ExamSession::new(instance));
        Ok(session.instance())
    }

    /// 当前练习会话
    pub fn session(&self) -> Option<&ExamSession> {
        self.session.as_ref()
    }

    /// 提交当前练习卷某题的答案
    pub fn grade_answer(
        &mut self,
        exam_position: usize,
        answer: SubmittedAnswer,
    ) -> Result<GradeReport, ExamError> {
        self.session
            .as_mut()
            .ok_or(ExamError::NoActiveExam)?
            .grade_answer(exam_position, answer)
    }

    /// 清空题库和当前会话
    pub fn reset(&mut self) {
        self.bank.clear();
        self.session = None;
    }

    /// 批量运行：上传目录中的所有试卷，题库足够时组一份练习卷并导出
    pub async fn run(&mut self) -> Result<()> {
        logging::init_log_file(&self.config.output_log_file)?;
        logging::log_startup(&self.config.documents_folder, self.config.rng_seed);

        info!("\n📁 正在扫描待上传的试卷...");
        let documents = load_all_documents(&self.config.documents_folder).await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待上传的试卷文件，程序结束");
            return Ok(());
        }

        let mut stats = UploadStats::default();
        for document in &documents {
            self.upload_source_document(document, &mut stats);
        }

        logging::log_bank_counts(&self.get_counts());
        self.log_bank_preview();

        let verbose = self.config.verbose_logging;
        let exported = match self.assemble_exam() {
            Ok(instance) => {
                if verbose {
                    for entry in &instance.entries {
                        info!("{}", entry);
                    }
                }
                Some(instance.to_json_pretty().map_err(AppError::from)?)
            }
            Err(e) => {
                warn!("⚠️ {}", e);
                logging::append_log_line(&self.config.output_log_file, &format!("未能组卷: {}", e))?;
                None
            }
        };

        if let Some(json) = exported {
            let path = &self.config.exam_output_file;
            fs::write(path, json).map_err(|source| FileError::WriteFailed {
                path: path.clone(),
                source,
            })?;
            info!("📄 练习卷已导出至: {}", path);
            logging::append_log_line(&self.config.output_log_file, &format!("练习卷已导出至: {}", path))?;
        }

        logging::print_final_stats(
            stats.uploaded,
            stats.rejected,
            stats.added,
            &self.config.output_log_file,
        );

        Ok(())
    }

    fn upload_source_document(&mut self, document: &SourceDocument, stats: &mut UploadStats) {
        info!(
            "\n📥 上传 {} (试卷 {})",
            document.display_name(),
            document.document_id
        );

        let lines = match self.upload_document(document.document_id, &document.paragraphs) {
            Ok(report) => {
                stats.uploaded += 1;
                stats.added += report.added;
                let overview = self.bank.document_overview(document.document_id);
                info!(
                    "[试卷 {}] 各分组: {}",
                    document.document_id, overview
                );
                report_lines(document, &report)
            }
            Err(e) => {
                stats.rejected += 1;
                error!("[试卷 {}] ❌ 上传失败: {}", document.document_id, e);
                vec![format!(
                    "[试卷 {}] {} 上传失败: {}",
                    document.document_id,
                    document.display_name(),
                    e
                )]
            }
        };

        for line in lines {
            if let Err(e) = logging::append_log_line(&self.config.output_log_file, &line) {
                warn!("⚠️ 写入日志文件失败: {}", e);
                break;
            }
        }
    }

    fn log_bank_preview(&self) {
        if !self.config.verbose_logging {
            return;
        }
        for category in Category::ALL {
            for record in self.bank.sample_by_category(category, 2) {
                info!("{}", logging::truncate_text(&record.to_string(), 200));
            }
        }
    }
}

/// 上传结果写入日志文件的内容：一行摘要，每个跳过的块一行
fn report_lines(document: &SourceDocument, report: &UploadReport) -> Vec<String> {
    let mut lines = vec![format!(
        "[试卷 {}] {} 共 {} 个块，加入 {} 道题，跳过 {}，忽略 {}",
        report.document_id,
        document.display_name(),
        report.block_count,
        report.added,
        report.skipped.len(),
        report.ignored
    )];
    lines.extend(report.skipped.iter().map(|skipped| {
        format!(
            "[试卷 {}]   Question {} ({}) 已跳过: {}",
            report.document_id, skipped.position, skipped.category, skipped.reason
        )
    }));
    lines
}

/// 上传统计
#[derive(Debug, Default)]
struct UploadStats {
    uploaded: usize,
    rejected: usize,
    added: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("exam_drill_app_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_run_writes_upload_reports_to_log_file() {
        let dir = scratch_dir("run");
        let documents = dir.join("documents");
        std::fs::create_dir_all(&documents).unwrap();
        std::fs::write(
            documents.join("test_3.txt"),
            "Question 1:\nStem\nA. x\nB. y\nAnswer: B\nQuestion 2:\nBroken\nA. x\n",
        )
        .unwrap();

        let config = Config {
            documents_folder: documents.to_string_lossy().to_string(),
            output_log_file: dir.join("output.txt").to_string_lossy().to_string(),
            exam_output_file: dir.join("exam.json").to_string_lossy().to_string(),
            ..Config::default()
        };
        let mut app = App::with_rng(config.clone(), StdRng::seed_from_u64(1));
        tokio_test::block_on(app.run()).unwrap();

        let log = std::fs::read_to_string(&config.output_log_file).unwrap();
        assert!(log.contains("[试卷 3]"));
        assert!(log.contains("加入 1 道题，跳过 1"));
        assert!(log.contains("Question 2 (单选题) 已跳过"));
        assert!(log.contains("未能组卷"));
        assert!(!std::path::Path::new(&config.exam_output_file).exists());
    }
}
