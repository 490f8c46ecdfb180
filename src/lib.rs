//! # Exam Drill
//!
//! 把结构化的试卷拆分成固定题型，存入分组题库，再从题库中随机组成 17 题练习卷并自动判分。
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - 题目、分组、练习卷、原始试卷，以及试卷文件读取
//!
//! ### ② 解析层（Parser）
//! - `parser/` - 切块 → 按位置分组 → 四种题型各自解析
//!
//! ### ③ 业务能力层（Services）
//! - `QuestionBank` - 分组题库
//! - `UploadService` - 整份试卷的上传与删除
//! - `assemble_exam` - 分层随机抽题
//! - `grader` - 每种题型的判分
//!
//! ### ④ 流程层（Workflow）
//! - `ExamSession` - 一份练习卷的作答与统计
//!
//! ### ⑤ 编排层（Orchestration）
//! - `App` - 持有题库、随机源和当前会话
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ExamError, ParseFailure, UploadError};
pub use models::{Category, CategoryCounts, ExamInstance, QuestionBody, QuestionRecord};
pub use orchestrator::App;
pub use parser::DocumentParser;
pub use services::{QuestionBank, Scorecard, SubmittedAnswer, UploadReport};
pub use workflow::{ExamSession, GradeReport};
