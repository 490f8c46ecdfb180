//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (持有题库、随机源、练习会话)
//!     ↓
//! workflow::ExamSession (一份练习卷的作答与统计)
//!     ↓
//! services (上传 / 题库 / 组卷 / 判分)
//!     ↓
//! parser (段落 → 题目块 → 题目)
//! ```

pub mod app;

pub use app::App;
