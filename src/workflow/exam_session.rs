//! 练习会话 - 流程层
//!
//! 持有当前练习卷和考生已提交的答案。
//! 同一题再次提交会覆盖上一次的答案；统计总是按题号顺序重新累加。

use std::collections::BTreeMap;

use tracing::info;

use crate::error::ExamError;
use crate::models::ExamInstance;
use crate::services::grader::{self, EntryGrade, Scorecard, SubmittedAnswer};

/// 一次判分的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    /// 本题结果
    pub grade: EntryGrade,
    /// 整份练习卷当前的统计
    pub scorecard: Scorecard,
}

/// 练习会话
#[derive(Debug, Clone)]
pub struct ExamSession {
    instance: ExamInstance,
    answers: BTreeMap<usize, SubmittedAnswer>,
}

impl ExamSession {
    pub fn new(instance: ExamInstance) -> Self {
        Self {
            instance,
            answers: BTreeMap::new(),
        }
    }

    pub fn instance(&self) -> &ExamInstance {
        &self.instance
    }

    /// 已作答的题号
    pub fn answered_positions(&self) -> Vec<usize> {
        self.answers.keys().copied().collect()
    }

    /// 提交某题的答案并判分
    ///
    /// # 参数
    /// - `exam_position`: 练习卷题号 (1..=17)
    /// - `answer`: 提交的答案
    ///
    /// # 返回
    /// 本题结果和当前统计；题号越界或答案类型不匹配时不记录答案
    pub fn grade_answer(
        &mut self,
        exam_position: usize,
        answer: SubmittedAnswer,
    ) -> Result<GradeReport, ExamError> {
        let grade = grader::grade_answer(&self.instance, exam_position, &answer)?;
        self.answers.insert(exam_position, answer);

        let scorecard = self.scorecard()?;
        info!(
            "第 {} 题: 正确 {}/{} | 选择 {} | 排序 {} | 说话人 {}",
            exam_position,
            grade.correct(),
            grade.results.len(),
            scorecard.choice,
            scorecard.ordering,
            scorecard.speaker
        );

        Ok(GradeReport { grade, scorecard })
    }

    /// 按题号顺序累加整份练习卷的统计
    pub fn scorecard(&self) -> Result<Scorecard, ExamError> {
        let mut scorecard = Scorecard::default();
        for entry in &self.instance.entries {
            let grade = grader::grade_entry(entry, self.answers.get(&entry.exam_position))?;
            scorecard.add(&grade);
        }
        Ok(scorecard)
    }

    /// 清除所有已提交的答案
    pub fn reset(&mut self) {
        self.answers.clear();
    }
}
