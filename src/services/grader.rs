//! 判分服务
//!
//! 无状态的判分函数，每种题型一个；`grade_entry` 负责按题型分派。
//!
//! 统计分三类：
//! - 选择题：单选题 + 多小题选择题中的每个小题
//! - 排序题
//! - 说话人判断题：每个小题单独计分

use serde::{Deserialize, Serialize};

use crate::error::ExamError;
use crate::models::{
    ExamEntry, ExamInstance, Ordering, QuestionBody, SingleChoice, SpeakerItem,
};

/// 提交的答案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SubmittedAnswer {
    /// 单选题：选项标签
    Choice(String),
    /// 多小题选择题：每个小题的标签，`None` 表示未作答
    MultiChoice(Vec<Option<String>>),
    /// 排序题：考生给出的顺序
    Ordering(Vec<String>),
    /// 说话人判断题：每个小题的 woman / man / both，`None` 表示未作答
    Speakers(Vec<Option<String>>),
}

/// 统计类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyKind {
    Choice,
    Ordering,
    Speaker,
}

/// 得分 / 总数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub score: usize,
    pub total: usize,
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.score, self.total)
    }
}

/// 一题的判分结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryGrade {
    pub exam_position: usize,
    pub kind: TallyKind,
    /// 每个计分单位的结果：`Some(true)` 正确，`Some(false)` 错误，`None` 未作答
    pub results: Vec<Option<bool>>,
}

impl EntryGrade {
    pub fn correct(&self) -> usize {
        self.results.iter().filter(|r| **r == Some(true)).count()
    }
}

/// 三类统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub choice: Tally,
    pub ordering: Tally,
    pub speaker: Tally,
}

impl Scorecard {
    /// 累加一题的结果，未作答的单位也计入总数
    pub fn add(&mut self, grade: &EntryGrade) {
        let tally = match grade.kind {
            TallyKind::Choice => &mut self.choice,
            TallyKind::Ordering => &mut self.ordering,
            TallyKind::Speaker => &mut self.speaker,
        };
        tally.score += grade.correct();
        tally.total += grade.results.len();
    }
}

/// 单选题：标签相同即正确（不区分大小写）
pub fn grade_single_choice(item: &SingleChoice, submitted: &str) -> bool {
    let mut chars = submitted.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(label), None) => label.to_ascii_uppercase() == item.answer,
        _ => false,
    }
}

/// 排序题：长度相同且每个位置都相同才算正确
pub fn grade_ordering(order: &Ordering, submitted: &[String]) -> bool {
    order.correct_sequence.as_slice() == submitted
}

/// 说话人判断题中的一个小题
pub fn grade_speaker(item: &SpeakerItem, submitted: &str) -> bool {
    submitted.trim().to_lowercase() == item.speaker.keyword()
}

/// 给练习卷中的一题判分
///
/// # 参数
/// - `entry`: 练习卷中的题目
/// - `answer`: 提交的答案，`None` 表示整题未作答
pub fn grade_entry(
    entry: &ExamEntry,
    answer: Option<&SubmittedAnswer>,
) -> Result<EntryGrade, ExamError> {
    let mismatch = || ExamError::AnswerKindMismatch {
        position: entry.exam_position,
        category: entry.record.category,
    };

    let (kind, results) = match (&entry.record.body, answer) {
        (QuestionBody::SingleChoice(item), Some(SubmittedAnswer::Choice(label))) => {
            (TallyKind::Choice, vec![Some(grade_single_choice(item, label))])
        }
        (QuestionBody::SingleChoice(_), None) => (TallyKind::Choice, vec![None]),

        (QuestionBody::MultiPartChoice(multi), answer) => {
            let labels: &[Option<String>] = match answer {
                Some(SubmittedAnswer::MultiChoice(labels)) => labels.as_slice(),
                None => &[],
                Some(_) => return Err(mismatch()),
            };
            let results: Vec<Option<bool>> = multi
                .sub_items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    labels
                        .get(i)
                        .and_then(Option::as_deref)
                        .map(|label| grade_single_choice(item, label))
                })
                .collect();
            (TallyKind::Choice, results)
        }

        (QuestionBody::Ordering(order), Some(SubmittedAnswer::Ordering(sequence))) => {
            (TallyKind::Ordering, vec![Some(grade_ordering(order, sequence))])
        }
        (QuestionBody::Ordering(_), None) => (TallyKind::Ordering, vec![None]),

        (QuestionBody::GenderAttribution(block), answer) => {
            let speakers: &[Option<String>] = match answer {
                Some(SubmittedAnswer::Speakers(speakers)) => speakers.as_slice(),
                None => &[],
                Some(_) => return Err(mismatch()),
            };
            let results: Vec<Option<bool>> = block
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    speakers
                        .get(i)
                        .and_then(Option::as_deref)
                        .map(|speaker| grade_speaker(item, speaker))
                })
                .collect();
            (TallyKind::Speaker, results)
        }

        (QuestionBody::SingleChoice(_), Some(_)) | (QuestionBody::Ordering(_), Some(_)) => {
            return Err(mismatch())
        }
    };

    Ok(EntryGrade {
        exam_position: entry.exam_position,
        kind,
        results,
    })
}

/// 按练习卷题号判分
pub fn grade_answer(
    instance: &ExamInstance,
    exam_position: usize,
    answer: &SubmittedAnswer,
) -> Result<EntryGrade, ExamError> {
    let entry = instance
        .entry(exam_position)
        .ok_or(ExamError::PositionOutOfRange {
            position: exam_position,
            max: instance.len(),
        })?;
    grade_entry(entry, Some(answer))
}
