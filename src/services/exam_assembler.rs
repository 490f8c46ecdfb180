//! 组卷服务
//!
//! 从题库中按固定结构抽题：
//! - 第 1–13 题：单选题分组中不重复随机抽 13 道
//! - 第 14 题：排序题分组随机 1 道
//! - 第 15 题：说话人判断题分组随机 1 道
//! - 第 16–17 题：多小题分组中不重复随机抽 2 道
//!
//! 随机源由调用方传入，测试时可使用固定种子。

use rand::seq::{index, SliceRandom};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::ExamError;
use crate::models::{Category, ExamEntry, ExamInstance, QuestionBody};
use crate::services::question_bank::QuestionBank;

/// 组一份 17 题练习卷
///
/// # 参数
/// - `bank`: 题库（只读）
/// - `rng`: 随机源
///
/// # 返回
/// 新的练习卷；题库不足时返回 `ExamError::InsufficientBank`
pub fn assemble_exam<R: Rng + ?Sized>(
    bank: &QuestionBank,
    rng: &mut R,
) -> Result<ExamInstance, ExamError> {
    let counts = bank.counts_by_category();
    if !counts.meets_exam_quota() {
        warn!("⚠️ 题库题目不足，无法组卷 (当前: {}，需要: 13/1/1/2)", counts);
        return Err(ExamError::InsufficientBank { counts });
    }

    let mut entries: Vec<ExamEntry> = Vec::new();

    for category in Category::ALL {
        let records = bank.records(category);
        let picks = index::sample(rng, records.len(), category.exam_quota());

        for record_index in picks.into_iter() {
            let record = records[record_index].clone();
            let presentation_order = match &record.body {
                QuestionBody::Ordering(order) => {
                    let mut shuffled = order.correct_sequence.clone();
                    shuffled.shuffle(rng);
                    Some(shuffled)
                }
                _ => None,
            };

            let exam_position = entries.len() + 1;
            debug!(
                "第 {} 题 ← 试卷 {} Question {} ({})",
                exam_position, record.document_id, record.position, category
            );
            entries.push(ExamEntry {
                exam_position,
                record,
                presentation_order,
            });
        }
    }

    info!("🎲 已生成 {} 题练习卷", entries.len());
    Ok(ExamInstance::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CategoryCounts, DocumentId, GenderAttribution, MultiPartChoice, Ordering, QuestionRecord,
        SingleChoice, Speaker, SpeakerItem, EXAM_LENGTH, ORDERING_PROMPT,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeMap, HashSet};

    fn choice() -> SingleChoice {
        SingleChoice {
            stem: "stem".to_string(),
            options: BTreeMap::from([('A', "a".to_string()), ('B', "b".to_string())]),
            answer: 'A',
        }
    }

    fn body_for(category: Category) -> QuestionBody {
        match category {
            Category::Choice => QuestionBody::SingleChoice(choice()),
            Category::Ordering => QuestionBody::Ordering(Ordering {
                prompt: ORDERING_PROMPT.to_string(),
                correct_sequence: (1..=5).map(|i| format!("step {}", i)).collect(),
            }),
            Category::Speaker => QuestionBody::GenderAttribution(GenderAttribution {
                items: vec![SpeakerItem {
                    stem: "line".to_string(),
                    speaker: Speaker::Both,
                }],
            }),
            Category::MultiPart => QuestionBody::MultiPartChoice(MultiPartChoice {
                intro: None,
                sub_items: vec![choice(), choice()],
            }),
        }
    }

    /// 每份试卷给每个分组贡献完整的题号范围
    fn bank_with_documents(documents: DocumentId) -> QuestionBank {
        let mut bank = QuestionBank::new();
        for document_id in 1..=documents {
            for category in Category::ALL {
                for position in category.source_positions() {
                    bank.insert(QuestionRecord::new(
                        category,
                        document_id,
                        position,
                        body_for(category),
                    ));
                }
            }
        }
        bank
    }

    #[test]
    fn test_insufficient_bank() {
        let mut bank = bank_with_documents(1);
        bank.remove_by_document(1);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            assemble_exam(&bank, &mut rng),
            Err(ExamError::InsufficientBank {
                counts: CategoryCounts::default()
            })
        );
    }

    #[test]
    fn test_exam_layout_and_distinct_picks() {
        let bank = bank_with_documents(3);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let exam = assemble_exam(&bank, &mut rng).unwrap();
            assert_eq!(exam.len(), EXAM_LENGTH);

            let mut expected = vec![Category::Choice; 13];
            expected.extend([Category::Ordering, Category::Speaker]);
            expected.extend([Category::MultiPart; 2]);
            assert_eq!(exam.category_layout(), expected);

            let choice_keys: HashSet<_> =
                exam.entries[..13].iter().map(|e| e.record.key()).collect();
            assert_eq!(choice_keys.len(), 13);
            assert_ne!(exam.entries[15].record.key(), exam.entries[16].record.key());

            let positions: Vec<usize> = exam.entries.iter().map(|e| e.exam_position).collect();
            assert_eq!(positions, (1..=EXAM_LENGTH).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_minimal_bank_uses_every_record() {
        let bank = bank_with_documents(1);
        let mut rng = StdRng::seed_from_u64(7);
        let exam = assemble_exam(&bank, &mut rng).unwrap();
        let mut sources: Vec<usize> = exam.entries[..13].iter().map(|e| e.record.position).collect();
        sources.sort();
        assert_eq!(sources, (1..=13).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_exam() {
        let bank = bank_with_documents(4);
        let first = assemble_exam(&bank, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = assemble_exam(&bank, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first.entries, second.entries);
    }

    #[test]
    fn test_only_ordering_entries_get_presentation_order() {
        let bank = bank_with_documents(2);
        let exam = assemble_exam(&bank, &mut StdRng::seed_from_u64(3)).unwrap();
        for entry in &exam.entries {
            match &entry.record.body {
                QuestionBody::Ordering(order) => {
                    let shuffled = entry.presentation_order.as_ref().unwrap();
                    let mut a = shuffled.clone();
                    let mut b = order.correct_sequence.clone();
                    a.sort();
                    b.sort();
                    assert_eq!(a, b);
                }
                _ => assert!(entry.presentation_order.is_none()),
            }
        }
    }

    #[test]
    fn test_bank_is_not_mutated() {
        let bank = bank_with_documents(2);
        let before = bank.records(Category::Ordering).to_vec();
        let _ = assemble_exam(&bank, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(bank.records(Category::Ordering), before.as_slice());
    }
}
