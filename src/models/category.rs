use serde::{Deserialize, Serialize};

/// 题目分组
///
/// 分组只由题目块在原试卷中的位置决定：
/// - Q1–13 → 单选题
/// - Q14 → 排序题
/// - Q15 → 说话人判断题
/// - Q16–17 → 多小题选择题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 单选题
    Choice = 1,
    /// 排序题
    Ordering = 2,
    /// 说话人判断题 (woman / man / both)
    Speaker = 3,
    /// 多小题选择题
    MultiPart = 4,
}

impl Category {
    /// 全部分组，按编号顺序
    pub const ALL: [Category; 4] = [
        Category::Choice,
        Category::Ordering,
        Category::Speaker,
        Category::MultiPart,
    ];

    /// 获取分组编号 (1-4)
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 获取分组名称
    pub fn name(self) -> &'static str {
        match self {
            Category::Choice => "单选题",
            Category::Ordering => "排序题",
            Category::Speaker => "说话人判断题",
            Category::MultiPart => "多小题选择题",
        }
    }

    /// 从编号解析分组
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Category::Choice),
            2 => Some(Category::Ordering),
            3 => Some(Category::Speaker),
            4 => Some(Category::MultiPart),
            _ => None,
        }
    }

    /// 在原试卷中对应的题号范围
    pub fn source_positions(self) -> std::ops::RangeInclusive<usize> {
        match self {
            Category::Choice => 1..=13,
            Category::Ordering => 14..=14,
            Category::Speaker => 15..=15,
            Category::MultiPart => 16..=17,
        }
    }

    /// 一份练习卷中该分组的题目数量
    pub fn exam_quota(self) -> usize {
        self.source_positions().count()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 各分组的题目数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub choice: usize,
    pub ordering: usize,
    pub speaker: usize,
    pub multi_part: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Choice => self.choice,
            Category::Ordering => self.ordering,
            Category::Speaker => self.speaker,
            Category::MultiPart => self.multi_part,
        }
    }

    pub fn increment(&mut self, category: Category) {
        match category {
            Category::Choice => self.choice += 1,
            Category::Ordering => self.ordering += 1,
            Category::Speaker => self.speaker += 1,
            Category::MultiPart => self.multi_part += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.choice + self.ordering + self.speaker + self.multi_part
    }

    /// 是否足够组成一份 17 题练习卷
    pub fn meets_exam_quota(&self) -> bool {
        Category::ALL
            .iter()
            .all(|&category| self.get(category) >= category.exam_quota())
    }
}

impl std::fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.choice, self.ordering, self.speaker, self.multi_part
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_quota_matches_layout() {
        assert_eq!(Category::Choice.exam_quota(), 13);
        assert_eq!(Category::Ordering.exam_quota(), 1);
        assert_eq!(Category::Speaker.exam_quota(), 1);
        assert_eq!(Category::MultiPart.exam_quota(), 2);
    }

    #[test]
    fn test_meets_exam_quota() {
        let mut counts = CategoryCounts {
            choice: 13,
            ordering: 1,
            speaker: 1,
            multi_part: 2,
        };
        assert!(counts.meets_exam_quota());

        counts.multi_part = 1;
        assert!(!counts.meets_exam_quota());
        assert_eq!(counts.to_string(), "13/1/1/1");
    }

    #[test]
    fn test_from_code_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code(0), None);
        assert_eq!(Category::from_code(5), None);
    }
}
