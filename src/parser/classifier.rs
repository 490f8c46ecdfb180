use crate::models::Category;

/// 原试卷中最多处理的题目块数
pub const MAX_SOURCE_POSITION: usize = 17;

/// 根据题目块的位置（从 1 开始）确定分组
///
/// 17 以后的位置不属于任何分组，直接忽略。
pub fn classify(position: usize) -> Option<Category> {
    match position {
        1..=13 => Some(Category::Choice),
        14 => Some(Category::Ordering),
        15 => Some(Category::Speaker),
        16 | 17 => Some(Category::MultiPart),
        _ => None,
    }
}
