use std::collections::BTreeMap;
use std::fmt;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::models::category::Category;

/// 试卷编号（由上传者提供，1..=50）
pub type DocumentId = u32;

/// 排序题统一使用的题干
pub const ORDERING_PROMPT: &str = "Sắp xếp các mục sau theo đúng thứ tự:";

/// 说话人
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Woman,
    Man,
    Both,
}

static SPEAKER_KEYWORDS: phf::Map<&'static str, Speaker> = phf_map! {
    "woman" => Speaker::Woman,
    "man" => Speaker::Man,
    "both" => Speaker::Both,
};

impl Speaker {
    /// 从关键字解析说话人（不区分大小写）
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        SPEAKER_KEYWORDS
            .get(keyword.trim().to_lowercase().as_str())
            .copied()
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Speaker::Woman => "woman",
            Speaker::Man => "man",
            Speaker::Both => "both",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// 单选题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleChoice {
    pub stem: String,
    /// 选项标签 (A-D) → 选项内容
    pub options: BTreeMap<char, String>,
    pub answer: char,
}

impl SingleChoice {
    /// 选项标签，按字母顺序拼接，如 "ABC"
    pub fn labels(&self) -> String {
        self.options.keys().collect()
    }
}

/// 排序题，`correct_sequence` 的顺序就是答案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    pub prompt: String,
    pub correct_sequence: Vec<String>,
}

/// 说话人判断题中的一个小题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerItem {
    pub stem: String,
    pub speaker: Speaker,
}

/// 说话人判断题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderAttribution {
    pub items: Vec<SpeakerItem>,
}

/// 多小题选择题（至少 2 个小题）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiPartChoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub sub_items: Vec<SingleChoice>,
}

/// 题目内容，四种题型之一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionBody {
    SingleChoice(SingleChoice),
    Ordering(Ordering),
    GenderAttribution(GenderAttribution),
    MultiPartChoice(MultiPartChoice),
}

impl QuestionBody {
    /// 题型名称，用于日志
    pub fn kind(&self) -> &'static str {
        match self {
            QuestionBody::SingleChoice(_) => "single_choice",
            QuestionBody::Ordering(_) => "ordering",
            QuestionBody::GenderAttribution(_) => "gender_attribution",
            QuestionBody::MultiPartChoice(_) => "multi_part_choice",
        }
    }
}

/// 题库中的一道题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub category: Category,
    pub document_id: DocumentId,
    /// 在原试卷中的题号 (1..=17)
    pub position: usize,
    pub body: QuestionBody,
}

impl QuestionRecord {
    pub fn new(category: Category, document_id: DocumentId, position: usize, body: QuestionBody) -> Self {
        Self {
            category,
            document_id,
            position,
            body,
        }
    }

    /// 同一分组内的唯一键
    pub fn key(&self) -> (DocumentId, usize) {
        (self.document_id, self.position)
    }
}

// ========== 文本预览 ==========

impl fmt::Display for SingleChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.stem.is_empty() {
            writeln!(f, "{}", self.stem)?;
        }
        for (label, text) in &self.options {
            writeln!(f, "{}. {}", label, text)?;
        }
        write!(f, "Answer: {}", self.answer)
    }
}

impl fmt::Display for QuestionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionBody::SingleChoice(item) => write!(f, "{}", item),
            QuestionBody::Ordering(order) => {
                write!(f, "{}", order.prompt)?;
                for (i, item) in order.correct_sequence.iter().enumerate() {
                    write!(f, "\n{}. {}", i + 1, item)?;
                }
                Ok(())
            }
            QuestionBody::GenderAttribution(block) => {
                let lines: Vec<String> = block
                    .items
                    .iter()
                    .map(|item| format!("- {}  →  {}", item.stem, item.speaker))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            QuestionBody::MultiPartChoice(multi) => {
                if let Some(intro) = &multi.intro {
                    writeln!(f, "{}", intro)?;
                }
                let parts: Vec<String> = multi
                    .sub_items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| format!("({}) {}", i + 1, item))
                    .collect();
                write!(f, "{}", parts.join("\n"))
            }
        }
    }
}

impl fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[试卷 {} – Question {} – {}]",
            self.document_id, self.position, self.category
        )?;
        write!(f, "{}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_from_keyword() {
        assert_eq!(Speaker::from_keyword("woman"), Some(Speaker::Woman));
        assert_eq!(Speaker::from_keyword("MAN"), Some(Speaker::Man));
        assert_eq!(Speaker::from_keyword(" Both "), Some(Speaker::Both));
        assert_eq!(Speaker::from_keyword("child"), None);
    }

    #[test]
    fn test_single_choice_preview() {
        let item = SingleChoice {
            stem: "Stem text".to_string(),
            options: BTreeMap::from([('B', "opt2".to_string()), ('A', "opt1".to_string())]),
            answer: 'B',
        };
        assert_eq!(item.labels(), "AB");
        assert_eq!(item.to_string(), "Stem text\nA. opt1\nB. opt2\nAnswer: B");
    }

    #[test]
    fn test_body_serializes_with_type_tag() {
        let body = QuestionBody::Ordering(Ordering {
            prompt: ORDERING_PROMPT.to_string(),
            correct_sequence: vec!["a".to_string(), "b".to_string()],
        });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "ordering");
        assert_eq!(json["correct_sequence"][1], "b");
    }
}
