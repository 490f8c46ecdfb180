use super::patterns::{is_question_header, SPEAKER_LINE};
use crate::error::ParseFailure;
use crate::models::{GenderAttribution, Speaker, SpeakerItem};

/// 解析说话人判断题 (Q15)
///
/// 每行形如 "内容 - woman|man|both"，不符合的行直接跳过。
pub fn parse_gender_attribution(lines: &[&str]) -> Result<GenderAttribution, ParseFailure> {
    let items: Vec<SpeakerItem> = lines
        .iter()
        .filter(|line| !is_question_header(line))
        .filter_map(|line| {
            let caps = SPEAKER_LINE.captures(line)?;
            let speaker = Speaker::from_keyword(&caps[2])?;
            Some(SpeakerItem {
                stem: caps[1].trim().to_string(),
                speaker,
            })
        })
        .collect();

    if items.is_empty() {
        return Err(ParseFailure::NoSpeakerLines);
    }

    Ok(GenderAttribution { items })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_speaker_lines() {
        let lines = [
            "Question 15:",
            "He wants to buy a car - man",
            "She likes tea -WOMAN",
            "Listen and choose",
            "They both agree - both",
        ];
        let block = parse_gender_attribution(&lines).unwrap();
        assert_eq!(block.items.len(), 3);
        assert_eq!(block.items[0].stem, "He wants to buy a car");
        assert_eq!(block.items[0].speaker, Speaker::Man);
        assert_eq!(block.items[1].speaker, Speaker::Woman);
        assert_eq!(block.items[2].stem, "They both agree");
        assert_eq!(block.items[2].speaker, Speaker::Both);
    }

    #[test]
    fn test_hyphen_inside_stem_is_kept() {
        let lines = ["A well-known singer - woman"];
        let block = parse_gender_attribution(&lines).unwrap();
        assert_eq!(block.items[0].stem, "A well-known singer");
    }

    #[test]
    fn test_headers_anywhere_are_ignored() {
        let lines = ["Intro", "Question 15 - man", "Real line - both"];
        let block = parse_gender_attribution(&lines).unwrap();
        assert_eq!(block.items.len(), 1);
        assert_eq!(block.items[0].stem, "Real line");
    }

    #[test]
    fn test_no_matching_lines_fails() {
        let lines = ["Question 15:", "nothing here"];
        assert_eq!(
            parse_gender_attribution(&lines),
            Err(ParseFailure::NoSpeakerLines)
        );
    }
}
