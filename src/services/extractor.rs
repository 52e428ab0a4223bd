//! 题目抽取 - 业务能力层
//!
//! 只处理单个科目分段内的行，不关心分段从哪里来

use super::line_shape::{classify_line, normalize_line, LineShape};
use crate::models::QuestionRecord;
use std::collections::BTreeMap;
use tracing::trace;

/// 抽取状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 寻找下一个题号
    SeekQuestion,
    /// 累积题干续行
    AccumulateQuestionText,
    /// 收集选项
    CollectOptions,
}

/// 正在构建的题目
#[derive(Debug, Default)]
struct PendingQuestion {
    parts: Vec<String>,
    /// 按字母排序，重复字母以后出现的为准
    options: BTreeMap<char, String>,
}

/// 从一个科目分段中抽取题目
///
/// 尽力而为：无法识别的片段会被丢弃或并入相邻文本，不会报错。
/// 题干规范化后为空的题目（例如页码被误认为题号）不输出
pub fn extract_questions(lines: &[String], year: Option<&str>) -> Vec<QuestionRecord> {
    let lines: Vec<String> = lines.iter().map(|l| normalize_line(l)).collect();
    QuestionExtractor::new(&lines, year).run()
}

struct QuestionExtractor<'a> {
    lines: &'a [String],
    year: Option<&'a str>,
    cursor: usize,
    state: State,
    pending: PendingQuestion,
    records: Vec<QuestionRecord>,
}

impl<'a> QuestionExtractor<'a> {
    fn new(lines: &'a [String], year: Option<&'a str>) -> Self {
        Self {
            lines,
            year,
            cursor: 0,
            state: State::SeekQuestion,
            pending: PendingQuestion::default(),
            records: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<QuestionRecord> {
        let lines = self.lines;
        while self.cursor < lines.len() {
            let shape = classify_line(&lines[self.cursor]);
            match self.state {
                State::SeekQuestion => self.seek(shape),
                State::AccumulateQuestionText => self.accumulate(shape),
                State::CollectOptions => self.collect(shape),
            }
        }

        if self.state != State::SeekQuestion {
            self.finish_question();
        }
        self.records
    }

    fn seek(&mut self, shape: LineShape<'_>) {
        if let LineShape::QuestionStart(text) = shape {
            self.pending.parts.push(text.to_string());
            self.state = State::AccumulateQuestionText;
        }
        self.cursor += 1;
    }

    fn accumulate(&mut self, shape: LineShape<'_>) {
        match shape {
            LineShape::OptionStart(..) => self.state = State::CollectOptions,
            LineShape::QuestionStart(_) => self.finish_question(),
            LineShape::Text(text) => {
                self.pending.parts.push(text.to_string());
                self.cursor += 1;
            }
            LineShape::Blank => self.cursor += 1,
        }
    }

    fn collect(&mut self, shape: LineShape<'_>) {
        match shape {
            LineShape::OptionStart(letter, text) => {
                let (text, next) = self.absorb_continuation(text, self.cursor + 1);
                self.pending.options.insert(letter, text);
                self.cursor = next;
            }
            LineShape::QuestionStart(_) => self.finish_question(),
            LineShape::Text(_) | LineShape::Blank => self.cursor += 1,
        }
    }

    /// 吸收选项的折行内容，返回完整选项文本和下一个待处理的行号
    fn absorb_continuation(&self, first: &str, from: usize) -> (String, usize) {
        let mut parts = vec![first];
        let mut next = from;

        while next < self.lines.len() {
            match classify_line(&self.lines[next]) {
                LineShape::OptionStart(..) | LineShape::QuestionStart(_) => break,
                LineShape::Text(text) => parts.push(text),
                LineShape::Blank => {}
            }
            next += 1;
        }

        if parts.len() == 1 {
            (first.to_string(), next)
        } else {
            (normalize_line(&parts.join(" ")), next)
        }
    }

    fn finish_question(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        self.state = State::SeekQuestion;

        let question = normalize_line(&pending.parts.join(" "));
        if question.is_empty() {
            trace!("丢弃空题干（选项 {} 个）", pending.options.len());
            return;
        }

        let options = pending.options.into_values().collect();
        self.records.push(QuestionRecord::new(
            question,
            options,
            self.year.map(str::to_string),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_basic_question() {
        let doc = lines(
            "1) What is the powerhouse of the cell?\nA) Nucleus\nB) Mitochondria\nC) Ribosome",
        );
        let records = extract_questions(&doc, Some("2022"));
        assert_eq!(
            records,
            vec![QuestionRecord {
                question: "What is the powerhouse of the cell?".to_string(),
                options: vec![
                    "Nucleus".to_string(),
                    "Mitochondria".to_string(),
                    "Ribosome".to_string()
                ],
                answer: None,
                year: Some("2022".to_string()),
            }]
        );
    }

    #[test]
    fn test_wrapped_question_and_option_text() {
        let doc = lines(
            "2.  Which   gas is\nreleased during\n\nphotosynthesis?\nA) Carbon\n   dioxide\nB) Oxygen\n\n3) Next?",
        );
        let records = extract_questions(&doc, None);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question, "Which gas is released during photosynthesis?");
        assert_eq!(records[0].options, vec!["Carbon dioxide", "Oxygen"]);
        assert_eq!(records[0].year, None);
        assert_eq!(records[1].question, "Next?");
        assert!(records[1].options.is_empty());
    }

    #[test]
    fn test_options_sorted_by_letter() {
        let doc = lines("1) Pick one\nC) third\na) first\nB) second");
        let records = extract_questions(&doc, None);
        assert_eq!(records[0].options, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_letter_keeps_last() {
        let doc = lines("1) Pick one\nA) old\nB) two\nA) new");
        let records = extract_questions(&doc, None);
        assert_eq!(records[0].options, vec!["new", "two"]);
    }

    #[test]
    fn test_empty_question_text_dropped() {
        // 页码 "17" 被识别为题号但题干为空，连同选项一起丢弃
        let doc = lines("17\nA) stray\n1) Real question?\nA) yes\nB) no");
        let records = extract_questions(&doc, None);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "Real question?");
        assert_eq!(records[0].options, vec!["yes", "no"]);
    }

    #[test]
    fn test_sixth_option_absorbed_into_e() {
        let doc = lines("1) Six?\nA) a\nB) b\nC) c\nD) d\nE) e\nF) f");
        let records = extract_questions(&doc, None);
        assert_eq!(records[0].options, vec!["a", "b", "c", "d", "e F) f"]);
    }

    #[test]
    fn test_leading_noise_skipped() {
        let doc = lines("INSTRUCTIONS: answer all\nA) not an option\n\n4) Real?\nD) only");
        let records = extract_questions(&doc, None);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "Real?");
        assert_eq!(records[0].options, vec!["only"]);
    }

    #[test]
    fn test_year_header_inside_section_becomes_question() {
        let doc = lines("1) Last of 2021?\nA) yes\n2022 NATIONAL QUALIFYING EXAM\nnoise\n2) First?");
        let records = extract_questions(&doc, Some("2022"));
        let texts: Vec<&str> = records.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Last of 2021?", "2 NATIONAL QUALIFYING EXAM noise", "First?"]
        );
        assert_eq!(records[0].options, vec!["yes"]);
    }

    #[test]
    fn test_wrapped_line_with_long_number_starts_question() {
        let doc = lines("1) How much energy is\n1200 joules in kJ?\nA) 1.2\nB) 12");
        let records = extract_questions(&doc, None);
        let texts: Vec<&str> = records.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(texts, vec!["How much energy is", "0 joules in kJ?"]);
        assert!(records[0].options.is_empty());
        assert_eq!(records[1].options, vec!["1.2", "12"]);
    }

    #[test]
    fn test_empty_range() {
        assert!(extract_questions(&[], Some("2020")).is_empty());
        assert!(extract_questions(&lines("\n\n"), None).is_empty());
    }

    #[test]
    fn test_consecutive_questions_without_options() {
        let doc = lines("1) First\n2) Second\ncontinued\n3)");
        let records = extract_questions(&doc, None);
        let texts: Vec<&str> = records.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second continued"]);
    }
}
