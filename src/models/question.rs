use serde::Serialize;
use std::collections::HashSet;

/// 题目记录（题库输出的最小单元）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub question: String,
    /// 按选项字母排序后的选项文本
    pub options: Vec<String>,
    /// 原文没有答案，构建时始终为空
    pub answer: Option<String>,
    pub year: Option<String>,
}

impl QuestionRecord {
    pub fn new(question: impl Into<String>, options: Vec<String>, year: Option<String>) -> Self {
        Self {
            question: question.into(),
            options,
            answer: None,
            year,
        }
    }
}

/// 单个科目的题库
///
/// 按题干原文精确去重，先出现的保留
#[derive(Debug, Default)]
pub struct SubjectBank {
    questions: Vec<QuestionRecord>,
    seen: HashSet<String>,
    duplicates: usize,
}

impl SubjectBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一道题，重复题干返回 `false`
    pub fn push(&mut self, record: QuestionRecord) -> bool {
        if self.seen.contains(&record.question) {
            self.duplicates += 1;
            return false;
        }
        self.seen.insert(record.question.clone());
        self.questions.push(record);
        true
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 被丢弃的重复题数量
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}
