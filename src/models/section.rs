use super::subject::SubjectKey;
use std::ops::Range;

/// 科目分段
///
/// 表示同一年份下某个科目占据的连续行区间（左闭右开）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub year: Option<String>,
    pub subject: SubjectKey,
    /// 标题行的下一行
    pub start: usize,
    /// 下一个已识别科目标题所在行，或文档长度
    pub end: usize,
}

impl Section {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
