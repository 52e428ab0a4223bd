//! 行形态识别 - 业务能力层
//!
//! 只负责"这一行长什么样"，不关心所在的流程

use regex::Regex;
use std::sync::LazyLock;

/// 年份标题，例如 `2022 NATIONAL QUALIFYING EXAM`
static YEAR_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(20\d{2})\s+NATIONAL QUALIFYING").expect("年份正则无效"));

/// 科目标题（整行）
static SUBJECT_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(BIOLOGY|CHEMISTRY|PHYSICS|GENERAL\s+KNOWLEDGE(?:\s+SCIENTIFIC\s+FIELD)?|GENERAL\s+KNOWLEDGE\s*(?:&|AND)\s*(?:LANGUAGE|FRENCH)(?:A\.)?|FRENCH(?:\s+LANGUAGE)?)\s*$",
    )
    .expect("科目正则无效")
});

/// 题号开头：1-3 位数字，可选 `)` 或 `.`
static QUESTION_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3})\s*[).]?\s*(.*)").expect("题号正则无效"));

/// 选项开头：可选项目符号，A-E 字母，再跟分隔符
static OPTION_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\-•]*([A-Ea-e])[).\-:]\s*(.*)").expect("选项正则无效"));

/// 标题行的形态（分段阶段使用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderShape<'a> {
    Blank,
    /// 年份标题，携带四位年份
    Year(&'a str),
    /// 科目标题，携带匹配到的标题文本（尚未查别名表）
    Subject(&'a str),
    Other,
}

/// 正文行的形态（抽题阶段使用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineShape<'a> {
    Blank,
    /// 题号开头，携带题号之后的文本
    QuestionStart(&'a str),
    /// 选项开头，携带大写字母和选项文本
    OptionStart(char, &'a str),
    /// 普通续行
    Text(&'a str),
}

/// 规范化一行：去掉首尾空白，内部连续空白合并为一个空格
pub fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 按行拆分文本
///
/// 除 `\n`、`\r\n`、`\r` 外，也识别其它 Unicode 行分隔符
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}' => {
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// 识别标题行（参数须为已规范化的行）
///
/// 年份标题优先于科目标题
pub fn classify_header(line: &str) -> HeaderShape<'_> {
    if line.is_empty() {
        return HeaderShape::Blank;
    }
    if let Some(year) = YEAR_HEADER_RE.captures(line).and_then(|c| c.get(1)) {
        return HeaderShape::Year(year.as_str());
    }
    if let Some(subject) = SUBJECT_HEADER_RE.captures(line).and_then(|c| c.get(1)) {
        return HeaderShape::Subject(subject.as_str());
    }
    HeaderShape::Other
}

/// 识别正文行（参数须为已规范化的行）
///
/// 选项优先于题号判断。任何以数字开头的行都算题号开头，
/// 分段内的年份标题（`2022 NATIONAL ...`）也不例外
pub fn classify_line(line: &str) -> LineShape<'_> {
    if line.is_empty() {
        return LineShape::Blank;
    }
    if let Some(caps) = OPTION_START_RE.captures(line) {
        let letter = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .map(|c| c.to_ascii_uppercase());
        if let Some(letter) = letter {
            let text = caps.get(2).map_or("", |m| m.as_str().trim());
            return LineShape::OptionStart(letter, text);
        }
    }
    if let Some(caps) = QUESTION_START_RE.captures(line) {
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        return LineShape::QuestionStart(text);
    }
    LineShape::Text(line)
}
