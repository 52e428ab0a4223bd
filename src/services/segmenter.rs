//! 科目分段 - 业务能力层
//!
//! 扫描整篇文本，按年份标题和科目标题切出 (年份, 科目, 行区间)

use super::line_shape::{classify_header, normalize_line, HeaderShape};
use crate::models::{Section, SubjectKey};
use tracing::{debug, trace};

/// 尚未闭合的科目分段
struct OpenSection {
    subject: SubjectKey,
    start: usize,
}

/// 将原始行切分为科目分段
///
/// - 年份标题会一直生效，直到出现下一个年份标题
/// - 别名表中找不到的科目标题视为普通行，既不开启也不闭合分段
/// - 分段闭合时记录当时生效的年份
/// - 空行不参与标题识别，但计入行号
pub fn segment_sections(lines: &[String]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current_year: Option<String> = None;
    let mut open: Option<OpenSection> = None;

    for (index, raw) in lines.iter().enumerate() {
        let line = normalize_line(raw);

        match classify_header(&line) {
            HeaderShape::Year(year) => {
                debug!("第 {} 行: 年份 {}", index + 1, year);
                current_year = Some(year.to_string());
            }
            HeaderShape::Subject(title) => {
                let Some(subject) = SubjectKey::from_header(title) else {
                    trace!("第 {} 行: 未登记的科目标题 {:?}，忽略", index + 1, title);
                    continue;
                };
                if let Some(prev) = open.take() {
                    sections.push(Section {
                        year: current_year.clone(),
                        subject: prev.subject,
                        start: prev.start,
                        end: index,
                    });
                }
                debug!("第 {} 行: 科目 {}", index + 1, subject);
                open = Some(OpenSection {
                    subject,
                    start: index + 1,
                });
            }
            HeaderShape::Blank | HeaderShape::Other => {}
        }
    }

    if let Some(prev) = open {
        sections.push(Section {
            year: current_year,
            subject: prev.subject,
            start: prev.start,
            end: lines.len(),
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_single_section() {
        let doc = lines("2022 NATIONAL QUALIFYING EXAM\nBIOLOGY\n1) Q?\nA) x");
        let sections = segment_sections(&doc);
        assert_eq!(
            sections,
            vec![Section {
                year: Some("2022".to_string()),
                subject: SubjectKey::Biology,
                start: 2,
                end: 4,
            }]
        );
    }

    #[test]
    fn test_adjacent_headers_yield_empty_section() {
        let doc = lines("BIOLOGY\nCHEMISTRY\n1) Q?");
        let sections = segment_sections(&doc);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].is_empty());
        assert_eq!(sections[0].range(), 1..1);
        assert_eq!(sections[1].subject, SubjectKey::Chemistry);
        assert_eq!(sections[1].range(), 2..3);
        // 未出现年份标题
        assert_eq!(sections[0].year, None);
    }

    #[test]
    fn test_unknown_header_is_transparent() {
        let doc = lines("PHYSICS\n1) Q1?\nMATHEMATICS\n2) Q2?\nGENERAL KNOWLEDGE AND LANGUAGE\n3) Q3?");
        let sections = segment_sections(&doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].subject, SubjectKey::Physics);
        assert_eq!(sections[0].range(), 1..6);
    }

    #[test]
    fn test_blank_lines_count_toward_indices() {
        let doc = lines("\n   \n  biology  \n\n1) Q?\n\n");
        let sections = segment_sections(&doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].range(), 3..doc.len());
    }

    #[test]
    fn test_year_taken_when_section_closes() {
        let doc = lines(
            "2021 NATIONAL QUALIFYING EXAM\nFRENCH\n1) Q?\n2022 NATIONAL QUALIFYING EXAM\nPHYSICS\n1) Q?",
        );
        let sections = segment_sections(&doc);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].subject, SubjectKey::French);
        assert_eq!(sections[0].year.as_deref(), Some("2022"));
        assert_eq!(sections[1].year.as_deref(), Some("2022"));
    }

    #[test]
    fn test_no_subject_headers() {
        let doc = lines("2022 NATIONAL QUALIFYING EXAM\n1) Q?\nA) x");
        assert!(segment_sections(&doc).is_empty());
        assert!(segment_sections(&[]).is_empty());
    }
}
