//! 题库构建器 - 编排层
//!
//! 分段 → 抽题 → 按科目合并去重 → 写文件

use crate::config::Config;
use crate::error::Result;
use crate::models::{SubjectBank, SubjectKey};
use crate::services::{extract_questions, load_lines, segment_sections, BankWriter};
use crate::utils::logging::{self, truncate_text};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// 构建统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildStats {
    /// 识别到的科目分段数
    pub sections: usize,
    /// 没有任何内容行的分段数
    pub empty_sections: usize,
    /// 去重前抽取到的题目数
    pub extracted: usize,
    /// 因题干重复被丢弃的题目数
    pub duplicates: usize,
    /// 每个科目最终写入的题目数，按输出顺序
    pub written: Vec<(SubjectKey, usize)>,
}

/// 将整篇文本构建成按科目划分的题库
///
/// 每个科目都会有一个题库，即使为空
pub fn collect_banks(lines: &[String], stats: &mut BuildStats) -> BTreeMap<SubjectKey, SubjectBank> {
    let mut banks: BTreeMap<SubjectKey, SubjectBank> = SubjectKey::ALL
        .iter()
        .map(|&subject| (subject, SubjectBank::new()))
        .collect();

    let sections = segment_sections(lines);
    info!("✓ 找到 {} 个科目分段", sections.len());

    for section in &sections {
        stats.sections += 1;
        if section.is_empty() {
            stats.empty_sections += 1;
        }

        let records = extract_questions(&lines[section.range()], section.year.as_deref());
        debug!(
            "[{} {}] 第 {}-{} 行，抽取 {} 道题",
            section.year.as_deref().unwrap_or("未知年份"),
            section.subject,
            section.start + 1,
            section.end,
            records.len()
        );
        stats.extracted += records.len();

        let bank = banks.entry(section.subject).or_default();
        for record in records {
            let preview = truncate_text(&record.question, 60);
            if !bank.push(record) {
                debug!("[{}] 重复题目已丢弃: {}", section.subject, preview);
            }
        }
    }

    stats.duplicates = banks.values().map(SubjectBank::duplicates).sum();
    banks
}

/// 题库构建器
pub struct BankBuilder {
    config: Config,
}

impl BankBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行完整流程
    ///
    /// 每写完一个文件在 stdout 打印一行题目数量
    pub async fn run(&self) -> Result<BuildStats> {
        logging::log_startup(&self.config);

        let lines = load_lines(&self.config.input_path).await?;
        info!("✓ 读取 {} 行", lines.len());

        let mut stats = BuildStats::default();
        let banks = collect_banks(&lines, &mut stats);

        let writer = BankWriter::create(&self.config.output_dir).await?;
        for subject in SubjectKey::ALL {
            let questions = banks.get(&subject).map(SubjectBank::questions).unwrap_or_default();
            let path = writer.write(subject, questions).await?;
            println!("Wrote {} questions to {}", questions.len(), path.display());
            stats.written.push((subject, questions.len()));
        }

        logging::print_final_stats(&stats);
        Ok(stats)
    }
}
