//! # Exam Bank Builder
//!
//! 把多年份、多科目的试卷纯文本（OCR 或复制粘贴得到）整理成按科目划分的 JSON 题库
//!
//! ## 架构设计
//!
//! ### ① 数据模型（Models）
//! - `models/` - 科目、分段、题目记录、科目题库
//! - `SubjectKey` - 固定的五个科目与标题别名表
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `line_shape` - 行规范化与行形态识别
//! - `segmenter` - 按年份/科目标题切分分段
//! - `extractor` - 在单个分段内抽取题干和选项
//! - `source_loader` / `bank_writer` - 读输入、写题库
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/bank_builder` - 串起整个流程并输出统计
//!
//! ### ④ 入口
//! - `cli` / `config` - 命令行参数（clap）与运行配置
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{BankError, Result};
pub use models::{QuestionRecord, Section, SubjectBank, SubjectKey};
pub use orchestrator::{BankBuilder, BuildStats};
pub use services::{extract_questions, segment_sections};
