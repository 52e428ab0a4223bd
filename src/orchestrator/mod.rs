//! 编排层（Orchestration Layer）
//!
//! 只做调度和统计：读文件、调用分段与抽题、合并去重、写出题库。
//! 具体的行识别和抽题规则都在 `services` 中
//!
//! ```text
//! bank_builder
//!     ↓
//! services (segmenter / extractor / bank_writer)
//!     ↓
//! models (Section / QuestionRecord / SubjectBank)
//! ```

pub mod bank_builder;

pub use bank_builder::{collect_banks, BankBuilder, BuildStats};
