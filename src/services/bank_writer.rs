//! 题库写入服务 - 业务能力层
//!
//! 只负责把一个科目的题目写成 `<科目>-full.json`，不关心题目从哪来

use crate::error::{BankError, Result};
use crate::models::{QuestionRecord, SubjectKey};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 题库写入服务
pub struct BankWriter {
    output_dir: PathBuf,
}

impl BankWriter {
    /// 创建写入服务，输出目录不存在时自动创建
    pub async fn create(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)
            .await
            .map_err(|source| BankError::CreateOutputDir {
                path: output_dir.clone(),
                source,
            })?;
        Ok(Self { output_dir })
    }

    /// 写入单个科目的题库
    ///
    /// JSON 缩进两个空格，非 ASCII 字符原样保留
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn write(&self, subject: SubjectKey, questions: &[QuestionRecord]) -> Result<PathBuf> {
        let path = self.output_dir.join(subject.file_name());

        let json = serde_json::to_string_pretty(questions)
            .map_err(|source| BankError::Serialize { subject, source })?;

        debug!("写入 {}: {} 道题, {} 字节", path.display(), questions.len(), json.len());

        fs::write(&path, json)
            .await
            .map_err(|source| BankError::WriteBank {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
