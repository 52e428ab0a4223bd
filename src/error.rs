use crate::models::SubjectKey;
use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
///
/// 分段与抽题本身不会失败，错误只来自文件读写
#[derive(Debug, Error)]
pub enum BankError {
    /// 读取输入文件失败
    #[error("读取输入文件失败 ({}): {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 创建输出目录失败
    #[error("创建输出目录失败 ({}): {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入题库文件失败
    #[error("写入题库文件失败 ({}): {source}", .path.display())]
    WriteBank {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 题库序列化失败
    #[error("题库序列化失败 ({subject}): {source}")]
    Serialize {
        subject: SubjectKey,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, BankError>;
