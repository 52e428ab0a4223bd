//! 原始文本加载
//!
//! 整篇读入内存，非法 UTF-8 字节直接丢弃

use super::line_shape::split_lines;
use crate::error::{BankError, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// 读取输入文件并按行拆分
pub async fn load_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).await.map_err(|source| BankError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, dropped) = decode_utf8_dropping_invalid(&bytes);
    if dropped > 0 {
        warn!("⚠️ 输入文件中有 {} 个非法 UTF-8 字节已被忽略", dropped);
    }

    let lines = split_lines(&text);
    debug!("读取 {} 字节，共 {} 行", bytes.len(), lines.len());
    Ok(lines)
}

/// 解码 UTF-8，跳过非法字节序列
///
/// 返回解码后的文本和被丢弃的字节数
pub fn decode_utf8_dropping_invalid(mut bytes: &[u8]) -> (String, usize) {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;

    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                text.push_str(valid);
                return (text, dropped);
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // valid_up_to 之前的字节已确认合法
                text.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let skip = e.error_len().unwrap_or(rest.len());
                dropped += skip;
                bytes = &rest[skip..];
            }
        }
    }
}
