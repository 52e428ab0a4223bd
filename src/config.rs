use crate::cli::Cli;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// 程序配置
///
/// 只来自命令行的两个位置参数，没有配置文件
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 输入文本文件
    pub input_path: PathBuf,
    /// 题库输出目录
    pub output_dir: PathBuf,
}

impl Config {
    pub const USAGE: &'static str = "Usage: build_banks <input_txt> <output_dir>";

    /// 从完整的进程参数（含程序名）构建配置
    ///
    /// 参数不足或无法解析返回 `None`，多余的位置参数会被忽略
    pub fn from_args<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).ok().map(Self::from)
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input_path: cli.input_path,
            output_dir: cli.output_dir,
        }
    }
}
