use clap::Parser;
use std::path::PathBuf;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(
    name = "build_banks",
    about = "把试卷纯文本整理成按科目划分的 JSON 题库"
)]
pub struct Cli {
    /// 输入文本文件
    pub input_path: PathBuf,
    /// 题库输出目录
    pub output_dir: PathBuf,
    /// 多余的参数，忽略
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<PathBuf>,
}
