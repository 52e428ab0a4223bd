//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::orchestrator::BuildStats;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 日志写到 stderr，stdout 只留给题目统计行；可用 `RUST_LOG` 调整级别
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始构建题库");
    info!("📄 输入文件: {}", config.input_path.display());
    info!("📁 输出目录: {}", config.output_dir.display());
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &BuildStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 题库构建完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "📦 科目分段: {} 个（空分段 {} 个）",
        stats.sections, stats.empty_sections
    );
    info!("✅ 抽取题目: {}", stats.extracted);
    info!("♻️ 重复丢弃: {}", stats.duplicates);
    for (subject, count) in &stats.written {
        info!("  {}: {}", subject, count);
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
