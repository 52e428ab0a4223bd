use anyhow::{Context, Result};
use exam_bank_builder::utils::logging;
use exam_bank_builder::{BankBuilder, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 解析参数
    let Some(config) = Config::from_args(std::env::args_os()) else {
        println!("{}", Config::USAGE);
        std::process::exit(1);
    };

    // 初始化日志
    logging::init();

    // 构建题库
    let input = config.input_path.display().to_string();
    BankBuilder::new(config)
        .run()
        .await
        .with_context(|| format!("题库构建失败: {}", input))?;

    Ok(())
}
