use anyhow::Result;
use exam_drill::utils::logging;
use exam_drill::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let mut app = App::new(config);
    app.run().await?;

    Ok(())
}
