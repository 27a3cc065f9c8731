//! Garage - 车辆服务预约系统
//!
//! - Domain: 排期判定纯逻辑
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory

use garage::config::{load_config, print_config};
use garage::infrastructure::http::{AppState, HttpServer, ServerConfig};
use garage::infrastructure::memory::InMemoryGarageStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},garage={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Garage - 车辆服务预约系统");
    print_config(&config);

    // 创建内存存储并写入演示数据
    let store = InMemoryGarageStore::new().arc();
    store.seed_demo().await;

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(store);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Server running on {}", config.server.public_base_url());

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
