//! email-service - 密码重置邮件发送服务
//!
//! 单端点中继：接收 JSON 请求，渲染固定模板，委托 Resend 投递。
//! 无状态、无队列、无重试，失败直接上抛给调用方

mod error;
mod mail;
mod routing;
mod runtime;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use cosmo_adapter_email::ResendClient;
use cosmo_config::AppConfig;
use tower_http::trace::TraceLayer;
use tracing::info;

use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    runtime::init_runtime(&config);

    // 邮件客户端在启动时构建一次，跨请求只读复用
    let mailer = Arc::new(ResendClient::new(&config.email)?);
    let state = AppState::new(mailer, config.email.from_email.clone());

    // 构建路由（先创建带状态的路由，再合并无状态的路由）
    let app = mail::mail_routes()
        .with_state(state)
        .merge(routing::api_routes())
        .layer(TraceLayer::new_for_http());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!(%addr, "Email service running");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(runtime::shutdown_signal())
        .await?;

    Ok(())
}
