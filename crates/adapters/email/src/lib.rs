//! Email 适配器
//!
//! 通过 Resend HTTP API 发送邮件，提供：
//! - 邮件发送客户端
//! - 密码重置邮件模板渲染

mod client;
mod template;

pub use client::ResendClient;
pub use template::password_reset_html;

use cosmo_errors::AppResult;

/// 待发送的邮件
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// 发送回执
#[derive(Debug, Clone)]
pub struct SendReceipt {
    /// 服务商分配的消息 ID
    pub id: String,
}

/// 邮件发送接口
///
/// 客户端在启动时构建一次，跨请求共享，只读
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    /// 发送邮件，返回服务商分配的消息 ID
    ///
    /// 只尝试一次，不做重试；失败直接上抛给调用方
    async fn send(&self, message: &EmailMessage) -> AppResult<SendReceipt>;
}
