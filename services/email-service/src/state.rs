//! 共享应用状态

use std::sync::Arc;

use cosmo_adapter_email::EmailSender;

/// 跨请求共享的只读状态
#[derive(Clone)]
pub struct AppState {
    /// 邮件发送能力
    pub mailer: Arc<dyn EmailSender>,
    /// 发件人地址，每封外发邮件都使用它
    pub from_email: String,
}

impl AppState {
    pub fn new(mailer: Arc<dyn EmailSender>, from_email: String) -> Self {
        Self { mailer, from_email }
    }
}
