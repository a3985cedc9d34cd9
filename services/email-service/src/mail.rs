//! 密码重置邮件接口

use axum::extract::State;
use axum::{Json, Router, routing::post};
use cosmo_adapter_email::{EmailMessage, password_reset_html};
use cosmo_errors::AppError;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ApiError;
use crate::state::AppState;

/// 固定的本地化邮件主题
const RESET_SUBJECT: &str = "Сброс пароля - Cosmetics Shop";

/// 必填字段缺失时的固定错误信息
const MISSING_FIELDS: &str = "Missing required fields: to, resetLink, login";

pub fn mail_routes() -> Router<AppState> {
    Router::new().route("/send-reset-email", post(send_reset_email))
}

/// 发送请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetEmailRequest {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub reset_link: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
}

impl ResetEmailRequest {
    /// 校验必填字段
    ///
    /// 缺失、null 和空串都算缺失，与调用方原有的宽松约定一致
    fn require_fields(&self) -> Result<(&str, &str, &str), AppError> {
        let to = self.to.as_deref().filter(|s| !s.is_empty());
        let reset_link = self.reset_link.as_deref().filter(|s| !s.is_empty());
        let login = self.login.as_deref().filter(|s| !s.is_empty());

        match (to, reset_link, login) {
            (Some(to), Some(reset_link), Some(login)) => Ok((to, reset_link, login)),
            _ => Err(AppError::validation(MISSING_FIELDS)),
        }
    }
}

/// 发送成功响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResetResponse {
    pub success: bool,
    pub message_id: String,
}

/// POST /send-reset-email
///
/// 校验 -> 渲染 -> 投递 -> 映射结果，单次尝试，失败不重试
async fn send_reset_email(
    State(state): State<AppState>,
    Json(req): Json<ResetEmailRequest>,
) -> Result<Json<SendResetResponse>, ApiError> {
    let (to, reset_link, login) = req.require_fields()?;

    info!(to = %to, "Sending password reset email");

    let message = EmailMessage {
        from: state.from_email.clone(),
        to: to.to_string(),
        subject: RESET_SUBJECT.to_string(),
        html: password_reset_html(login, reset_link),
    };

    match state.mailer.send(&message).await {
        Ok(receipt) => Ok(Json(SendResetResponse {
            success: true,
            message_id: receipt.id,
        })),
        Err(err) => {
            error!(to = %to, error = %err, "Failed to send password reset email");
            Err(err.into())
        }
    }
}
