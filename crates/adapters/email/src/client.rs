//! Resend 邮件客户端实现

use std::time::Duration;

use cosmo_config::EmailConfig;
use cosmo_errors::{AppError, AppResult};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{EmailMessage, EmailSender, SendReceipt};

/// Resend 发送请求体
///
/// https://resend.com/docs/api-reference/emails/send-email
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Resend 成功响应体
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Resend 邮件客户端
pub struct ResendClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Secret<String>,
}

impl ResendClient {
    /// 创建新的邮件客户端
    pub fn new(config: &EmailConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, message: &EmailMessage) -> AppResult<SendReceipt> {
        debug!(to = %message.to, subject = %message.subject, "Sending email via Resend");

        let body = SendEmailRequest {
            from: &message.from,
            to: [&message.to],
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service(e.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|e| AppError::external_service(e.to_string()))?;

        let receipt = parse_send_response(status, &payload)?;
        info!(to = %message.to, message_id = %receipt.id, "Email sent successfully");
        Ok(receipt)
    }
}

/// 解析 Resend 响应
///
/// 2xx 返回消息 ID；其余状态码的 JSON 错误负载原样透传。
/// 非 JSON 的错误体视为未预期失败
fn parse_send_response(status: StatusCode, body: &str) -> AppResult<SendReceipt> {
    if status.is_success() {
        let parsed: SendEmailResponse = serde_json::from_str(body)
            .map_err(|e| AppError::internal(format!("Malformed provider response: {}", e)))?;
        return Ok(SendReceipt { id: parsed.id });
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(payload) => Err(AppError::provider(payload)),
        Err(_) => Err(AppError::external_service(format!(
            "Provider returned {}: {}",
            status, body
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success_response() {
        let receipt = parse_send_response(StatusCode::OK, r#"{"id":"abc123"}"#).unwrap();
        assert_eq!(receipt.id, "abc123");
    }

    #[test]
    fn test_parse_provider_error_passthrough() {
        let body = r#"{"statusCode":403,"message":"invalid domain","name":"validation_error"}"#;
        let err = parse_send_response(StatusCode::FORBIDDEN, body).unwrap_err();
        match err {
            AppError::Provider(payload) => assert_eq!(
                payload,
                json!({"statusCode": 403, "message": "invalid domain", "name": "validation_error"})
            ),
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_malformed_success_body() {
        let err = parse_send_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_parse_non_json_error_body() {
        let err =
            parse_send_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[test]
    fn test_request_body_shape() {
        let message = EmailMessage {
            from: "noreply@cosmoshop.io".to_string(),
            to: "user@example.com".to_string(),
            subject: "Subject".to_string(),
            html: "<p>Body</p>".to_string(),
        };
        let body = SendEmailRequest {
            from: &message.from,
            to: [&message.to],
            subject: &message.subject,
            html: &message.html,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "from": "noreply@cosmoshop.io",
                "to": ["user@example.com"],
                "subject": "Subject",
                "html": "<p>Body</p>"
            })
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = EmailConfig {
            base_url: "https://api.resend.com/".to_string(),
            ..EmailConfig::default()
        };
        let client = ResendClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://api.resend.com");
    }
}
