//! Telegram 渠道 - 通过 Bot API sendMessage 投递文本

use crate::notification::channel::{NotificationChannel, SendResult};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Telegram 渠道配置
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token
    pub bot_token: String,
    /// 目标 chat id
    pub chat_id: String,
    /// Bot API 基址（测试时指向本地 mock server）
    pub api_base: String,
    /// 超时时间（秒）
    pub timeout_secs: u64,
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_base: "https://api.telegram.org".to_string(),
            timeout_secs: 10,
        }
    }

    /// 覆盖 Bot API 基址
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// sendMessage 请求载荷
#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Bot API 响应
#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram 渠道
pub struct TelegramChannel {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramChannel {
    /// 创建 Telegram 渠道
    pub fn new(config: TelegramConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_base, self.config.bot_token
        )
    }
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<SendResult> {
        let payload = SendMessagePayload {
            chat_id: &self.config.chat_id,
            text,
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .await?;

        let reply: TelegramResponse = response.json().await?;

        if reply.ok {
            debug!(chat_id = %self.config.chat_id, "Message sent successfully");
            Ok(SendResult::Sent)
        } else {
            Ok(SendResult::Failed(
                reply.description.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}
