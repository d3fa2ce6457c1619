//! 配置模块 - 启动时一次性构建的不可变配置
//!
//! 三个必需的密钥缺一不可，缺失任何一个即视为致命启动错误。

use anyhow::{Context, Result};
use std::env;

/// 默认的作业状态查询端点
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// 进程级配置
///
/// 在 `main` 中构建一次，之后按引用传给需要的组件。
#[derive(Clone)]
pub struct Config {
    /// Practicum API token（`Authorization: OAuth <token>`）
    pub practicum_token: String,
    /// Telegram Bot token
    pub telegram_token: String,
    /// 通知目标 chat id
    pub telegram_chat_id: String,
    /// 状态查询端点（可通过 PRACTICUM_ENDPOINT 覆盖）
    pub endpoint: String,
}

impl Config {
    /// 从环境变量构建配置
    pub fn from_env() -> Result<Self> {
        let practicum_token = require_secret("PRACTICUM_TOKEN", env::var("PRACTICUM_TOKEN").ok())?;
        let telegram_token = require_secret("TELEGRAM_TOKEN", env::var("TELEGRAM_TOKEN").ok())?;
        let telegram_chat_id =
            require_secret("TELEGRAM_CHAT_ID", env::var("TELEGRAM_CHAT_ID").ok())?;

        let endpoint = env::var("PRACTICUM_ENDPOINT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Config {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
        })
    }
}

/// Validate a required secret from an optional env value.
///
/// Empty or whitespace-only values count as missing so that a blank
/// variable cannot silently pass the startup check.
fn require_secret(name: &str, value: Option<String>) -> Result<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .with_context(|| format!("{name} environment variable is required"))
}
