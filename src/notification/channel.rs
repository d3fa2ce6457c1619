//! 通知渠道 trait 定义

use anyhow::Result;
use async_trait::async_trait;

/// 发送结果
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    /// 发送成功
    Sent,
    /// 跳过（dry-run 等）
    Skipped(String),
    /// 发送失败
    Failed(String),
}

/// 通知渠道 trait
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 发送文本消息
    ///
    /// API 层面的拒绝返回 `Ok(SendResult::Failed)`，
    /// 传输层失败返回 `Err`，两者都由 `Notifier` 吞掉。
    async fn send(&self, text: &str) -> Result<SendResult>;
}
