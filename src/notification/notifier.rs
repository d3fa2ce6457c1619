//! 通知器 - 渠道之上的吞错包装
//!
//! 投递失败只记日志，永不中断轮询循环。

use crate::notification::channel::{NotificationChannel, SendResult};
use tracing::{debug, error, warn};

/// 通知器
pub struct Notifier {
    channel: Box<dyn NotificationChannel>,
    /// dry-run 模式（只打印不发送）
    dry_run: bool,
}

impl Notifier {
    /// 创建新的通知器
    pub fn new(channel: Box<dyn NotificationChannel>) -> Self {
        Self {
            channel,
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 发送文本通知
    ///
    /// 任何投递失败（网络、消息被拒、客户端错误）都被捕获并记日志，
    /// 返回值仅供观察，调用方不需要处理。
    pub async fn notify(&self, text: &str) -> SendResult {
        if self.dry_run {
            eprintln!("[DRY-RUN] Would send to {}: {}", self.channel.name(), text);
            return SendResult::Skipped("dry-run".to_string());
        }

        match self.channel.send(text).await {
            Ok(SendResult::Sent) => {
                debug!(channel = self.channel.name(), "Notification delivered");
                SendResult::Sent
            }
            Ok(SendResult::Failed(reason)) => {
                warn!(
                    channel = self.channel.name(),
                    reason = %reason,
                    "Notification rejected by channel"
                );
                SendResult::Failed(reason)
            }
            Ok(skipped) => skipped,
            Err(e) => {
                error!(
                    channel = self.channel.name(),
                    error = %e,
                    "Failed to send notification"
                );
                SendResult::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// 测试用的 mock 渠道
    struct MockChannel {
        send_count: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl NotificationChannel for MockChannel {
        fn name(&self) -> &str {
            "mock"
        }

        async fn send(&self, _text: &str) -> anyhow::Result<SendResult> {
            self.send_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(anyhow!("connection reset"))
            } else {
                Ok(SendResult::Sent)
            }
        }
    }

    #[tokio::test]
    async fn test_notify_success() {
        let count = Arc::new(AtomicUsize::new(0));
        let notifier = Notifier::new(Box::new(MockChannel {
            send_count: count.clone(),
            fail: false,
        }));

        assert_eq!(notifier.notify("привет").await, SendResult::Sent);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_notify_swallows_channel_errors() {
        let count = Arc::new(AtomicUsize::new(0));
        let notifier = Notifier::new(Box::new(MockChannel {
            send_count: count.clone(),
            fail: true,
        }));

        // 失败被吞掉，只体现在返回值里
        match notifier.notify("привет").await {
            SendResult::Failed(reason) => assert!(reason.contains("connection reset")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dry_run_skips_channel() {
        let count = Arc::new(AtomicUsize::new(0));
        let notifier = Notifier::new(Box::new(MockChannel {
            send_count: count.clone(),
            fail: false,
        }))
        .with_dry_run(true);

        assert_eq!(
            notifier.notify("привет").await,
            SendResult::Skipped("dry-run".to_string())
        );
        assert_eq!(count.load(Ordering::SeqCst), 0); // 不应该实际发送
    }
}
