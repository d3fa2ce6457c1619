//! 通知抽象层 - 投递失败永不向外传播
//!
//! # 设计目标
//! 1. 统一接口：渠道实现 `NotificationChannel` trait
//! 2. 投递隔离：`Notifier` 吞掉所有投递失败，循环的正确性不依赖消息送达
//! 3. 可测试：测试里用 mock 渠道替换 Telegram

pub mod channel;
pub mod notifier;
pub mod telegram;

pub use channel::{NotificationChannel, SendResult};
pub use notifier::Notifier;
pub use telegram::{TelegramChannel, TelegramConfig};
