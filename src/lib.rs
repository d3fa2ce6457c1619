//! Homework Status Monitor - 轮询作业评审状态并推送 Telegram 通知

pub mod api;
pub mod config;
pub mod error;
pub mod notification;
pub mod response;
pub mod status;
pub mod verdicts;
pub mod watcher;

pub use api::{ApiClient, StatusSource};
pub use config::{Config, DEFAULT_ENDPOINT};
pub use error::PollError;
pub use notification::{NotificationChannel, Notifier, SendResult, TelegramChannel, TelegramConfig};
pub use response::check_response;
pub use status::parse_status;
pub use verdicts::verdict;
pub use watcher::{PollOutcome, StatusWatcher};
