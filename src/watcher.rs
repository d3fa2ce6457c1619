//! 轮询循环模块 - 驱动 fetch → validate → parse → notify 周期
//!
//! 循环持有跨周期状态（游标、最近一次通知文案），应用去重和
//! 错误上报策略。除启动期配置缺失外没有任何错误能终止进程，
//! 除非显式开启 halt_on_error。

use crate::api::StatusSource;
use crate::error::PollError;
use crate::notification::Notifier;
use crate::response::check_response;
use crate::status::parse_status;
use anyhow::Result;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 单轮轮询的结果
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// 状态发生变化，已尝试发送通知
    Notified(String),
    /// 状态与上次通知相同，已去重
    Unchanged,
    /// 查询窗口内没有作业记录
    Empty,
}

/// 轮询器 - 持续轮询作业状态并推送变更通知
pub struct StatusWatcher {
    source: Box<dyn StatusSource>,
    notifier: Notifier,
    /// 轮询间隔（秒）
    interval_secs: u64,
    /// 单轮失败后是否终止（默认永不终止）
    halt_on_error: bool,
    /// 查询窗口下界，仅由服务端 current_date 推进
    cursor: i64,
    /// 最近一次已发送通知的文案（用于去重）
    last_notified: Option<String>,
}

impl StatusWatcher {
    /// 创建新的轮询器，游标初始化为当前时刻
    pub fn new(source: Box<dyn StatusSource>, notifier: Notifier, interval_secs: u64) -> Self {
        Self {
            source,
            notifier,
            interval_secs,
            halt_on_error: false,
            cursor: chrono::Utc::now().timestamp(),
            last_notified: None,
        }
    }

    /// 设置单轮失败后终止
    pub fn with_halt_on_error(mut self, halt_on_error: bool) -> Self {
        self.halt_on_error = halt_on_error;
        self
    }

    /// 覆盖游标初值
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    /// 当前游标
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// 最近一次通知文案
    pub fn last_notified(&self) -> Option<&str> {
        self.last_notified.as_deref()
    }

    /// 执行一轮轮询
    ///
    /// 按设计只检查列表的第一条记录，不遍历全部历史。
    pub async fn poll_once(&mut self) -> Result<PollOutcome, PollError> {
        let raw = self.source.fetch(self.cursor).await?;

        // 游标只在服务端明确给出 current_date 时推进，
        // 字段缺失时保持原值，避免丢失查询窗口
        if let Some(current_date) = raw.get("current_date").and_then(Value::as_i64) {
            self.cursor = current_date;
        }

        let homeworks = check_response(&raw)?;

        let Some(first) = homeworks.first() else {
            debug!(cursor = self.cursor, "No homework updates in window");
            return Ok(PollOutcome::Empty);
        };

        let text = parse_status(first)?;

        if self.last_notified.as_deref() == Some(text.as_str()) {
            debug!("Homework status unchanged, notification suppressed");
            return Ok(PollOutcome::Unchanged);
        }

        // 发送尝试本身就推进去重状态，投递失败也不重发同一文案
        self.notifier.notify(&text).await;
        self.last_notified = Some(text.clone());

        Ok(PollOutcome::Notified(text))
    }

    /// 执行一轮并应用错误上报策略
    ///
    /// 所有可恢复错误在这里被捕获：记日志、拼成告警文案经通知器
    /// 尽力发送，然后放行。返回值仅在 halt_on_error 开启时非空。
    pub async fn run_cycle(&mut self) -> Option<PollError> {
        match self.poll_once().await {
            Ok(PollOutcome::Notified(text)) => {
                info!(text = %text, "Status change notification dispatched");
                None
            }
            Ok(_) => None,
            Err(e) => {
                error!(error = %e, "Poll cycle failed");
                let alert = format!("Сбой в работе программы: {e}");
                self.notifier.notify(&alert).await;
                self.halt_on_error.then_some(e)
            }
        }
    }

    /// 开始轮询，直到进程被终止
    ///
    /// 每轮结束后固定等待 interval_secs 秒，无论成功还是失败，
    /// 这也是唯一的限速机制。
    pub async fn watch(&mut self) -> Result<()> {
        info!(interval = self.interval_secs, "Starting homework status watcher");

        loop {
            let halt = self.run_cycle().await;

            sleep(Duration::from_secs(self.interval_secs)).await;

            if let Some(e) = halt {
                return Err(e.into());
            }
        }
    }
}
