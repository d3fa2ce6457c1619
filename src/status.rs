//! 状态解析模块 - 从单条作业记录提取状态并渲染通知文案

use crate::error::PollError;
use crate::verdicts::verdict;
use serde_json::Value;
use tracing::error;

/// 解析单条作业记录，渲染通知文案
///
/// 纯函数，无 I/O。状态先于名称校验：未知状态与缺失名称
/// 都是硬错误，不会被静默接受。
pub fn parse_status(record: &Value) -> Result<String, PollError> {
    let status = record
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let Some(verdict) = verdict(status) else {
        error!(status = %status, "Unknown homework status");
        return Err(PollError::UnknownStatus(status.to_string()));
    };

    let Some(name) = record.get("homework_name").and_then(Value::as_str) else {
        error!("Homework record has no name");
        return Err(PollError::MissingName);
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}
