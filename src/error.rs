//! 轮询错误分类
//!
//! 除启动期配置缺失外，所有错误都是可恢复的：在循环边界被捕获、
//! 转换成告警消息后下一轮继续轮询。

use thiserror::Error;

/// 单轮轮询中可能出现的错误
///
/// Display 文案即运营者可见文案，会被拼进发往聊天的告警消息
/// （`Сбой в работе программы: <error>`）。
#[derive(Debug, Error)]
pub enum PollError {
    /// 传输层失败（DNS、连接、超时）
    #[error("эндпоинт недоступен: {0}")]
    Transport(#[source] reqwest::Error),

    /// API 返回非 200 状态码
    #[error("код ответа от сервера API не 200 (получен {0})")]
    UnexpectedStatus(u16),

    /// 响应体不是合法 JSON
    #[error("не удалось декодировать ответ API: {0}")]
    Decode(#[source] serde_json::Error),

    /// 响应结构不符合契约（外层不是字典 / homeworks 不是列表）
    #[error("{0}")]
    Shape(&'static str),

    /// 响应缺少必需的键
    #[error("в ответе API нет ключа {0}")]
    MissingKey(&'static str),

    /// 作业状态不在已知映射中
    #[error("неизвестный статус работы: {0}")]
    UnknownStatus(String),

    /// 作业记录缺少名称
    #[error("в ответе API нет имени работы")]
    MissingName,
}
