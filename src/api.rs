//! API 客户端模块 - 向唯一端点发起带游标的状态查询
//!
//! 客户端内部不做重试，重试是轮询循环的职责。

use crate::error::PollError;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// 状态数据源
///
/// 轮询循环通过该 trait 访问远端，测试里用内存实现替换。
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// 拉取 `from_date` 之后的状态更新，返回解码后的响应体
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// 作业状态 API 客户端
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl ApiClient {
    /// 创建新的 API 客户端
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl StatusSource for ApiClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        debug!(from_date, endpoint = %self.endpoint, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(PollError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PollError::UnexpectedStatus(status.as_u16()));
        }

        // 先取原始文本再解码，区分传输失败和解码失败
        let body = response.text().await.map_err(PollError::Transport)?;
        serde_json::from_str(&body).map_err(PollError::Decode)
    }
}
