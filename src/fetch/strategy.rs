//! Concrete retrieval strategies
//!
//! - [`StreamingStrategy`]: async reqwest client, body read as a byte stream
//! - [`BlockingStrategy`]: blocking reqwest client on tokio's blocking pool
//!
//! Both only accept HTTP 200; every other status is a failure so the
//! fetcher moves on to the next strategy.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Why a single strategy failed to produce HTML
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read body: {0}")]
    Body(String),
}

impl StrategyError {
    fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            Self::Body(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// One way of retrieving a URL's HTML
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    /// Short name used in logs and failure context
    fn name(&self) -> &'static str;

    /// Fetches `url`, sending `user_agent`; Ok only on HTTP 200
    async fn fetch(&self, url: &str, user_agent: &str) -> Result<String, StrategyError>;
}

/// Async client reading the body as a stream of chunks
pub struct StreamingStrategy {
    client: Client,
    timeout: Duration,
}

impl StreamingStrategy {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl FetchStrategy for StreamingStrategy {
    fn name(&self) -> &'static str {
        "streaming"
    }

    async fn fetch(&self, url: &str, user_agent: &str) -> Result<String, StrategyError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(StrategyError::from_reqwest)?;

        if response.status() != StatusCode::OK {
            return Err(StrategyError::Status(response.status().as_u16()));
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(StrategyError::from_reqwest)?;
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Blocking client run on the blocking thread pool
///
/// The client is built inside the blocking task: a blocking reqwest client
/// must never be created or dropped on an async worker thread.
pub struct BlockingStrategy {
    timeout: Duration,
}

impl BlockingStrategy {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn fetch_blocking(url: &str, user_agent: &str, timeout: Duration) -> Result<String, StrategyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(StrategyError::from_reqwest)?;

        let response = client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .map_err(StrategyError::from_reqwest)?;

        if response.status() != StatusCode::OK {
            return Err(StrategyError::Status(response.status().as_u16()));
        }

        response.text().map_err(StrategyError::from_reqwest)
    }
}

#[async_trait]
impl FetchStrategy for BlockingStrategy {
    fn name(&self) -> &'static str {
        "blocking"
    }

    async fn fetch(&self, url: &str, user_agent: &str) -> Result<String, StrategyError> {
        let url = url.to_string();
        let user_agent = user_agent.to_string();
        let timeout = self.timeout;

        tokio::task::spawn_blocking(move || Self::fetch_blocking(&url, &user_agent, timeout))
            .await
            .map_err(|e| StrategyError::Request(format!("blocking task failed: {}", e)))?
    }
}
