//! Page fetching with ordered strategy fallback
//!
//! A [`Fetcher`] holds an ordered list of [`FetchStrategy`] implementations.
//! Each fetch tries them in order, exactly once each, with a user agent picked
//! at random from a fixed pool. The first strategy that answers HTTP 200 wins;
//! if every strategy fails the caller gets a [`FetchFailure`] carrying the
//! last error.

mod headers;
mod strategy;

pub use headers::HeaderPool;
pub use strategy::{BlockingStrategy, FetchStrategy, StrategyError, StreamingStrategy};

use crate::config::FetcherConfig;
use crate::FinderError;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// All fetch strategies were exhausted for a URL
#[derive(Debug, Clone, Error)]
#[error("all {} fetch strategies failed for {url}: {last_error}", .attempts.len())]
pub struct FetchFailure {
    /// The URL that could not be fetched
    pub url: String,

    /// Error context of the last strategy tried
    pub last_error: String,

    /// Every attempt made, in order
    pub attempts: Vec<FetchAttempt>,
}

/// One strategy's failed attempt at a URL
#[derive(Debug, Clone)]
pub struct FetchAttempt {
    pub strategy: &'static str,
    pub error: StrategyError,
}

impl fmt::Display for FetchAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.strategy, self.error)
    }
}

/// Fetches HTML using an ordered list of strategies
pub struct Fetcher {
    strategies: Vec<Box<dyn FetchStrategy>>,
    headers: HeaderPool,
}

impl Fetcher {
    /// Creates a fetcher from an explicit strategy list
    pub fn new(strategies: Vec<Box<dyn FetchStrategy>>, headers: HeaderPool) -> Self {
        Self {
            strategies,
            headers,
        }
    }

    /// Builds the default fetcher: a streaming async client, then a
    /// blocking client, both bound to the configured timeout
    pub fn from_config(config: &FetcherConfig) -> Result<Self, FinderError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let strategies: Vec<Box<dyn FetchStrategy>> = vec![
            Box::new(StreamingStrategy::new(timeout)?),
            Box::new(BlockingStrategy::new(timeout)),
        ];

        Ok(Self::new(
            strategies,
            HeaderPool::new(config.user_agents.clone()),
        ))
    }

    /// Names of the configured strategies, in attempt order
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Fetches the HTML of `url`, trying each strategy once in order
    pub async fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        let mut attempts = Vec::with_capacity(self.strategies.len());

        for strategy in &self.strategies {
            let user_agent = self.headers.pick();
            tracing::debug!("Fetching {} with {} strategy", url, strategy.name());

            match strategy.fetch(url, user_agent).await {
                Ok(html) => {
                    tracing::debug!(
                        "Fetched {} with {} strategy ({} bytes)",
                        url,
                        strategy.name(),
                        html.len()
                    );
                    return Ok(html);
                }
                Err(error) => {
                    tracing::warn!("{} strategy failed for {}: {}", strategy.name(), url, error);
                    attempts.push(FetchAttempt {
                        strategy: strategy.name(),
                        error,
                    });
                }
            }
        }

        let last_error = attempts
            .last()
            .map(|attempt| attempt.to_string())
            .unwrap_or_else(|| "no fetch strategies configured".to_string());

        Err(FetchFailure {
            url: url.to_string(),
            last_error,
            attempts,
        })
    }
}
