use crate::config::DEFAULT_USER_AGENTS;
use rand::seq::SliceRandom;

/// Fixed pool of browser User-Agent values, one picked per request
#[derive(Debug, Clone)]
pub struct HeaderPool {
    user_agents: Vec<String>,
}

impl HeaderPool {
    /// Creates a pool, falling back to the built-in agents when empty
    pub fn new(user_agents: Vec<String>) -> Self {
        if user_agents.is_empty() {
            return Self::default();
        }
        Self { user_agents }
    }

    /// Picks a user agent at random
    pub fn pick(&self) -> &str {
        self.user_agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(DEFAULT_USER_AGENTS[0])
    }

    pub fn len(&self) -> usize {
        self.user_agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.user_agents.is_empty()
    }
}

impl Default for HeaderPool {
    fn default() -> Self {
        Self {
            user_agents: DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect(),
        }
    }
}
