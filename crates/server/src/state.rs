use crate::config::ServerConfig;
use crate::error::ServerResult;
use analyzer::{ReportConfig, WeightTable};
use dashmap::DashMap;
use std::sync::Arc;

/// Shared application state
///
/// The analysis core is stateless, so the state carries only read-only
/// configuration (weights, presentation knobs) and the rate-limiter table.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Model weights used for every scoring call (read-only)
    pub weights: WeightTable,

    /// Presentation configuration for the result shaper
    pub report_cfg: ReportConfig,

    /// Rate limit tracking: API key -> (count, window_start)
    pub rate_limiter: Arc<DashMap<String, (u32, std::time::Instant)>>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let report_cfg = config.report_config();

        Ok(Self {
            config: Arc::new(config),
            weights: WeightTable::default(),
            report_cfg,
            rate_limiter: Arc::new(DashMap::new()),
        })
    }

    /// Check if API key is valid
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }

    /// Check rate limit for API key
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let now = std::time::Instant::now();
        let window = std::time::Duration::from_secs(60);
        let limit = self.config.rate_limit_per_minute;

        let mut entry = self.rate_limiter.entry(key.to_string()).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        // Reset if window has passed
        if now.duration_since(*window_start) > window {
            *count = 0;
            *window_start = now;
        }

        if *count >= limit {
            return false;
        }

        *count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_blocks_after_the_window_budget() {
        let state = ServerState::new(ServerConfig {
            rate_limit_per_minute: 2,
            ..Default::default()
        })
        .expect("state builds");

        assert!(state.check_rate_limit("key"));
        assert!(state.check_rate_limit("key"));
        assert!(!state.check_rate_limit("key"));
        // Independent keys get independent budgets.
        assert!(state.check_rate_limit("other"));
    }
}
