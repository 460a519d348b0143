use std::time::Duration;

/// Runtime configuration sourced from the environment, with defaults matching
/// the observed display timings.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long a stock banner stays visible.
    pub notification_ttl: Duration,
    /// How long the confirmation screen shows before the session resets.
    pub confirmation_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            notification_ttl: Duration::from_millis(env_ms("NOTIFICATION_TTL_MS", 3000)),
            confirmation_delay: Duration::from_millis(env_ms("CONFIRMATION_DELAY_MS", 3000)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notification_ttl: Duration::from_millis(3000),
            confirmation_delay: Duration::from_millis(3000),
        }
    }
}

fn env_ms(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
