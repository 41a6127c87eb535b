use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_demo_data: bool,
    pub cancelled_blocks_slots: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            seed_demo_data: true,
            cancelled_blocks_slots: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| {
                warn!("HOST not set, using default {}", defaults.host);
                defaults.host.clone()
            }),
            port: parse_var("PORT", defaults.port),
            seed_demo_data: parse_var("SEED_DEMO_DATA", defaults.seed_demo_data),
            cancelled_blocks_slots: parse_var("CANCELLED_BLOCKS_SLOTS", defaults.cancelled_blocks_slots),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", key, default);
            default
        }
    }
}
