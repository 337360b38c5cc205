//! Process configuration read from the environment.
//!
//! Recognised variables:
//! - `ATELIER_UTC_OFFSET_MINUTES` - offset used for the firm's calendar day (default 0)
//! - `ATELIER_SEED_DEMO` - seed demo clients and meetings on start (default false)
//! - `ATELIER_RECENT_CLIENTS` - number of recent clients on the dashboard (default 5)

use chrono::{FixedOffset, Offset, Utc};

const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;
const DEFAULT_RECENT_CLIENTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub utc_offset_minutes: i32,
    pub seed_demo: bool,
    pub recent_clients: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            seed_demo: false,
            recent_clients: DEFAULT_RECENT_CLIENTS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Malformed values fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let utc_offset_minutes = match lookup("ATELIER_UTC_OFFSET_MINUTES") {
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(minutes) if minutes.abs() <= MAX_OFFSET_MINUTES => minutes,
                _ => {
                    tracing::warn!(value = %raw, "Invalid ATELIER_UTC_OFFSET_MINUTES, using UTC");
                    defaults.utc_offset_minutes
                }
            },
            None => defaults.utc_offset_minutes,
        };

        let seed_demo = lookup("ATELIER_SEED_DEMO")
            .map(|raw| matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.seed_demo);

        let recent_clients = match lookup("ATELIER_RECENT_CLIENTS") {
            Some(raw) => raw.trim().parse::<usize>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid ATELIER_RECENT_CLIENTS, using default");
                defaults.recent_clients
            }),
            None => defaults.recent_clients,
        };

        Self {
            utc_offset_minutes,
            seed_demo,
            recent_clients,
        }
    }

    /// The configured offset. Out-of-range values were rejected at load time.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or(Utc.fix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn reads_all_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ATELIER_UTC_OFFSET_MINUTES", "-300"),
            ("ATELIER_SEED_DEMO", "true"),
            ("ATELIER_RECENT_CLIENTS", "3"),
        ]));
        assert_eq!(config.utc_offset_minutes, -300);
        assert!(config.seed_demo);
        assert_eq!(config.recent_clients, 3);
        assert_eq!(config.utc_offset().local_minus_utc(), -300 * 60);
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let config = AppConfig::from_lookup(lookup(&[("ATELIER_UTC_OFFSET_MINUTES", "1440")]));
        assert_eq!(config.utc_offset_minutes, 0);
        let config = AppConfig::from_lookup(lookup(&[("ATELIER_UTC_OFFSET_MINUTES", "east")]));
        assert_eq!(config.utc_offset_minutes, 0);
    }

    #[test]
    fn seed_flag_accepts_common_truthy_values() {
        for value in ["1", "TRUE", "yes"] {
            assert!(AppConfig::from_lookup(lookup(&[("ATELIER_SEED_DEMO", value)])).seed_demo);
        }
        assert!(!AppConfig::from_lookup(lookup(&[("ATELIER_SEED_DEMO", "no")])).seed_demo);
    }

    #[test]
    fn malformed_recent_clients_uses_default() {
        let config = AppConfig::from_lookup(lookup(&[("ATELIER_RECENT_CLIENTS", "-1")]));
        assert_eq!(config.recent_clients, DEFAULT_RECENT_CLIENTS);
    }
}
