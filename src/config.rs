//! Constants and environment settings.
//!
//! A `.env` file in the working directory is loaded by `main` via `dotenv`
//! before [`Settings::from_env`] runs.

use std::env;
use std::path::PathBuf;

/// Value written for a subnet policy flag that was not given.
pub const DEFAULT_POLICY_FLAG: &str = "Enabled";

/// log4rs config file looked up in the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Largest `az` stdout accepted, a VNet with a few hundred subnets fits easily.
pub const MAX_AZ_OUTPUT_BYTES: usize = 5_000_000;

/// Env var overriding [`DEFAULT_LOG_CONFIG`].
pub const ENV_LOG_CONFIG: &str = "AZ_SUBNET_LOG_CONFIG";

/// Env var holding the subscription passed to `az --subscription`.
pub const ENV_SUBSCRIPTION: &str = "AZ_SUBNET_SUBSCRIPTION";

/// Runtime settings taken from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_config: PathBuf,
    pub subscription: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Settings {
            log_config: non_empty(ENV_LOG_CONFIG)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG)),
            subscription: non_empty(ENV_SUBSCRIPTION),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(settings.subscription, None);
    }

    #[test]
    fn test_settings_from_vars() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_LOG_CONFIG, "/etc/subnet/log4rs.yml"),
            (ENV_SUBSCRIPTION, "  "),
        ]);
        let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(settings.log_config, PathBuf::from("/etc/subnet/log4rs.yml"));
        // blank counts as unset
        assert_eq!(settings.subscription, None);
    }
}
