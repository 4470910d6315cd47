//! Runtime configuration, read from the environment.

pub const LOG_VAR: &str = "INQUISITOR_LOG";
pub const EXPECTED_YEAR_VAR: &str = "INQUISITOR_EXPECTED_YEAR";
pub const SKIP_SELF_CHECK_VAR: &str = "INQUISITOR_SKIP_SELF_CHECK";
pub const CURRENCY_VAR: &str = "INQUISITOR_CURRENCY";

const DEFAULT_LOG_FILTER: &str = "warn";
const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Year the startup self-check expects; `None` only reports the year.
    pub expected_year: Option<i32>,
    pub skip_self_check: bool,
    /// Symbol prefixed to costs in the inventory table.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            expected_year: None,
            skip_self_check: false,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Log filter alone, for initialising tracing before the rest is read.
    pub fn log_filter_from_env() -> String {
        std::env::var(LOG_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
    }

    /// Build a config from an arbitrary key lookup. Malformed values fall
    /// back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup(EXPECTED_YEAR_VAR) {
            match raw.trim().parse::<i32>() {
                Ok(year) => config.expected_year = Some(year),
                Err(e) => {
                    tracing::warn!(var = EXPECTED_YEAR_VAR, value = %raw, error = %e, "ignoring malformed expected year");
                }
            }
        }

        if let Some(raw) = lookup(SKIP_SELF_CHECK_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.skip_self_check = flag,
                None => {
                    tracing::warn!(var = SKIP_SELF_CHECK_VAR, value = %raw, "ignoring malformed flag");
                }
            }
        }

        if let Some(currency) = lookup(CURRENCY_VAR) {
            config.currency = currency;
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.currency, "$");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_VAR, "debug"),
            (EXPECTED_YEAR_VAR, " 2023 "),
            (SKIP_SELF_CHECK_VAR, "TRUE"),
            (CURRENCY_VAR, "€"),
        ]));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.expected_year, Some(2023));
        assert!(config.skip_self_check);
        assert_eq!(config.currency, "€");
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_VAR, "   "),
            (EXPECTED_YEAR_VAR, "next year"),
            (SKIP_SELF_CHECK_VAR, "maybe"),
        ]));
        assert_eq!(config, Config::default());
    }
}
