//! Host resolution

use crate::{ApiError, Result};
use std::env;
use url::Url;

/// Production money host
pub const PRODUCTION_MONEY_HOST: &str = "https://money.yandex.ru";
/// Sandbox money host
pub const SANDBOX_MONEY_HOST: &str = "https://demomoney.yandex.ru";

/// Environment variable overriding the money host
pub const MONEY_HOST_ENV: &str = "YANDEX_MONEY_HOST";
/// Environment variable selecting the sandbox (`1` or `true`)
pub const SANDBOX_ENV: &str = "YANDEX_MONEY_SANDBOX";

/// Resolves logical API names to base URLs
pub trait HostsProvider: Send + Sync {
    /// Base URL of the money site, without a trailing slash
    fn money(&self) -> &str;

    /// Base URL of the wallet API
    fn money_api(&self) -> String {
        format!("{}/api", self.money())
    }

    /// Base URL of web pages (OAuth authorization and the like)
    fn web(&self) -> String {
        self.money().to_string()
    }
}

/// Host configuration used unless the caller supplies its own provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultHostsProvider {
    /// Base URL of the money site
    money_host: String,
    /// Whether the sandbox is targeted
    sandbox: bool,
}

impl DefaultHostsProvider {
    /// Create a provider for production or the sandbox
    pub fn new(sandbox: bool) -> Self {
        let money_host = if sandbox {
            SANDBOX_MONEY_HOST
        } else {
            PRODUCTION_MONEY_HOST
        };
        Self {
            money_host: money_host.to_string(),
            sandbox,
        }
    }

    /// Provider for the production API
    pub fn production() -> Self {
        Self::new(false)
    }

    /// Provider for the sandbox API
    pub fn sandbox() -> Self {
        Self::new(true)
    }

    /// Create a provider from `YANDEX_MONEY_SANDBOX` and `YANDEX_MONEY_HOST`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create a provider from configuration values resolved by `lookup`
    ///
    /// `lookup` receives [`SANDBOX_ENV`] and [`MONEY_HOST_ENV`] and returns the
    /// configured value, if any.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sandbox = lookup(SANDBOX_ENV)
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        let mut provider = Self::new(sandbox);
        if let Some(host) = lookup(MONEY_HOST_ENV) {
            provider = provider.with_money_host(host);
        }

        provider.validate()?;
        tracing::debug!(
            "Resolved money host {} (sandbox: {})",
            provider.money_host,
            provider.sandbox
        );
        Ok(provider)
    }

    /// Override the money host
    pub fn with_money_host(mut self, host: impl Into<String>) -> Self {
        self.money_host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether the sandbox is targeted
    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Validate the host configuration
    pub fn validate(&self) -> Result<()> {
        if self.money_host.is_empty() {
            return Err(ApiError::config("Money host cannot be empty"));
        }

        let url = Url::parse(&self.money_host)
            .map_err(|e| ApiError::config(format!("Invalid money host: {}", e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::config(
                "Money host must start with http:// or https://",
            ));
        }

        Ok(())
    }
}

impl Default for DefaultHostsProvider {
    fn default() -> Self {
        Self::production()
    }
}

impl HostsProvider for DefaultHostsProvider {
    fn money(&self) -> &str {
        &self.money_host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_hosts() {
        let hosts = DefaultHostsProvider::default();
        assert!(!hosts.is_sandbox());
        assert_eq!(hosts.money(), "https://money.yandex.ru");
        assert_eq!(hosts.money_api(), "https://money.yandex.ru/api");
        assert_eq!(hosts.web(), "https://money.yandex.ru");
    }

    #[test]
    fn test_sandbox_hosts() {
        let hosts = DefaultHostsProvider::sandbox();
        assert!(hosts.is_sandbox());
        assert_eq!(hosts.money_api(), "https://demomoney.yandex.ru/api");
    }

    #[test]
    fn test_custom_host() {
        let hosts = DefaultHostsProvider::production().with_money_host("http://localhost:8080/");
        assert_eq!(hosts.money_api(), "http://localhost:8080/api");
        assert!(hosts.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let empty = DefaultHostsProvider::production().with_money_host("");
        assert!(matches!(empty.validate(), Err(ApiError::Config { .. })));

        let relative = DefaultHostsProvider::production().with_money_host("money.yandex.ru");
        assert!(relative.validate().is_err());

        let ftp = DefaultHostsProvider::production().with_money_host("ftp://money.yandex.ru");
        assert!(ftp
            .validate()
            .unwrap_err()
            .to_string()
            .contains("http:// or https://"));
    }
}
