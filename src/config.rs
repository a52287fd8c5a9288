use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.energyzero.nl/v1/";
pub const DEFAULT_USER_AGENT: &str = "EnergyZeroRust/1.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client settings, fixed at construction.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, bon::Builder)]
pub struct Config {
    /// API root, the endpoint paths are appended to it.
    #[builder(into, default = DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,

    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,

    /// Whether prices include VAT (BTW) unless a call says otherwise.
    #[builder(default = true)]
    pub vat: bool,

    #[builder(into, default = DEFAULT_USER_AGENT.to_owned())]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Config {
    /// Join the base URL and the endpoint path.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ok() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://api.energyzero.nl/v1/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.vat);
        assert_eq!(config.user_agent, "EnergyZeroRust/1.0");
    }

    #[test]
    fn builder_overrides_ok() {
        let config = Config::builder().base_url("http://localhost:8080").vat(false).build();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(!config.vat);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn endpoint_url_ok() {
        assert_eq!(
            Config::default().endpoint_url("energyprices"),
            "https://api.energyzero.nl/v1/energyprices",
        );
        let config = Config::builder().base_url("http://localhost:8080").build();
        assert_eq!(config.endpoint_url("/energyprices"), "http://localhost:8080/energyprices");
    }
}
