use domain_types::types::{ConnectorParams, Connectors, Proxy};
use hyperswitch_masking::Secret;
use serde::Deserialize;

pub const TEST_BASE_URL: &str = "https://testapi.maxipago.net/UniversalAPI/";
pub const LIVE_BASE_URL: &str = "https://api.maxipago.net/UniversalAPI/";

/// Operating mode. Picks the endpoint pair and the default processor
/// routing id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Test,
    Live,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub merchant_id: Secret<String>,
    pub merchant_key: Secret<String>,
    #[serde(default)]
    pub environment: Environment,
    /// Processor routing id used in live mode; ignored in test mode.
    #[serde(default)]
    pub processor_id: Option<String>,
    /// Overrides the endpoint base URL, for talking to a local stub.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub proxy: Proxy,
}

impl GatewayConfig {
    pub fn new(merchant_id: impl Into<String>, merchant_key: impl Into<String>) -> Self {
        Self {
            merchant_id: Secret::new(merchant_id.into()),
            merchant_key: Secret::new(merchant_key.into()),
            environment: Environment::default(),
            processor_id: None,
            base_url: None,
            proxy: Proxy::default(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub(crate) fn connectors(&self) -> Connectors {
        let base_url = self.base_url.clone().unwrap_or_else(|| {
            match self.environment {
                Environment::Test => TEST_BASE_URL,
                Environment::Live => LIVE_BASE_URL,
            }
            .to_string()
        });
        Connectors {
            maxipago: ConnectorParams { base_url },
        }
    }
}
