//! Connector endpoint configuration and outbound proxy settings.

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct ConnectorParams {
    /// Base URL; flow implementations append their servlet path.
    pub base_url: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct Connectors {
    pub maxipago: ConnectorParams,
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct Proxy {
    pub http_url: Option<String>,
    pub https_url: Option<String>,
    pub idle_pool_connection_timeout: Option<u64>,
    pub bypass_proxy_urls: Vec<String>,
}
