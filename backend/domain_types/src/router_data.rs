use std::collections::HashMap;

use common_enums::AttemptStatus;
use hyperswitch_masking::Secret;

use crate::connector_types::AuthorizationToken;

/// Credentials handed to a connector. The gateway carries its merchant pair
/// inside the request body, so only body-style auth is meaningful here.
#[derive(Default, Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(tag = "auth_type")]
pub enum ConnectorAuthType {
    HeaderKey {
        api_key: Secret<String>,
    },
    BodyKey {
        api_key: Secret<String>,
        key1: Secret<String>,
    },
    #[default]
    NoKey,
}

/// Processor-reported failure carried back through a flow. Declines land
/// here rather than as a Rust error; the full flattened response travels
/// with it so callers can still inspect every field.
#[derive(Clone, Debug, serde::Serialize, Default)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub reason: Option<String>,
    pub status_code: u16,
    pub attempt_status: Option<AttemptStatus>,
    pub authorization: AuthorizationToken,
    pub response_fields: HashMap<String, String>,
}
