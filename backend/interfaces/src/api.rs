use common_utils::{
    consts::{NO_ERROR_CODE, NO_ERROR_MESSAGE},
    CustomResult,
};
use domain_types::{
    errors::ConnectorError,
    router_data::{ConnectorAuthType, ErrorResponse},
    router_response_types::Response,
    types::Connectors,
};
use hyperswitch_masking::Maskable;

use crate::events::connector_api_logs::ConnectorEvent;

pub trait ConnectorCommon {
    /// Name of the connector (in lowercase).
    fn id(&self) -> &'static str;

    /// HTTP header used for authorization. Empty for connectors that carry
    /// credentials in the request body.
    fn get_auth_header(
        &self,
        _auth_type: &ConnectorAuthType,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(Vec::new())
    }

    /// HTTP `Content-Type` used for POST requests.
    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    /// The base URL for interacting with the connector's API.
    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str;

    /// Common error response for a connector if it is the same in all cases.
    fn build_error_response(
        &self,
        res: Response,
        _event_builder: Option<&mut ConnectorEvent>,
    ) -> CustomResult<ErrorResponse, ConnectorError> {
        Ok(ErrorResponse {
            status_code: res.status_code,
            code: NO_ERROR_CODE.to_string(),
            message: NO_ERROR_MESSAGE.to_string(),
            ..ErrorResponse::default()
        })
    }
}
