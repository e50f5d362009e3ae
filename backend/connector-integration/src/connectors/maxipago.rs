pub mod transformers;

pub mod test;

use common_utils::{
    consts::NO_ERROR_CODE,
    request::RequestContent,
    CustomResult,
};
use domain_types::{
    connector_flow::{
        Authorize, Capture, CreateConsumer, DeleteConsumer, Refund, StoreCard, UnstoreCard,
        UpdateConsumer, Void,
    },
    connector_types::{
        AccountFlowData, CreateConsumerData, DeleteConsumerData, GatewayResponseData,
        PaymentFlowData, PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData,
        RefundFlowData, RefundsData, StoreCardData, UnstoreCardData, UpdateConsumerData,
    },
    errors::ConnectorError,
    router_data::ErrorResponse,
    router_data_v2::RouterDataV2,
    router_response_types::Response,
    types::Connectors,
};
use hyperswitch_masking::Maskable;
use interfaces::{
    api::ConnectorCommon,
    connector_integration_v2::ConnectorIntegrationV2,
    connector_types,
    events::connector_api_logs::ConnectorEvent,
};
use transformers::{self as maxipago, MaxipagoAuthType, MaxipagoResponse, TransactionAction};

use crate::{types::ResponseRouterData, utils::scrub_transcript};

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
}

/// Servlet paths below the configured base URL. Transaction operations and
/// account-management operations go to different endpoints.
const TRANSACTION_PATH: &str = "postXML";
const API_PATH: &str = "postAPI";

#[derive(Debug, Clone, Copy)]
pub struct Maxipago;

impl Maxipago {
    pub fn new() -> &'static Self {
        &Self
    }

    fn build_headers(&self) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(vec![(
            headers::CONTENT_TYPE.to_string(),
            self.common_get_content_type().to_string().into(),
        )])
    }

    fn handle_flattened_response(
        &self,
        res: &Response,
        event_builder: Option<&mut ConnectorEvent>,
    ) -> CustomResult<MaxipagoResponse, ConnectorError> {
        let response = MaxipagoResponse::from_bytes(&res.response)?;
        tracing::debug!(
            response = %scrub_transcript(&String::from_utf8_lossy(&res.response)),
            "maxipago response"
        );
        if let Some(event) = event_builder {
            event.set_response_body(&response);
        }
        Ok(response)
    }
}

impl ConnectorCommon for Maxipago {
    fn id(&self) -> &'static str {
        "maxipago"
    }

    fn common_get_content_type(&self) -> &'static str {
        "text/xml"
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        &connectors.maxipago.base_url
    }

    fn build_error_response(
        &self,
        res: Response,
        event_builder: Option<&mut ConnectorEvent>,
    ) -> CustomResult<ErrorResponse, ConnectorError> {
        match MaxipagoResponse::from_bytes(&res.response) {
            Ok(response) => {
                if let Some(event) = event_builder {
                    event.set_error_response_body(&response);
                }
                Ok(maxipago::build_failure_response(
                    &response,
                    res.status_code,
                    None,
                ))
            }
            Err(_) => Ok(ErrorResponse {
                status_code: res.status_code,
                code: NO_ERROR_CODE.to_string(),
                message: "maxipago error response".to_string(),
                reason: Some(String::from_utf8_lossy(&res.response).into_owned()),
                ..ErrorResponse::default()
            }),
        }
    }
}

/// Implements one transaction-envelope flow: build the action element from
/// the router data, wrap it with version + verification and POST it to the
/// transaction servlet.
macro_rules! maxipago_transaction_flow {
    (flow: $flow:ty, resource_common_data: $rcd:ty, flow_request: $req:ty) => {
        impl ConnectorIntegrationV2<$flow, $rcd, $req, GatewayResponseData> for Maxipago {
            fn get_headers(
                &self,
                _req: &RouterDataV2<$flow, $rcd, $req, GatewayResponseData>,
            ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
                self.build_headers()
            }

            fn get_url(
                &self,
                req: &RouterDataV2<$flow, $rcd, $req, GatewayResponseData>,
            ) -> CustomResult<String, ConnectorError> {
                Ok(format!(
                    "{}{TRANSACTION_PATH}",
                    req.resource_common_data.connectors.maxipago.base_url
                ))
            }

            fn get_request_body(
                &self,
                req: &RouterDataV2<$flow, $rcd, $req, GatewayResponseData>,
            ) -> CustomResult<Option<RequestContent>, ConnectorError> {
                let auth = MaxipagoAuthType::try_from(&req.connector_auth_type)?;
                let action = TransactionAction::try_from(req)?;
                let document = maxipago::render_transaction_request(&auth, action)?;
                tracing::debug!(request = %scrub_transcript(&document), "maxipago transaction request");
                Ok(Some(RequestContent::Xml(document)))
            }

            fn handle_response_v2(
                &self,
                data: &RouterDataV2<$flow, $rcd, $req, GatewayResponseData>,
                event_builder: Option<&mut ConnectorEvent>,
                res: Response,
            ) -> CustomResult<RouterDataV2<$flow, $rcd, $req, GatewayResponseData>, ConnectorError>
            {
                let response = self.handle_flattened_response(&res, event_builder)?;
                RouterDataV2::try_from(ResponseRouterData {
                    response,
                    router_data: data.clone(),
                    http_code: res.status_code,
                })
            }
        }
    };
}

/// Implements one account-envelope flow: serialize the flat payload under
/// `<request>`, name the command and POST it to the account servlet.
macro_rules! maxipago_account_flow {
    (flow: $flow:ty, flow_request: $req:ty, payload: $payload:ty, command: $command:expr) => {
        impl ConnectorIntegrationV2<$flow, AccountFlowData, $req, GatewayResponseData>
            for Maxipago
        {
            fn get_headers(
                &self,
                _req: &RouterDataV2<$flow, AccountFlowData, $req, GatewayResponseData>,
            ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
                self.build_headers()
            }

            fn get_url(
                &self,
                req: &RouterDataV2<$flow, AccountFlowData, $req, GatewayResponseData>,
            ) -> CustomResult<String, ConnectorError> {
                Ok(format!(
                    "{}{API_PATH}",
                    req.resource_common_data.connectors.maxipago.base_url
                ))
            }

            fn get_request_body(
                &self,
                req: &RouterDataV2<$flow, AccountFlowData, $req, GatewayResponseData>,
            ) -> CustomResult<Option<RequestContent>, ConnectorError> {
                let auth = MaxipagoAuthType::try_from(&req.connector_auth_type)?;
                let payload = <$payload>::from(&req.request);
                let document = maxipago::render_api_request(&auth, $command, payload)?;
                tracing::debug!(request = %scrub_transcript(&document), "maxipago api request");
                Ok(Some(RequestContent::Xml(document)))
            }

            fn handle_response_v2(
                &self,
                data: &RouterDataV2<$flow, AccountFlowData, $req, GatewayResponseData>,
                event_builder: Option<&mut ConnectorEvent>,
                res: Response,
            ) -> CustomResult<
                RouterDataV2<$flow, AccountFlowData, $req, GatewayResponseData>,
                ConnectorError,
            > {
                let response = self.handle_flattened_response(&res, event_builder)?;
                maxipago::account_flow_response(ResponseRouterData {
                    response,
                    router_data: data.clone(),
                    http_code: res.status_code,
                })
            }
        }
    };
}

maxipago_transaction_flow!(
    flow: Authorize,
    resource_common_data: PaymentFlowData,
    flow_request: PaymentsAuthorizeData
);

maxipago_transaction_flow!(
    flow: Capture,
    resource_common_data: PaymentFlowData,
    flow_request: PaymentsCaptureData
);

maxipago_transaction_flow!(
    flow: Void,
    resource_common_data: PaymentFlowData,
    flow_request: PaymentVoidData
);

maxipago_transaction_flow!(
    flow: Refund,
    resource_common_data: RefundFlowData,
    flow_request: RefundsData
);

maxipago_account_flow!(
    flow: CreateConsumer,
    flow_request: CreateConsumerData,
    payload: maxipago::AddConsumerRequest,
    command: maxipago::ApiCommand::AddConsumer
);

maxipago_account_flow!(
    flow: UpdateConsumer,
    flow_request: UpdateConsumerData,
    payload: maxipago::UpdateConsumerRequest,
    command: maxipago::ApiCommand::UpdateConsumer
);

maxipago_account_flow!(
    flow: DeleteConsumer,
    flow_request: DeleteConsumerData,
    payload: maxipago::DeleteConsumerRequest,
    command: maxipago::ApiCommand::DeleteConsumer
);

maxipago_account_flow!(
    flow: StoreCard,
    flow_request: StoreCardData,
    payload: maxipago::AddCardOnFileRequest,
    command: maxipago::ApiCommand::AddCardOnFile
);

maxipago_account_flow!(
    flow: UnstoreCard,
    flow_request: UnstoreCardData,
    payload: maxipago::DeleteCardOnFileRequest,
    command: maxipago::ApiCommand::DeleteCardOnFile
);

impl connector_types::ConnectorServiceTrait for Maxipago {}
impl connector_types::PaymentAuthorizeV2 for Maxipago {}
impl connector_types::PaymentCaptureV2 for Maxipago {}
impl connector_types::PaymentVoidV2 for Maxipago {}
impl connector_types::RefundV2 for Maxipago {}
impl connector_types::ConsumerCreateV2 for Maxipago {}
impl connector_types::ConsumerUpdateV2 for Maxipago {}
impl connector_types::ConsumerDeleteV2 for Maxipago {}
impl connector_types::CardStoreV2 for Maxipago {}
impl connector_types::CardUnstoreV2 for Maxipago {}
