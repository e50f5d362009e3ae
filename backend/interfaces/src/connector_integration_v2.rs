use common_utils::{
    request::{Method, Request, RequestBuilder, RequestContent},
    CustomResult,
};
use domain_types::{
    errors::ConnectorError, router_data_v2::RouterDataV2, router_response_types::Response,
};
use error_stack::ResultExt;
use hyperswitch_masking::Maskable;

use crate::{api::ConnectorCommon, events::connector_api_logs::ConnectorEvent};

pub type BoxedConnectorIntegrationV2<'a, Flow, ResourceCommonData, Req, Resp> =
    Box<&'a (dyn ConnectorIntegrationV2<Flow, ResourceCommonData, Req, Resp> + Send + Sync)>;

/// One flow of one connector: how to build the request for it and how to
/// read the answer back. Implementations stay stateless; everything they
/// need arrives in the router data.
pub trait ConnectorIntegrationV2<Flow, ResourceCommonData, Req, Resp>: ConnectorCommon {
    fn get_headers(
        &self,
        _req: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(Vec::new())
    }

    fn get_content_type(&self) -> &'static str {
        self.common_get_content_type()
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }

    fn get_url(
        &self,
        _req: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
    ) -> CustomResult<String, ConnectorError> {
        Err(ConnectorError::FailedToObtainIntegrationUrl.into())
    }

    fn get_request_body(
        &self,
        _req: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
    ) -> CustomResult<Option<RequestContent>, ConnectorError> {
        Ok(None)
    }

    fn build_request_v2(
        &self,
        req: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
    ) -> CustomResult<Option<Request>, ConnectorError> {
        let mut builder = RequestBuilder::new()
            .method(self.get_http_method())
            .url(&self.get_url(req)?)
            .headers(self.get_headers(req)?);
        if let Some(body) = self.get_request_body(req)? {
            builder = builder.set_body(body);
        }
        Ok(Some(builder.build()))
    }

    fn handle_response_v2(
        &self,
        _data: &RouterDataV2<Flow, ResourceCommonData, Req, Resp>,
        _event_builder: Option<&mut ConnectorEvent>,
        _res: Response,
    ) -> CustomResult<RouterDataV2<Flow, ResourceCommonData, Req, Resp>, ConnectorError> {
        Err(ConnectorError::NotImplemented("handle_response_v2".to_string()).into())
    }

    fn get_error_response_v2(
        &self,
        res: Response,
        event_builder: Option<&mut ConnectorEvent>,
    ) -> CustomResult<domain_types::router_data::ErrorResponse, ConnectorError> {
        self.build_error_response(res, event_builder)
    }

    fn get_5xx_error_response(
        &self,
        res: Response,
        event_builder: Option<&mut ConnectorEvent>,
    ) -> CustomResult<domain_types::router_data::ErrorResponse, ConnectorError> {
        self.build_error_response(res, event_builder)
            .attach_printable("connector returned a server error")
    }
}
