//! Shared outbound HTTP transport: owns the reqwest client and drives one
//! connector flow end to end (build request, POST, hand the answer back to
//! the connector). Timeout and retry policy live with the caller.

use std::time::{Duration, Instant};

use common_utils::{
    request::{Method, Request, RequestContent},
    CustomResult,
};
use domain_types::{
    errors::{ApiClientError, ConnectorError},
    router_data_v2::RouterDataV2,
    router_response_types::Response,
    types::Proxy,
};
use error_stack::{report, ResultExt};
use interfaces::{
    api::ConnectorCommon,
    connector_integration_v2::BoxedConnectorIntegrationV2,
    events::connector_api_logs::ConnectorEvent,
};
use once_cell::sync::OnceCell;
use reqwest::Client;
use tracing::field::Empty;

static DEFAULT_CLIENT: OnceCell<Client> = OnceCell::new();

const IDLE_POOL_TIMEOUT_SECS: u64 = 90;

/// Runs a full connector processing step: serialize the request, submit it
/// and let the connector interpret the response. One outbound call per
/// invocation, no retries.
pub async fn execute_connector_processing_step<F, ResourceCommonData, Req, Resp>(
    proxy: &Proxy,
    connector: BoxedConnectorIntegrationV2<'static, F, ResourceCommonData, Req, Resp>,
    router_data: RouterDataV2<F, ResourceCommonData, Req, Resp>,
) -> CustomResult<RouterDataV2<F, ResourceCommonData, Req, Resp>, ConnectorError>
where
    F: Clone + 'static,
    Req: Clone + 'static + std::fmt::Debug,
    Resp: Clone + 'static + std::fmt::Debug,
    ResourceCommonData: Clone + 'static,
{
    let span = tracing::info_span!(
        "outgoing_connector_call",
        url = Empty,
        status_code = Empty,
        latency = Empty,
    );
    let _enter = span.enter();
    let start = Instant::now();

    let mut event = ConnectorEvent::new(connector.id(), std::any::type_name::<F>());
    let connector_request = connector.build_request_v2(&router_data)?;

    let mut router_data = router_data.clone();
    let result = match connector_request {
        Some(request) => {
            let url = request.url.clone();
            tracing::Span::current().record("url", tracing::field::display(&url));
            let response = call_connector_api(proxy, request, "execute_connector_processing_step")
                .await
                .change_context(ConnectorError::ProcessingStepFailed(None))
                .inspect_err(|error| {
                    tracing::warn!(?error, "failed to get a response from the connector");
                })?;
            let status_code = match &response {
                Ok(body) | Err(body) => body.status_code,
            };
            tracing::Span::current().record("status_code", status_code);

            match response {
                Ok(body) => connector.handle_response_v2(&router_data, Some(&mut event), body)?,
                Err(body) => {
                    let error = match body.status_code {
                        500..=599 => connector.get_5xx_error_response(body, Some(&mut event))?,
                        _ => connector.get_error_response_v2(body, Some(&mut event))?,
                    };
                    router_data.response = Err(error);
                    router_data
                }
            }
        }
        None => router_data,
    };

    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::Span::current().record("latency", latency_ms);
    tracing::debug!(
        connector = event.connector,
        flow = event.flow,
        is_error = event.is_error,
        response = ?event.response_body,
        "outgoing request completed"
    );
    Ok(result)
}

/// Issues one HTTP call. Success statuses come back as `Ok(response)`,
/// error statuses as `Err(response)` so the caller can pick the error path
/// of the connector.
pub async fn call_connector_api(
    proxy: &Proxy,
    request: Request,
    _flow_name: &str,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let url =
        reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;
    let should_bypass_proxy = proxy.bypass_proxy_urls.contains(&url.to_string());
    let client = create_client(proxy, should_bypass_proxy)?;

    let mut request_builder = match request.method {
        Method::Get => client.get(url),
        Method::Post => client.post(url),
    };
    for (name, value) in request.headers {
        request_builder = request_builder.header(name, value.into_inner());
    }
    if let Some(body) = request.body {
        request_builder = match body {
            RequestContent::Xml(document) => request_builder.body(document),
        };
    }

    let response = request_builder.send().await.map_err(|error| {
        if error.is_timeout() {
            report!(ApiClientError::RequestTimeoutReceived)
        } else if error.is_connect() {
            report!(ApiClientError::RequestNotSent(error.to_string()))
        } else {
            report!(ApiClientError::UnexpectedServerResponse)
        }
    })?;

    let status_code = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .bytes()
        .await
        .change_context(ApiClientError::ResponseDecodingFailed)?;

    let wire_response = Response {
        headers: Some(headers),
        response: body,
        status_code,
    };
    if (200..300).contains(&status_code) {
        Ok(Ok(wire_response))
    } else {
        Ok(Err(wire_response))
    }
}

fn create_client(
    proxy: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<Client, ApiClientError> {
    let proxied = !should_bypass_proxy
        && (proxy.http_url.is_some() || proxy.https_url.is_some());
    if !proxied {
        return DEFAULT_CLIENT
            .get_or_try_init(|| build_client(&Proxy::default()))
            .cloned();
    }
    build_client(proxy)
}

fn build_client(proxy: &Proxy) -> CustomResult<Client, ApiClientError> {
    let mut builder = Client::builder().pool_idle_timeout(Duration::from_secs(
        proxy
            .idle_pool_connection_timeout
            .unwrap_or(IDLE_POOL_TIMEOUT_SECS),
    ));
    if let Some(url) = &proxy.http_url {
        builder = builder.proxy(
            reqwest::Proxy::http(url).change_context(ApiClientError::InvalidProxyConfiguration)?,
        );
    }
    if let Some(url) = &proxy.https_url {
        builder = builder.proxy(
            reqwest::Proxy::https(url).change_context(ApiClientError::InvalidProxyConfiguration)?,
        );
    }
    builder
        .build()
        .change_context(ApiClientError::ClientConstructionFailed)
}
