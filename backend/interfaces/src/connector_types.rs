use domain_types::{
    connector_flow,
    connector_types::{
        AccountFlowData, CreateConsumerData, DeleteConsumerData, GatewayResponseData,
        PaymentFlowData, PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData,
        RefundFlowData, RefundsData, StoreCardData, UnstoreCardData, UpdateConsumerData,
    },
};

use crate::{api::ConnectorCommon, connector_integration_v2::ConnectorIntegrationV2};

/// Everything a connector must implement to be driven by the gateway.
pub trait ConnectorServiceTrait:
    ConnectorCommon
    + PaymentAuthorizeV2
    + PaymentCaptureV2
    + PaymentVoidV2
    + RefundV2
    + ConsumerCreateV2
    + ConsumerUpdateV2
    + ConsumerDeleteV2
    + CardStoreV2
    + CardUnstoreV2
{
}

pub type BoxedConnector = Box<&'static (dyn ConnectorServiceTrait + Sync)>;

pub trait PaymentAuthorizeV2:
    ConnectorIntegrationV2<
    connector_flow::Authorize,
    PaymentFlowData,
    PaymentsAuthorizeData,
    GatewayResponseData,
>
{
}

pub trait PaymentCaptureV2:
    ConnectorIntegrationV2<
    connector_flow::Capture,
    PaymentFlowData,
    PaymentsCaptureData,
    GatewayResponseData,
>
{
}

pub trait PaymentVoidV2:
    ConnectorIntegrationV2<connector_flow::Void, PaymentFlowData, PaymentVoidData, GatewayResponseData>
{
}

pub trait RefundV2:
    ConnectorIntegrationV2<connector_flow::Refund, RefundFlowData, RefundsData, GatewayResponseData>
{
}

pub trait ConsumerCreateV2:
    ConnectorIntegrationV2<
    connector_flow::CreateConsumer,
    AccountFlowData,
    CreateConsumerData,
    GatewayResponseData,
>
{
}

pub trait ConsumerUpdateV2:
    ConnectorIntegrationV2<
    connector_flow::UpdateConsumer,
    AccountFlowData,
    UpdateConsumerData,
    GatewayResponseData,
>
{
}

pub trait ConsumerDeleteV2:
    ConnectorIntegrationV2<
    connector_flow::DeleteConsumer,
    AccountFlowData,
    DeleteConsumerData,
    GatewayResponseData,
>
{
}

pub trait CardStoreV2:
    ConnectorIntegrationV2<connector_flow::StoreCard, AccountFlowData, StoreCardData, GatewayResponseData>
{
}

pub trait CardUnstoreV2:
    ConnectorIntegrationV2<
    connector_flow::UnstoreCard,
    AccountFlowData,
    UnstoreCardData,
    GatewayResponseData,
>
{
}
