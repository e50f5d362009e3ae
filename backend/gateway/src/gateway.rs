use std::{collections::HashMap, marker::PhantomData, str::FromStr};

use common_enums::{AttemptStatus, CaptureMethod, Currency, RefundStatus};
use common_utils::{types::MinorUnit, CustomResult};
use connector_integration::Maxipago;
use domain_types::{
    connector_flow::{
        Authorize, Capture, CreateConsumer, DeleteConsumer, Refund, StoreCard, UnstoreCard,
        UpdateConsumer, Void,
    },
    connector_types::{
        AccountFlowData, AuthorizationToken, CreateConsumerData, DeleteConsumerData, FraudDetails,
        GatewayResponseData, OrderItem, PaymentFlowData, PaymentVoidData, PaymentsAuthorizeData,
        PaymentsCaptureData, RefundFlowData, RefundsData, StoreCardData, UnstoreCardData,
        UpdateConsumerData,
    },
    errors::ConnectorError,
    payment_address::{Address, PaymentAddress},
    payment_method_data::{Card, OnFileCard, PaymentMethodData},
    router_data::{ConnectorAuthType, ErrorResponse},
    router_data_v2::RouterDataV2,
    types::{Connectors, Proxy},
    utils::missing_field_err,
};
use external_services::execute_connector_processing_step;
use hyperswitch_masking::{PeekInterface, Secret};

use crate::configs::{Environment, GatewayConfig};

const DEFAULT_CURRENCY: Currency = Currency::BRL;

/// Amount authorized (and immediately voided) by [`MaxipagoGateway::verify`].
const VERIFY_AMOUNT: MinorUnit = MinorUnit::new(100);

/// Options accepted by the payment operations. Unset fields are simply left
/// out of the request.
#[derive(Debug, Clone, Default)]
pub struct PaymentOptions {
    pub order_id: Option<String>,
    pub currency: Option<Currency>,
    pub installments: Option<u16>,
    pub charge_interest: Option<bool>,
    pub soft_descriptor: Option<String>,
    pub fraud_check: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub fraud_details: Option<FraudDetails>,
    pub items: Vec<OrderItem>,
    /// Together with `token`, switches the charge to a stored card.
    pub consumer_id: Option<String>,
    pub token: Option<Secret<String>>,
    pub cvv: Option<Secret<String>>,
    pub processor_id: Option<String>,
}

/// Options accepted by the card-on-file operations.
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub consumer_id: Option<String>,
    pub billing_address: Option<Address>,
    pub max_charge_amount: Option<String>,
}

/// Uniform outcome of every operation. Declines and rejections land here
/// with `success` false; only transport or encoding failures surface as
/// errors.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub success: bool,
    pub message: String,
    pub authorization: String,
    pub params: HashMap<String, String>,
    pub test: bool,
}

/// Client for the maxiPago! XML API. Holds read-only configuration; every
/// operation is one request/response pair, so one instance can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct MaxipagoGateway {
    auth: ConnectorAuthType,
    connectors: Connectors,
    environment: Environment,
    processor_id: Option<String>,
    proxy: Proxy,
}

impl MaxipagoGateway {
    /// Builds a client, rejecting blank credentials before any network
    /// traffic happens.
    pub fn new(config: GatewayConfig) -> CustomResult<Self, ConnectorError> {
        if config.merchant_id.peek().trim().is_empty() {
            return Err(missing_field_err("merchant_id")());
        }
        if config.merchant_key.peek().trim().is_empty() {
            return Err(missing_field_err("merchant_key")());
        }
        let connectors = config.connectors();
        Ok(Self {
            auth: ConnectorAuthType::BodyKey {
                api_key: config.merchant_id,
                key1: config.merchant_key,
            },
            connectors,
            environment: config.environment,
            processor_id: config.processor_id,
            proxy: config.proxy,
        })
    }

    fn test_mode(&self) -> bool {
        self.environment == Environment::Test
    }

    fn payment_flow_data(&self, address: PaymentAddress) -> PaymentFlowData {
        PaymentFlowData {
            status: AttemptStatus::Pending,
            test_mode: self.test_mode(),
            address,
            connectors: self.connectors.clone(),
        }
    }

    fn account_flow_data(&self) -> AccountFlowData {
        AccountFlowData {
            test_mode: self.test_mode(),
            connectors: self.connectors.clone(),
        }
    }

    fn finish(&self, result: Result<GatewayResponseData, ErrorResponse>) -> GatewayResponse {
        match result {
            Ok(data) => GatewayResponse {
                success: true,
                message: data.message,
                authorization: data.authorization.to_string(),
                params: data.fields,
                test: self.test_mode(),
            },
            Err(error) => GatewayResponse {
                success: false,
                message: error.message,
                authorization: error.authorization.to_string(),
                params: error.response_fields,
                test: self.test_mode(),
            },
        }
    }

    /// Charges and settles in one step.
    pub async fn purchase(
        &self,
        amount: MinorUnit,
        card: Option<Card>,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.run_authorize(amount, card, options, CaptureMethod::Automatic)
            .await
    }

    /// Reserves the amount for a later capture.
    pub async fn authorize(
        &self,
        amount: MinorUnit,
        card: Option<Card>,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.run_authorize(amount, card, options, CaptureMethod::Manual)
            .await
    }

    async fn run_authorize(
        &self,
        amount: MinorUnit,
        card: Option<Card>,
        options: PaymentOptions,
        capture_method: CaptureMethod,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let payment_method_data = match (&options.consumer_id, &options.token) {
            (Some(consumer_id), Some(token)) => PaymentMethodData::OnFileCard(OnFileCard {
                customer_id: consumer_id.clone(),
                token: token.clone(),
                cvv: options.cvv.clone(),
            }),
            _ => PaymentMethodData::Card(card.ok_or_else(missing_field_err("creditcard"))?),
        };

        let router_data: RouterDataV2<
            Authorize,
            PaymentFlowData,
            PaymentsAuthorizeData,
            GatewayResponseData,
        > = RouterDataV2 {
            flow: PhantomData,
            resource_common_data: self.payment_flow_data(PaymentAddress::new(
                options.billing_address,
                options.shipping_address,
            )),
            connector_auth_type: self.auth.clone(),
            request: PaymentsAuthorizeData {
                payment_method_data,
                minor_amount: amount,
                currency: options.currency.unwrap_or(DEFAULT_CURRENCY),
                capture_method: Some(capture_method),
                order_id: options.order_id,
                soft_descriptor: options.soft_descriptor,
                installments: options.installments,
                charge_interest: options.charge_interest,
                fraud_check: options.fraud_check,
                processor_id: options.processor_id.or_else(|| self.processor_id.clone()),
                fraud_details: options.fraud_details,
                items: options.items,
            },
            response: Err(ErrorResponse::default()),
        };

        let result =
            execute_connector_processing_step(&self.proxy, Box::new(Maxipago::new()), router_data)
                .await?;
        Ok(self.finish(result.response))
    }

    /// Settles a previously authorized amount.
    pub async fn capture(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let token = parse_authorization(authorization);
        let router_data: RouterDataV2<
            Capture,
            PaymentFlowData,
            PaymentsCaptureData,
            GatewayResponseData,
        > = RouterDataV2 {
            flow: PhantomData,
            resource_common_data: self.payment_flow_data(PaymentAddress::default()),
            connector_auth_type: self.auth.clone(),
            request: PaymentsCaptureData {
                authorization: token,
                minor_amount_to_capture: amount,
                currency: options.currency.unwrap_or(DEFAULT_CURRENCY),
                order_id: options.order_id,
                soft_descriptor: options.soft_descriptor,
            },
            response: Err(ErrorResponse::default()),
        };

        let result =
            execute_connector_processing_step(&self.proxy, Box::new(Maxipago::new()), router_data)
                .await?;
        Ok(self.finish(result.response))
    }

    /// Cancels an authorized transaction by its processor transaction id.
    pub async fn void(
        &self,
        authorization: &str,
        _options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let token = parse_authorization(authorization);
        let router_data: RouterDataV2<Void, PaymentFlowData, PaymentVoidData, GatewayResponseData> =
            RouterDataV2 {
                flow: PhantomData,
                resource_common_data: self.payment_flow_data(PaymentAddress::default()),
                connector_auth_type: self.auth.clone(),
                request: PaymentVoidData {
                    authorization: token,
                },
                response: Err(ErrorResponse::default()),
            };

        let result =
            execute_connector_processing_step(&self.proxy, Box::new(Maxipago::new()), router_data)
                .await?;
        Ok(self.finish(result.response))
    }

    /// Returns a settled amount to the shopper.
    pub async fn refund(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let token = parse_authorization(authorization);
        let router_data: RouterDataV2<Refund, RefundFlowData, RefundsData, GatewayResponseData> =
            RouterDataV2 {
                flow: PhantomData,
                resource_common_data: RefundFlowData {
                    status: RefundStatus::Pending,
                    test_mode: self.test_mode(),
                    connectors: self.connectors.clone(),
                },
                connector_auth_type: self.auth.clone(),
                request: RefundsData {
                    authorization: token,
                    minor_refund_amount: amount,
                    currency: options.currency.unwrap_or(DEFAULT_CURRENCY),
                    order_id: options.order_id,
                    soft_descriptor: options.soft_descriptor,
                },
                response: Err(ErrorResponse::default()),
            };

        let result =
            execute_connector_processing_step(&self.proxy, Box::new(Maxipago::new()), router_data)
                .await?;
        Ok(self.finish(result.response))
    }

    /// Checks a card by authorizing a small amount and voiding it again.
    /// The verify outcome is the authorize outcome; the void result is
    /// ignored.
    pub async fn verify(
        &self,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let authorize_response = self
            .authorize(VERIFY_AMOUNT, Some(card), options)
            .await?;
        if authorize_response.success {
            if let Err(error) = self
                .void(&authorize_response.authorization, PaymentOptions::default())
                .await
            {
                tracing::warn!(?error, "verify could not void the probe authorization");
            }
        }
        Ok(authorize_response)
    }

    /// Registers a consumer, a prerequisite for storing cards.
    pub async fn add_consumer(
        &self,
        external_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let router_data = self.account_router_data::<CreateConsumer, _>(CreateConsumerData {
            external_id: external_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        });
        let result =
            execute_connector_processing_step(&self.proxy, Box::new(Maxipago::new()), router_data)
                .await?;
        Ok(self.finish(result.response))
    }

    pub async fn update_consumer(
        &self,
        consumer_id: impl Into<String>,
        external_id: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let router_data = self.account_router_data::<UpdateConsumer, _>(UpdateConsumerData {
            consumer_id: consumer_id.into(),
            external_id,
            first_name,
            last_name,
        });
        let result =
            execute_connector_processing_step(&self.proxy, Box::new(Maxipago::new()), router_data)
                .await?;
        Ok(self.finish(result.response))
    }

    pub async fn delete_consumer(
        &self,
        consumer_id: impl Into<String>,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let router_data = self.account_router_data::<DeleteConsumer, _>(DeleteConsumerData {
            consumer_id: consumer_id.into(),
        });
        let result =
            execute_connector_processing_step(&self.proxy, Box::new(Maxipago::new()), router_data)
                .await?;
        Ok(self.finish(result.response))
    }

    /// Vaults a card with the processor. Billing details are required for
    /// this operation.
    pub async fn store(
        &self,
        card: Card,
        options: StoreOptions,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let billing = options
            .billing_address
            .ok_or_else(missing_field_err("billing_address"))?;
        let router_data = self.account_router_data::<StoreCard, _>(StoreCardData {
            consumer_id: options.consumer_id,
            card,
            billing,
            max_charge_amount: options.max_charge_amount,
        });
        let result =
            execute_connector_processing_step(&self.proxy, Box::new(Maxipago::new()), router_data)
                .await?;
        Ok(self.finish(result.response))
    }

    /// Removes a vaulted card by its token.
    pub async fn unstore(
        &self,
        token: Secret<String>,
        options: StoreOptions,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        let router_data = self.account_router_data::<UnstoreCard, _>(UnstoreCardData {
            consumer_id: options.consumer_id,
            token,
        });
        let result =
            execute_connector_processing_step(&self.proxy, Box::new(Maxipago::new()), router_data)
                .await?;
        Ok(self.finish(result.response))
    }

    fn account_router_data<F, Req>(
        &self,
        request: Req,
    ) -> RouterDataV2<F, AccountFlowData, Req, GatewayResponseData> {
        RouterDataV2 {
            flow: PhantomData,
            resource_common_data: self.account_flow_data(),
            connector_auth_type: self.auth.clone(),
            request,
            response: Err(ErrorResponse::default()),
        }
    }
}

fn parse_authorization(authorization: &str) -> AuthorizationToken {
    AuthorizationToken::from_str(authorization).unwrap_or_default()
}
