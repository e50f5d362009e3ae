//! Flow data carried through [`crate::router_data_v2::RouterDataV2`] for
//! each operation the gateway exposes.

use std::{collections::HashMap, fmt, str::FromStr};

use common_enums::{AttemptStatus, CaptureMethod, Currency, RefundStatus};
use common_utils::types::MinorUnit;
use hyperswitch_masking::Secret;

use crate::{
    payment_address::{Address, PaymentAddress},
    payment_method_data::PaymentMethodData,
    types::Connectors,
};

const AUTHORIZATION_DELIMITER: char = '|';

/// The `{order_id}|{transaction_id}` pair returned to callers after a
/// transaction and threaded back into capture, void and refund. Opaque to
/// callers; both halves survive the round trip even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthorizationToken {
    pub order_id: String,
    pub transaction_id: String,
}

impl AuthorizationToken {
    pub fn new(order_id: impl Into<String>, transaction_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            transaction_id: transaction_id.into(),
        }
    }
}

impl fmt::Display for AuthorizationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.order_id, AUTHORIZATION_DELIMITER, self.transaction_id
        )
    }
}

impl FromStr for AuthorizationToken {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (order_id, transaction_id) = match value.split_once(AUTHORIZATION_DELIMITER) {
            Some((order_id, transaction_id)) => (order_id, transaction_id),
            None => (value, ""),
        };
        Ok(Self::new(order_id, transaction_id))
    }
}

/// Common data for authorize/capture/void flows.
#[derive(Debug, Clone)]
pub struct PaymentFlowData {
    pub status: AttemptStatus,
    pub test_mode: bool,
    pub address: PaymentAddress,
    pub connectors: Connectors,
}

/// Common data for the refund flow.
#[derive(Debug, Clone)]
pub struct RefundFlowData {
    pub status: RefundStatus,
    pub test_mode: bool,
    pub connectors: Connectors,
}

/// Common data for consumer and card-on-file management flows.
#[derive(Debug, Clone)]
pub struct AccountFlowData {
    pub test_mode: bool,
    pub connectors: Connectors,
}

#[derive(Debug, Clone)]
pub struct PaymentsAuthorizeData {
    pub payment_method_data: PaymentMethodData,
    pub minor_amount: MinorUnit,
    pub currency: Currency,
    /// `Automatic` settles immediately (a sale), `Manual` authorizes only.
    pub capture_method: Option<CaptureMethod>,
    pub order_id: Option<String>,
    pub soft_descriptor: Option<String>,
    /// Emitted only when greater than one.
    pub installments: Option<u16>,
    pub charge_interest: Option<bool>,
    pub fraud_check: Option<String>,
    pub processor_id: Option<String>,
    pub fraud_details: Option<FraudDetails>,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone)]
pub struct PaymentsCaptureData {
    pub authorization: AuthorizationToken,
    pub minor_amount_to_capture: MinorUnit,
    pub currency: Currency,
    pub order_id: Option<String>,
    pub soft_descriptor: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PaymentVoidData {
    pub authorization: AuthorizationToken,
}

#[derive(Debug, Clone)]
pub struct RefundsData {
    pub authorization: AuthorizationToken,
    pub minor_refund_amount: MinorUnit,
    pub currency: Currency,
    pub order_id: Option<String>,
    pub soft_descriptor: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateConsumerData {
    pub external_id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateConsumerData {
    pub consumer_id: String,
    pub external_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeleteConsumerData {
    pub consumer_id: String,
}

#[derive(Debug, Clone)]
pub struct StoreCardData {
    pub consumer_id: Option<String>,
    pub card: crate::payment_method_data::Card,
    /// The processor requires billing details when vaulting a card.
    pub billing: Address,
    pub max_charge_amount: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UnstoreCardData {
    pub consumer_id: Option<String>,
    pub token: Secret<String>,
}

/// Uniform response for every flow: the classification message, the
/// composite authorization token and the complete flattened response.
#[derive(Debug, Clone)]
pub struct GatewayResponseData {
    pub authorization: AuthorizationToken,
    pub message: String,
    pub fields: HashMap<String, String>,
}

impl GatewayResponseData {
    /// Consumer id assigned by an `add-consumer` response.
    pub fn customer_id(&self) -> Option<&str> {
        self.fields.get("customer_id").map(String::as_str)
    }

    /// Card token assigned by an `add-card-onfile` response.
    pub fn token(&self) -> Option<&str> {
        self.fields.get("token").map(String::as_str)
    }
}

/// Anti-fraud data forwarded verbatim to the processor's risk engine.
#[derive(Debug, Clone, Default)]
pub struct FraudDetails {
    pub fraud_processor_id: Option<String>,
    pub capture_on_low_risk: Option<String>,
    pub void_on_high_risk: Option<String>,
    pub fraud_token: Option<String>,
    pub website_id: Option<String>,
    pub tickets: Vec<TicketEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct TicketEvent {
    pub convenience_fee: Option<String>,
    pub quantity_full: Option<String>,
    pub quantity_half: Option<String>,
    pub event: Option<EventDetails>,
    pub people: Vec<String>,
    pub categories: Vec<TicketCategory>,
}

#[derive(Debug, Clone, Default)]
pub struct EventDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub local: Option<String>,
    pub date: Option<String>,
    pub quantity_ticket_sale: Option<String>,
    pub quantity_event_house: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TicketCategory {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit_amount: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderItem {
    pub index: Option<String>,
    pub product_code: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<String>,
    pub total_amount: Option<String>,
    pub unit_cost: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_token_round_trips() {
        let token: AuthorizationToken = "12345|999888".parse().expect("parse token");
        assert_eq!(token.order_id, "12345");
        assert_eq!(token.transaction_id, "999888");
        assert_eq!(token.to_string(), "12345|999888");
    }

    #[test]
    fn authorization_token_with_empty_halves() {
        let token: AuthorizationToken = "|999888".parse().expect("parse token");
        assert_eq!(token.order_id, "");
        assert_eq!(token.transaction_id, "999888");
        assert_eq!(token.to_string(), "|999888");

        let token: AuthorizationToken = "12345|".parse().expect("parse token");
        assert_eq!(token.order_id, "12345");
        assert_eq!(token.transaction_id, "");
        assert_eq!(token.to_string(), "12345|");
    }

    #[test]
    fn authorization_token_without_delimiter() {
        let token: AuthorizationToken = "bogus".parse().expect("parse token");
        assert_eq!(token.order_id, "bogus");
        assert_eq!(token.transaction_id, "");
    }
}
