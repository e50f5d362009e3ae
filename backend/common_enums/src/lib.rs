//! Enums shared across the workspace: currencies and processing statuses.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes accepted by the gateway. The variant name is the
/// code that goes on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Currency {
    ARS,
    AUD,
    BHD,
    BRL,
    CAD,
    CHF,
    CLP,
    CNY,
    COP,
    EUR,
    GBP,
    JPY,
    KRW,
    KWD,
    MXN,
    NZD,
    OMR,
    PEN,
    PYG,
    USD,
    UYU,
}

impl Currency {
    /// Currencies with no minor unit (amounts are whole numbers).
    pub fn is_zero_decimal_currency(self) -> bool {
        matches!(self, Self::CLP | Self::JPY | Self::KRW | Self::PYG)
    }

    /// Currencies with a thousandths minor unit.
    pub fn is_three_decimal_currency(self) -> bool {
        matches!(self, Self::BHD | Self::KWD | Self::OMR)
    }
}

/// Status of a payment attempt as tracked through the connector flows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttemptStatus {
    #[default]
    Pending,
    Authorized,
    Charged,
    Voided,
    Failure,
}

/// Status of a refund attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RefundStatus {
    #[default]
    Pending,
    Success,
    Failure,
}

/// Whether an authorization is settled immediately or by a later capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    #[default]
    Automatic,
    Manual,
}
