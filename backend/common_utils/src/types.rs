//! Amount representations and conversions between them.

use std::{fmt::Display, num::TryFromIntError};

use common_enums::Currency;
use serde::{Deserialize, Serialize};

/// An amount in the smallest denomination of its currency (cents for BRL).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize, Default,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get_amount_as_i64(&self) -> i64 {
        self.0
    }

    /// Convert to the major denomination, rendered as a string with the
    /// number of decimal places the currency carries.
    pub fn to_major_unit_as_string(
        &self,
        currency: Currency,
    ) -> Result<StringMajorUnit, TryFromIntError> {
        let amount: f64 = u32::try_from(self.0)?.into();
        let formatted = if currency.is_zero_decimal_currency() {
            format!("{}", amount)
        } else if currency.is_three_decimal_currency() {
            format!("{:.3}", amount / 1000.0)
        } else {
            format!("{:.2}", amount / 100.0)
        };
        Ok(StringMajorUnit::new(formatted))
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An amount in major units kept as the exact string that goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StringMajorUnit(String);

impl StringMajorUnit {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn get_amount_as_string(&self) -> &str {
        &self.0
    }
}

/// Converts a [`MinorUnit`] into the representation a connector expects.
pub trait AmountConvertor: Send {
    type Output;
    fn convert(&self, amount: MinorUnit, currency: Currency)
        -> Result<Self::Output, TryFromIntError>;
}

/// Converter for connectors that take major-unit decimal strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMajorUnitForConnector;

impl AmountConvertor for StringMajorUnitForConnector {
    type Output = StringMajorUnit;

    fn convert(
        &self,
        amount: MinorUnit,
        currency: Currency,
    ) -> Result<Self::Output, TryFromIntError> {
        amount.to_major_unit_as_string(currency)
    }
}
