//! Caller-facing surface of the maxiPago! gateway: one client type exposing
//! the payment and account-management operations, configured once with
//! credentials and an operating mode.

pub mod configs;
pub mod gateway;

pub use configs::{Environment, GatewayConfig};
pub use gateway::{GatewayResponse, MaxipagoGateway, PaymentOptions, StoreOptions};
