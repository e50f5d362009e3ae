//! Marker types for the flows a connector can implement. Each operation is
//! its own type so that picking a flow that the connector does not support
//! fails at compile time instead of at dispatch time.

#[derive(Debug, Clone)]
pub struct Authorize;

#[derive(Debug, Clone)]
pub struct Capture;

#[derive(Debug, Clone)]
pub struct Void;

#[derive(Debug, Clone)]
pub struct Refund;

#[derive(Debug, Clone)]
pub struct CreateConsumer;

#[derive(Debug, Clone)]
pub struct UpdateConsumer;

#[derive(Debug, Clone)]
pub struct DeleteConsumer;

#[derive(Debug, Clone)]
pub struct StoreCard;

#[derive(Debug, Clone)]
pub struct UnstoreCard;
