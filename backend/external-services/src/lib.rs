pub mod service;

pub use service::{call_connector_api, execute_connector_processing_step};
