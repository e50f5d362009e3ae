pub mod consts;
pub mod errors;
pub mod request;
pub mod types;

pub use errors::CustomResult;

/// Generates a 32 character hex reference, used where the caller did not
/// supply an order id of their own.
pub fn generate_unique_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
