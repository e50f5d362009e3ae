/// Error code set when the processor did not return one.
pub const NO_ERROR_CODE: &str = "No error code";

/// Error message set when the processor did not return one.
pub const NO_ERROR_MESSAGE: &str = "No error message";
