pub mod connector_api_logs {
    use hyperswitch_masking::ErasedMaskSerialize;

    /// Captures the masked request/response of one connector call so the
    /// transport layer can emit it as a structured log record.
    #[derive(Debug)]
    pub struct ConnectorEvent {
        pub connector: &'static str,
        pub flow: &'static str,
        pub response_body: Option<serde_json::Value>,
        pub is_error: bool,
    }

    impl ConnectorEvent {
        pub fn new(connector: &'static str, flow: &'static str) -> Self {
            Self {
                connector,
                flow,
                response_body: None,
                is_error: false,
            }
        }

        pub fn set_response_body<T: ErasedMaskSerialize>(&mut self, response: &T) {
            self.response_body = response.masked_serialize().ok();
        }

        pub fn set_error_response_body<T: ErasedMaskSerialize>(&mut self, response: &T) {
            self.set_response_body(response);
            self.is_error = true;
        }
    }
}
