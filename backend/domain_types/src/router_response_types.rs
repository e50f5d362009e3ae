use bytes::Bytes;

/// Raw response captured from the wire before any connector handling.
#[derive(Clone, Debug)]
pub struct Response {
    pub headers: Option<Vec<(String, String)>>,
    pub response: Bytes,
    pub status_code: u16,
}
