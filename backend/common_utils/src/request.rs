//! Outbound HTTP request types handed to the shared transport.

use hyperswitch_masking::Maskable;

pub type Headers = Vec<(String, Maskable<String>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Body of an outbound request. The XML payload is kept as the rendered
/// document so the transport sends exactly what the builder produced.
#[derive(Debug, Clone)]
pub enum RequestContent {
    Xml(String),
}

#[derive(Debug, Clone)]
pub struct Request {
    pub url: String,
    pub method: Method,
    pub headers: Headers,
    pub body: Option<RequestContent>,
}

#[derive(Debug, Default)]
pub struct RequestBuilder {
    url: String,
    method: Option<Method>,
    headers: Headers,
    body: Option<RequestContent>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn set_body(mut self, body: RequestContent) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Request {
        Request {
            url: self.url,
            method: self.method.unwrap_or(Method::Post),
            headers: self.headers,
            body: self.body,
        }
    }
}
