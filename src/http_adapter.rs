//! [`RequestSource`] and [`ResponseSink`] implementations for the `http` crate types
//! used by hyper, axum and most of the tower ecosystem.

use crate::adapter::{RequestSource, ResponseSink};
use crate::constants::header;
use http::header::{HeaderMap, HeaderName, HeaderValue, VARY};
use http::{Request, Response};
use std::borrow::Cow;
use tracing::warn;

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

impl RequestSource for HeaderMap {
    fn origin(&self) -> &str {
        header_str(self, header::ORIGIN)
    }

    fn access_control_request_method(&self) -> &str {
        header_str(self, header::ACCESS_CONTROL_REQUEST_METHOD)
    }

    fn access_control_request_headers(&self) -> Cow<'_, str> {
        let values: Vec<&str> = self
            .get_all(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect();

        match values.as_slice() {
            [] => Cow::Borrowed(""),
            [single] => Cow::Borrowed(*single),
            _ => Cow::Owned(values.join(",")),
        }
    }
}

impl<B> RequestSource for Request<B> {
    fn origin(&self) -> &str {
        self.headers().origin()
    }

    fn access_control_request_method(&self) -> &str {
        self.headers().access_control_request_method()
    }

    fn access_control_request_headers(&self) -> Cow<'_, str> {
        self.headers().access_control_request_headers()
    }
}

impl ResponseSink for HeaderMap {
    type Output = HeaderMap;

    fn insert_header(&mut self, name: &'static str, value: String) {
        match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            (Ok(name), Ok(value)) => {
                self.insert(name, value);
            }
            _ => warn!(header = name, "dropping CORS header with an invalid value"),
        }
    }

    fn append_vary(&mut self, value: &'static str) {
        let present = self
            .get_all(VARY)
            .iter()
            .filter_map(|existing| existing.to_str().ok())
            .flat_map(|existing| existing.split(','))
            .any(|entry| entry.trim().eq_ignore_ascii_case(value));
        if present {
            return;
        }

        if let Ok(value) = HeaderValue::from_str(value) {
            self.append(VARY, value);
        }
    }

    fn into_output(self) -> Self::Output {
        self
    }
}

impl<B> ResponseSink for Response<B> {
    type Output = Response<B>;

    fn insert_header(&mut self, name: &'static str, value: String) {
        self.headers_mut().insert_header(name, value);
    }

    fn append_vary(&mut self, value: &'static str) {
        self.headers_mut().append_vary(value);
    }

    fn into_output(self) -> Self::Output {
        self
    }
}

#[cfg(test)]
#[path = "http_adapter_test.rs"]
mod http_adapter_test;
