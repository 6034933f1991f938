use crate::allow_value::AllowValue;
use crate::constants::header;
use crate::headers::{Headers, ResponseHeaders};
use crate::snapshot::RequestSnapshot;
use std::borrow::Cow;

/// Read side of a host framework's request.
///
/// Implementations translate missing or malformed header values into empty
/// strings rather than failing.
pub trait RequestSource {
    fn origin(&self) -> &str;

    fn access_control_request_method(&self) -> &str;

    /// Requested header names. Sources that hold several header lines join
    /// them with `,`.
    fn access_control_request_headers(&self) -> Cow<'_, str>;
}

impl<T: RequestSource + ?Sized> RequestSource for &T {
    fn origin(&self) -> &str {
        (**self).origin()
    }

    fn access_control_request_method(&self) -> &str {
        (**self).access_control_request_method()
    }

    fn access_control_request_headers(&self) -> Cow<'_, str> {
        (**self).access_control_request_headers()
    }
}

impl RequestSource for RequestSnapshot<'_> {
    fn origin(&self) -> &str {
        self.origin
    }

    fn access_control_request_method(&self) -> &str {
        self.request_method
    }

    fn access_control_request_headers(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.request_headers)
    }
}

/// Write side of a host framework's response.
///
/// Only [`insert_header`](Self::insert_header), [`append_vary`](Self::append_vary)
/// and [`into_output`](Self::into_output) are required. The `set_*` methods
/// render one decision field each and skip values that must not be sent.
pub trait ResponseSink {
    /// Native response handed back once all headers are written.
    type Output;

    fn insert_header(&mut self, name: &'static str, value: String);

    fn append_vary(&mut self, value: &'static str);

    fn set_allow_credentials(&mut self, allow: bool) {
        if allow {
            self.insert_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
        }
    }

    fn set_allow_origin(&mut self, origin: &str) {
        if !origin.is_empty() {
            self.insert_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string());
        }
    }

    fn set_allow_methods(&mut self, methods: &AllowValue) {
        if let Some(value) = methods.header_value() {
            self.insert_header(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
    }

    fn set_allow_headers(&mut self, headers: &AllowValue) {
        if let Some(value) = headers.header_value() {
            self.insert_header(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
    }

    fn set_expose_headers(&mut self, headers: &[String]) {
        let entries = headers
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>();

        if !entries.is_empty() {
            self.insert_header(header::ACCESS_CONTROL_EXPOSE_HEADERS, entries.join(","));
        }
    }

    fn set_max_age(&mut self, seconds: u64) {
        if seconds > 0 {
            self.insert_header(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
    }

    fn into_output(self) -> Self::Output
    where
        Self: Sized;
}

impl ResponseSink for ResponseHeaders {
    type Output = Headers;

    fn insert_header(&mut self, name: &'static str, value: String) {
        self.push(name, value);
    }

    fn append_vary(&mut self, value: &'static str) {
        self.add_vary(value);
    }

    fn into_output(self) -> Self::Output {
        self.into_headers()
    }
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;
