/// Borrowed view of the request headers that take part in a CORS decision.
///
/// Absent headers are represented by empty strings. When the underlying request
/// carried several `Access-Control-Request-Headers` lines they are joined with `,`
/// before reaching this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSnapshot<'a> {
    pub origin: &'a str,
    pub request_method: &'a str,
    pub request_headers: &'a str,
}

impl<'a> RequestSnapshot<'a> {
    pub fn new(origin: &'a str, request_method: &'a str, request_headers: &'a str) -> Self {
        Self {
            origin,
            request_method,
            request_headers,
        }
    }

    pub fn with_origin(origin: &'a str) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }
}
