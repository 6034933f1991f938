use crate::adapter::ResponseSink;
use crate::allow_value::AllowValue;

/// Response values computed for one request.
///
/// An empty `allow_origin` means the origin was not granted access; it is a
/// normal outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    pub allow_credentials: bool,
    pub allow_origin: String,
    pub allow_methods: AllowValue,
    pub allow_headers: AllowValue,
    pub expose_headers: Vec<String>,
    pub max_age: u64,
}

impl Decision {
    pub fn is_origin_allowed(&self) -> bool {
        !self.allow_origin.is_empty()
    }

    /// Write every field through `sink`.
    ///
    /// `Vary` depends on the policy rather than on the outcome, so it is left
    /// to [`PolicyResolver::apply`](crate::PolicyResolver::apply).
    pub fn write_to<S: ResponseSink + ?Sized>(&self, sink: &mut S) {
        sink.set_allow_credentials(self.allow_credentials);
        sink.set_allow_origin(&self.allow_origin);
        sink.set_allow_methods(&self.allow_methods);
        sink.set_allow_headers(&self.allow_headers);
        sink.set_expose_headers(&self.expose_headers);
        sink.set_max_age(self.max_age);
    }
}

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;
