use crate::constants::WILDCARD;
use indexmap::IndexSet;

/// Static CORS configuration evaluated by [`PolicyResolver`](crate::PolicyResolver).
///
/// Origin, method and allowed-header sets keep the order in which values were
/// first supplied and drop exact duplicates. Any of them may contain the `*`
/// wildcard token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    origins: IndexSet<String>,
    methods: IndexSet<String>,
    allowed_headers: IndexSet<String>,
    expose_headers: Vec<String>,
    allow_credentials: bool,
    max_age: u64,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = collect_set(values);
        self
    }

    pub fn methods<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = collect_set(values);
        self
    }

    pub fn allowed_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = collect_set(values);
        self
    }

    pub fn expose_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    /// Preflight cache lifetime in seconds. `0` leaves the header unset.
    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }

    pub fn allowed_origins(&self) -> &IndexSet<String> {
        &self.origins
    }

    pub fn allowed_methods(&self) -> &IndexSet<String> {
        &self.methods
    }

    pub fn allowed_header_names(&self) -> &IndexSet<String> {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &[String] {
        &self.expose_headers
    }

    pub fn credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn max_age_seconds(&self) -> u64 {
        self.max_age
    }

    pub(crate) fn allows_any_origin(&self) -> bool {
        self.origins.contains(WILDCARD)
    }

    pub(crate) fn allows_any_method(&self) -> bool {
        self.methods.contains(WILDCARD)
    }

    pub(crate) fn allows_any_header(&self) -> bool {
        self.allowed_headers.contains(WILDCARD)
    }
}

fn collect_set<I, S>(values: I) -> IndexSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
