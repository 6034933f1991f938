use cors_resolver::{Decision, Headers, Policy, PolicyResolver, RequestSnapshot, ResponseHeaders};

#[derive(Default)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy = self.policy.origins(values);
        self
    }

    pub fn methods<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy = self.policy.methods(values);
        self
    }

    pub fn allowed_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy = self.policy.allowed_headers(values);
        self
    }

    pub fn expose_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy = self.policy.expose_headers(values);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.policy = self.policy.allow_credentials(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.policy = self.policy.max_age(seconds);
        self
    }

    pub fn build(self) -> PolicyResolver {
        PolicyResolver::new(self.policy)
    }
}

#[derive(Default)]
pub struct RequestBuilder {
    origin: String,
    request_method: String,
    request_headers: String,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = method.into();
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = headers.into();
        self
    }

    pub fn evaluate(&self, resolver: &PolicyResolver) -> Decision {
        resolver.evaluate(&self.snapshot())
    }

    pub fn apply(&self, resolver: &PolicyResolver) -> Headers {
        resolver.apply(&self.snapshot(), ResponseHeaders::new())
    }

    fn snapshot(&self) -> RequestSnapshot<'_> {
        RequestSnapshot::new(&self.origin, &self.request_method, &self.request_headers)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
