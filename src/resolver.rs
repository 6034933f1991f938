use crate::adapter::{RequestSource, ResponseSink};
use crate::allow_value::AllowValue;
use crate::constants::{WILDCARD, header};
use crate::decision::Decision;
use crate::exchange::Exchange;
use crate::policy::Policy;
use crate::snapshot::RequestSnapshot;
use tracing::{debug, trace};

/// Core CORS policy engine that maps request snapshots to [`Decision`]s.
///
/// The policy is owned and never mutated, so a resolver can be shared across
/// threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct PolicyResolver {
    policy: Policy,
}

impl PolicyResolver {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn evaluate(&self, snapshot: &RequestSnapshot<'_>) -> Decision {
        let decision = Decision {
            allow_credentials: self.resolve_credentials(),
            allow_origin: self.resolve_origin(snapshot),
            allow_methods: self.resolve_methods(snapshot),
            allow_headers: self.resolve_allowed_headers(snapshot),
            expose_headers: self.resolve_expose_headers().to_vec(),
            max_age: self.resolve_max_age(),
        };

        if !decision.is_origin_allowed() {
            debug!(origin = snapshot.origin, "origin not granted CORS access");
        }
        trace!(?decision, "evaluated CORS policy");

        decision
    }

    /// Evaluate `request` and write the result into `response` in one step.
    pub fn apply<R, S>(&self, request: &R, mut response: S) -> S::Output
    where
        R: RequestSource + ?Sized,
        S: ResponseSink,
    {
        let request_headers = request.access_control_request_headers();
        let snapshot = RequestSnapshot::new(
            request.origin(),
            request.access_control_request_method(),
            &request_headers,
        );

        self.evaluate(&snapshot).write_to(&mut response);
        self.write_vary(&mut response);
        response.into_output()
    }

    /// Add a `Vary` entry for every request header the policy can answer
    /// differently, whether or not this particular request was granted.
    fn write_vary<S: ResponseSink + ?Sized>(&self, sink: &mut S) {
        // An empty origin list denies every origin alike.
        if !self.policy.allows_any_origin() && !self.policy.allowed_origins().is_empty() {
            sink.append_vary(header::ORIGIN);
        }
        if self.policy.allows_any_method() {
            sink.append_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        }
        if self.policy.allows_any_header() {
            sink.append_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        }
    }

    /// Start a guarded exchange where request and response are supplied separately.
    pub fn exchange<R, S>(&self) -> Exchange<'_, R, S>
    where
        R: RequestSource,
        S: ResponseSink,
    {
        Exchange::new(self)
    }

    pub fn resolve_origin(&self, snapshot: &RequestSnapshot<'_>) -> String {
        if self.policy.allows_any_origin() {
            return WILDCARD.to_string();
        }

        let origin = snapshot.origin;
        if !origin.is_empty() && self.policy.allowed_origins().contains(origin) {
            return origin.to_string();
        }

        String::new()
    }

    pub fn resolve_methods(&self, snapshot: &RequestSnapshot<'_>) -> AllowValue {
        if self.policy.allows_any_method() && !snapshot.request_method.is_empty() {
            return AllowValue::echo(snapshot.request_method);
        }

        AllowValue::from_set(self.policy.allowed_methods())
    }

    pub fn resolve_allowed_headers(&self, snapshot: &RequestSnapshot<'_>) -> AllowValue {
        if self.policy.allows_any_header() && !snapshot.request_headers.is_empty() {
            return AllowValue::echo(snapshot.request_headers);
        }

        AllowValue::from_set(self.policy.allowed_header_names())
    }

    pub fn resolve_expose_headers(&self) -> &[String] {
        self.policy.exposed_headers()
    }

    pub fn resolve_credentials(&self) -> bool {
        self.policy.credentials()
    }

    pub fn resolve_max_age(&self) -> u64 {
        self.policy.max_age_seconds()
    }
}

impl From<Policy> for PolicyResolver {
    fn from(policy: Policy) -> Self {
        Self::new(policy)
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;
