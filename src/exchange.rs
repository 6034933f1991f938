use crate::adapter::{RequestSource, ResponseSink};
use crate::error::{CorsError, Missing};
use crate::resolver::PolicyResolver;
use tracing::warn;

/// Builder that pairs a request with a response target before writing a decision.
///
/// Use [`PolicyResolver::apply`] when both sides are available up front; an
/// exchange exists for hosts that obtain them at different points and need a
/// missing side reported as [`CorsError::NotInitialized`].
pub struct Exchange<'p, R, S> {
    resolver: &'p PolicyResolver,
    request: Option<R>,
    response: Option<S>,
}

impl<'p, R, S> Exchange<'p, R, S>
where
    R: RequestSource,
    S: ResponseSink,
{
    pub(crate) fn new(resolver: &'p PolicyResolver) -> Self {
        Self {
            resolver,
            request: None,
            response: None,
        }
    }

    pub fn request(mut self, request: R) -> Self {
        self.request = Some(request);
        self
    }

    pub fn response(mut self, response: S) -> Self {
        self.response = Some(response);
        self
    }

    pub fn is_ready(&self) -> bool {
        self.request.is_some() && self.response.is_some()
    }

    /// Evaluate the request and return the response with CORS headers applied.
    pub fn handle(self) -> Result<S::Output, CorsError> {
        let Some(request) = self.request else {
            warn!("CORS exchange handled without a request");
            return Err(CorsError::NotInitialized {
                missing: Missing::Request,
            });
        };
        let Some(response) = self.response else {
            warn!("CORS exchange handled without a response");
            return Err(CorsError::NotInitialized {
                missing: Missing::Response,
            });
        };

        Ok(self.resolver.apply(&request, response))
    }
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;
