pub mod constants;
mod adapter;
mod allow_value;
mod config;
mod decision;
mod error;
mod exchange;
mod headers;
#[cfg(feature = "http")]
mod http_adapter;
mod policy;
mod resolver;
mod snapshot;

pub use adapter::{RequestSource, ResponseSink};
pub use allow_value::AllowValue;
pub use config::CorsConfig;
pub use decision::Decision;
pub use error::{CorsError, Missing};
pub use exchange::Exchange;
pub use headers::{Headers, ResponseHeaders};
pub use policy::Policy;
pub use resolver::PolicyResolver;
pub use snapshot::RequestSnapshot;
