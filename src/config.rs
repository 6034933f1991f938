use crate::policy::Policy;
use serde::{Deserialize, Deserializer};

/// Deserializable CORS configuration.
///
/// Keys are kebab-case. Unknown keys are ignored and absent keys fall back to
/// empty lists, `false` or `0`. List-valued keys also accept a single string.
///
/// ```
/// use cors_resolver::{CorsConfig, Policy};
///
/// let config = CorsConfig {
///     origins: vec!["https://app.example".into()],
///     max_age: 600,
///     ..CorsConfig::default()
/// };
/// let policy = Policy::from(config);
/// assert_eq!(policy.max_age_seconds(), 600);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CorsConfig {
    #[serde(deserialize_with = "one_or_many")]
    pub origins: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub methods: Vec<String>,
    #[serde(alias = "allow-headers", deserialize_with = "one_or_many")]
    pub allowed_headers: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub expose_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: u64,
}

impl From<CorsConfig> for Policy {
    fn from(config: CorsConfig) -> Self {
        Policy::new()
            .origins(config.origins)
            .methods(config.methods)
            .allowed_headers(config.allowed_headers)
            .expose_headers(config.expose_headers)
            .allow_credentials(config.allow_credentials)
            .max_age(config.max_age)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
