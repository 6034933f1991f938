use indexmap::IndexSet;

/// Resolved value for `Access-Control-Allow-Methods` or `Access-Control-Allow-Headers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowValue {
    /// The request's own `Access-Control-Request-*` value, returned verbatim
    /// because the policy allows any entry.
    Echo(String),
    /// The configured allow-list, returned as-is. May contain a literal `*`.
    List(Vec<String>),
}

impl AllowValue {
    pub fn echo<S: Into<String>>(value: S) -> Self {
        Self::Echo(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub(crate) fn from_set(values: &IndexSet<String>) -> Self {
        Self::List(values.iter().cloned().collect())
    }

    pub fn is_echo(&self) -> bool {
        matches!(self, Self::Echo(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Echo(value) => value.is_empty(),
            Self::List(values) => values.is_empty(),
        }
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Echo(value) if value.is_empty() => None,
            Self::Echo(value) => Some(value.clone()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
        }
    }
}

impl Default for AllowValue {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[cfg(test)]
#[path = "allow_value_test.rs"]
mod allow_value_test;
