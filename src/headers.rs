use crate::constants::header;
use std::collections::HashMap;

pub type Headers = HashMap<String, String>;

/// Plain header map that a [`Decision`](crate::Decision) can be written into.
///
/// Header names are matched case-insensitively. `Vary` entries are merged and
/// de-duplicated; every other header is replaced on repeat insertion, keeping
/// the most recent spelling of its name.
#[derive(Debug, Default, Clone)]
pub struct ResponseHeaders {
    headers: Headers,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self {
            headers: HashMap::with_capacity(8),
        }
    }

    pub fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
            self.headers.insert(name, value.into());
        }
    }

    pub fn add_vary<S: Into<String>>(&mut self, value: S) {
        let mut entries: Vec<String> = self
            .headers
            .get(header::VARY)
            .map(|existing| {
                existing
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        entries.extend(
            value
                .into()
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty()),
        );

        if entries.is_empty() {
            self.headers.remove(header::VARY);
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&entry))
            {
                continue;
            }
            deduped.push(entry);
        }

        self.headers.insert(header::VARY.to_string(), deduped.join(", "));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
