//! Declarative query-string construction.

use url::Url;

/// Ordered list of query parameters.
///
/// Optional values are mapped with [`QueryParams::push_opt`], which skips
/// absent and empty values so "no filter" never turns into `key=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter unconditionally.
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when the value is present and non-empty.
    pub fn push_opt(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key.to_string(), v.to_string()));
        }
        self
    }

    /// Append all parameters of `other`.
    pub fn extend(mut self, other: QueryParams) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    /// Look up the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Append the parameters to `base`, keeping any query it already has.
    pub fn apply_to(&self, base: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(base)?;
        if !self.pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(self.pairs.iter());
        }
        Ok(url)
    }
}

/// Replace the value of `api_key` in a URL so it can be logged.
pub fn redact_api_key(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if !parsed.query_pairs().any(|(k, _)| k == "api_key") {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}
