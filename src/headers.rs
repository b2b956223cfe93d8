use indexmap::IndexMap;

/// Ordered, case-insensitive header map.
///
/// Names keep the spelling they were last written with; lookups ignore ASCII
/// case. Insertion order is preserved, and overwriting a header keeps its
/// original position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, (String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        self.entries
            .insert(name.to_ascii_lowercase(), (name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries
            .shift_remove(&name.to_ascii_lowercase())
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Adds `token` to the `Vary` header stored under `name`.
    ///
    /// Existing tokens and their order are kept; a token already present
    /// (ignoring case) is not repeated, and `Vary: *` is left alone.
    pub fn patch_vary(&mut self, name: &str, token: &str) {
        let mut tokens: Vec<String> = self
            .get(name)
            .map(|existing| {
                existing
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if tokens.iter().any(|existing| existing == "*") {
            return;
        }
        if tokens
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(token))
        {
            return;
        }

        tokens.push(token.to_string());
        self.insert(name, tokens.join(", "));
    }

    /// Copies every entry of `other` over this map.
    pub fn merge(&mut self, other: Headers) {
        for (key, entry) in other.entries {
            self.entries.insert(key, entry);
        }
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
