use crate::constants::CANONICAL_HEADERS;
use cdpsign_core::Result;
use http::HeaderMap;
use log::debug;

/// Headers is an ordered header list with case-insensitive names.
///
/// Names keep the casing the caller used (`Content-Type` stays `Content-Type`),
/// lookups ignore ASCII case, and two entries never differ only by case:
/// inserting `content-type` over `Content-Type` replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header list.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Get the value of a header, ignoring name case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].1.as_str())
    }

    /// Check whether a header is present, ignoring name case.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Insert a header and return the previous value.
    ///
    /// An existing entry keeps its position and original name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Remove a header and return its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (k, v) in iter {
            headers.insert(k, v);
        }
        headers
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl TryFrom<&HeaderMap> for Headers {
    type Error = cdpsign_core::Error;

    /// Only the first value of a repeated header is kept, matching what
    /// [`HeaderMap::get`] returns.
    ///
    /// Values that are not visible ASCII are skipped unless the header is one
    /// of the signed ones, where they fail with `RequestInvalid`.
    fn try_from(map: &HeaderMap) -> Result<Self> {
        let mut headers = Headers::new();
        for (k, v) in map {
            if headers.contains(k.as_str()) {
                continue;
            }
            match v.to_str() {
                Ok(v) => {
                    headers.insert(k.as_str(), v);
                }
                Err(err) if CANONICAL_HEADERS.contains(&k.as_str()) => return Err(err.into()),
                Err(_) => debug!("skipping non-ascii value of header {k}"),
            }
        }
        Ok(headers)
    }
}
