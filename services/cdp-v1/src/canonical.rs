use crate::constants::CANONICAL_HEADERS;
use crate::Headers;
use cdpsign_core::Result;
use http::Uri;
use std::str::FromStr;

/// Build the canonical string that gets signed.
///
/// ```text
/// POST
/// application/json
/// Tue, 3 Jun 2008 11:05:30 GMT
/// /api/v1/test/doTestThing
/// ed25519v1
/// ```
///
/// Lines are the uppercased method, the trimmed values of `content-type` and
/// `x-altus-date` (empty when absent), the uri path with its raw query, and
/// the auth method. An empty path is signed as `/`. Any non-empty query is
/// appended as is, including queries without `=` such as `?flag`.
pub fn canonicalize(method: &str, uri: &str, headers: &Headers, auth_method: &str) -> Result<String> {
    let uri = Uri::from_str(uri)?;

    let mut s = String::with_capacity(128);
    s.push_str(&method.to_uppercase());
    s.push('\n');

    for name in CANONICAL_HEADERS {
        s.push_str(headers.get(name).map(str::trim).unwrap_or_default());
        s.push('\n');
    }

    s.push_str(canonical_path(&uri));
    if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
        s.push('?');
        s.push_str(query);
    }
    s.push('\n');
    s.push_str(auth_method);

    Ok(s)
}

fn canonical_path(uri: &Uri) -> &str {
    match uri.path() {
        "" => "/",
        path => path,
    }
}
