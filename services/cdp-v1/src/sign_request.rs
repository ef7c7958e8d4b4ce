use crate::constants::{X_ALTUS_AUTH, X_ALTUS_DATE};
use crate::sign::make_signature_header;
use crate::{Credential, Headers};
use async_trait::async_trait;
use cdpsign_core::time::{format_http_date, now, DateTime};
use cdpsign_core::{Context, Error, Result, SignRequest};
use http::request::Parts;
use http::HeaderValue;
use log::debug;
use std::time::Duration;

/// What to do when the request already carries `x-altus-date`.
///
/// `x-altus-auth` is always rejected, it is only ever written by the signer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatePolicy {
    /// Fail with [`ErrorKind::HeaderReserved`](cdpsign_core::ErrorKind::HeaderReserved).
    #[default]
    Reject,
    /// Replace the caller's value with the signing time.
    Overwrite,
}

/// RequestSigner that implements the CDP ed25519v1 request signature.
///
/// Signing sets two headers:
///
/// - `x-altus-date`: the signing time, `Thu, 01 Jan 1970 00:00:00 GMT` style.
/// - `x-altus-auth`: `<base64url params>.<base64url signature>`.
///
/// Only headers are written, and only after everything that can fail: on
/// error the request is exactly what the caller passed in.
#[derive(Debug, Default)]
pub struct RequestSigner {
    date_policy: DatePolicy,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how an existing `x-altus-date` header is handled.
    pub fn with_date_policy(mut self, policy: DatePolicy) -> Self {
        self.date_policy = policy;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn check_reserved(&self, req: &Parts) -> Result<()> {
        if req.headers.contains_key(X_ALTUS_AUTH) {
            return Err(Error::header_reserved(format!(
                "{X_ALTUS_AUTH} found in headers"
            )));
        }
        if self.date_policy == DatePolicy::Reject && req.headers.contains_key(X_ALTUS_DATE) {
            return Err(Error::header_reserved(format!(
                "{X_ALTUS_DATE} found in headers"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Ok(());
        };
        if expires_in.is_some() {
            return Err(Error::request_invalid(
                "ed25519v1 signatures are header only and can't expire",
            ));
        }
        self.check_reserved(req)?;

        let date = format_http_date(self.time.unwrap_or_else(now));
        let mut headers = Headers::try_from(&req.headers)?;
        headers.insert(X_ALTUS_DATE, date.as_str());

        let auth = make_signature_header(
            req.method.as_str(),
            &req.uri.to_string(),
            &headers,
            &cred.access_key_id,
            &cred.private_key,
        )?;
        debug!("signed request with access key {}", cred.access_key_id);

        let date = HeaderValue::from_str(&date)?;
        let mut auth = HeaderValue::from_str(&auth)?;
        auth.set_sensitive(true);

        req.headers.insert(X_ALTUS_DATE, date);
        req.headers.insert(X_ALTUS_AUTH, auth);
        Ok(())
    }
}
