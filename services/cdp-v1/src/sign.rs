//! The ed25519v1 signature pipeline.
//!
//! Every function here is pure: no clock, no randomness, no I/O. The same
//! inputs always produce the same bytes.

use crate::canonical::canonicalize;
use crate::constants::{ED25519_SEED_LEN, ED25519_V1, ED25519_V1_KEY_LEN, X_ALTUS_AUTH};
use crate::Headers;
use cdpsign_core::encode::{base64_decode, base64_url_encode};
use cdpsign_core::{Error, Result};
use ed25519_dalek::{Signer as _, SigningKey};
use log::debug;
use serde::Serialize;
use std::io;

/// Sign the canonical string with a base64 encoded ed25519 seed.
///
/// Returns the url safe base64 form of the 64 byte signature, padding kept.
pub fn sign(canonical_string: &str, private_key: &str) -> Result<String> {
    let seed = base64_decode(private_key)
        .map_err(|e| Error::credential_invalid("private key is not valid base64").with_source(e))?;
    let seed: [u8; ED25519_SEED_LEN] = seed.try_into().map_err(|seed: Vec<u8>| {
        Error::credential_invalid(format!(
            "not an ed25519 private key: decoded to {} bytes, expected {ED25519_SEED_LEN}",
            seed.len()
        ))
    })?;

    let signature = SigningKey::from_bytes(&seed).sign(canonical_string.as_bytes());
    Ok(base64_url_encode(&signature.to_bytes()).trim_end().to_string())
}

#[derive(Serialize)]
struct AuthParams<'a> {
    access_key_id: &'a str,
    auth_method: &'a str,
}

/// Encode the auth params as url safe base64 of their JSON form.
///
/// The JSON is written as `{"access_key_id": "ABC", "auth_method": "ed25519v1"}`:
/// keys in this order, a space after `:` and `,`, and everything outside
/// printable ASCII escaped as `\uXXXX`. The server compares these bytes, so
/// none of that is cosmetic.
pub fn encode_params(access_key: &str, auth_method: &str) -> Result<Vec<u8>> {
    let params = AuthParams {
        access_key_id: access_key,
        auth_method,
    };

    let mut json = Vec::with_capacity(64);
    let mut ser = serde_json::Serializer::with_formatter(&mut json, ParamsFormatter);
    params
        .serialize(&mut ser)
        .map_err(|e| Error::unexpected("failed to serialize auth params").with_source(e))?;

    Ok(base64_url_encode(&json).trim_end().as_bytes().to_vec())
}

/// Join encoded params and signature into the `x-altus-auth` value.
pub fn compose(encoded_params: &[u8], signature: &str) -> Result<String> {
    let params = std::str::from_utf8(encoded_params)
        .map_err(|e| Error::unexpected("encoded auth params are not utf-8").with_source(e))?;

    let mut s = String::with_capacity(params.len() + signature.len() + 1);
    s.push_str(params);
    s.push('.');
    s.push_str(signature);
    Ok(s)
}

/// Build the `x-altus-auth` header value for a request.
///
/// `headers` must already carry the `x-altus-date` that will be sent, it is
/// part of the signed string. Fails before doing any work when:
///
/// - `headers` already has `x-altus-auth` ([`ErrorKind::HeaderReserved`](cdpsign_core::ErrorKind::HeaderReserved)),
/// - `private_key` is not the 44 character form of an ed25519 seed
///   ([`ErrorKind::CredentialUnsupported`](cdpsign_core::ErrorKind::CredentialUnsupported)).
///
/// A 44 character key that doesn't decode to 32 bytes fails with
/// [`ErrorKind::CredentialInvalid`](cdpsign_core::ErrorKind::CredentialInvalid).
pub fn make_signature_header(
    method: &str,
    uri: &str,
    headers: &Headers,
    access_key: &str,
    private_key: &str,
) -> Result<String> {
    if headers.contains(X_ALTUS_AUTH) {
        return Err(Error::header_reserved(format!(
            "{X_ALTUS_AUTH} found in headers"
        )));
    }
    if private_key.chars().count() != ED25519_V1_KEY_LEN {
        return Err(Error::credential_unsupported(format!(
            "only {ED25519_V1} keys are supported"
        )));
    }
    let auth_method = ED25519_V1;

    let canonical_string = canonicalize(method, uri, headers, auth_method)?;
    debug!("calculated canonical string: {canonical_string:?}");

    let signature = sign(&canonical_string, private_key)?;
    let encoded_params = encode_params(access_key, auth_method)?;
    compose(&encoded_params, &signature)
}

/// JSON formatter producing the separators and escaping of the reference encoder.
struct ParamsFormatter;

impl serde_json::ser::Formatter for ParamsFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, c) in fragment.char_indices() {
            if matches!(c, ' '..='~') {
                continue;
            }

            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut buf = [0u16; 2];
            for unit in c.encode_utf16(&mut buf) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
