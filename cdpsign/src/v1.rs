// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! CDP ed25519v1 support with convenience APIs

pub use cdpsign_v1::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default CDP signer type.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default CDP signer.
///
/// This function creates a signer with:
/// - Default context (tokio file reader, OS environment)
/// - Default credential provider (`CDP_*` env vars, then `~/.cdp/credentials`)
/// - Request signer with the default date policy
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> cdpsign::Result<()> {
/// let signer = cdpsign::v1::default_signer();
///
/// let mut req = http::Request::builder()
///     .method("POST")
///     .uri("https://api.us-west-1.cdp.cloudera.com/api/v1/iam/listUsers")
///     .header("content-type", "application/json")
///     .body(())?
///     .into_parts()
///     .0;
///
/// signer.sign(&mut req, None).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    Signer::new(
        default_context(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    )
}
