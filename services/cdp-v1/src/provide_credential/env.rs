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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use cdpsign_core::{Context, ProvideCredential, Result};
use log::debug;

/// EnvCredentialProvider loads CDP credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `CDP_ACCESS_KEY_ID`: The CDP access key ID
/// - `CDP_PRIVATE_KEY`: The base64 encoded ed25519 private key
///
/// Both must be set, otherwise nothing is returned.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(CDP_ACCESS_KEY_ID), envs.get(CDP_PRIVATE_KEY)) {
            (Some(ak), Some(pk)) => Ok(Some(Credential::new(ak, pk))),
            _ => {
                debug!("{CDP_ACCESS_KEY_ID} or {CDP_PRIVATE_KEY} not set");
                Ok(None)
            }
        }
    }
}
