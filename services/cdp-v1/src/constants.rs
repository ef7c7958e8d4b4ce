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

/// Auth method of the CDP request signature, version 1.
pub const ED25519_V1: &str = "ed25519v1";
/// Length of a base64 encoded 32 byte ed25519 seed, padding included.
pub const ED25519_V1_KEY_LEN: usize = 44;
/// Length of a raw ed25519 seed.
pub const ED25519_SEED_LEN: usize = 32;

/// Header names
pub const X_ALTUS_AUTH: &str = "x-altus-auth";
pub const X_ALTUS_DATE: &str = "x-altus-date";
pub const CONTENT_TYPE: &str = "content-type";

/// Headers covered by the canonical string, in signing order.
pub const CANONICAL_HEADERS: [&str; 2] = [CONTENT_TYPE, X_ALTUS_DATE];

/// Env values used in cdp
pub const CDP_ACCESS_KEY_ID: &str = "CDP_ACCESS_KEY_ID";
pub const CDP_PRIVATE_KEY: &str = "CDP_PRIVATE_KEY";
pub const CDP_PROFILE: &str = "CDP_PROFILE";
pub const CDP_CREDENTIALS_FILE: &str = "CDP_CREDENTIALS_FILE";

/// Default credentials file and profile
pub const CDP_CREDENTIALS_PATH: &str = "~/.cdp/credentials";
pub const CDP_DEFAULT_PROFILE: &str = "default";

/// Keys in a credentials file profile
pub const PROFILE_ACCESS_KEY_ID: &str = "cdp_access_key_id";
pub const PROFILE_PRIVATE_KEY: &str = "cdp_private_key";
