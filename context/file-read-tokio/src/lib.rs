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

//! Tokio-based file reading implementation for cdpsign.
//!
//! This crate provides `TokioFileRead`, an async file reader that implements
//! the `FileRead` trait from `cdpsign_core` using Tokio's file system operations.
//! Credential providers use it to read the CDP credentials file
//! (`~/.cdp/credentials` by default).
//!
//! ## Example
//!
//! ```no_run
//! use cdpsign_core::{Context, OsEnv};
//! use cdpsign_file_read_tokio::TokioFileRead;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_env(OsEnv);
//!
//!     let path = ctx
//!         .expand_home_dir("~/.cdp/credentials")
//!         .expect("home dir must be known");
//!     match ctx.file_read(&path).await {
//!         Ok(content) => println!("Read {} bytes", content.len()),
//!         Err(e) => eprintln!("Failed to read file: {}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use cdpsign_core::{Error, FileRead, Result};

/// Tokio-based implementation of the `FileRead` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| Error::unexpected(format!("failed to read file {path}")).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdpsign_core::{Context, ErrorKind};
    use std::io::Write;

    #[tokio::test]
    async fn test_read_existing_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "[default]")?;
        let path = file.path().to_string_lossy().to_string();

        let ctx = Context::new().with_file_read(TokioFileRead);
        assert_eq!(ctx.file_read_as_string(&path).await?, "[default]\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir must be created");
        let path = dir.path().join("credentials");

        let err = TokioFileRead
            .file_read(&path.to_string_lossy())
            .await
            .expect_err("missing file must fail");
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.to_string().contains("credentials"));
    }
}
