use async_trait::async_trait;
use cdpsign_core::{Context, Env, FileRead, Result};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use tokio::fs;

/// DefaultContext reads files with tokio and the environment from the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultContext;

impl DefaultContext {
    /// Create a new DefaultContext.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileRead for DefaultContext {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        Ok(fs::read(path).await?)
    }
}

impl Env for DefaultContext {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn vars(&self) -> HashMap<String, String> {
        env::vars().collect()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }
}

/// Build a [`Context`] using [`DefaultContext`] for every component.
pub fn default_context() -> Context {
    Context::new()
        .with_file_read(DefaultContext)
        .with_env(DefaultContext)
}
