use crate::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use log::debug;

/// ProvideCredentialChain tries a list of providers in order.
///
/// The first provider that returns `Some` wins and later providers are not called.
/// Errors are returned as is: a credential source that exists but is broken
/// should be fixed, not silently replaced by the next one.
///
/// ## Example
///
/// ```
/// use cdpsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct Fixed(&'static str);
///
/// #[async_trait]
/// impl ProvideCredential for Fixed {
///     type Credential = String;
///
///     async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
///         Ok(Some(self.0.to_string()))
///     }
/// }
///
/// let chain = ProvideCredentialChain::new().push(Fixed("first")).push(Fixed("second"));
/// assert_eq!(chain.len(), 2);
/// ```
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C> ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    /// Create a new empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Insert a provider at the front of the chain.
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<C> Default for ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .finish()
    }
}

#[async_trait]
impl<C> ProvideCredential for ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    debug!("credential loaded by provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => continue,
                Err(err) => {
                    debug!("credential provider {provider:?} failed: {err}");
                    return Err(err);
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    enum Outcome {
        Found(&'static str),
        Missing,
        Broken,
    }

    #[derive(Debug)]
    struct CountingProvider {
        outcome: Outcome,
        calls: Arc<AtomicUsize>,
    }

    impl CountingProvider {
        fn new(outcome: Outcome) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    outcome,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl ProvideCredential for CountingProvider {
        type Credential = String;

        async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Outcome::Found(v) => Ok(Some(v.to_string())),
                Outcome::Missing => Ok(None),
                Outcome::Broken => Err(Error::config_invalid("broken provider")),
            }
        }
    }

    #[tokio::test]
    async fn test_chain_stops_at_first_hit() -> Result<()> {
        let (p1, c1) = CountingProvider::new(Outcome::Missing);
        let (p2, c2) = CountingProvider::new(Outcome::Found("second"));
        let (p3, c3) = CountingProvider::new(Outcome::Found("third"));
        let chain = ProvideCredentialChain::new().push(p1).push(p2).push(p3);

        let cred = chain.provide_credential(&Context::new()).await?;
        assert_eq!(cred.as_deref(), Some("second"));
        assert_eq!(c1.load(Ordering::SeqCst), 1);
        assert_eq!(c2.load(Ordering::SeqCst), 1);
        assert_eq!(c3.load(Ordering::SeqCst), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_chain_push_front() -> Result<()> {
        let (p1, _) = CountingProvider::new(Outcome::Found("back"));
        let (p2, _) = CountingProvider::new(Outcome::Found("front"));
        let chain = ProvideCredentialChain::new().push(p1).push_front(p2);

        let cred = chain.provide_credential(&Context::new()).await?;
        assert_eq!(cred.as_deref(), Some("front"));
        Ok(())
    }

    #[tokio::test]
    async fn test_chain_all_missing() -> Result<()> {
        let (p1, c1) = CountingProvider::new(Outcome::Missing);
        let (p2, c2) = CountingProvider::new(Outcome::Missing);
        let chain = ProvideCredentialChain::new().push(p1).push(p2);

        assert!(chain.provide_credential(&Context::new()).await?.is_none());
        assert_eq!(c1.load(Ordering::SeqCst), 1);
        assert_eq!(c2.load(Ordering::SeqCst), 1);

        let empty: ProvideCredentialChain<String> = ProvideCredentialChain::default();
        assert!(empty.is_empty());
        assert!(empty.provide_credential(&Context::new()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_chain_returns_error() {
        let (p1, _) = CountingProvider::new(Outcome::Broken);
        let (p2, c2) = CountingProvider::new(Outcome::Found("never"));
        let chain = ProvideCredentialChain::new().push(p1).push(p2);

        let err = chain
            .provide_credential(&Context::new())
            .await
            .expect_err("broken provider must fail the chain");
        assert_eq!(err.kind(), crate::ErrorKind::ConfigInvalid);
        assert_eq!(c2.load(Ordering::SeqCst), 0);
    }
}
