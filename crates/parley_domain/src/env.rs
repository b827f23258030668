use std::fmt;
use std::time::Duration;

use derive_setters::Setters;
use url::Url;

use crate::Provider;

/// Where and how to reach one provider.
#[derive(Clone)]
pub struct ProviderEndpoint {
    /// API key, `None` when the provider is not configured.
    pub key: Option<String>,
    pub url: Url,
}

impl ProviderEndpoint {
    /// An empty key is treated as no key.
    pub fn new(key: Option<String>, url: Url) -> Self {
        Self { key: key.filter(|key| !key.trim().is_empty()), url }
    }
}

impl fmt::Debug for ProviderEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEndpoint")
            .field("key", &self.key.as_ref().map(|_| "***"))
            .field("url", &self.url.as_str())
            .finish()
    }
}

/// Process-wide configuration, resolved once at startup.
#[derive(Debug, Clone, Setters)]
pub struct Environment {
    pub openai: ProviderEndpoint,
    pub anthropic: ProviderEndpoint,
    /// Upper bound on a single upstream call.
    pub timeout: Duration,
}

impl Environment {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

    pub fn endpoint(&self, provider: Provider) -> &ProviderEndpoint {
        match provider {
            Provider::OpenAI => &self.openai,
            Provider::Anthropic => &self.anthropic,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn url() -> Url {
        Url::parse(Provider::OpenAI.default_url()).unwrap()
    }

    #[test]
    fn test_blank_key_is_unconfigured() {
        assert_eq!(ProviderEndpoint::new(Some("".to_string()), url()).key, None);
        assert_eq!(ProviderEndpoint::new(Some("  ".to_string()), url()).key, None);
        assert_eq!(
            ProviderEndpoint::new(Some("sk-test".to_string()), url()).key,
            Some("sk-test".to_string())
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let fixture = ProviderEndpoint::new(Some("sk-secret".to_string()), url());
        let actual = format!("{fixture:?}");
        assert!(!actual.contains("sk-secret"));
        assert!(actual.contains("***"));
    }
}
