use std::time::Duration;

use anyhow::Context as _;
use parley_domain::{Environment, Provider, ProviderEndpoint};
use url::Url;

pub const TIMEOUT_VAR: &str = "PARLEY_TIMEOUT_MS";

/// Builds the [`Environment`] from the process environment. A `.env` file, if
/// present, is expected to be loaded already.
pub fn from_process() -> anyhow::Result<Environment> {
    from_lookup(|key| std::env::var(key).ok())
}

pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Environment> {
    let endpoint = |provider: Provider| -> anyhow::Result<ProviderEndpoint> {
        let url = lookup(provider.url_var())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| provider.default_url().to_string());
        let url = base_url(&url).with_context(|| format!("Invalid {}", provider.url_var()))?;
        Ok(ProviderEndpoint::new(lookup(provider.key_var()), url))
    };

    let timeout = match lookup(TIMEOUT_VAR) {
        Some(ms) => Duration::from_millis(
            ms.trim()
                .parse()
                .with_context(|| format!("Invalid {TIMEOUT_VAR}: {ms}"))?,
        ),
        None => Environment::DEFAULT_TIMEOUT,
    };

    Ok(Environment {
        openai: endpoint(Provider::OpenAI)?,
        anthropic: endpoint(Provider::Anthropic)?,
        timeout,
    })
}

/// Request paths are joined onto the base, so it must end with a slash.
fn base_url(url: &str) -> anyhow::Result<Url> {
    let url = url.trim();
    if url.ends_with('/') {
        Ok(Url::parse(url)?)
    } else {
        Ok(Url::parse(&format!("{url}/"))?)
    }
}
