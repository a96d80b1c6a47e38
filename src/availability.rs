//! Provider availability resolution.
//!
//! Answers "which providers are currently usable" as a pure function of a
//! [`RouterConfig`], without ever touching a secret value. The resolver is
//! recomputed per request; it holds no state beyond the config it was built
//! from, so a resolver and the answers it gives form one consistent snapshot.

use tracing::warn;

use crate::config::RouterConfig;
use crate::error::Error;
use crate::provider::Provider;

/// Provider nominated as "available" when nothing is configured. Keeping one
/// nominal provider prevents caller crashes; invoking it without a credential
/// still fails at the provider boundary.
pub const DEFAULT_PROVIDER: Provider = Provider::ALL[0];

/// Resolves provider availability from an immutable configuration snapshot.
#[derive(Debug, Clone)]
pub struct AvailabilityResolver {
    config: RouterConfig,
}

impl AvailabilityResolver {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Convenience constructor for the server context.
    pub fn from_env() -> Self {
        Self::new(RouterConfig::from_env())
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn is_enabled(&self, provider: Provider) -> bool {
        self.config.is_enabled(provider)
    }

    /// Enabled providers, in declaration (= fallback priority) order.
    pub fn enabled(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.config.is_enabled(*p))
            .collect()
    }

    /// First enabled provider in priority order, if any.
    pub fn first_enabled(&self) -> Option<Provider> {
        Provider::ALL
            .into_iter()
            .find(|p| self.config.is_enabled(*p))
    }

    /// Enabled providers, degrading to the nominal default when the set would
    /// otherwise be empty. Logs a warning on the degraded path.
    pub fn enabled_or_default(&self) -> Vec<Provider> {
        let enabled = self.enabled();
        if enabled.is_empty() {
            warn!(
                fallback = %DEFAULT_PROVIDER,
                "no provider credentials configured; treating {} as nominally available",
                DEFAULT_PROVIDER
            );
            vec![DEFAULT_PROVIDER]
        } else {
            enabled
        }
    }

    /// Distinct signal for the zero-provider state, for callers that want to
    /// surface "not configured" instead of relying on the degradation path.
    pub fn availability_error(&self) -> Option<Error> {
        if self.config.any_enabled() {
            None
        } else {
            Some(Error::NoProviderConfigured)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_preserves_priority_order() {
        let resolver = AvailabilityResolver::new(
            RouterConfig::new()
                .with_provider(Provider::Google)
                .with_provider(Provider::OpenAi),
        );
        assert_eq!(resolver.enabled(), vec![Provider::OpenAi, Provider::Google]);
        assert_eq!(resolver.first_enabled(), Some(Provider::OpenAi));
    }

    #[test]
    fn empty_config_degrades_to_default_provider() {
        let resolver = AvailabilityResolver::new(RouterConfig::new());
        assert!(resolver.enabled().is_empty());
        assert_eq!(resolver.enabled_or_default(), vec![DEFAULT_PROVIDER]);
        assert!(matches!(
            resolver.availability_error(),
            Some(Error::NoProviderConfigured)
        ));
    }

    #[test]
    fn configured_resolver_reports_no_error() {
        let resolver =
            AvailabilityResolver::new(RouterConfig::new().with_provider(Provider::Anthropic));
        assert!(resolver.availability_error().is_none());
        assert!(resolver.is_enabled(Provider::Anthropic));
        assert!(!resolver.is_enabled(Provider::Xai));
    }
}
