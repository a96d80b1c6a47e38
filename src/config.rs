//! Router configuration as an explicit value object.
//!
//! All ambient state (credential environment variables, the test-mode flag)
//! is read exactly once, when a [`RouterConfig`] is constructed. The resolver
//! and router are pure functions of the config they are handed, which keeps
//! both trivially testable and keeps secret values out of every layer above
//! this one: the config records presence booleans only.
//!
//! Two construction paths exist, mirroring the two execution contexts:
//!
//! - [`RouterConfig::from_env`] — server side; reads the secret-bearing
//!   variables directly (for presence only).
//! - [`RouterConfig::from_snapshot`] — client side; consumes the sanitized
//!   boolean-only [`AvailabilitySnapshot`] the server previously published.

use serde::{Deserialize, Serialize};

use crate::provider::Provider;

/// Environment variable switching the router into deterministic stub mode.
/// Set by the automated-test harness; any non-empty value enables it.
pub const TEST_MODE_VAR: &str = "AI_ROUTER_TEST_MODE";

/// Immutable routing configuration: which providers have a credential
/// present, and whether test-mode routing is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouterConfig {
    enabled: [bool; Provider::ALL.len()],
    test_mode: bool,
}

impl RouterConfig {
    /// Empty configuration: no providers enabled, live routing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the process environment. A provider counts as enabled when its
    /// credential variable is set to a non-empty value; the value itself is
    /// discarded immediately.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        for provider in Provider::ALL {
            if env_var_present(provider.credential_var()) {
                config.set_enabled(provider, true);
            }
        }
        config.test_mode = env_var_present(TEST_MODE_VAR);
        config
    }

    /// Reconstruct a configuration from a published snapshot. The client
    /// context never sees credentials, so test mode is always off here.
    pub fn from_snapshot(snapshot: &AvailabilitySnapshot) -> Self {
        let mut config = Self::new();
        config.set_enabled(Provider::Xai, snapshot.xai);
        config.set_enabled(Provider::OpenAi, snapshot.openai);
        config.set_enabled(Provider::Anthropic, snapshot.anthropic);
        config.set_enabled(Provider::Google, snapshot.google);
        config
    }

    /// Enable a provider (builder style, for tests and embedders that manage
    /// credentials themselves).
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.set_enabled(provider, true);
        self
    }

    /// Switch on deterministic stub routing.
    pub fn with_test_mode(mut self) -> Self {
        self.test_mode = true;
        self
    }

    pub fn is_enabled(&self, provider: Provider) -> bool {
        self.enabled[provider as usize]
    }

    pub fn any_enabled(&self) -> bool {
        self.enabled.iter().any(|&e| e)
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    /// Derive the boolean-only object published to the client context.
    pub fn snapshot(&self) -> AvailabilitySnapshot {
        AvailabilitySnapshot {
            xai: self.is_enabled(Provider::Xai),
            openai: self.is_enabled(Provider::OpenAi),
            anthropic: self.is_enabled(Provider::Anthropic),
            google: self.is_enabled(Provider::Google),
        }
    }

    fn set_enabled(&mut self, provider: Provider, enabled: bool) {
        self.enabled[provider as usize] = enabled;
    }
}

fn env_var_present(name: &str) -> bool {
    std::env::var(name)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
}

/// Sanitized provider availability, safe to serialize and ship to the client:
/// one boolean per provider, derived from credential presence and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    pub xai: bool,
    pub openai: bool,
    pub anthropic: bool,
    pub google: bool,
}

impl AvailabilitySnapshot {
    /// Whether any provider is configured at all. Drives the missing-API-key
    /// warning surface in the UI.
    pub fn any_provider_configured(&self) -> bool {
        self.xai || self.openai || self.anthropic || self.google
    }
}
