//! Provider identifiers and static per-provider policy.
//!
//! The provider set is closed: routing, availability, and the model catalog
//! all dispatch over this enum rather than over raw id strings. Model ids are
//! namespaced by provider (`"<provider>-<model-name>"`), and the fallback
//! priority used by the router is the declaration order of [`Provider::ALL`].

use serde::{Deserialize, Serialize};

/// A supported model provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Xai,
    OpenAi,
    Anthropic,
    Google,
}

impl Provider {
    /// All providers, in declaration order. This order doubles as the
    /// fallback priority sequence used by the router.
    pub const ALL: [Provider; 4] = [
        Provider::Xai,
        Provider::OpenAi,
        Provider::Anthropic,
        Provider::Google,
    ];

    /// Wire identifier, also the namespace prefix of this provider's model ids.
    pub fn id(&self) -> &'static str {
        match self {
            Provider::Xai => "xai",
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
        }
    }

    /// Parse a wire identifier.
    pub fn from_id(id: &str) -> Option<Provider> {
        Provider::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Environment variable holding this provider's credential. The variable
    /// is only ever checked for presence; its value is never stored or logged.
    pub fn credential_var(&self) -> &'static str {
        match self {
            Provider::Xai => "XAI_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::Google => "GOOGLE_API_KEY",
        }
    }

    /// Determine the owning provider of a namespaced model id, together with
    /// the provider-local remainder of the id.
    ///
    /// Returns `None` when the id carries no known provider prefix; the
    /// router treats that as an unknown id and falls back.
    pub fn parse_model_id(id: &str) -> Option<(Provider, &str)> {
        for provider in Provider::ALL {
            if let Some(rest) = id.strip_prefix(provider.id()) {
                if let Some(name) = rest.strip_prefix('-') {
                    return Some((provider, name));
                }
            }
        }
        None
    }

    /// Default text model id used when falling back to this provider.
    pub fn default_text_model(&self) -> &'static str {
        match self {
            Provider::Xai => "xai-grok-2",
            Provider::OpenAi => "openai-gpt-3.5-turbo",
            Provider::Anthropic => "anthropic-claude-3-haiku",
            Provider::Google => "google-gemini-1.5-flash",
        }
    }

    /// Default image model id, for providers that can generate images.
    /// Anthropic is text-only and is skipped during image fallback.
    pub fn default_image_model(&self) -> Option<&'static str> {
        match self {
            Provider::Xai => Some("xai-image"),
            Provider::OpenAi => Some("openai-dall-e-3"),
            Provider::Anthropic => None,
            Provider::Google => Some("google-gemini-vision"),
        }
    }

    pub fn supports_images(&self) -> bool {
        self.default_image_model().is_some()
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
