//! Compiled-in model catalog.
//!
//! The catalog is defined once at process start and read-only thereafter.
//! Every entry id is namespaced by its owning provider; `native_id` is the
//! provider-native model name the SDK layer sends on the wire.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::warn;

use crate::availability::AvailabilityResolver;
use crate::provider::Provider;

/// Model selected when a caller expresses no preference, and the last-resort
/// fallback target when nothing is configured.
pub const DEFAULT_CHAT_MODEL: &str = "xai-grok-2";

/// A chat-capable model as presented to callers and the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// Globally unique, stable id (`"<provider>-<model-name>"`).
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub provider: Provider,
    /// Provider-native model name used at invocation time.
    #[serde(skip)]
    pub native_id: &'static str,
    /// Tag wrapping reasoning output in the raw stream, for models that
    /// interleave thinking with the answer.
    #[serde(skip)]
    pub reasoning_tag: Option<&'static str>,
}

/// An image-generation model. Not part of the user-facing chat catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageModelDescriptor {
    pub id: &'static str,
    pub provider: Provider,
    pub native_id: &'static str,
}

pub static CHAT_MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "xai-grok-2",
        display_name: "xAI Grok-2",
        description: "xAI Grok-2 model for general-purpose chat",
        provider: Provider::Xai,
        native_id: "grok-2-1212",
        reasoning_tag: None,
    },
    ModelDescriptor {
        id: "xai-grok-3-mini",
        display_name: "xAI Grok-3 Mini",
        description: "xAI Grok-3 Mini with advanced reasoning capabilities",
        provider: Provider::Xai,
        native_id: "grok-3-mini-beta",
        reasoning_tag: Some("think"),
    },
    ModelDescriptor {
        id: "openai-gpt-4o",
        display_name: "OpenAI GPT-4o",
        description: "OpenAI GPT-4o - most advanced OpenAI model",
        provider: Provider::OpenAi,
        native_id: "gpt-4o",
        reasoning_tag: None,
    },
    ModelDescriptor {
        id: "openai-gpt-4o-mini",
        display_name: "OpenAI GPT-4o Mini",
        description: "OpenAI GPT-4o Mini - faster and more efficient",
        provider: Provider::OpenAi,
        native_id: "gpt-4o-mini",
        reasoning_tag: None,
    },
    ModelDescriptor {
        id: "openai-gpt-3.5-turbo",
        display_name: "OpenAI GPT-3.5 Turbo",
        description: "OpenAI GPT-3.5 Turbo - fast and cost-effective",
        provider: Provider::OpenAi,
        native_id: "gpt-3.5-turbo",
        reasoning_tag: None,
    },
    ModelDescriptor {
        id: "anthropic-claude-3-opus",
        display_name: "Anthropic Claude 3 Opus",
        description: "Anthropic Claude 3 Opus - most capable Claude model",
        provider: Provider::Anthropic,
        native_id: "claude-3-opus-20240229",
        reasoning_tag: None,
    },
    ModelDescriptor {
        id: "anthropic-claude-3-sonnet",
        display_name: "Anthropic Claude 3 Sonnet",
        description: "Anthropic Claude 3 Sonnet - balanced performance",
        provider: Provider::Anthropic,
        native_id: "claude-3-sonnet-20240229",
        reasoning_tag: None,
    },
    ModelDescriptor {
        id: "anthropic-claude-3-haiku",
        display_name: "Anthropic Claude 3 Haiku",
        description: "Anthropic Claude 3 Haiku - fastest Claude model",
        provider: Provider::Anthropic,
        native_id: "claude-3-haiku-20240307",
        reasoning_tag: None,
    },
    ModelDescriptor {
        id: "google-gemini-1.5-pro",
        display_name: "Google Gemini 1.5 Pro",
        description: "Google Gemini 1.5 Pro - advanced capabilities",
        provider: Provider::Google,
        native_id: "gemini-1.5-pro",
        reasoning_tag: None,
    },
    ModelDescriptor {
        id: "google-gemini-1.5-flash",
        display_name: "Google Gemini 1.5 Flash",
        description: "Google Gemini 1.5 Flash - fast and efficient",
        provider: Provider::Google,
        native_id: "gemini-1.5-flash",
        reasoning_tag: None,
    },
];

pub static IMAGE_MODELS: &[ImageModelDescriptor] = &[
    ImageModelDescriptor {
        id: "xai-image",
        provider: Provider::Xai,
        native_id: "grok-2-image",
    },
    ImageModelDescriptor {
        id: "openai-dall-e-3",
        provider: Provider::OpenAi,
        native_id: "dall-e-3",
    },
    ImageModelDescriptor {
        id: "google-gemini-vision",
        provider: Provider::Google,
        native_id: "gemini-1.5-pro-vision",
    },
];

static CHAT_INDEX: Lazy<HashMap<&'static str, &'static ModelDescriptor>> =
    Lazy::new(|| CHAT_MODELS.iter().map(|m| (m.id, m)).collect());

static IMAGE_INDEX: Lazy<HashMap<&'static str, &'static ImageModelDescriptor>> =
    Lazy::new(|| IMAGE_MODELS.iter().map(|m| (m.id, m)).collect());

/// Look up a chat model by id.
pub fn find(id: &str) -> Option<&'static ModelDescriptor> {
    CHAT_INDEX.get(id).copied()
}

/// Look up an image model by id.
pub fn find_image(id: &str) -> Option<&'static ImageModelDescriptor> {
    IMAGE_INDEX.get(id).copied()
}

/// The descriptor behind [`DEFAULT_CHAT_MODEL`].
pub fn default_descriptor() -> &'static ModelDescriptor {
    find(DEFAULT_CHAT_MODEL).expect("default chat model is in the catalog")
}

/// Catalog entries whose provider is currently enabled, in catalog order.
///
/// Degrades to the default model (with a warning) when the filter comes back
/// empty, so the model selector always has at least one entry to render.
pub fn available_models(resolver: &AvailabilityResolver) -> Vec<&'static ModelDescriptor> {
    let filtered: Vec<_> = CHAT_MODELS
        .iter()
        .filter(|m| resolver.is_enabled(m.provider))
        .collect();

    if filtered.is_empty() {
        warn!(
            fallback = DEFAULT_CHAT_MODEL,
            "no models available for the configured providers; listing the default model only"
        );
        vec![default_descriptor()]
    } else {
        filtered
    }
}
