//! Model routing.
//!
//! Resolves a caller-supplied model id to an invocable [`ModelHandle`],
//! applying legacy-alias remapping, availability-checked dispatch, and
//! fixed-order provider fallback. Routing never fails: every detectable
//! misconfiguration degrades to a fallback handle plus one logged warning,
//! and real authentication or network errors surface later, when the handle
//! is invoked by the SDK layer.
//!
//! Resolution order for text (image is identical against the image-capable
//! provider subset):
//!
//! 1. Test mode short-circuits to deterministic stubs.
//! 2. Legacy aliases are remapped to concrete catalog ids.
//! 3. The id is parsed into `(provider, model-name)` once, at the boundary.
//! 4. If the target provider is enabled, the request succeeds as asked.
//! 5. Otherwise the first enabled provider in priority order answers with its
//!    default model; with nothing enabled, the nominal default provider does.

use tracing::{debug, warn};

use crate::availability::{AvailabilityResolver, DEFAULT_PROVIDER};
use crate::catalog::{self, DEFAULT_CHAT_MODEL};
use crate::handle::{Modality, ModelHandle};
use crate::provider::Provider;

/// Provider-agnostic roles callers historically requested models by. Still
/// the ids the chat actions pass in, and the keys of the test-mode stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalRole {
    Chat,
    ChatReasoning,
    Title,
    Artifact,
}

impl LogicalRole {
    pub const ALL: [LogicalRole; 4] = [
        LogicalRole::Chat,
        LogicalRole::ChatReasoning,
        LogicalRole::Title,
        LogicalRole::Artifact,
    ];

    /// The legacy model id this role travels as.
    pub fn model_id(&self) -> &'static str {
        match self {
            LogicalRole::Chat => "chat-model",
            LogicalRole::ChatReasoning => "chat-model-reasoning",
            LogicalRole::Title => "title-model",
            LogicalRole::Artifact => "artifact-model",
        }
    }

    pub fn from_model_id(id: &str) -> Option<LogicalRole> {
        LogicalRole::ALL.into_iter().find(|r| r.model_id() == id)
    }

    /// Concrete catalog id this role remaps to under live routing.
    pub fn concrete_model_id(&self) -> &'static str {
        match self {
            LogicalRole::Chat => DEFAULT_CHAT_MODEL,
            LogicalRole::ChatReasoning => "xai-grok-3-mini",
            LogicalRole::Title => DEFAULT_CHAT_MODEL,
            LogicalRole::Artifact => DEFAULT_CHAT_MODEL,
        }
    }
}

/// Legacy image alias and its concrete target.
const LEGACY_IMAGE_ALIAS: (&str, &str) = ("small-model", "xai-image");

/// Routes model ids to provider handles. Holds its resolver by value; both
/// are cheap, immutable snapshots built once per request.
#[derive(Debug, Clone)]
pub struct ModelRouter {
    resolver: AvailabilityResolver,
}

impl ModelRouter {
    pub fn new(resolver: AvailabilityResolver) -> Self {
        Self { resolver }
    }

    /// Convenience constructor for the server context.
    pub fn from_env() -> Self {
        Self::new(AvailabilityResolver::from_env())
    }

    pub fn resolver(&self) -> &AvailabilityResolver {
        &self.resolver
    }

    /// Resolve a text-generation handle. Never fails; see module docs.
    pub fn language_model(&self, requested: &str) -> ModelHandle {
        if self.resolver.config().test_mode() {
            return stub_language_model(requested);
        }

        let id = match LogicalRole::from_model_id(requested) {
            Some(role) => role.concrete_model_id(),
            None => requested,
        };

        match Provider::parse_model_id(id) {
            Some((provider, name)) if self.resolver.is_enabled(provider) => {
                debug!(requested, resolved = id, provider = %provider, "routed language model");
                text_handle(provider, id, name)
            }
            Some((provider, _)) => self.fallback_language_model(
                requested,
                &format!("provider '{provider}' is not configured"),
            ),
            None => self.fallback_language_model(requested, "unrecognized model id"),
        }
    }

    /// Resolve an image-generation handle against the image-capable provider
    /// subset. Providers without image support are skipped during fallback.
    pub fn image_model(&self, requested: &str) -> ModelHandle {
        if self.resolver.config().test_mode() {
            return ModelHandle::stub(LEGACY_IMAGE_ALIAS.0, Modality::Image);
        }

        let id = if requested == LEGACY_IMAGE_ALIAS.0 {
            LEGACY_IMAGE_ALIAS.1
        } else {
            requested
        };

        match Provider::parse_model_id(id) {
            Some((provider, _))
                if provider.supports_images() && self.resolver.is_enabled(provider) =>
            {
                debug!(requested, resolved = id, provider = %provider, "routed image model");
                image_handle(provider, id)
            }
            Some((provider, _)) if !provider.supports_images() => self.fallback_image_model(
                requested,
                &format!("provider '{provider}' has no image models"),
            ),
            Some((provider, _)) => self.fallback_image_model(
                requested,
                &format!("provider '{provider}' is not configured"),
            ),
            None => self.fallback_image_model(requested, "unrecognized model id"),
        }
    }

    fn fallback_language_model(&self, requested: &str, reason: &str) -> ModelHandle {
        match self.resolver.first_enabled() {
            Some(provider) => {
                let id = provider.default_text_model();
                warn!(
                    requested,
                    reason,
                    fallback = id,
                    "falling back to first enabled provider"
                );
                let (_, name) = Provider::parse_model_id(id).expect("default ids are namespaced");
                text_handle(provider, id, name)
            }
            None => {
                let id = DEFAULT_PROVIDER.default_text_model();
                warn!(
                    requested,
                    reason,
                    fallback = id,
                    "no provider enabled; returning the default handle, which will not work without an API key"
                );
                let (_, name) = Provider::parse_model_id(id).expect("default ids are namespaced");
                text_handle(DEFAULT_PROVIDER, id, name)
            }
        }
    }

    fn fallback_image_model(&self, requested: &str, reason: &str) -> ModelHandle {
        let enabled = Provider::ALL
            .into_iter()
            .filter(|p| p.supports_images())
            .find(|p| self.resolver.is_enabled(*p));
        match enabled {
            Some(provider) => {
                let id = provider
                    .default_image_model()
                    .expect("image-capable provider has a default image model");
                warn!(
                    requested,
                    reason,
                    fallback = id,
                    "falling back to first enabled image provider"
                );
                image_handle(provider, id)
            }
            None => {
                let id = DEFAULT_PROVIDER
                    .default_image_model()
                    .expect("default provider is image-capable");
                warn!(
                    requested,
                    reason,
                    fallback = id,
                    "no image-capable provider enabled; returning the default handle, which will not work without an API key"
                );
                image_handle(DEFAULT_PROVIDER, id)
            }
        }
    }
}

fn text_handle(provider: Provider, id: &str, name: &str) -> ModelHandle {
    match catalog::find(id) {
        Some(descriptor) => ModelHandle::text(provider, id, descriptor.native_id)
            .with_reasoning_tag(descriptor.reasoning_tag),
        // Correctly namespaced but not in the catalog: pass the provider-local
        // name through and let the provider answer for it.
        None => ModelHandle::text(provider, id, name),
    }
}

fn image_handle(provider: Provider, id: &str) -> ModelHandle {
    match catalog::find_image(id) {
        Some(descriptor) => ModelHandle::image(provider, id, descriptor.native_id),
        None => {
            let name = Provider::parse_model_id(id).map(|(_, n)| n).unwrap_or(id);
            ModelHandle::image(provider, id, name)
        }
    }
}

/// Deterministic test-mode resolution: the four logical roles map to their
/// stub handles; anything else gets the chat stub.
fn stub_language_model(requested: &str) -> ModelHandle {
    let role = LogicalRole::from_model_id(requested).unwrap_or(LogicalRole::Chat);
    ModelHandle::stub(role.model_id(), Modality::Text)
}
