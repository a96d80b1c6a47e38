//! Invocable model handles.
//!
//! A [`ModelHandle`] binds one concrete model at one concrete provider (or a
//! deterministic stub under test-mode routing). It is a value object with
//! identity semantics: callers compare handles, and the SDK layer that
//! performs the actual generation call reads the provider and native model
//! name off it. Routing hands out handles; it never invokes them.

use crate::provider::Provider;

/// What a handle generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Text,
    Image,
}

/// Where a handle points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// A real provider-backed model.
    Provider(Provider),
    /// A deterministic test-mode stub; invoking it performs no network I/O.
    Stub,
}

/// An invocable reference to one model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelHandle {
    kind: HandleKind,
    model_id: String,
    native_id: String,
    modality: Modality,
    reasoning_tag: Option<&'static str>,
}

impl ModelHandle {
    pub(crate) fn text(provider: Provider, model_id: &str, native_id: &str) -> Self {
        Self {
            kind: HandleKind::Provider(provider),
            model_id: model_id.to_string(),
            native_id: native_id.to_string(),
            modality: Modality::Text,
            reasoning_tag: None,
        }
    }

    pub(crate) fn image(provider: Provider, model_id: &str, native_id: &str) -> Self {
        Self {
            kind: HandleKind::Provider(provider),
            model_id: model_id.to_string(),
            native_id: native_id.to_string(),
            modality: Modality::Image,
            reasoning_tag: None,
        }
    }

    pub(crate) fn stub(model_id: &str, modality: Modality) -> Self {
        Self {
            kind: HandleKind::Stub,
            model_id: model_id.to_string(),
            native_id: model_id.to_string(),
            modality,
            reasoning_tag: None,
        }
    }

    pub(crate) fn with_reasoning_tag(mut self, tag: Option<&'static str>) -> Self {
        self.reasoning_tag = tag;
        self
    }

    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    /// Owning provider, `None` for stubs.
    pub fn provider(&self) -> Option<Provider> {
        match self.kind {
            HandleKind::Provider(p) => Some(p),
            HandleKind::Stub => None,
        }
    }

    /// The resolved catalog id (`"<provider>-<model-name>"`, or the logical
    /// role id for stubs).
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Provider-native model name to send on the wire.
    pub fn native_id(&self) -> &str {
        &self.native_id
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn is_stub(&self) -> bool {
        self.kind == HandleKind::Stub
    }

    /// Tag delimiting reasoning output in the raw stream, when the model
    /// interleaves thinking with the answer.
    pub fn reasoning_tag(&self) -> Option<&'static str> {
        self.reasoning_tag
    }

    /// Full reference string, `"<provider>/<native-model>"` for provider
    /// handles and `"stub/<role>"` for stubs.
    pub fn as_str(&self) -> String {
        match self.kind {
            HandleKind::Provider(p) => format!("{}/{}", p.id(), self.native_id),
            HandleKind::Stub => format!("stub/{}", self.model_id),
        }
    }
}

impl std::fmt::Display for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_str())
    }
}
