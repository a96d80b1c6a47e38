//! End-to-end routing behavior: handle identity plus logged warnings.
//!
//! Routing never returns errors, so these tests assert on the two observable
//! outputs the contract names: which handle came back, and what was warned.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use ai_router::routing::LogicalRole;
use ai_router::{
    catalog, AvailabilityResolver, Modality, ModelRouter, Provider, RouterConfig,
    DEFAULT_CHAT_MODEL, DEFAULT_PROVIDER,
};

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a capturing subscriber and return its output with the logs.
fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(writer.clone())
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
    (out, logs)
}

fn warning_count(logs: &str) -> usize {
    logs.lines().filter(|line| line.contains("WARN")).count()
}

fn router_with(providers: &[Provider]) -> ModelRouter {
    let mut config = RouterConfig::new();
    for provider in providers {
        config = config.with_provider(*provider);
    }
    ModelRouter::new(AvailabilityResolver::new(config))
}

#[test]
fn single_enabled_provider_serves_exact_ids_without_warnings() {
    for provider in Provider::ALL {
        let router = router_with(&[provider]);
        let id = provider.default_text_model();
        let (handle, logs) = with_captured_logs(|| router.language_model(id));
        assert_eq!(handle.model_id(), id);
        assert_eq!(handle.provider(), Some(provider));
        assert_eq!(warning_count(&logs), 0, "unexpected warning for {provider}");
    }
}

#[test]
fn legacy_alias_remap_holds_for_every_role() {
    // The aliases all target xAI; with xAI enabled the remap table is honored
    // no matter what else is configured.
    let router = router_with(&[Provider::Xai, Provider::Anthropic]);
    for role in LogicalRole::ALL {
        let handle = router.language_model(role.model_id());
        assert_eq!(handle.model_id(), role.concrete_model_id());
        assert_eq!(handle.provider(), Some(Provider::Xai));
    }
}

#[test]
fn zero_providers_warn_exactly_once_per_request() {
    let router = router_with(&[]);
    let (handle, logs) = with_captured_logs(|| router.language_model("google-gemini-1.5-pro"));
    assert_eq!(handle.model_id(), DEFAULT_CHAT_MODEL);
    assert_eq!(handle.provider(), Some(DEFAULT_PROVIDER));
    assert_eq!(warning_count(&logs), 1);

    // Two requests, two warnings; nothing is cached or deduplicated.
    let (_, logs) = with_captured_logs(|| {
        router.language_model("chat-model");
        router.language_model("chat-model");
    });
    assert_eq!(warning_count(&logs), 2);
}

#[test]
fn unrecognized_prefix_falls_back_to_priority_order() {
    let router = router_with(&[Provider::Anthropic, Provider::Google]);
    let (handle, logs) = with_captured_logs(|| router.language_model("cohere-command-r"));
    // Anthropic precedes Google in the priority order {xai, openai, anthropic, google}.
    assert_eq!(handle.provider(), Some(Provider::Anthropic));
    assert_eq!(handle.model_id(), Provider::Anthropic.default_text_model());
    assert_eq!(warning_count(&logs), 1);
}

#[test]
fn image_fallback_skips_text_only_providers() {
    let router = router_with(&[Provider::Anthropic, Provider::OpenAi]);
    let (handle, logs) = with_captured_logs(|| router.image_model("anthropic-claude-3-opus"));
    assert_eq!(handle.provider(), Some(Provider::OpenAi));
    assert_eq!(handle.model_id(), "openai-dall-e-3");
    assert_eq!(handle.modality(), Modality::Image);
    assert_eq!(warning_count(&logs), 1);
}

#[test]
fn test_mode_ignores_provider_configuration() {
    // No providers at all: the stubs still answer, with no warnings.
    let router = ModelRouter::new(AvailabilityResolver::new(
        RouterConfig::new().with_test_mode(),
    ));
    let (handle, logs) = with_captured_logs(|| router.language_model("title-model"));
    assert!(handle.is_stub());
    assert_eq!(handle.model_id(), "title-model");
    assert_eq!(warning_count(&logs), 0);

    for role in LogicalRole::ALL {
        let handle = router.language_model(role.model_id());
        assert!(handle.is_stub());
        assert_eq!(handle.model_id(), role.model_id());
    }
}

#[test]
fn resolution_is_stable_within_one_configuration() {
    let router = router_with(&[Provider::Google]);
    for id in [
        "google-gemini-1.5-pro",
        "chat-model",
        "openai-gpt-4o",
        "not-a-model",
    ] {
        let first = router.language_model(id);
        let second = router.language_model(id);
        assert_eq!(first, second, "resolution of '{id}' was not stable");
    }
}

#[test]
fn server_and_client_configs_route_identically() {
    // The client reconstructs its config from the published snapshot; the
    // routing decisions must match the server's for the same underlying state.
    let server = RouterConfig::new()
        .with_provider(Provider::OpenAi)
        .with_provider(Provider::Google);
    let client = RouterConfig::from_snapshot(&server.snapshot());

    let server_router = ModelRouter::new(AvailabilityResolver::new(server));
    let client_router = ModelRouter::new(AvailabilityResolver::new(client));

    for id in ["chat-model", "openai-gpt-4o-mini", "anthropic-claude-3-opus"] {
        assert_eq!(
            server_router.language_model(id),
            client_router.language_model(id)
        );
    }
}

#[test]
fn model_listing_degrades_with_a_warning() {
    let resolver = AvailabilityResolver::new(RouterConfig::new());
    let (models, logs) = with_captured_logs(|| catalog::available_models(&resolver));
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].id, DEFAULT_CHAT_MODEL);
    assert_eq!(warning_count(&logs), 1);

    let resolver = AvailabilityResolver::new(RouterConfig::new().with_provider(Provider::OpenAi));
    let (models, logs) = with_captured_logs(|| catalog::available_models(&resolver));
    assert!(models.iter().all(|m| m.provider == Provider::OpenAi));
    assert_eq!(warning_count(&logs), 0);
}
