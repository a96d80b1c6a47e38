//! # ai-router
//!
//! Provider availability and model routing core for a multi-provider AI chat
//! application.
//!
//! ## Overview
//!
//! This library answers two questions for the application around it: which
//! model providers are currently usable, and which concrete model should
//! serve a given request. Configuration is read once into an explicit value
//! object; everything downstream is a pure function of it.
//!
//! ## Core Philosophy
//!
//! - **Explicit configuration**: ambient environment reads happen in exactly
//!   one place ([`RouterConfig::from_env`]); the resolver and router take the
//!   config as input and are trivially testable.
//! - **Never-throw routing**: an unknown id or a missing credential degrades
//!   to a fallback handle plus one logged warning. Real failures surface when
//!   the handle is invoked, outside this crate.
//! - **Secrets stay put**: credentials are checked for presence only; the
//!   snapshot published to the client carries booleans and nothing else.
//!
//! ## Quick Start
//!
//! ```rust
//! use ai_router::{ModelRouter, RouterConfig, AvailabilityResolver, Provider};
//!
//! let config = RouterConfig::new().with_provider(Provider::OpenAi);
//! let router = ModelRouter::new(AvailabilityResolver::new(config));
//!
//! let handle = router.language_model("openai-gpt-4o");
//! assert_eq!(handle.provider(), Some(Provider::OpenAi));
//! assert_eq!(handle.native_id(), "gpt-4o");
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`provider`] | Closed provider set and per-provider policy (credentials, defaults, image support) |
//! | [`config`] | Explicit configuration value object and the client-safe availability snapshot |
//! | [`availability`] | Availability resolution with zero-provider degradation |
//! | [`catalog`] | Compiled-in model catalog and availability-filtered listing |
//! | [`routing`] | Alias remapping, dispatch, fallback, and test-mode stubs |
//! | [`handle`] | Invocable model handles with identity semantics |
//! | [`title`] | Chat-title generation contract |

pub mod availability;
pub mod catalog;
pub mod config;
pub mod handle;
pub mod provider;
pub mod routing;
pub mod title;

// Re-export main types for convenience
pub use availability::{AvailabilityResolver, DEFAULT_PROVIDER};
pub use catalog::{ModelDescriptor, CHAT_MODELS, DEFAULT_CHAT_MODEL};
pub use config::{AvailabilitySnapshot, RouterConfig};
pub use handle::{HandleKind, Modality, ModelHandle};
pub use provider::Provider;
pub use routing::{LogicalRole, ModelRouter};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
