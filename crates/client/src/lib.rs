//! `doorworks-client` — the generic REST collaborator.
//!
//! Every backend interaction goes through [`ApiClient`]: a thin, typed
//! wrapper over HTTP that attaches the bearer token from the session store,
//! prefers the backend's human-readable `detail` message on failures, and
//! never exposes transport details to the page controllers.

pub mod api;
pub mod config;
pub mod error;
pub mod token;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use token::{InMemoryTokenStore, TokenStore};
