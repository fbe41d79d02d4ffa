//! # cvrepo-vocab-client: Vocabulary Service Client
//!
//! The vocabulary service serves the published view of a CV repository:
//! which projects exist, which collections each project has, and which
//! terms each collection holds. The cross-check in `cvrepo-cli` compares
//! that view against the checkout on disk.
//!
//! - [`VocabularyService`] is the seam the cross-check is written against.
//! - [`VocabClient`] implements it over HTTP.
//! - [`ServiceSettings`] describes which repositories and branches the
//!   service should load; the `configure` step writes it and asks the
//!   service to synchronize.
//!
//! ## API Path Convention
//!
//! `{api_url}/api/v1/{resource}`, e.g.
//! `http://127.0.0.1:9999/api/v1/projects/obs4REF/collections`.

pub mod client;
pub mod config;
pub mod error;
pub mod service;
pub mod settings;
pub mod types;

pub use client::VocabClient;
pub use config::{ConfigError, VocabApiConfig};
pub use error::VocabApiError;
pub use service::VocabularyService;
pub use settings::{ProjectSettings, ServiceSettings, SettingsError, UniverseSettings};
pub use types::Term;
