//! # cvrepo-core: Foundational Types for CV Repositories
//!
//! A controlled-vocabulary (CV) repository is a flat tree of top-level
//! directories. Directories that carry a JSON-LD context file (`*.jsonld`)
//! are *collections*; every other `*.json` file in a collection is one
//! vocabulary *element* (a term).
//!
//! This crate holds the pieces every other `cvrepo-*` crate shares:
//!
//! - [`identity`]: `CollectionId` and `TermId` newtypes.
//! - [`layout`]: classification of the top-level directories of a checkout
//!   into collections and orphans, with the per-directory file listings.
//! - [`report`]: the `Issue` / `ValidationReport` accumulator. Checks never
//!   raise on a bad file; they record an issue and keep going.
//! - [`error`]: `thiserror` error types for the few failures that do abort
//!   a run (an unreadable repository root, an invalid identifier).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cvrepo-*` crates.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod layout;
pub mod report;

pub use error::{CvError, LayoutError};
pub use identity::{CollectionId, TermId};
pub use layout::{DirectoryKind, DirectoryListing, RepositoryLayout};
pub use report::{Issue, Severity, ValidationReport};
