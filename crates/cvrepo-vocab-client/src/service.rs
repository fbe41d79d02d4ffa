//! The operations the cross-check needs from a vocabulary service.

use crate::error::VocabApiError;
use crate::settings::ServiceSettings;
use crate::types::Term;

/// A source of published vocabulary data.
///
/// [`crate::VocabClient`] is the HTTP implementation; tests substitute
/// in-memory doubles.
#[allow(async_fn_in_trait)]
pub trait VocabularyService {
    /// Names of every project the service knows.
    async fn get_all_projects(&self) -> Result<Vec<String>, VocabApiError>;

    /// Collection names of one project.
    async fn get_all_collections_in_project(
        &self,
        project: &str,
    ) -> Result<Vec<String>, VocabApiError>;

    /// Terms of one collection of one project.
    async fn get_all_terms_in_collection(
        &self,
        project: &str,
        collection: &str,
    ) -> Result<Vec<Term>, VocabApiError>;

    /// Every term of every project.
    async fn get_all_terms_in_all_projects(&self) -> Result<Vec<Term>, VocabApiError>;

    /// Ask the service to (re)load its data according to `settings`.
    async fn synchronize(&self, settings: &ServiceSettings) -> Result<(), VocabApiError>;
}
