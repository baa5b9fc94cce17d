use super::domain::{ListingId, PropertyRecord};

/// Storage abstraction so the catalog service can be exercised in
/// isolation. Implementations must return `snapshot` in insertion order;
/// relevance-ordered search results depend on it.
pub trait ListingRepository: Send + Sync {
    fn insert(&self, record: PropertyRecord) -> Result<PropertyRecord, RepositoryError>;
    fn update(&self, record: PropertyRecord) -> Result<(), RepositoryError>;
    fn remove(&self, id: &ListingId) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ListingId) -> Result<Option<PropertyRecord>, RepositoryError>;
    fn snapshot(&self) -> Result<Vec<PropertyRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("listing already exists")]
    Conflict,
    #[error("listing not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
