use crate::modules::notes::core::validation::DecideError;
use crate::shared::infrastructure::document_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
