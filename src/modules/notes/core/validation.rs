#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("body must not be empty")]
    EmptyBody,

    #[error("note already exists")]
    AlreadyExists,

    #[error("note not found")]
    NotFound,
}

pub fn ensure_filled(title: &str, body: &str) -> Result<(), DecideError> {
    if title.trim().is_empty() {
        return Err(DecideError::EmptyTitle);
    }
    if body.trim().is_empty() {
        return Err(DecideError::EmptyBody);
    }
    Ok(())
}
