use iron::status::{self, Status};
use thiserror::Error;

/// Failures a route handler answers with directly: each variant knows the
/// status it maps to, and its `Display` text is the response body.
#[derive(Error, Debug)]
pub enum BlogError {
    /// A required form field was absent on create. An empty value is not
    /// absent; only a field missing from the body entirely is rejected.
    #[error("missing form field: {0}")]
    MissingField(&'static str),

    /// An operation referenced a post identifier that is not in the store.
    #[error("Post not found: {id}")]
    PostNotFound { id: String },
}

impl BlogError {
    pub fn status(&self) -> Status {
        match *self {
            BlogError::MissingField(_) => status::BadRequest,
            BlogError::PostNotFound { .. } => status::NotFound,
        }
    }
}
