use super::{GroupError, MemberError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Group error: {0}")]
    GroupError(#[from] GroupError),

    #[error("Member error: {0}")]
    MemberError(#[from] MemberError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
