use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("Group name is required")]
    GroupNameRequired,

    #[error("Group with this name already exists")]
    GroupNameExists,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Group already has maximum 4 members")]
    GroupCapacityReached,
}

impl GroupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GroupError::GroupNameRequired => StatusCode::BAD_REQUEST,
            GroupError::GroupNameExists => StatusCode::BAD_REQUEST,
            GroupError::GroupNotFound => StatusCode::NOT_FOUND,
            GroupError::GroupCapacityReached => StatusCode::BAD_REQUEST,
        }
    }
}
