use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum MemberError {
    #[error("Student must have email or studentID")]
    ContactRequired,

    #[error("Student already exists in this group")]
    MemberExists,

    #[error("Member not found")]
    MemberNotFound,
}

impl MemberError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MemberError::ContactRequired => StatusCode::BAD_REQUEST,
            MemberError::MemberExists => StatusCode::BAD_REQUEST,
            MemberError::MemberNotFound => StatusCode::NOT_FOUND,
        }
    }
}
