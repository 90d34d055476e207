use axum::routing::get;
use axum::{Json, Router};

/// Fixed catalog of project topics offered to student groups.
pub const PROJECT_CATALOG: [&str; 4] = [
    "AI Chatbot",
    "E-Commerce Website",
    "Library Management",
    "Custom Project",
];

pub fn project_router() -> Router {
    Router::new().route("/api/projects", get(get_projects))
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "project",
    responses(
        (status = 200, description = "Fixed list of project topics", body = Vec<String>)
    )
)]
pub async fn get_projects() -> Json<Vec<&'static str>> {
    Json(PROJECT_CATALOG.to_vec())
}
