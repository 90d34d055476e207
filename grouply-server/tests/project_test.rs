use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_get_projects() {
    let app = MockApp::new().await;

    let request = Request::builder()
        .uri("/api/projects")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let projects: Vec<String> = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        projects,
        vec![
            "AI Chatbot",
            "E-Commerce Website",
            "Library Management",
            "Custom Project"
        ]
    );
}
