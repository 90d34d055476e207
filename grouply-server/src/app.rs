use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Storage;
use crate::handles::*;
use crate::repositories::{GroupRepository, MemberRepository};

pub fn create_app(storage: Arc<Storage>) -> Router {
    let group_repository = Arc::new(GroupRepository::new(storage.clone()));
    let member_repository = Arc::new(MemberRepository::new(storage.clone()));

    Router::new()
        .merge(project_router())
        .merge(group_router(GroupState {
            group_repository: group_repository.clone(),
            member_repository: member_repository.clone(),
        }))
        .merge(member_router(MemberState {
            group_repository,
            member_repository,
        }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
