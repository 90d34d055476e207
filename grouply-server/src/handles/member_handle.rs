use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, post};
use axum::{Json, Router};
use grouply_api::models::*;

use crate::errors::{ApiError, GroupError, MemberError};
use crate::handles::non_empty;
use crate::models::{GROUP_CAPACITY, Member};
use crate::repositories::{GroupRepository, MemberRepository};

#[derive(Clone)]
pub struct MemberState {
    pub group_repository: Arc<GroupRepository>,
    pub member_repository: Arc<MemberRepository>,
}

pub fn member_router(member_state: MemberState) -> Router {
    Router::new()
        .route("/api/groups/:group_id/members", post(add_member))
        .route(
            "/api/groups/:group_id/members/:email",
            delete(delete_member),
        )
        .with_state(member_state)
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/members",
    tag = "member",
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    request_body = MemberPayload,
    responses(
        (status = 201, description = "Member added", body = CreateMemberResponse),
        (status = 400, description = "Capacity reached, missing contact or duplicate student"),
        (status = 404, description = "Group not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn add_member(
    State(state): State<MemberState>,
    Path(group_id): Path<i32>,
    Json(body): Json<MemberPayload>,
) -> Result<(StatusCode, Json<CreateMemberResponse>), ApiError> {
    state
        .group_repository
        .find_by_id(group_id)
        .await?
        .ok_or(GroupError::GroupNotFound)?;

    let members = state.member_repository.find_by_group_id(group_id).await?;

    if members.len() >= GROUP_CAPACITY {
        return Err(GroupError::GroupCapacityReached.into());
    }

    let email = non_empty(body.email);
    let student_id = non_empty(body.student_id);

    if email.is_none() && student_id.is_none() {
        return Err(MemberError::ContactRequired.into());
    }

    // Either contact field colliding with an existing member is enough to reject
    let duplicate = state
        .member_repository
        .find_duplicate(group_id, email.as_deref(), student_id.as_deref())
        .await?;

    if duplicate.is_some() {
        return Err(MemberError::MemberExists.into());
    }

    let member = Member {
        id: 0,
        group_id,
        student_name: body.student_name,
        email,
        student_id,
        mobile: body.mobile,
        git_hub: body.git_hub,
    };

    let member_id = state.member_repository.create(&member).await?;

    let created = state
        .member_repository
        .find_by_id(member_id)
        .await?
        .ok_or(MemberError::MemberNotFound)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMemberResponse {
            success: true,
            member: created.into(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}/members/{email}",
    tag = "member",
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("email" = String, Path, description = "Member email, matched exactly")
    ),
    responses(
        (status = 200, description = "Member deleted", body = DeleteMemberResponse),
        (status = 404, description = "No member with this group and email"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_member(
    State(state): State<MemberState>,
    Path((group_id, email)): Path<(i32, String)>,
) -> Result<Json<DeleteMemberResponse>, ApiError> {
    let member = state
        .member_repository
        .find_by_group_and_email(group_id, &email)
        .await?
        .ok_or(MemberError::MemberNotFound)?;

    state.member_repository.delete(member.id).await?;

    Ok(Json(DeleteMemberResponse {
        success: true,
        message: String::from("Member deleted successfully"),
    }))
}
