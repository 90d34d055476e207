use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use grouply_api::models::*;
use time::OffsetDateTime;

use crate::errors::{ApiError, GroupError};
use crate::handles::non_empty;
use crate::models::{Group, Member};
use crate::repositories::{GroupRepository, MemberRepository};

#[derive(Clone)]
pub struct GroupState {
    pub group_repository: Arc<GroupRepository>,
    pub member_repository: Arc<MemberRepository>,
}

pub fn group_router(group_state: GroupState) -> Router {
    Router::new()
        .route("/api/groups", get(get_groups).post(create_group))
        .with_state(group_state)
}

#[utoipa::path(
    get,
    path = "/api/groups",
    tag = "group",
    responses(
        (status = 200, description = "All groups with members resolved", body = Vec<GroupResponse>),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_groups(
    State(state): State<GroupState>,
) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    let groups = state.group_repository.find_all().await?;

    let mut group_responses = Vec::with_capacity(groups.len());

    for group in groups {
        let members = state.member_repository.find_by_group_id(group.id).await?;

        let member_responses: Vec<MemberResponse> =
            members.into_iter().map(MemberResponse::from).collect();

        group_responses.push(GroupResponse {
            id: group.id,
            group_name: group.group_name,
            selected_project: group.selected_project,
            custom_title: group.custom_title,
            custom_features: group.custom_features,
            custom_vision: group.custom_vision,
            created_at: group.created_at,
            members: member_responses,
        });
    }

    Ok(Json(group_responses))
}

#[utoipa::path(
    post,
    path = "/api/groups",
    tag = "group",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = CreateGroupResponse),
        (status = 400, description = "Missing or duplicate group name"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_group(
    State(state): State<GroupState>,
    Json(body): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<CreateGroupResponse>), ApiError> {
    let Some(group_payload) = body.group else {
        return Err(GroupError::GroupNameRequired.into());
    };

    let group_name = group_payload
        .group_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(GroupError::GroupNameRequired)?;

    // Duplicate check before the write; the race window between the two is accepted
    if state
        .group_repository
        .find_by_name(group_name)
        .await?
        .is_some()
    {
        return Err(GroupError::GroupNameExists.into());
    }

    let group = Group {
        id: 0,
        group_name: group_name.to_string(),
        selected_project: group_payload.selected_project,
        custom_title: group_payload.custom_title,
        custom_features: group_payload.custom_features,
        custom_vision: group_payload.custom_vision,
        created_at: OffsetDateTime::now_utc(),
    };

    let group_id = state.group_repository.create(&group).await?;

    // Members are inserted one by one so the duplicate probe sees the batch
    // processed so far. The initial batch does not enforce the member cap;
    // only single addition does.
    let mut member_ids = Vec::new();

    for payload in body.members {
        let email = non_empty(payload.email);
        let student_id = non_empty(payload.student_id);

        if email.is_none() && student_id.is_none() {
            continue;
        }

        let duplicate = state
            .member_repository
            .find_duplicate(group_id, email.as_deref(), student_id.as_deref())
            .await?;

        if duplicate.is_some() {
            continue;
        }

        let member = Member {
            id: 0,
            group_id,
            student_name: payload.student_name,
            email,
            student_id,
            mobile: payload.mobile,
            git_hub: payload.git_hub,
        };

        member_ids.push(state.member_repository.create(&member).await?);
    }

    let created = state
        .group_repository
        .find_by_id(group_id)
        .await?
        .ok_or(GroupError::GroupNotFound)?;

    let group_response = GroupInfoResponse {
        id: created.id,
        group_name: created.group_name,
        selected_project: created.selected_project,
        custom_title: created.custom_title,
        custom_features: created.custom_features,
        custom_vision: created.custom_vision,
        created_at: created.created_at,
        members: member_ids,
    };

    Ok((
        StatusCode::CREATED,
        Json(CreateGroupResponse {
            success: true,
            group: group_response,
        }),
    ))
}
