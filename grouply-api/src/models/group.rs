use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Id;
use super::member::{MemberPayload, MemberResponse};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPayload {
    /// Group name, compared after trimming surrounding whitespace
    pub group_name: Option<String>,
    /// Selected project topic, a catalog entry or a custom choice
    pub selected_project: String,
    /// Title of a custom project
    pub custom_title: Option<String>,
    /// Feature outline of a custom project
    pub custom_features: Option<String>,
    /// Vision statement of a custom project
    pub custom_vision: Option<String>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    /// Group to create
    pub group: Option<GroupPayload>,
    /// Initial member batch
    #[serde(default)]
    pub members: Vec<MemberPayload>,
}

/// Group with its member list resolved to full member records.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    /// Group identifier
    pub id: Id,
    /// Group name
    pub group_name: String,
    /// Selected project topic
    pub selected_project: String,
    pub custom_title: Option<String>,
    pub custom_features: Option<String>,
    pub custom_vision: Option<String>,
    /// Creation time
    pub created_at: OffsetDateTime,
    /// Members of the group, in insertion order
    pub members: Vec<MemberResponse>,
}

/// Group record carrying member identifiers rather than resolved members.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfoResponse {
    /// Group identifier
    pub id: Id,
    /// Group name
    pub group_name: String,
    /// Selected project topic
    pub selected_project: String,
    pub custom_title: Option<String>,
    pub custom_features: Option<String>,
    pub custom_vision: Option<String>,
    /// Creation time
    pub created_at: OffsetDateTime,
    /// Member identifiers, in insertion order
    pub members: Vec<Id>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupResponse {
    pub success: bool,
    pub group: GroupInfoResponse,
}
