use serde::{Deserialize, Serialize};

use super::Id;

/// Member payload accepted on group creation and single member addition.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPayload {
    /// Student display name
    pub student_name: String,
    /// Contact email, unique within a group when present
    pub email: Option<String>,
    /// Student identifier, unique within a group when present
    #[serde(rename = "studentID")]
    pub student_id: Option<String>,
    /// Phone number
    pub mobile: Option<String>,
    /// GitHub profile
    pub git_hub: Option<String>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    /// Member identifier
    pub id: Id,
    /// Student display name
    pub student_name: String,
    /// Contact email
    pub email: Option<String>,
    /// Student identifier
    #[serde(rename = "studentID")]
    pub student_id: Option<String>,
    /// Phone number
    pub mobile: Option<String>,
    /// GitHub profile
    pub git_hub: Option<String>,
    /// Owning group identifier
    pub group: Id,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberResponse {
    pub success: bool,
    pub member: MemberResponse,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteMemberResponse {
    pub success: bool,
    pub message: String,
}
