use grouply_api::models::MemberResponse;
use serde::{Deserialize, Serialize};

use super::Table;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: i32,
    pub group_id: i32,
    pub student_name: String,
    pub email: Option<String>,
    pub student_id: Option<String>,
    pub mobile: Option<String>,
    pub git_hub: Option<String>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        MemberResponse {
            id: member.id,
            student_name: member.student_name,
            email: member.email,
            student_id: member.student_id,
            mobile: member.mobile,
            git_hub: member.git_hub,
            group: member.group_id,
        }
    }
}

#[derive(Clone)]
pub struct MemberTable;

impl Table for MemberTable {
    fn name(&self) -> &'static str {
        "members"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS members (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                group_id INTEGER NOT NULL,
                student_name TEXT NOT NULL,
                email TEXT,
                student_id TEXT,
                mobile TEXT,
                git_hub TEXT,
                FOREIGN KEY (group_id) REFERENCES groups (id)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS members;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["groups"]
    }
}
