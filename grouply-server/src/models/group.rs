use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

/// Maximum number of members a group may hold through single additions.
pub const GROUP_CAPACITY: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Group {
    pub id: i32,
    pub group_name: String,
    pub selected_project: String,
    pub custom_title: Option<String>,
    pub custom_features: Option<String>,
    pub custom_vision: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct GroupTable;

impl Table for GroupTable {
    fn name(&self) -> &'static str {
        "groups"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS groups (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                group_name VARCHAR(255) NOT NULL UNIQUE,
                selected_project VARCHAR(255) NOT NULL,
                custom_title TEXT,
                custom_features TEXT,
                custom_vision TEXT,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS groups;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
