mod group;
mod member;

pub use group::GroupRepository;
pub use member::MemberRepository;

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use crate::configs::schema::SchemaManager;
    use crate::configs::settings::Database;
    use crate::configs::storage::Storage;
    use crate::models::{Group, Member};

    pub async fn setup_test_db() -> Arc<Storage> {
        Arc::new(
            Storage::new(
                Database {
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        )
    }

    pub async fn create_test_group(storage: Arc<Storage>, name: &str) -> Group {
        sqlx::query_as(
            "INSERT INTO groups (group_name, selected_project) VALUES ($1, 'AI Chatbot') RETURNING *;",
        )
        .bind(name)
        .fetch_one(storage.get_pool())
        .await
        .unwrap()
    }

    pub async fn create_test_member(storage: Arc<Storage>, group_id: i32, email: &str) -> Member {
        sqlx::query_as(
            "INSERT INTO members (group_id, student_name, email) VALUES ($1, 'Test Student', $2) RETURNING *;",
        )
        .bind(group_id)
        .bind(email)
        .fetch_one(storage.get_pool())
        .await
        .unwrap()
    }
}
