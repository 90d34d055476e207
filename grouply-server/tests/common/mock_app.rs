use std::sync::Arc;

use axum::Router;

use grouply_server::app::create_app;
use grouply_server::configs::schema::SchemaManager;
use grouply_server::configs::settings::Database;
use grouply_server::configs::storage::Storage;
use grouply_server::models::{Group, Member};

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let router = create_app(storage.clone());

        Self { storage, router }
    }

    pub async fn create_test_group(&self, name: &str) -> Group {
        sqlx::query_as::<_, Group>(
            "INSERT INTO groups (group_name, selected_project) VALUES ($1, 'AI Chatbot') RETURNING *;",
        )
        .bind(name)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }

    pub async fn create_test_member(&self, group_id: i32, email: &str) -> Member {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members (group_id, student_name, email) VALUES ($1, 'Test Student', $2) RETURNING *;",
        )
        .bind(group_id)
        .bind(email)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }

    pub async fn count_members(&self, group_id: i32) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE group_id = $1")
            .bind(group_id)
            .fetch_one(self.storage.get_pool())
            .await
            .unwrap()
    }
}
