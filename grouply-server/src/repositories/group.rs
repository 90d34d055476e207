use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::Group;

#[derive(Clone)]
pub struct GroupRepository {
    storage: Arc<Storage>,
}

impl GroupRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl GroupRepository {
    pub async fn create(&self, item: &Group) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO groups (group_name, selected_project, custom_title, custom_features, custom_vision, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&item.group_name)
        .bind(&item.selected_project)
        .bind(&item.custom_title)
        .bind(&item.custom_features)
        .bind(&item.custom_vision)
        .bind(item.created_at)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, Error> {
        let group: Option<Group> = sqlx::query_as("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(group)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Group>, Error> {
        let group: Option<Group> = sqlx::query_as("SELECT * FROM groups WHERE group_name = $1")
            .bind(name)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(group)
    }

    pub async fn find_all(&self) -> Result<Vec<Group>, Error> {
        let groups: Vec<Group> = sqlx::query_as("SELECT * FROM groups")
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use crate::repositories::tests::*;

    use super::*;

    #[tokio::test]
    async fn test_create_group() {
        let storage = setup_test_db().await;

        let repo = GroupRepository::new(storage.clone());
        let group = Group {
            id: 0,
            group_name: "Alpha".into(),
            selected_project: "AI Chatbot".into(),
            custom_title: None,
            custom_features: None,
            custom_vision: None,
            created_at: OffsetDateTime::now_utc(),
        };

        let id = repo.create(&group).await.unwrap();
        assert!(id > 0);

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.group_name, "Alpha");
        assert_eq!(found.selected_project, "AI Chatbot");
    }

    #[tokio::test]
    async fn test_find_group_by_id() {
        let storage = setup_test_db().await;
        let group = create_test_group(storage.clone(), "test_group").await;

        let repo = GroupRepository::new(storage.clone());
        let found = repo.find_by_id(group.id).await.unwrap();
        assert!(found.is_some());

        let found_group = found.unwrap();
        assert_eq!(found_group.group_name, group.group_name);
    }

    #[tokio::test]
    async fn test_find_group_by_name() {
        let storage = setup_test_db().await;
        let group = create_test_group(storage.clone(), "test_group").await;

        let repo = GroupRepository::new(storage.clone());
        let found = repo.find_by_name(&group.group_name).await.unwrap();
        assert!(found.is_some());

        let missing = repo.find_by_name("no_such_group").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_all_groups() {
        let storage = setup_test_db().await;
        create_test_group(storage.clone(), "group_one").await;
        create_test_group(storage.clone(), "group_two").await;

        let repo = GroupRepository::new(storage.clone());
        let groups = repo.find_all().await.unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected_by_store() {
        let storage = setup_test_db().await;
        create_test_group(storage.clone(), "taken").await;

        let repo = GroupRepository::new(storage.clone());
        let group = Group {
            id: 0,
            group_name: "taken".into(),
            selected_project: "AI Chatbot".into(),
            custom_title: None,
            custom_features: None,
            custom_vision: None,
            created_at: OffsetDateTime::now_utc(),
        };

        assert!(repo.create(&group).await.is_err());
    }
}
