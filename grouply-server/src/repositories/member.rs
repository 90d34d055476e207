use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::Member;

#[derive(Clone)]
pub struct MemberRepository {
    storage: Arc<Storage>,
}

impl MemberRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl MemberRepository {
    pub async fn create(&self, item: &Member) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO members (group_id, student_name, email, student_id, mobile, git_hub)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.group_id)
        .bind(&item.student_name)
        .bind(&item.email)
        .bind(&item.student_id)
        .bind(&item.mobile)
        .bind(&item.git_hub)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, Error> {
        let member: Option<Member> = sqlx::query_as("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(member)
    }

    /// Members of a group in insertion order.
    pub async fn find_by_group_id(&self, group_id: i32) -> Result<Vec<Member>, Error> {
        let members: Vec<Member> =
            sqlx::query_as("SELECT * FROM members WHERE group_id = $1 ORDER BY id")
                .bind(group_id)
                .fetch_all(self.storage.get_pool())
                .await?;

        Ok(members)
    }

    /// An existing member of the group matching either contact field.
    /// Absent fields never match; SQL equality against NULL is not satisfied.
    pub async fn find_duplicate(
        &self,
        group_id: i32,
        email: Option<&str>,
        student_id: Option<&str>,
    ) -> Result<Option<Member>, Error> {
        let member: Option<Member> = sqlx::query_as(
            "SELECT * FROM members WHERE group_id = $1 AND (email = $2 OR student_id = $3)",
        )
        .bind(group_id)
        .bind(email)
        .bind(student_id)
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(member)
    }

    /// Exact match on (group, email); no trimming or case folding.
    pub async fn find_by_group_and_email(
        &self,
        group_id: i32,
        email: &str,
    ) -> Result<Option<Member>, Error> {
        let member: Option<Member> =
            sqlx::query_as("SELECT * FROM members WHERE group_id = $1 AND email = $2")
                .bind(group_id)
                .bind(email)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(member)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(self.storage.get_pool())
            .await?;

        Ok(())
    }
}
