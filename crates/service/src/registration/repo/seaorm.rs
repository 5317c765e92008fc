use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use uuid::Uuid;

use crate::registration::domain::UserRecord;
use crate::registration::errors::RepoError;
use crate::registration::repository::UserRepository;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

fn map_insert_err(e: DbErr) -> RepoError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return RepoError::Conflict;
    }
    if matches!(e, DbErr::RecordNotInserted) {
        return RepoError::NotSaved;
    }
    RepoError::Db(e.to_string())
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepoError> {
        let found = models::user::Entity::find()
            .filter(models::user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Db(e.to_string()))?;

        let Some(user) = found else {
            return Ok(None);
        };

        let tasks = models::task::Entity::find()
            .filter(models::task::Column::UserId.eq(user.id))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Db(e.to_string()))?;

        Ok(Some(UserRecord {
            id: user.id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            tasks: tasks.into_iter().map(|t| t.id).collect(),
        }))
    }

    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, RepoError> {
        let am = models::user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(Utc::now().into()),
        };
        let saved = am.insert(&self.db).await.map_err(map_insert_err)?;
        Ok(UserRecord {
            id: saved.id,
            username: saved.username,
            email: saved.email,
            password_hash: saved.password_hash,
            tasks: Vec::new(),
        })
    }
}
