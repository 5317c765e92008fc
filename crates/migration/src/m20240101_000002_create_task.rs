//! Create `task` table with FK to `user`.
//!
//! Holds the task references carried by each user record; task management
//! endpoints are out of scope, so rows only ever exist via external tooling.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(uuid(Task::Id).primary_key())
                    .col(uuid(Task::UserId).not_null())
                    .col(string_len(Task::Title, 255).not_null())
                    .col(boolean(Task::Done).not_null())
                    .col(timestamp_with_time_zone(Task::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_user")
                            .from(Task::Table, Task::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Task::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Task { Table, Id, UserId, Title, Done, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
