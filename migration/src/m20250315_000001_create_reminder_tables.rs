use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建提醒表
        manager
            .create_table(
                Table::create()
                    .table(Reminders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reminders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reminders::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Reminders::Title).string().not_null())
                    .col(ColumnDef::new(Reminders::Notes).text().null())
                    .col(ColumnDef::new(Reminders::DueAt).big_integer().not_null())
                    .col(
                        ColumnDef::new(Reminders::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reminders::Notified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Reminders::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Reminders::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reminders::Table, Reminders::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Notifications::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::NotificationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Content).text().null())
                    .col(ColumnDef::new(Notifications::ReferenceType).string().null())
                    .col(
                        ColumnDef::new(Notifications::ReferenceId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 提醒表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reminders_user_due_at")
                    .table(Reminders::Table)
                    .col(Reminders::UserId)
                    .col(Reminders::DueAt)
                    .to_owned(),
            )
            .await?;

        // 定时任务扫描到期提醒使用的索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reminders_notified_completed_due_at")
                    .table(Reminders::Table)
                    .col(Reminders::Notified)
                    .col(Reminders::Completed)
                    .col(Reminders::DueAt)
                    .to_owned(),
            )
            .await?;

        // 通知表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_user_is_read")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .col(Notifications::IsRead)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_created_at")
                    .table(Notifications::Table)
                    .col(Notifications::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reminders::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Reminders {
    #[sea_orm(iden = "reminders")]
    Table,
    Id,
    UserId,
    Title,
    Notes,
    DueAt,
    Completed,
    Notified,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    UserId,
    NotificationType,
    Title,
    Content,
    ReferenceType,
    ReferenceId,
    IsRead,
    CreatedAt,
}
