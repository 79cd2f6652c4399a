use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260112_000001_create_user_table::Users, m20260112_000002_create_group_table::Groups,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(pk_auto(Messages::Id))
                    .col(integer(Messages::GroupId))
                    .col(integer(Messages::UserId))
                    .col(text(Messages::Message))
                    .col(
                        timestamp_with_time_zone(Messages::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_group_id")
                            .from(Messages::Table, Messages::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_user_id")
                            .from(Messages::Table, Messages::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing a group's messages reads in (group_id, timestamp) order
        manager
            .create_index(
                Index::create()
                    .name("idx_message_group_id_timestamp")
                    .table(Messages::Table)
                    .col(Messages::GroupId)
                    .col(Messages::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_group_id_timestamp")
                    .table(Messages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Messages {
    Table,
    Id,
    GroupId,
    UserId,
    Message,
    Timestamp,
}
