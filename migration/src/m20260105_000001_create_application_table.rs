use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(string(Application::InGameName))
                    .col(string(Application::PlayerId))
                    .col(string(Application::Region))
                    .col(integer(Application::Age))
                    .col(string(Application::CurrentRank))
                    .col(double(Application::Kd))
                    .col(string(Application::Roles))
                    .col(string(Application::Availability))
                    .col(text(Application::PreviousExperience))
                    .col(string(Application::ContactMethod))
                    .col(string_null(Application::WhatsappNumber))
                    .col(string_null(Application::TelegramUsername))
                    .col(string_null(Application::Discord))
                    .col(text_null(Application::Notes))
                    .col(string(Application::Status).default("PENDING"))
                    .col(
                        timestamp_with_time_zone(Application::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    InGameName,
    PlayerId,
    Region,
    Age,
    CurrentRank,
    Kd,
    Roles,
    Availability,
    PreviousExperience,
    ContactMethod,
    WhatsappNumber,
    TelegramUsername,
    Discord,
    Notes,
    Status,
    CreatedAt,
}
