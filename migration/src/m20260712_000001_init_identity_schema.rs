use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // User
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(uuid(User::Id).primary_key()) // UUID PK
                    .col(string(User::Username).not_null().unique_key())
                    .col(string(User::Email).not_null().unique_key())
                    .col(string(User::FirstName).not_null())
                    .col(string(User::LastName).not_null())
                    .col(string(User::PasswordHash).not_null())
                    .col(boolean(User::IsStaff).not_null().default(false))
                    .col(boolean(User::IsSuperuser).not_null().default(false))
                    .col(boolean(User::IsActive).not_null().default(true))
                    .col(
                        timestamp(User::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Session (Ref User)
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(pk_auto(Session::Id).primary_key()) // Integer PK (Ephemeral)
                    .col(string(Session::SessionTokenHash).not_null())
                    .col(string_null(Session::IpAddress))
                    .col(string_null(Session::UserAgent))
                    .col(
                        timestamp(Session::ValidFrom)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp(Session::ExpiresAt).not_null())
                    .col(
                        timestamp(Session::LastRefresh)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(uuid(Session::UserId).not_null()) // UUID FK -> User
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-session-user")
                            .from(Session::Table, Session::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx-session-session-token-hash")
                            .col(Session::SessionTokenHash)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

// --- IDEN Definitions ---

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    FirstName,
    LastName,
    PasswordHash,
    IsStaff,
    IsSuperuser,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Session {
    #[sea_orm(iden = "sessions")]
    Table,
    Id,
    SessionTokenHash,
    IpAddress,
    UserAgent,
    ValidFrom,
    ExpiresAt,
    LastRefresh,
    UserId,
}
