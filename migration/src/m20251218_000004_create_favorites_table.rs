use sea_orm_migration::{prelude::*, schema::*};

use super::m20251218_000001_create_user_table::User;
use super::m20251218_000002_create_planets_table::Planets;
use super::m20251218_000003_create_people_table::People;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::PlanetId))
                    .col(integer_null(Favorites::PeopleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user_id")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planet_id")
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_people_id")
                            .from(Favorites::Table, Favorites::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // NULLs are distinct in unique indexes, so each index only
                    // constrains rows of its own target kind.
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorites_user_planet_unique")
                            .col(Favorites::UserId)
                            .col(Favorites::PlanetId),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorites_user_people_unique")
                            .col(Favorites::UserId)
                            .col(Favorites::PeopleId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorites {
    Table,
    Id,
    UserId,
    PlanetId,
    PeopleId,
}
