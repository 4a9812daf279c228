use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // NULLs compare distinct, so each index only constrains rows of its own kind.
        manager
            .create_index(
                Index::create()
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::ItemType)
                    .col(Favorites::PersonId)
                    .name("uq_favorites_user_person")
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::ItemType)
                    .col(Favorites::PlanetId)
                    .name("uq_favorites_user_planet")
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Favorites::Table)
                    .col(Favorites::PersonId)
                    .name("idx_favorites_person_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Favorites::Table)
                    .col(Favorites::PlanetId)
                    .name("idx_favorites_planet_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_favorites_planet_id",
            "idx_favorites_person_id",
            "uq_favorites_user_planet",
            "uq_favorites_user_person",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum Favorites {
    Table,
    UserId,
    ItemType,
    PersonId,
    PlanetId,
}
