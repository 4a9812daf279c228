use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(People::Name).string_len(120).not_null())
                    .col(ColumnDef::new(People::Height).integer().null())
                    .col(ColumnDef::new(People::Mass).integer().null())
                    .col(ColumnDef::new(People::BirthYear).string_len(20).null())
                    .col(ColumnDef::new(People::HairColor).string_len(50).null())
                    .col(ColumnDef::new(People::SkinColor).string_len(50).null())
                    .col(ColumnDef::new(People::EyeColor).string_len(50).null())
                    .col(ColumnDef::new(People::Gender).string_len(20).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    BirthYear,
    HairColor,
    SkinColor,
    EyeColor,
    Gender,
}
