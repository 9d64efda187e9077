use sea_orm_migration::{prelude::*, schema::*};

static IDX_AFFILIATION_NAME: &str = "idx-affiliation-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Affiliation::Table)
                    .if_not_exists()
                    .col(pk_auto(Affiliation::Id))
                    .col(string(Affiliation::Name))
                    .col(string_null(Affiliation::RorId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AFFILIATION_NAME)
                    .table(Affiliation::Table)
                    .col(Affiliation::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AFFILIATION_NAME)
                    .table(Affiliation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Affiliation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Affiliation {
    #[sea_orm(iden = "Affiliation")]
    Table,
    Id,
    Name,
    RorId,
}
