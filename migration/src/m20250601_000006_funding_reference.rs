use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000002_resource::Resource, util::junction_table};

static IDX_FUNDING_REFERENCE_FUNDER: &str = "idx-funding_reference-funder";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FundingReference::Table)
                    .if_not_exists()
                    .col(pk_auto(FundingReference::Id))
                    .col(string(FundingReference::Funder))
                    .col(string_null(FundingReference::Funderid))
                    .col(string_null(FundingReference::Funderidtyp))
                    .col(string_null(FundingReference::Grantnumber))
                    .col(string_null(FundingReference::Grantname))
                    .col(string_null(FundingReference::Awarduri))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FUNDING_REFERENCE_FUNDER)
                    .table(FundingReference::Table)
                    .col(FundingReference::Funder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(junction_table(
                ResourceHasFundingReference::Table,
                ResourceHasFundingReference::ResourceId,
                Resource::Table,
                Resource::Id,
                ResourceHasFundingReference::FundingReferenceId,
                FundingReference::Table,
                FundingReference::Id,
                (
                    "fk-resource_has_funding_reference-resource_id",
                    "fk-resource_has_funding_reference-funding_reference_id",
                ),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ResourceHasFundingReference::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(FundingReference::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FundingReference {
    #[sea_orm(iden = "Funding_Reference")]
    Table,
    Id,
    Funder,
    Funderid,
    Funderidtyp,
    Grantnumber,
    Grantname,
    Awarduri,
}

#[derive(DeriveIden, Clone, Copy)]
enum ResourceHasFundingReference {
    #[sea_orm(iden = "Resource_has_Funding_Reference")]
    Table,
    ResourceId,
    FundingReferenceId,
}
