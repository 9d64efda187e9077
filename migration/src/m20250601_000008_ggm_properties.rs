use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000002_resource::Resource;

static FK_RESOURCE_HAS_GGM_PROPERTIES_RESOURCE_ID: &str =
    "fk-resource_has_ggm_properties-resource_id";
static FK_RESOURCE_HAS_GGM_PROPERTIES_GGM_PROPERTIES_ID: &str =
    "fk-resource_has_ggm_properties-ggm_properties_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GgmProperties::Table)
                    .if_not_exists()
                    .col(pk_auto(GgmProperties::Id))
                    .col(string_len(GgmProperties::ModelName, 100))
                    .col(string_null(GgmProperties::CelestialBody))
                    .col(string_null(GgmProperties::ProductType))
                    .col(integer_null(GgmProperties::Degree))
                    .col(string_null(GgmProperties::Errors))
                    .col(text_null(GgmProperties::ErrorHandlingApproach))
                    .col(string_null(GgmProperties::TideSystem))
                    .to_owned(),
            )
            .await?;

        // One properties row per resource, so the resource id alone is the key
        manager
            .create_table(
                Table::create()
                    .table(ResourceHasGgmProperties::Table)
                    .if_not_exists()
                    .col(integer(ResourceHasGgmProperties::ResourceId).primary_key())
                    .col(integer_uniq(ResourceHasGgmProperties::GgmPropertiesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESOURCE_HAS_GGM_PROPERTIES_RESOURCE_ID)
                            .from(
                                ResourceHasGgmProperties::Table,
                                ResourceHasGgmProperties::ResourceId,
                            )
                            .to(Resource::Table, Resource::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESOURCE_HAS_GGM_PROPERTIES_GGM_PROPERTIES_ID)
                            .from(
                                ResourceHasGgmProperties::Table,
                                ResourceHasGgmProperties::GgmPropertiesId,
                            )
                            .to(GgmProperties::Table, GgmProperties::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ResourceHasGgmProperties::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(GgmProperties::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum GgmProperties {
    #[sea_orm(iden = "GGM_Properties")]
    Table,
    Id,
    ModelName,
    CelestialBody,
    ProductType,
    Degree,
    Errors,
    ErrorHandlingApproach,
    TideSystem,
}

#[derive(DeriveIden)]
enum ResourceHasGgmProperties {
    #[sea_orm(iden = "Resource_has_GGM_Properties")]
    Table,
    ResourceId,
    GgmPropertiesId,
}
