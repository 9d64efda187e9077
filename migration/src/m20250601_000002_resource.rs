use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_vocabulary::{
    FileFormat, Language, MathematicalRepresentation, ModelType, ResourceType, Rights, TitleType,
};

static FK_RESOURCE_RIGHTS_ID: &str = "fk-resource-rights_id";
static FK_RESOURCE_RESOURCE_TYPE_ID: &str = "fk-resource-resource_type_id";
static FK_RESOURCE_LANGUAGE_ID: &str = "fk-resource-language_id";
static FK_RESOURCE_MODEL_TYPE_ID: &str = "fk-resource-model_type_id";
static FK_RESOURCE_MATHEMATICAL_REPRESENTATION_ID: &str =
    "fk-resource-mathematical_representation_id";
static FK_RESOURCE_FILE_FORMAT_ID: &str = "fk-resource-file_format_id";
static FK_TITLE_RESOURCE_ID: &str = "fk-title-resource_id";
static FK_TITLE_TITLE_TYPE_ID: &str = "fk-title-title_type_id";
static FK_DESCRIPTION_RESOURCE_ID: &str = "fk-description-resource_id";
static IDX_TITLE_RESOURCE_ID: &str = "idx-title-resource_id";
static IDX_DESCRIPTION_RESOURCE_ID: &str = "idx-description-resource_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_auto(Resource::Id))
                    .col(string_null(Resource::Doi).unique_key())
                    .col(double_null(Resource::Version))
                    .col(integer(Resource::Year))
                    .col(date(Resource::DateCreated))
                    .col(date_null(Resource::DateEmbargoUntil))
                    .col(integer(Resource::RightsId))
                    .col(integer(Resource::ResourceTypeId))
                    .col(integer(Resource::LanguageId))
                    .col(integer_null(Resource::ModelTypeId))
                    .col(integer_null(Resource::MathematicalRepresentationId))
                    .col(integer_null(Resource::FileFormatId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESOURCE_RIGHTS_ID)
                            .from(Resource::Table, Resource::RightsId)
                            .to(Rights::Table, Rights::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESOURCE_RESOURCE_TYPE_ID)
                            .from(Resource::Table, Resource::ResourceTypeId)
                            .to(ResourceType::Table, ResourceType::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESOURCE_LANGUAGE_ID)
                            .from(Resource::Table, Resource::LanguageId)
                            .to(Language::Table, Language::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESOURCE_MODEL_TYPE_ID)
                            .from(Resource::Table, Resource::ModelTypeId)
                            .to(ModelType::Table, ModelType::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESOURCE_MATHEMATICAL_REPRESENTATION_ID)
                            .from(Resource::Table, Resource::MathematicalRepresentationId)
                            .to(
                                MathematicalRepresentation::Table,
                                MathematicalRepresentation::Id,
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESOURCE_FILE_FORMAT_ID)
                            .from(Resource::Table, Resource::FileFormatId)
                            .to(FileFormat::Table, FileFormat::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Title::Table)
                    .if_not_exists()
                    .col(pk_auto(Title::Id))
                    .col(text(Title::Text))
                    .col(integer(Title::TitleTypeId))
                    .col(integer(Title::ResourceId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TITLE_RESOURCE_ID)
                            .from(Title::Table, Title::ResourceId)
                            .to(Resource::Table, Resource::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TITLE_TITLE_TYPE_ID)
                            .from(Title::Table, Title::TitleTypeId)
                            .to(TitleType::Table, TitleType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TITLE_RESOURCE_ID)
                    .table(Title::Table)
                    .col(Title::ResourceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Description::Table)
                    .if_not_exists()
                    .col(pk_auto(Description::Id))
                    .col(string_len(Description::DescriptionType, 32))
                    .col(text(Description::Description))
                    .col(integer(Description::ResourceId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DESCRIPTION_RESOURCE_ID)
                            .from(Description::Table, Description::ResourceId)
                            .to(Resource::Table, Resource::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DESCRIPTION_RESOURCE_ID)
                    .table(Description::Table)
                    .col(Description::ResourceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Description::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Title::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    #[sea_orm(iden = "Resource")]
    Table,
    Id,
    Doi,
    Version,
    Year,
    DateCreated,
    DateEmbargoUntil,
    RightsId,
    ResourceTypeId,
    LanguageId,
    ModelTypeId,
    MathematicalRepresentationId,
    FileFormatId,
}

#[derive(DeriveIden)]
enum Title {
    #[sea_orm(iden = "Title")]
    Table,
    Id,
    Text,
    TitleTypeId,
    ResourceId,
}

#[derive(DeriveIden)]
enum Description {
    #[sea_orm(iden = "Description")]
    Table,
    Id,
    DescriptionType,
    Description,
    ResourceId,
}
