//! Association tables filled by form groups outside the persistence core.
//!
//! Only the resource side carries a foreign key here; the linked tables are owned elsewhere.

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000002_resource::Resource;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for link in ExternalLink::ALL {
            let (table, column) = link.idens();

            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(integer(ExternalLink::ResourceId))
                        .col(integer(column))
                        .primary_key(Index::create().col(ExternalLink::ResourceId).col(column))
                        .foreign_key(
                            ForeignKey::create()
                                .name(link.fk_name())
                                .from(table, ExternalLink::ResourceId)
                                .to(Resource::Table, Resource::Id),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for link in ExternalLink::ALL.iter().rev() {
            let (table, _) = link.idens();

            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum ExternalLink {
    #[sea_orm(iden = "Resource_has_Contact_Person")]
    ContactPerson,
    #[sea_orm(iden = "Resource_has_Originating_Laboratory")]
    OriginatingLaboratory,
    #[sea_orm(iden = "Resource_has_Related_Work")]
    RelatedWork,
    #[sea_orm(iden = "Resource_has_Thesaurus_Keywords")]
    ThesaurusKeywords,
    #[sea_orm(iden = "Resource_has_Free_Keywords")]
    FreeKeywords,
    ResourceId,
    ContactPersonId,
    OriginatingLaboratoryId,
    RelatedWorkId,
    ThesaurusKeywordsId,
    FreeKeywordsId,
}

impl ExternalLink {
    const ALL: [ExternalLink; 5] = [
        ExternalLink::ContactPerson,
        ExternalLink::OriginatingLaboratory,
        ExternalLink::RelatedWork,
        ExternalLink::ThesaurusKeywords,
        ExternalLink::FreeKeywords,
    ];

    /// Table and linked-id column for a table variant
    fn idens(self) -> (ExternalLink, ExternalLink) {
        let column = match self {
            ExternalLink::ContactPerson => ExternalLink::ContactPersonId,
            ExternalLink::OriginatingLaboratory => ExternalLink::OriginatingLaboratoryId,
            ExternalLink::RelatedWork => ExternalLink::RelatedWorkId,
            ExternalLink::ThesaurusKeywords => ExternalLink::ThesaurusKeywordsId,
            _ => ExternalLink::FreeKeywordsId,
        };

        (self, column)
    }

    fn fk_name(self) -> &'static str {
        match self {
            ExternalLink::ContactPerson => "fk-resource_has_contact_person-resource_id",
            ExternalLink::OriginatingLaboratory => {
                "fk-resource_has_originating_laboratory-resource_id"
            }
            ExternalLink::RelatedWork => "fk-resource_has_related_work-resource_id",
            ExternalLink::ThesaurusKeywords => "fk-resource_has_thesaurus_keywords-resource_id",
            _ => "fk-resource_has_free_keywords-resource_id",
        }
    }
}
