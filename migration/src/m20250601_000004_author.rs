use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250601_000002_resource::Resource, m20250601_000003_affiliation::Affiliation,
    util::junction_table,
};

static IDX_AUTHOR_PERSON_NAME: &str = "idx-author_person-familyname-givenname";
static IDX_AUTHOR_INSTITUTION_NAME: &str = "idx-author_institution-institutionname";
static FK_AUTHOR_PERSON_ID: &str = "fk-author-person_id";
static FK_AUTHOR_INSTITUTION_ID: &str = "fk-author-institution_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthorPerson::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthorPerson::Id))
                    .col(string(AuthorPerson::Familyname))
                    .col(string(AuthorPerson::Givenname))
                    .col(string_null(AuthorPerson::Orcid))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUTHOR_PERSON_NAME)
                    .table(AuthorPerson::Table)
                    .col(AuthorPerson::Familyname)
                    .col(AuthorPerson::Givenname)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuthorInstitution::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthorInstitution::Id))
                    .col(string(AuthorInstitution::Institutionname))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUTHOR_INSTITUTION_NAME)
                    .table(AuthorInstitution::Table)
                    .col(AuthorInstitution::Institutionname)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(pk_auto(Author::Id))
                    .col(integer_null(Author::PersonId))
                    .col(integer_null(Author::InstitutionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AUTHOR_PERSON_ID)
                            .from(Author::Table, Author::PersonId)
                            .to(AuthorPerson::Table, AuthorPerson::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AUTHOR_INSTITUTION_ID)
                            .from(Author::Table, Author::InstitutionId)
                            .to(AuthorInstitution::Table, AuthorInstitution::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(junction_table(
                ResourceHasAuthor::Table,
                ResourceHasAuthor::ResourceId,
                Resource::Table,
                Resource::Id,
                ResourceHasAuthor::AuthorId,
                Author::Table,
                Author::Id,
                (
                    "fk-resource_has_author-resource_id",
                    "fk-resource_has_author-author_id",
                ),
            ))
            .await?;

        manager
            .create_table(junction_table(
                AuthorHasAffiliation::Table,
                AuthorHasAffiliation::AuthorId,
                Author::Table,
                Author::Id,
                AuthorHasAffiliation::AffiliationId,
                Affiliation::Table,
                Affiliation::Id,
                (
                    "fk-author_has_affiliation-author_id",
                    "fk-author_has_affiliation-affiliation_id",
                ),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthorHasAffiliation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResourceHasAuthor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AuthorInstitution::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AuthorPerson::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuthorPerson {
    #[sea_orm(iden = "Author_person")]
    Table,
    Id,
    Familyname,
    Givenname,
    Orcid,
}

#[derive(DeriveIden)]
enum AuthorInstitution {
    #[sea_orm(iden = "Author_institution")]
    Table,
    Id,
    Institutionname,
}

#[derive(DeriveIden)]
enum Author {
    #[sea_orm(iden = "Author")]
    Table,
    Id,
    PersonId,
    InstitutionId,
}

#[derive(DeriveIden, Clone, Copy)]
enum ResourceHasAuthor {
    #[sea_orm(iden = "Resource_has_Author")]
    Table,
    ResourceId,
    AuthorId,
}

#[derive(DeriveIden, Clone, Copy)]
enum AuthorHasAffiliation {
    #[sea_orm(iden = "Author_has_Affiliation")]
    Table,
    AuthorId,
    AffiliationId,
}
