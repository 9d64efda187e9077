use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250601_000001_vocabulary::Role, m20250601_000002_resource::Resource,
    m20250601_000003_affiliation::Affiliation, util::junction_table,
};

static IDX_CONTRIBUTOR_PERSON_NAME: &str = "idx-contributor_person-familyname-givenname";
static IDX_CONTRIBUTOR_INSTITUTION_NAME: &str = "idx-contributor_institution-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContributorPerson::Table)
                    .if_not_exists()
                    .col(pk_auto(ContributorPerson::Id))
                    .col(string(ContributorPerson::Familyname))
                    .col(string(ContributorPerson::Givenname))
                    .col(string_null(ContributorPerson::Orcid))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRIBUTOR_PERSON_NAME)
                    .table(ContributorPerson::Table)
                    .col(ContributorPerson::Familyname)
                    .col(ContributorPerson::Givenname)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContributorInstitution::Table)
                    .if_not_exists()
                    .col(pk_auto(ContributorInstitution::Id))
                    .col(string(ContributorInstitution::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRIBUTOR_INSTITUTION_NAME)
                    .table(ContributorInstitution::Table)
                    .col(ContributorInstitution::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(junction_table(
                ContributorPersonHasRole::Table,
                ContributorPersonHasRole::ContributorPersonId,
                ContributorPerson::Table,
                ContributorPerson::Id,
                ContributorPersonHasRole::RoleId,
                Role::Table,
                Role::Id,
                (
                    "fk-contributor_person_has_role-contributor_person_id",
                    "fk-contributor_person_has_role-role_id",
                ),
            ))
            .await?;

        manager
            .create_table(junction_table(
                ResourceHasContributorPerson::Table,
                ResourceHasContributorPerson::ResourceId,
                Resource::Table,
                Resource::Id,
                ResourceHasContributorPerson::ContributorPersonId,
                ContributorPerson::Table,
                ContributorPerson::Id,
                (
                    "fk-resource_has_contributor_person-resource_id",
                    "fk-resource_has_contributor_person-contributor_person_id",
                ),
            ))
            .await?;

        manager
            .create_table(junction_table(
                ContributorPersonHasAffiliation::Table,
                ContributorPersonHasAffiliation::ContributorPersonId,
                ContributorPerson::Table,
                ContributorPerson::Id,
                ContributorPersonHasAffiliation::AffiliationId,
                Affiliation::Table,
                Affiliation::Id,
                (
                    "fk-contributor_person_has_affiliation-contributor_person_id",
                    "fk-contributor_person_has_affiliation-affiliation_id",
                ),
            ))
            .await?;

        manager
            .create_table(junction_table(
                ContributorInstitutionHasRole::Table,
                ContributorInstitutionHasRole::ContributorInstitutionId,
                ContributorInstitution::Table,
                ContributorInstitution::Id,
                ContributorInstitutionHasRole::RoleId,
                Role::Table,
                Role::Id,
                (
                    "fk-contributor_institution_has_role-contributor_institution_id",
                    "fk-contributor_institution_has_role-role_id",
                ),
            ))
            .await?;

        manager
            .create_table(junction_table(
                ResourceHasContributorInstitution::Table,
                ResourceHasContributorInstitution::ResourceId,
                Resource::Table,
                Resource::Id,
                ResourceHasContributorInstitution::ContributorInstitutionId,
                ContributorInstitution::Table,
                ContributorInstitution::Id,
                (
                    "fk-resource_has_contributor_institution-resource_id",
                    "fk-resource_has_contributor_institution-contributor_institution_id",
                ),
            ))
            .await?;

        manager
            .create_table(junction_table(
                ContributorInstitutionHasAffiliation::Table,
                ContributorInstitutionHasAffiliation::ContributorInstitutionId,
                ContributorInstitution::Table,
                ContributorInstitution::Id,
                ContributorInstitutionHasAffiliation::AffiliationId,
                Affiliation::Table,
                Affiliation::Id,
                (
                    "fk-contributor_institution_has_affiliation-contributor_institution_id",
                    "fk-contributor_institution_has_affiliation-affiliation_id",
                ),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ContributorInstitutionHasAffiliation::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ResourceHasContributorInstitution::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ContributorInstitutionHasRole::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ContributorPersonHasAffiliation::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ResourceHasContributorPerson::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ContributorPersonHasRole::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContributorInstitution::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContributorPerson::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ContributorPerson {
    #[sea_orm(iden = "Contributor_Person")]
    Table,
    Id,
    Familyname,
    Givenname,
    Orcid,
}

#[derive(DeriveIden)]
enum ContributorInstitution {
    #[sea_orm(iden = "Contributor_Institution")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden, Clone, Copy)]
enum ContributorPersonHasRole {
    #[sea_orm(iden = "Contributor_Person_has_Role")]
    Table,
    ContributorPersonId,
    RoleId,
}

#[derive(DeriveIden, Clone, Copy)]
enum ResourceHasContributorPerson {
    #[sea_orm(iden = "Resource_has_Contributor_Person")]
    Table,
    ResourceId,
    ContributorPersonId,
}

#[derive(DeriveIden, Clone, Copy)]
enum ContributorPersonHasAffiliation {
    #[sea_orm(iden = "Contributor_Person_has_Affiliation")]
    Table,
    ContributorPersonId,
    AffiliationId,
}

#[derive(DeriveIden, Clone, Copy)]
enum ContributorInstitutionHasRole {
    #[sea_orm(iden = "Contributor_Institution_has_Role")]
    Table,
    ContributorInstitutionId,
    RoleId,
}

#[derive(DeriveIden, Clone, Copy)]
enum ResourceHasContributorInstitution {
    #[sea_orm(iden = "Resource_has_Contributor_Institution")]
    Table,
    ResourceId,
    ContributorInstitutionId,
}

#[derive(DeriveIden, Clone, Copy)]
enum ContributorInstitutionHasAffiliation {
    #[sea_orm(iden = "Contributor_Institution_has_Affiliation")]
    Table,
    ContributorInstitutionId,
    AffiliationId,
}
