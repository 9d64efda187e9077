use sea_orm_migration::{prelude::*, schema::*};

use crate::seed;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_name_table(
            manager,
            ResourceType::Table,
            ResourceType::Id,
            ResourceType::Name,
            seed::RESOURCE_TYPES,
        )
        .await?;
        create_name_table(
            manager,
            TitleType::Table,
            TitleType::Id,
            TitleType::Name,
            seed::TITLE_TYPES,
        )
        .await?;
        create_name_table(
            manager,
            ModelType::Table,
            ModelType::Id,
            ModelType::Name,
            seed::MODEL_TYPES,
        )
        .await?;
        create_name_table(
            manager,
            MathematicalRepresentation::Table,
            MathematicalRepresentation::Id,
            MathematicalRepresentation::Name,
            seed::MATHEMATICAL_REPRESENTATIONS,
        )
        .await?;
        create_name_table(
            manager,
            FileFormat::Table,
            FileFormat::Id,
            FileFormat::Name,
            seed::FILE_FORMATS,
        )
        .await?;

        manager
            .create_table(
                Table::create()
                    .table(Language::Table)
                    .if_not_exists()
                    .col(pk_auto(Language::Id))
                    .col(string_uniq(Language::Name))
                    .col(string_uniq(Language::Code))
                    .to_owned(),
            )
            .await?;

        let mut languages = Query::insert();
        languages
            .into_table(Language::Table)
            .columns([Language::Code, Language::Name]);
        for (code, name) in seed::LANGUAGES {
            languages.values_panic([(*code).into(), (*name).into()]);
        }
        manager.exec_stmt(languages).await?;

        manager
            .create_table(
                Table::create()
                    .table(Rights::Table)
                    .if_not_exists()
                    .col(pk_auto(Rights::Id))
                    .col(string_uniq(Rights::Name))
                    .col(string(Rights::Identifier))
                    .col(string_null(Rights::Uri))
                    .to_owned(),
            )
            .await?;

        let mut rights = Query::insert();
        rights
            .into_table(Rights::Table)
            .columns([Rights::Name, Rights::Identifier, Rights::Uri]);
        for (name, identifier, uri) in seed::RIGHTS {
            rights.values_panic([(*name).into(), (*identifier).into(), (*uri).into()]);
        }
        manager.exec_stmt(rights).await?;

        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(string_uniq(Role::Name))
                    .col(string_len(Role::Scope, 16))
                    .to_owned(),
            )
            .await?;

        let mut roles = Query::insert();
        roles.into_table(Role::Table).columns([Role::Name, Role::Scope]);
        for (name, scope) in seed::ROLES {
            roles.values_panic([(*name).into(), (*scope).into()]);
        }
        manager.exec_stmt(roles).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rights::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Language::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FileFormat::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(MathematicalRepresentation::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ModelType::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TitleType::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResourceType::Table).to_owned())
            .await?;

        Ok(())
    }
}

/// Creates an `(id, name)` lookup table and seeds it in list order
async fn create_name_table<T>(
    manager: &SchemaManager<'_>,
    table: T,
    id: T,
    name: T,
    values: &[&str],
) -> Result<(), DbErr>
where
    T: Iden + Copy + 'static,
{
    manager
        .create_table(
            Table::create()
                .table(table)
                .if_not_exists()
                .col(pk_auto(id))
                .col(string_uniq(name))
                .to_owned(),
        )
        .await?;

    let mut insert = Query::insert();
    insert.into_table(table).columns([name]);
    for value in values {
        insert.values_panic([(*value).into()]);
    }
    manager.exec_stmt(insert).await?;

    Ok(())
}

#[derive(DeriveIden, Clone, Copy)]
pub enum ResourceType {
    #[sea_orm(iden = "Resource_Type")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum TitleType {
    #[sea_orm(iden = "Title_Type")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum ModelType {
    #[sea_orm(iden = "Model_Type")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum MathematicalRepresentation {
    #[sea_orm(iden = "Mathematical_Representation")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum FileFormat {
    #[sea_orm(iden = "File_Format")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Language {
    #[sea_orm(iden = "Language")]
    Table,
    Id,
    Name,
    Code,
}

#[derive(DeriveIden)]
pub enum Rights {
    #[sea_orm(iden = "Rights")]
    Table,
    Id,
    Name,
    Identifier,
    Uri,
}

#[derive(DeriveIden)]
pub enum Role {
    #[sea_orm(iden = "Role")]
    Table,
    Id,
    Name,
    Scope,
}
