//! Author persons, institutions and the exclusive-or `Author` link row.
//!
//! [`AuthorEntity`] is mapped onto the nullable `(person_id, institution_id)` column pair here
//! and nowhere else.

use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::{
    data::resolver::{eq_nullable, EntityResolver, NaturalKey},
    model::author::{AuthorEntity, InstitutionKey, PersonKey},
};

struct AuthorPersonKey<'k>(&'k PersonKey);

impl NaturalKey for AuthorPersonKey<'_> {
    type Entity = entity::prelude::AuthorPerson;
    type ActiveModel = entity::author_person::ActiveModel;

    fn condition(&self) -> Condition {
        Condition::all()
            .add(entity::author_person::Column::Familyname.eq(self.0.familyname.as_str()))
            .add(entity::author_person::Column::Givenname.eq(self.0.givenname.as_str()))
            .add(eq_nullable(
                entity::author_person::Column::Orcid,
                self.0.orcid.as_deref(),
            ))
    }

    fn into_active_model(self) -> Self::ActiveModel {
        entity::author_person::ActiveModel {
            familyname: ActiveValue::Set(self.0.familyname.clone()),
            givenname: ActiveValue::Set(self.0.givenname.clone()),
            orcid: ActiveValue::Set(self.0.orcid.clone()),
            ..Default::default()
        }
    }

    fn id(model: &entity::author_person::Model) -> i32 {
        model.id
    }
}

struct AuthorInstitutionKey<'k>(&'k InstitutionKey);

impl NaturalKey for AuthorInstitutionKey<'_> {
    type Entity = entity::prelude::AuthorInstitution;
    type ActiveModel = entity::author_institution::ActiveModel;

    fn condition(&self) -> Condition {
        Condition::all()
            .add(entity::author_institution::Column::Institutionname.eq(self.0.name.as_str()))
    }

    fn into_active_model(self) -> Self::ActiveModel {
        entity::author_institution::ActiveModel {
            institutionname: ActiveValue::Set(self.0.name.clone()),
            ..Default::default()
        }
    }

    fn id(model: &entity::author_institution::Model) -> i32 {
        model.id
    }
}

/// `(person_id, institution_id)` with exactly one side set
struct AuthorLinkKey {
    person_id: Option<i32>,
    institution_id: Option<i32>,
}

impl NaturalKey for AuthorLinkKey {
    type Entity = entity::prelude::Author;
    type ActiveModel = entity::author::ActiveModel;

    fn condition(&self) -> Condition {
        Condition::all()
            .add(eq_nullable(entity::author::Column::PersonId, self.person_id))
            .add(eq_nullable(
                entity::author::Column::InstitutionId,
                self.institution_id,
            ))
    }

    fn into_active_model(self) -> Self::ActiveModel {
        entity::author::ActiveModel {
            person_id: ActiveValue::Set(self.person_id),
            institution_id: ActiveValue::Set(self.institution_id),
            ..Default::default()
        }
    }

    fn id(model: &entity::author::Model) -> i32 {
        model.id
    }
}

pub struct AuthorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves the person or institution and then its `Author` link row.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the `Author` link row
    /// - `Err(DbErr)` - A lookup or insert failed
    pub async fn resolve(&self, author: &AuthorEntity) -> Result<i32, DbErr> {
        let resolver = EntityResolver::new(self.db);

        let key = match author {
            AuthorEntity::Person(person) => AuthorLinkKey {
                person_id: Some(resolver.resolve(AuthorPersonKey(person)).await?),
                institution_id: None,
            },
            AuthorEntity::Institution(institution) => AuthorLinkKey {
                person_id: None,
                institution_id: Some(resolver.resolve(AuthorInstitutionKey(institution)).await?),
            },
        };

        resolver.resolve(key).await
    }

    /// Links an author to a resource unless already linked
    pub async fn link_to_resource(&self, resource_id: i32, author_id: i32) -> Result<bool, DbErr> {
        EntityResolver::new(self.db)
            .link(
                Condition::all()
                    .add(entity::resource_has_author::Column::ResourceId.eq(resource_id))
                    .add(entity::resource_has_author::Column::AuthorId.eq(author_id)),
                entity::resource_has_author::ActiveModel {
                    resource_id: ActiveValue::Set(resource_id),
                    author_id: ActiveValue::Set(author_id),
                },
            )
            .await
    }

    /// Returns the ids of the `Author` rows linked to a resource
    pub async fn get_ids_by_resource_id(&self, resource_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ResourceHasAuthor::find()
            .select_only()
            .column(entity::resource_has_author::Column::AuthorId)
            .filter(entity::resource_has_author::Column::ResourceId.eq(resource_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
