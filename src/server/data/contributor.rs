//! Contributor persons and institutions.
//!
//! Contributors live in their own tables, separate from authors, even when the same person
//! appears in both roles.

use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use entity::{
    resource_has_contributor_institution as institution_link,
    resource_has_contributor_person as person_link,
};

use crate::server::{
    data::resolver::{eq_nullable, EntityResolver, NaturalKey},
    model::author::{InstitutionKey, PersonKey},
};

struct ContributorPersonKey<'k>(&'k PersonKey);

impl NaturalKey for ContributorPersonKey<'_> {
    type Entity = entity::prelude::ContributorPerson;
    type ActiveModel = entity::contributor_person::ActiveModel;

    fn condition(&self) -> Condition {
        Condition::all()
            .add(entity::contributor_person::Column::Familyname.eq(self.0.familyname.as_str()))
            .add(entity::contributor_person::Column::Givenname.eq(self.0.givenname.as_str()))
            .add(eq_nullable(
                entity::contributor_person::Column::Orcid,
                self.0.orcid.as_deref(),
            ))
    }

    fn into_active_model(self) -> Self::ActiveModel {
        entity::contributor_person::ActiveModel {
            familyname: ActiveValue::Set(self.0.familyname.clone()),
            givenname: ActiveValue::Set(self.0.givenname.clone()),
            orcid: ActiveValue::Set(self.0.orcid.clone()),
            ..Default::default()
        }
    }

    fn id(model: &entity::contributor_person::Model) -> i32 {
        model.id
    }
}

struct ContributorInstitutionKey<'k>(&'k InstitutionKey);

impl NaturalKey for ContributorInstitutionKey<'_> {
    type Entity = entity::prelude::ContributorInstitution;
    type ActiveModel = entity::contributor_institution::ActiveModel;

    fn condition(&self) -> Condition {
        Condition::all().add(entity::contributor_institution::Column::Name.eq(self.0.name.as_str()))
    }

    fn into_active_model(self) -> Self::ActiveModel {
        entity::contributor_institution::ActiveModel {
            name: ActiveValue::Set(self.0.name.clone()),
            ..Default::default()
        }
    }

    fn id(model: &entity::contributor_institution::Model) -> i32 {
        model.id
    }
}

pub struct ContributorPersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContributorPersonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn resolve(&self, person: &PersonKey) -> Result<i32, DbErr> {
        EntityResolver::new(self.db)
            .resolve(ContributorPersonKey(person))
            .await
    }

    pub async fn link_to_resource(
        &self,
        resource_id: i32,
        contributor_person_id: i32,
    ) -> Result<bool, DbErr> {
        EntityResolver::new(self.db)
            .link(
                Condition::all()
                    .add(person_link::Column::ResourceId.eq(resource_id))
                    .add(person_link::Column::ContributorPersonId.eq(contributor_person_id)),
                person_link::ActiveModel {
                    resource_id: ActiveValue::Set(resource_id),
                    contributor_person_id: ActiveValue::Set(contributor_person_id),
                },
            )
            .await
    }

    pub async fn get_ids_by_resource_id(&self, resource_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ResourceHasContributorPerson::find()
            .select_only()
            .column(person_link::Column::ContributorPersonId)
            .filter(person_link::Column::ResourceId.eq(resource_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}

pub struct ContributorInstitutionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContributorInstitutionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn resolve(&self, institution: &InstitutionKey) -> Result<i32, DbErr> {
        EntityResolver::new(self.db)
            .resolve(ContributorInstitutionKey(institution))
            .await
    }

    pub async fn link_to_resource(
        &self,
        resource_id: i32,
        institution_id: i32,
    ) -> Result<bool, DbErr> {
        EntityResolver::new(self.db)
            .link(
                Condition::all()
                    .add(institution_link::Column::ResourceId.eq(resource_id))
                    .add(institution_link::Column::ContributorInstitutionId.eq(institution_id)),
                institution_link::ActiveModel {
                    resource_id: ActiveValue::Set(resource_id),
                    contributor_institution_id: ActiveValue::Set(institution_id),
                },
            )
            .await
    }

    pub async fn get_ids_by_resource_id(&self, resource_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ResourceHasContributorInstitution::find()
            .select_only()
            .column(institution_link::Column::ContributorInstitutionId)
            .filter(institution_link::Column::ResourceId.eq(resource_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
