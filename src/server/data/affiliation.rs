use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use entity::{
    author_has_affiliation as author_link,
    contributor_institution_has_affiliation as institution_link,
    contributor_person_has_affiliation as person_link,
};

use crate::server::data::resolver::{eq_nullable, EntityResolver, NaturalKey};

/// Entity an affiliation is attached to, with its id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffiliationOwner {
    Author(i32),
    ContributorPerson(i32),
    ContributorInstitution(i32),
}

struct AffiliationKey<'k> {
    name: &'k str,
    ror_id: Option<&'k str>,
}

impl NaturalKey for AffiliationKey<'_> {
    type Entity = entity::prelude::Affiliation;
    type ActiveModel = entity::affiliation::ActiveModel;

    fn condition(&self) -> Condition {
        Condition::all()
            .add(entity::affiliation::Column::Name.eq(self.name))
            .add(eq_nullable(entity::affiliation::Column::RorId, self.ror_id))
    }

    fn into_active_model(self) -> Self::ActiveModel {
        entity::affiliation::ActiveModel {
            name: ActiveValue::Set(self.name.to_string()),
            ror_id: ActiveValue::Set(self.ror_id.map(str::to_string)),
            ..Default::default()
        }
    }

    fn id(model: &entity::affiliation::Model) -> i32 {
        model.id
    }
}

pub struct AffiliationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AffiliationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds or creates the affiliation keyed by `(name, ror_id)`
    pub async fn resolve(&self, name: &str, ror_id: Option<&str>) -> Result<i32, DbErr> {
        EntityResolver::new(self.db)
            .resolve(AffiliationKey { name, ror_id })
            .await
    }

    /// Links an affiliation to its owner unless already linked
    pub async fn link(&self, owner: AffiliationOwner, affiliation_id: i32) -> Result<bool, DbErr> {
        let resolver = EntityResolver::new(self.db);

        match owner {
            AffiliationOwner::Author(author_id) => {
                resolver
                    .link(
                        Condition::all()
                            .add(author_link::Column::AuthorId.eq(author_id))
                            .add(author_link::Column::AffiliationId.eq(affiliation_id)),
                        author_link::ActiveModel {
                            author_id: ActiveValue::Set(author_id),
                            affiliation_id: ActiveValue::Set(affiliation_id),
                        },
                    )
                    .await
            }
            AffiliationOwner::ContributorPerson(contributor_person_id) => {
                resolver
                    .link(
                        Condition::all()
                            .add(person_link::Column::ContributorPersonId.eq(contributor_person_id))
                            .add(person_link::Column::AffiliationId.eq(affiliation_id)),
                        person_link::ActiveModel {
                            contributor_person_id: ActiveValue::Set(contributor_person_id),
                            affiliation_id: ActiveValue::Set(affiliation_id),
                        },
                    )
                    .await
            }
            AffiliationOwner::ContributorInstitution(institution_id) => {
                resolver
                    .link(
                        Condition::all()
                            .add(
                                institution_link::Column::ContributorInstitutionId
                                    .eq(institution_id),
                            )
                            .add(institution_link::Column::AffiliationId.eq(affiliation_id)),
                        institution_link::ActiveModel {
                            contributor_institution_id: ActiveValue::Set(institution_id),
                            affiliation_id: ActiveValue::Set(affiliation_id),
                        },
                    )
                    .await
            }
        }
    }

    /// Returns the affiliations linked to an owner
    pub async fn get_by_owner(
        &self,
        owner: AffiliationOwner,
    ) -> Result<Vec<entity::affiliation::Model>, DbErr> {
        let affiliation_ids: Vec<i32> = match owner {
            AffiliationOwner::Author(author_id) => {
                entity::prelude::AuthorHasAffiliation::find()
                    .select_only()
                    .column(author_link::Column::AffiliationId)
                    .filter(author_link::Column::AuthorId.eq(author_id))
                    .into_tuple()
                    .all(self.db)
                    .await?
            }
            AffiliationOwner::ContributorPerson(contributor_person_id) => {
                entity::prelude::ContributorPersonHasAffiliation::find()
                    .select_only()
                    .column(person_link::Column::AffiliationId)
                    .filter(person_link::Column::ContributorPersonId.eq(contributor_person_id))
                    .into_tuple()
                    .all(self.db)
                    .await?
            }
            AffiliationOwner::ContributorInstitution(contributor_institution_id) => {
                entity::prelude::ContributorInstitutionHasAffiliation::find()
                    .select_only()
                    .column(institution_link::Column::AffiliationId)
                    .filter(
                        institution_link::Column::ContributorInstitutionId
                            .eq(contributor_institution_id),
                    )
                    .into_tuple()
                    .all(self.db)
                    .await?
            }
        };

        entity::prelude::Affiliation::find()
            .filter(entity::affiliation::Column::Id.is_in(affiliation_ids))
            .all(self.db)
            .await
    }
}
