use entity::role::RoleScope;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Kind of contributor that carries roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleOwner {
    ContributorPerson,
    ContributorInstitution,
}

impl RoleOwner {
    /// Role scopes applicable to this kind of contributor
    pub fn scopes(self) -> [RoleScope; 2] {
        match self {
            RoleOwner::ContributorPerson => [RoleScope::Person, RoleScope::Both],
            RoleOwner::ContributorInstitution => [RoleScope::Institution, RoleScope::Both],
        }
    }
}

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every role applicable to the given kind of contributor
    pub async fn get_by_owner(&self, owner: RoleOwner) -> Result<Vec<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Scope.is_in(owner.scopes()))
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every role link of a contributor, then inserts one link per role id.
    ///
    /// # Notes
    /// - If you need transactional behavior, pass a transaction as the connection
    pub async fn replace_links(
        &self,
        owner: RoleOwner,
        owner_id: i32,
        role_ids: &[i32],
    ) -> Result<(), DbErr> {
        match owner {
            RoleOwner::ContributorPerson => {
                entity::prelude::ContributorPersonHasRole::delete_many()
                    .filter(
                        entity::contributor_person_has_role::Column::ContributorPersonId
                            .eq(owner_id),
                    )
                    .exec(self.db)
                    .await?;

                if role_ids.is_empty() {
                    return Ok(());
                }

                let links = role_ids.iter().map(|role_id| {
                    entity::contributor_person_has_role::ActiveModel {
                        contributor_person_id: ActiveValue::Set(owner_id),
                        role_id: ActiveValue::Set(*role_id),
                    }
                });
                entity::prelude::ContributorPersonHasRole::insert_many(links)
                    .exec_without_returning(self.db)
                    .await?;
            }
            RoleOwner::ContributorInstitution => {
                entity::prelude::ContributorInstitutionHasRole::delete_many()
                    .filter(
                        entity::contributor_institution_has_role::Column::ContributorInstitutionId
                            .eq(owner_id),
                    )
                    .exec(self.db)
                    .await?;

                if role_ids.is_empty() {
                    return Ok(());
                }

                let links = role_ids.iter().map(|role_id| {
                    entity::contributor_institution_has_role::ActiveModel {
                        contributor_institution_id: ActiveValue::Set(owner_id),
                        role_id: ActiveValue::Set(*role_id),
                    }
                });
                entity::prelude::ContributorInstitutionHasRole::insert_many(links)
                    .exec_without_returning(self.db)
                    .await?;
            }
        }

        Ok(())
    }

    /// Returns the role ids linked to a contributor
    pub async fn get_role_ids(&self, owner: RoleOwner, owner_id: i32) -> Result<Vec<i32>, DbErr> {
        match owner {
            RoleOwner::ContributorPerson => {
                entity::prelude::ContributorPersonHasRole::find()
                    .select_only()
                    .column(entity::contributor_person_has_role::Column::RoleId)
                    .filter(
                        entity::contributor_person_has_role::Column::ContributorPersonId
                            .eq(owner_id),
                    )
                    .into_tuple::<i32>()
                    .all(self.db)
                    .await
            }
            RoleOwner::ContributorInstitution => {
                entity::prelude::ContributorInstitutionHasRole::find()
                    .select_only()
                    .column(entity::contributor_institution_has_role::Column::RoleId)
                    .filter(
                        entity::contributor_institution_has_role::Column::ContributorInstitutionId
                            .eq(owner_id),
                    )
                    .into_tuple::<i32>()
                    .all(self.db)
                    .await
            }
        }
    }
}
