use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::{
    data::resolver::{eq_nullable, EntityResolver, NaturalKey},
    model::funding_reference::FundingReference,
};

struct FundingReferenceKey<'k>(&'k FundingReference);

impl NaturalKey for FundingReferenceKey<'_> {
    type Entity = entity::prelude::FundingReference;
    type ActiveModel = entity::funding_reference::ActiveModel;

    fn condition(&self) -> Condition {
        let reference = self.0;

        Condition::all()
            .add(entity::funding_reference::Column::Funder.eq(reference.funder.as_str()))
            .add(eq_nullable(
                entity::funding_reference::Column::Funderid,
                reference.funder_id.as_deref(),
            ))
            .add(eq_nullable(
                entity::funding_reference::Column::Funderidtyp,
                reference.funder_id_type.as_deref(),
            ))
            .add(eq_nullable(
                entity::funding_reference::Column::Grantnumber,
                reference.grant_number.as_deref(),
            ))
            .add(eq_nullable(
                entity::funding_reference::Column::Grantname,
                reference.grant_name.as_deref(),
            ))
            .add(eq_nullable(
                entity::funding_reference::Column::Awarduri,
                reference.award_uri.as_deref(),
            ))
    }

    fn into_active_model(self) -> Self::ActiveModel {
        let reference = self.0.clone();

        entity::funding_reference::ActiveModel {
            funder: ActiveValue::Set(reference.funder),
            funderid: ActiveValue::Set(reference.funder_id),
            funderidtyp: ActiveValue::Set(reference.funder_id_type),
            grantnumber: ActiveValue::Set(reference.grant_number),
            grantname: ActiveValue::Set(reference.grant_name),
            awarduri: ActiveValue::Set(reference.award_uri),
            ..Default::default()
        }
    }

    fn id(model: &entity::funding_reference::Model) -> i32 {
        model.id
    }
}

pub struct FundingReferenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FundingReferenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds or creates a funding reference by its full six-column key
    pub async fn resolve(&self, reference: &FundingReference) -> Result<i32, DbErr> {
        EntityResolver::new(self.db)
            .resolve(FundingReferenceKey(reference))
            .await
    }

    /// Links a funding reference to a resource.
    ///
    /// Both rows are looked up again before the association is written.
    ///
    /// # Returns
    /// - `Ok(true)` - Both rows exist and the link exists afterwards
    /// - `Ok(false)` - The resource or the funding reference does not exist
    /// - `Err(DbErr)` - A lookup or the insert failed
    pub async fn link_to_resource(
        &self,
        resource_id: i32,
        funding_reference_id: i32,
    ) -> Result<bool, DbErr> {
        let resource = entity::prelude::Resource::find_by_id(resource_id)
            .one(self.db)
            .await?;
        let reference = entity::prelude::FundingReference::find_by_id(funding_reference_id)
            .one(self.db)
            .await?;
        if resource.is_none() || reference.is_none() {
            return Ok(false);
        }

        EntityResolver::new(self.db)
            .link(
                Condition::all()
                    .add(entity::resource_has_funding_reference::Column::ResourceId.eq(resource_id))
                    .add(
                        entity::resource_has_funding_reference::Column::FundingReferenceId
                            .eq(funding_reference_id),
                    ),
                entity::resource_has_funding_reference::ActiveModel {
                    resource_id: ActiveValue::Set(resource_id),
                    funding_reference_id: ActiveValue::Set(funding_reference_id),
                },
            )
            .await?;

        Ok(true)
    }

    pub async fn get_by_resource_id(
        &self,
        resource_id: i32,
    ) -> Result<Vec<entity::funding_reference::Model>, DbErr> {
        let ids: Vec<i32> = entity::prelude::ResourceHasFundingReference::find()
            .select_only()
            .column(entity::resource_has_funding_reference::Column::FundingReferenceId)
            .filter(entity::resource_has_funding_reference::Column::ResourceId.eq(resource_id))
            .into_tuple()
            .all(self.db)
            .await?;

        entity::prelude::FundingReference::find()
            .filter(entity::funding_reference::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
