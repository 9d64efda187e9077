use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::resource::ResourceForm;

pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        resource_id: i32,
    ) -> Result<Option<entity::resource::Model>, DbErr> {
        entity::prelude::Resource::find_by_id(resource_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_doi(&self, doi: &str) -> Result<Option<entity::resource::Model>, DbErr> {
        entity::prelude::Resource::find()
            .filter(entity::resource::Column::Doi.eq(doi))
            .one(self.db)
            .await
    }

    /// Inserts a new resource row from the submitted fields
    pub async fn create(&self, form: &ResourceForm) -> Result<entity::resource::Model, DbErr> {
        entity::resource::ActiveModel {
            doi: ActiveValue::Set(form.doi.clone()),
            version: ActiveValue::Set(form.version),
            year: ActiveValue::Set(form.year),
            date_created: ActiveValue::Set(form.date_created),
            date_embargo_until: ActiveValue::Set(form.date_embargo_until),
            rights_id: ActiveValue::Set(form.rights_id),
            resource_type_id: ActiveValue::Set(form.resource_type_id),
            language_id: ActiveValue::Set(form.language_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the mutable fields of an existing resource, keeping its id and DOI
    pub async fn update(
        &self,
        resource_id: i32,
        form: &ResourceForm,
    ) -> Result<entity::resource::Model, DbErr> {
        entity::resource::ActiveModel {
            id: ActiveValue::Unchanged(resource_id),
            version: ActiveValue::Set(form.version),
            year: ActiveValue::Set(form.year),
            date_created: ActiveValue::Set(form.date_created),
            date_embargo_until: ActiveValue::Set(form.date_embargo_until),
            rights_id: ActiveValue::Set(form.rights_id),
            resource_type_id: ActiveValue::Set(form.resource_type_id),
            language_id: ActiveValue::Set(form.language_id),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes every row owned by or linked to a resource ahead of an update.
    ///
    /// Titles, descriptions and all ten resource association tables are cleared. The GGM
    /// properties link is kept since that row is updated in place.
    ///
    /// # Notes
    /// - If you need transactional behavior, pass a transaction as the connection
    pub async fn purge_children(&self, resource_id: i32) -> Result<u64, DbErr> {
        use entity::{prelude::*, *};

        let mut deleted = 0;
        deleted += self
            .delete_by_resource::<Description>(description::Column::ResourceId, resource_id)
            .await?;
        deleted += self
            .delete_by_resource::<Title>(title::Column::ResourceId, resource_id)
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasAuthor>(
                resource_has_author::Column::ResourceId,
                resource_id,
            )
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasContributorPerson>(
                resource_has_contributor_person::Column::ResourceId,
                resource_id,
            )
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasContributorInstitution>(
                resource_has_contributor_institution::Column::ResourceId,
                resource_id,
            )
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasContactPerson>(
                resource_has_contact_person::Column::ResourceId,
                resource_id,
            )
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasFundingReference>(
                resource_has_funding_reference::Column::ResourceId,
                resource_id,
            )
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasOriginatingLaboratory>(
                resource_has_originating_laboratory::Column::ResourceId,
                resource_id,
            )
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasRelatedWork>(
                resource_has_related_work::Column::ResourceId,
                resource_id,
            )
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasSpatialTemporalCoverage>(
                resource_has_spatial_temporal_coverage::Column::ResourceId,
                resource_id,
            )
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasThesaurusKeywords>(
                resource_has_thesaurus_keywords::Column::ResourceId,
                resource_id,
            )
            .await?;
        deleted += self
            .delete_by_resource::<ResourceHasFreeKeywords>(
                resource_has_free_keywords::Column::ResourceId,
                resource_id,
            )
            .await?;

        Ok(deleted)
    }

    /// Sets the GGM vocabulary foreign keys of a resource
    ///
    /// # Returns
    /// - `Ok(true)` - The resource row was updated
    /// - `Ok(false)` - No resource with this id exists
    pub async fn set_ggm_vocabulary(
        &self,
        resource_id: i32,
        model_type_id: i32,
        mathematical_representation_id: i32,
        file_format_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Resource::update_many()
            .col_expr(
                entity::resource::Column::ModelTypeId,
                Expr::value(model_type_id),
            )
            .col_expr(
                entity::resource::Column::MathematicalRepresentationId,
                Expr::value(mathematical_representation_id),
            )
            .col_expr(
                entity::resource::Column::FileFormatId,
                Expr::value(file_format_id),
            )
            .filter(entity::resource::Column::Id.eq(resource_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_resource<E: EntityTrait>(
        &self,
        column: E::Column,
        resource_id: i32,
    ) -> Result<u64, DbErr> {
        let result = E::delete_many()
            .filter(column.eq(resource_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
