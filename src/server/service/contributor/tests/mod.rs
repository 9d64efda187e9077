mod save_institution;

use geometa_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

use super::*;

use crate::server::data::role::RoleRepository;

fn submission(value: serde_json::Value) -> FormData {
    FormData::from_json(value).unwrap()
}

/// Sorted names of the roles linked to a contributor
async fn role_names(
    test: &TestContext,
    owner: RoleOwner,
    owner_id: i32,
) -> Result<Vec<String>, TestError> {
    let role_ids = RoleRepository::new(&test.db)
        .get_role_ids(owner, owner_id)
        .await?;
    let mut names: Vec<String> = entity::prelude::Role::find()
        .filter(entity::role::Column::Id.is_in(role_ids))
        .all(&test.db)
        .await?
        .into_iter()
        .map(|role| role.name)
        .collect();
    names.sort();

    Ok(names)
}
