use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use tracing::warn;

use crate::server::{
    data::role::{RoleOwner, RoleRepository},
    error::Error,
    model::role::RoleNames,
};

/// Valid role names for one kind of contributor, mapped to their ids
#[derive(Debug, Clone)]
pub struct RoleVocabulary {
    owner: RoleOwner,
    ids: HashMap<String, i32>,
}

impl RoleVocabulary {
    /// Loads every role whose scope applies to `owner`
    pub async fn load<C: ConnectionTrait>(db: &C, owner: RoleOwner) -> Result<Self, Error> {
        let roles = RoleRepository::new(db).get_by_owner(owner).await?;

        Ok(Self {
            owner,
            ids: roles.into_iter().map(|role| (role.name, role.id)).collect(),
        })
    }

    pub fn owner(&self) -> RoleOwner {
        self.owner
    }

    pub fn id_of(&self, name: &str) -> Option<i32> {
        self.ids.get(name).copied()
    }
}

pub struct RoleService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleService<'a, C> {
    /// Creates a new instance of [`RoleService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces the complete role set of a contributor.
    ///
    /// Existing links are deleted and one link is inserted per known role name. Names missing
    /// from the vocabulary are skipped with a warning. Every save must therefore carry the full
    /// desired role set.
    ///
    /// # Arguments
    /// - `owner_id` - Id of the contributor person or institution
    /// - `roles` - Submitted role names
    /// - `vocabulary` - Roles applicable to the contributor kind
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of role links written
    /// - `Err(Error::DbErr)` - Deleting or inserting links failed
    pub async fn replace_roles(
        &self,
        owner_id: i32,
        roles: &RoleNames,
        vocabulary: &RoleVocabulary,
    ) -> Result<usize, Error> {
        let mut role_ids = Vec::with_capacity(roles.len());
        for name in roles.iter() {
            match vocabulary.id_of(name) {
                Some(role_id) if !role_ids.contains(&role_id) => role_ids.push(role_id),
                Some(_) => {}
                None => warn!(
                    owner = ?vocabulary.owner(),
                    owner_id,
                    role = name,
                    "Skipping unknown role"
                ),
            }
        }

        RoleRepository::new(self.db)
            .replace_links(vocabulary.owner(), owner_id, &role_ids)
            .await?;

        Ok(role_ids.len())
    }
}
