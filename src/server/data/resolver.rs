//! Generic find-or-create and insert-if-absent primitives.
//!
//! Every entity with a natural key is resolved through [`EntityResolver::resolve`]: one SELECT
//! matching all key columns and, when nothing matches, one INSERT. The two statements are not
//! atomic, so two concurrent submissions resolving the same key may both insert. Natural keys
//! containing nullable columns cannot be covered by a plain unique index on every backend,
//! which is why the gap is accepted here rather than closed with an upsert.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PrimaryKeyTrait, QueryFilter, Value,
};

/// Builds a null-safe equality condition.
///
/// `column = value` when a value is given, `column IS NULL` otherwise. A plain `eq(None)`
/// would render `column = NULL`, which never matches.
pub fn eq_nullable<Col, V>(column: Col, value: Option<V>) -> Condition
where
    Col: ColumnTrait,
    V: Into<Value>,
{
    match value {
        Some(value) => Condition::all().add(column.eq(value)),
        None => Condition::all().add(column.is_null()),
    }
}

/// An entity identified by the values of its columns rather than by its surrogate id
pub trait NaturalKey {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>;

    /// Condition matching every natural-key column with null-safe equality
    fn condition(&self) -> Condition;

    /// Row to insert when no existing row matches
    fn into_active_model(self) -> Self::ActiveModel;

    /// Surrogate id of a matching row
    fn id(model: &<Self::Entity as EntityTrait>::Model) -> i32;
}

pub struct EntityResolver<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EntityResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the id of the row matching `key`, inserting it first when absent.
    ///
    /// Natural-key columns are never updated on an existing row.
    ///
    /// # Arguments
    /// - `key` - Natural key of the entity to resolve
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the existing or newly inserted row
    /// - `Err(DbErr)` - The lookup or the insert failed
    pub async fn resolve<K>(&self, key: K) -> Result<i32, DbErr>
    where
        K: NaturalKey,
        <<K::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<i32>,
    {
        if let Some(existing) = K::Entity::find()
            .filter(key.condition())
            .one(self.db)
            .await?
        {
            return Ok(K::id(&existing));
        }

        let inserted = K::Entity::insert(key.into_active_model())
            .exec(self.db)
            .await?;

        Ok(inserted.last_insert_id.into())
    }

    /// Inserts an association row unless a row matching `condition` already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - The row was inserted
    /// - `Ok(false)` - An equal row already existed
    /// - `Err(DbErr)` - The lookup or the insert failed
    pub async fn link<A>(&self, condition: Condition, row: A) -> Result<bool, DbErr>
    where
        A: ActiveModelTrait,
    {
        if A::Entity::find()
            .filter(condition)
            .one(self.db)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        A::Entity::insert(row).exec_without_returning(self.db).await?;

        Ok(true)
    }
}
