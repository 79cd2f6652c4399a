//! Group data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::group::{CreateGroupParams, Group};

/// Repository providing database operations for groups.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GroupRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every group ordered by ascending id.
    ///
    /// # Returns
    /// - `Ok(Vec<Group>)` - All groups, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Creates a new group.
    ///
    /// # Arguments
    /// - `params` - Name and creator of the group
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group with its assigned id
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the creator
    ///   does not exist
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, DbErr> {
        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(params.name),
            created_by: ActiveValue::Set(params.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    /// Checks whether a group with `group_id` exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Group exists
    /// - `Ok(false)` - No such group
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, group_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::Group::find_by_id(group_id)
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }
}
