use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{hydrate_row, Row};
use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Follower")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The user who follows.
    pub user_from_id: i32,
    /// The user being followed.
    pub user_to_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserFromId",
        to = "super::user::Column::Id"
    )]
    Source,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserToId",
        to = "super::user::Column::Id"
    )]
    Target,
}

impl ActiveModelBehavior for ActiveModel {}

/// user -> users following them
pub struct Followers;

impl Linked for Followers {
    type FromEntity = super::user::Entity;
    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Target.def().rev(), Relation::Source.def()]
    }
}

/// user -> users they follow
pub struct Following;

impl Linked for Following {
    type FromEntity = super::user::Entity;
    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Source.def().rev(), Relation::Target.def()]
    }
}

/// follow edge -> initiating user
pub struct SourceUser;

impl Linked for SourceUser {
    type FromEntity = Entity;
    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Source.def()]
    }
}

/// follow edge -> followed user
pub struct TargetUser;

impl Linked for TargetUser {
    type FromEntity = Entity;
    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Target.def()]
    }
}

impl Model {
    pub fn serialize(&self) -> Row {
        let mut row = Row::new();
        row.insert("id".to_string(), self.id.into());
        row.insert("user_from_id".to_string(), self.user_from_id.into());
        row.insert("user_to_id".to_string(), self.user_to_id.into());
        row
    }

    pub fn hydrate(row: Row) -> Result<Self, AppError> {
        hydrate_row(row)
    }
}
