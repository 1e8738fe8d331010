use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{hydrate_row, Row};
use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::media::Entity")]
    Media,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn serialize(&self) -> Row {
        let mut row = Row::new();
        row.insert("id".to_string(), self.id.into());
        row.insert("user_id".to_string(), self.user_id.into());
        row
    }

    pub fn hydrate(row: Row) -> Result<Self, AppError> {
        hydrate_row(row)
    }
}
