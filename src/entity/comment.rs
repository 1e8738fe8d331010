use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{hydrate_row, Row};
use crate::error::AppError;

// `User_id` / `Post_id` keep their capitalised column names on the wire.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub commenttext: Option<String>,
    #[sea_orm(column_name = "User_id")]
    #[serde(rename = "User_id")]
    pub user_id: i32,
    #[sea_orm(column_name = "Post_id")]
    #[serde(rename = "Post_id")]
    pub post_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id"
    )]
    Post,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn serialize(&self) -> Row {
        let mut row = Row::new();
        row.insert("id".to_string(), self.id.into());
        row.insert("commenttext".to_string(), self.commenttext.clone().into());
        row.insert("User_id".to_string(), self.user_id.into());
        row.insert("Post_id".to_string(), self.post_id.into());
        row
    }

    pub fn hydrate(row: Row) -> Result<Self, AppError> {
        hydrate_row(row)
    }
}
