use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{hydrate_row, Row};
use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "User")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    #[sea_orm(unique)]
    pub email: String,
}

/// Follow edges are reached through [`super::follower::Followers`] and
/// [`super::follower::Following`] since both columns point back here.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn serialize(&self) -> Row {
        let mut row = Row::new();
        row.insert("id".to_string(), self.id.into());
        row.insert("username".to_string(), self.username.clone().into());
        row.insert("firstname".to_string(), self.firstname.clone().into());
        row.insert("lastname".to_string(), self.lastname.clone().into());
        row.insert("email".to_string(), self.email.clone().into());
        row
    }

    pub fn hydrate(row: Row) -> Result<Self, AppError> {
        hydrate_row(row)
    }
}
