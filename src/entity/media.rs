use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{hydrate_row, Row};
use crate::error::AppError;

/// Opaque media tag. Only `"1"`, `"2"` and `"3"` are valid, and no meaning
/// is attached to them here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(1))")]
pub enum MediaType {
    #[sea_orm(string_value = "1")]
    #[serde(rename = "1")]
    One,
    #[sea_orm(string_value = "2")]
    #[serde(rename = "2")]
    Two,
    #[sea_orm(string_value = "3")]
    #[serde(rename = "3")]
    Three,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }
}

impl FromStr for MediaType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            other => Err(AppError::InvalidMediaType(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: Option<String>,
    #[sea_orm(column_name = "Post_id")]
    #[serde(rename = "Post_id")]
    pub post_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id"
    )]
    Post,
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
        row.insert("type".to_string(), self.media_type.as_str().into());
        row.insert("url".to_string(), self.url.clone().into());
        row.insert("Post_id".to_string(), self.post_id.into());
        row
    }

    pub fn hydrate(row: Row) -> Result<Self, AppError> {
        hydrate_row(row)
    }
}
