//! Explicit association accessors over the schema.
//!
//! Every function takes the connection (or transaction) it runs on, so
//! callers decide the transaction boundary. Constraint violations come back
//! untouched inside [`AppError::Db`].

mod comment;
mod follower;
mod media;
mod post;
mod user;

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

use crate::entity;
use crate::error::AppError;

pub use comment::{
    author_of_comment, create_comment, delete_comment, find_comment, post_of_comment, NewComment,
};
pub use follower::{
    follow, follow_source, follow_target, list_follower_rows, list_followers,
    list_following, list_following_rows, unfollow,
};
pub use media::{create_media, delete_media, find_media, post_of_media, NewMedia};
pub use post::{
    author_of_post, create_post, delete_post, find_post, list_comments_by_post,
    list_media_by_post,
};
pub use user::{
    create_user, delete_user, find_user, find_user_by_username, list_comments_by_user,
    list_posts_by_user, NewUser,
};

/// Row count per table, in dependency order.
pub async fn row_counts<C: ConnectionTrait>(db: &C) -> Result<Vec<(&'static str, u64)>, AppError> {
    Ok(vec![
        ("User", entity::user::Entity::find().count(db).await?),
        ("Follower", entity::follower::Entity::find().count(db).await?),
        ("Post", entity::post::Entity::find().count(db).await?),
        ("Comment", entity::comment::Entity::find().count(db).await?),
        ("Media", entity::media::Entity::find().count(db).await?),
    ])
}
