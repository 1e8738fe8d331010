use log::debug;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, Set};

use crate::entity::{comment, post, user};
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct NewComment {
    pub commenttext: Option<String>,
    pub user_id: i32,
    pub post_id: i32,
}

pub async fn create_comment<C: ConnectionTrait>(db: &C, new_comment: NewComment) -> Result<comment::Model, AppError> {
    let inserted = comment::ActiveModel {
        commenttext: Set(new_comment.commenttext),
        user_id: Set(new_comment.user_id),
        post_id: Set(new_comment.post_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!("comment saved id={} post={}", inserted.id, inserted.post_id);
    Ok(inserted)
}

pub async fn find_comment<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<comment::Model>, AppError> {
    Ok(comment::Entity::find_by_id(id).one(db).await?)
}

pub async fn author_of_comment<C: ConnectionTrait>(
    db: &C,
    comment: &comment::Model,
) -> Result<user::Model, AppError> {
    comment
        .find_related(user::Entity)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User", comment.user_id))
}

pub async fn post_of_comment<C: ConnectionTrait>(
    db: &C,
    comment: &comment::Model,
) -> Result<post::Model, AppError> {
    comment
        .find_related(post::Entity)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Post", comment.post_id))
}

pub async fn delete_comment<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, AppError> {
    let res = comment::Entity::delete_by_id(id).exec(db).await?;
    debug!("comment removed id={} rows={}", id, res.rows_affected);
    Ok(res.rows_affected)
}
