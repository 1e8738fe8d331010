use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::{comment, media, post, user};
use crate::error::AppError;

pub async fn create_post<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<post::Model, AppError> {
    let inserted = post::ActiveModel {
        user_id: Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!("post saved id={} author={}", inserted.id, user_id);
    Ok(inserted)
}

pub async fn find_post<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<post::Model>, AppError> {
    Ok(post::Entity::find_by_id(id).one(db).await?)
}

pub async fn author_of_post<C: ConnectionTrait>(db: &C, post: &post::Model) -> Result<user::Model, AppError> {
    post.find_related(user::Entity)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User", post.user_id))
}

pub async fn list_comments_by_post<C: ConnectionTrait>(
    db: &C,
    post_id: i32,
) -> Result<Vec<comment::Model>, AppError> {
    Ok(comment::Entity::find()
        .filter(comment::Column::PostId.eq(post_id))
        .order_by_asc(comment::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_media_by_post<C: ConnectionTrait>(db: &C, post_id: i32) -> Result<Vec<media::Model>, AppError> {
    Ok(media::Entity::find()
        .filter(media::Column::PostId.eq(post_id))
        .order_by_asc(media::Column::Id)
        .all(db)
        .await?)
}

/// Fails with a foreign key violation while comments or media still point here.
pub async fn delete_post<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, AppError> {
    let res = post::Entity::delete_by_id(id).exec(db).await?;
    debug!("post removed id={} rows={}", id, res.rows_affected);
    Ok(res.rows_affected)
}
