use log::debug;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, Set};

use crate::entity::{media, post, MediaType};
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct NewMedia {
    pub media_type: MediaType,
    pub url: Option<String>,
    pub post_id: i32,
}

pub async fn create_media<C: ConnectionTrait>(db: &C, new_media: NewMedia) -> Result<media::Model, AppError> {
    let inserted = media::ActiveModel {
        media_type: Set(new_media.media_type),
        url: Set(new_media.url),
        post_id: Set(new_media.post_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!("media saved id={} type={} post={}", inserted.id, inserted.media_type.as_str(), inserted.post_id);
    Ok(inserted)
}

pub async fn find_media<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<media::Model>, AppError> {
    Ok(media::Entity::find_by_id(id).one(db).await?)
}

pub async fn post_of_media<C: ConnectionTrait>(db: &C, media: &media::Model) -> Result<post::Model, AppError> {
    media
        .find_related(post::Entity)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Post", media.post_id))
}

pub async fn delete_media<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, AppError> {
    let res = media::Entity::delete_by_id(id).exec(db).await?;
    debug!("media removed id={} rows={}", id, res.rows_affected);
    Ok(res.rows_affected)
}
