use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entity::{follower, user};
use crate::error::AppError;

/// Records that `user_from_id` follows `user_to_id`.
pub async fn follow<C: ConnectionTrait>(
    db: &C,
    user_from_id: i32,
    user_to_id: i32,
) -> Result<follower::Model, AppError> {
    let inserted = follower::ActiveModel {
        user_from_id: Set(user_from_id),
        user_to_id: Set(user_to_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!("follow saved id={} {}->{}", inserted.id, user_from_id, user_to_id);
    Ok(inserted)
}

/// Removes every edge from `user_from_id` to `user_to_id`.
pub async fn unfollow<C: ConnectionTrait>(db: &C, user_from_id: i32, user_to_id: i32) -> Result<u64, AppError> {
    let res = follower::Entity::delete_many()
        .filter(follower::Column::UserFromId.eq(user_from_id))
        .filter(follower::Column::UserToId.eq(user_to_id))
        .exec(db)
        .await?;
    debug!("follow removed {}->{} rows={}", user_from_id, user_to_id, res.rows_affected);
    Ok(res.rows_affected)
}

/// Edges pointing at `user_id`.
pub async fn list_follower_rows<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<Vec<follower::Model>, AppError> {
    Ok(follower::Entity::find()
        .filter(follower::Column::UserToId.eq(user_id))
        .order_by_asc(follower::Column::Id)
        .all(db)
        .await?)
}

/// Edges starting at `user_id`.
pub async fn list_following_rows<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<Vec<follower::Model>, AppError> {
    Ok(follower::Entity::find()
        .filter(follower::Column::UserFromId.eq(user_id))
        .order_by_asc(follower::Column::Id)
        .all(db)
        .await?)
}

/// Users following `user_id`.
pub async fn list_followers<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Vec<user::Model>, AppError> {
    let target = load_user(db, user_id).await?;
    Ok(target
        .find_linked(follower::Followers)
        .distinct()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await?)
}

/// Users that `user_id` follows.
pub async fn list_following<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Vec<user::Model>, AppError> {
    let source = load_user(db, user_id).await?;
    Ok(source
        .find_linked(follower::Following)
        .distinct()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await?)
}

pub async fn follow_source<C: ConnectionTrait>(db: &C, edge: &follower::Model) -> Result<user::Model, AppError> {
    edge.find_linked(follower::SourceUser)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User", edge.user_from_id))
}

pub async fn follow_target<C: ConnectionTrait>(db: &C, edge: &follower::Model) -> Result<user::Model, AppError> {
    edge.find_linked(follower::TargetUser)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User", edge.user_to_id))
}

async fn load_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<user::Model, AppError> {
    user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User", user_id))
}
