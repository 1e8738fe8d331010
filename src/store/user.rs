use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::{comment, post, user};
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

pub async fn create_user<C: ConnectionTrait>(db: &C, new_user: NewUser) -> Result<user::Model, AppError> {
    let inserted = user::ActiveModel {
        username: Set(new_user.username),
        firstname: Set(new_user.firstname),
        lastname: Set(new_user.lastname),
        email: Set(new_user.email),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!("user saved id={}", inserted.id);
    Ok(inserted)
}

pub async fn find_user<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<user::Model>, AppError> {
    Ok(user::Entity::find_by_id(id).one(db).await?)
}

pub async fn find_user_by_username<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<Option<user::Model>, AppError> {
    Ok(user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?)
}

pub async fn list_posts_by_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Vec<post::Model>, AppError> {
    Ok(post::Entity::find()
        .filter(post::Column::UserId.eq(user_id))
        .order_by_asc(post::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_comments_by_user<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<Vec<comment::Model>, AppError> {
    Ok(comment::Entity::find()
        .filter(comment::Column::UserId.eq(user_id))
        .order_by_asc(comment::Column::Id)
        .all(db)
        .await?)
}

/// Fails with a foreign key violation while the user still owns posts,
/// comments or follow edges.
pub async fn delete_user<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, AppError> {
    let res = user::Entity::delete_by_id(id).exec(db).await?;
    debug!("user removed id={} rows={}", id, res.rows_affected);
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::*;
    use crate::store::{create_comment, create_post, NewComment};

    #[actix_rt::test]
    async fn first_user_gets_id_one() {
        let db = test_db().await;
        let alice = create_user(
            &db,
            NewUser {
                username: "alice".to_string(),
                firstname: "A".to_string(),
                lastname: "L".to_string(),
                email: "a@x.com".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            serde_json::Value::Object(alice.serialize()),
            serde_json::json!({"id": 1, "username": "alice", "firstname": "A", "lastname": "L", "email": "a@x.com"})
        );
        assert_eq!(find_user(&db, 1).await.unwrap(), Some(alice.clone()));
        assert_eq!(find_user_by_username(&db, "alice").await.unwrap(), Some(alice));
        assert_eq!(find_user(&db, 2).await.unwrap(), None);
    }

    #[actix_rt::test]
    async fn duplicate_username_is_rejected() {
        let db = test_db().await;
        seed_user(&db, "alice").await;

        let mut dup = new_user("alice");
        dup.email = "other@example.com".to_string();
        let err = create_user(&db, dup).await.unwrap_err();
        assert!(err.is_unique_violation(), "unexpected error: {err:?}");
    }

    #[actix_rt::test]
    async fn duplicate_email_is_rejected() {
        let db = test_db().await;
        seed_user(&db, "alice").await;

        let mut dup = new_user("bob");
        dup.email = "alice@example.com".to_string();
        let err = create_user(&db, dup).await.unwrap_err();
        assert!(err.is_unique_violation(), "unexpected error: {err:?}");
    }

    #[actix_rt::test]
    async fn overlong_username_is_rejected() {
        let db = test_db().await;
        let mut long = new_user("carol");
        long.username = "x".repeat(121);
        assert!(create_user(&db, long).await.is_err());

        let mut edge = new_user("dave");
        edge.username = "y".repeat(120);
        assert!(create_user(&db, edge).await.is_ok());
    }

    #[actix_rt::test]
    async fn posts_and_comments_by_user() {
        let db = test_db().await;
        let alice = seed_user(&db, "alice").await;
        let bob = seed_user(&db, "bob").await;
        let p1 = create_post(&db, alice.id).await.unwrap();
        let p2 = create_post(&db, alice.id).await.unwrap();
        create_post(&db, bob.id).await.unwrap();
        let c = create_comment(
            &db,
            NewComment {
                commenttext: Some("hello".to_string()),
                user_id: bob.id,
                post_id: p1.id,
            },
        )
        .await
        .unwrap();

        assert_eq!(list_posts_by_user(&db, alice.id).await.unwrap(), vec![p1, p2]);
        assert_eq!(list_comments_by_user(&db, bob.id).await.unwrap(), vec![c]);
        assert!(list_comments_by_user(&db, alice.id).await.unwrap().is_empty());
        assert!(list_posts_by_user(&db, 99).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn deleting_an_author_is_restricted() {
        let db = test_db().await;
        let alice = seed_user(&db, "alice").await;
        let lonely = seed_user(&db, "lonely").await;
        create_post(&db, alice.id).await.unwrap();

        let err = delete_user(&db, alice.id).await.unwrap_err();
        assert!(err.is_foreign_key_violation(), "unexpected error: {err:?}");
        assert!(find_user(&db, alice.id).await.unwrap().is_some());

        assert_eq!(delete_user(&db, lonely.id).await.unwrap(), 1);
        assert_eq!(delete_user(&db, lonely.id).await.unwrap(), 0);
    }
}
